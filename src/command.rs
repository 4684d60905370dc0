//! Command intake for the protocol engine.
//!
//! A single-slot mailbox built on `critical-section`: the newest queued
//! command replaces any waiting one (latest state wins), while a burst
//! already in flight is never disturbed. Thread/interrupt safe.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::codec::EncodingError;

/// Minimum level for brightness and color temperature payloads.
pub const LEVEL_MIN: u16 = 1;

/// Maximum level for brightness and color temperature payloads.
pub const LEVEL_MAX: u16 = 1000;

const OPCODE_POWER_OFF: u8 = 0xB2;
const OPCODE_POWER_ON: u8 = 0xB3;
const OPCODE_PAIR: u8 = 0xB4;
const OPCODE_BRIGHTNESS: u8 = 0xB5;
const OPCODE_COLOR_TEMPERATURE: u8 = 0xB7;

/// One logical bulb command, broadcast as a burst of identical packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch the bulb on or off
    Power(bool),
    /// Set the brightness level (1-1000)
    Brightness(u16),
    /// Set the white color temperature level (1-1000, warm to cold)
    ColorTemperature(u16),
    /// Put nearby unpaired bulbs into pairing mode
    Pair,
}

impl Command {
    /// Protocol opcode carried by the encoded frame.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Power(false) => OPCODE_POWER_OFF,
            Self::Power(true) => OPCODE_POWER_ON,
            Self::Brightness(_) => OPCODE_BRIGHTNESS,
            Self::ColorTemperature(_) => OPCODE_COLOR_TEMPERATURE,
            Self::Pair => OPCODE_PAIR,
        }
    }

    /// Parameter bytes carried by the encoded frame, level big-endian.
    pub const fn params(self) -> [u8; 3] {
        match self {
            Self::Brightness(level) | Self::ColorTemperature(level) => {
                let [low, high] = level.to_le_bytes();
                [0, high, low]
            }
            Self::Power(_) | Self::Pair => [0, 0, 0],
        }
    }

    /// Check the payload range without encoding.
    pub const fn validate(self) -> Result<(), EncodingError> {
        match self {
            Self::Brightness(level) if level < LEVEL_MIN || level > LEVEL_MAX => {
                Err(EncodingError::Brightness(level))
            }
            Self::ColorTemperature(level) if level < LEVEL_MIN || level > LEVEL_MAX => {
                Err(EncodingError::ColorTemperature(level))
            }
            _ => Ok(()),
        }
    }
}

/// Error returned when a command is rejected at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Payload outside the encodable range
    Encoding(EncodingError),
    /// The engine was configured without color temperature support
    Unsupported,
}

/// Pending-command mailbox shared between front-end handles and the engine.
///
/// This slot uses critical sections for synchronization, making it suitable
/// for embedded environments. Depth is one: queuing a command while another
/// is waiting replaces it.
pub struct CommandSlot {
    inner: Mutex<RefCell<Option<Command>>>,
}

impl CommandSlot {
    /// Create a new empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Get a sender handle for this slot.
    ///
    /// Multiple senders can coexist; they share access to the same slot.
    /// `color_temperature` mirrors the engine configuration so unsupported
    /// commands are rejected at submission.
    pub const fn sender(&self, color_temperature: bool) -> CommandSender<'_> {
        CommandSender {
            slot: self,
            color_temperature,
        }
    }

    /// Get a receiver handle for this slot.
    pub const fn receiver(&self) -> CommandReceiver<'_> {
        CommandReceiver { slot: self }
    }

    /// Put a command into the slot, displacing any waiting one.
    ///
    /// Returns the displaced command, if any.
    pub fn replace(&self, command: Command) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().replace(command))
    }

    /// Take the waiting command, leaving the slot empty.
    pub fn take(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().take())
    }
}

impl Default for CommandSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandSlot`].
///
/// This is a lightweight reference that can be cloned and passed around.
/// All operations are non-blocking and safe to call from interrupt context.
#[derive(Clone, Copy)]
pub struct CommandSender<'a> {
    slot: &'a CommandSlot,
    color_temperature: bool,
}

impl CommandSender<'_> {
    /// Queue a power command.
    pub fn set_power(&self, on: bool) {
        self.slot.replace(Command::Power(on));
    }

    /// Queue a brightness command.
    ///
    /// Returns `Err(CommandError::Encoding(..))` if the level is outside
    /// 1..=1000; nothing is queued in that case.
    pub fn set_brightness(&self, level: u16) -> Result<(), CommandError> {
        let command = Command::Brightness(level);
        match command.validate() {
            Ok(()) => {
                self.slot.replace(command);
                Ok(())
            }
            Err(error) => Err(CommandError::Encoding(error)),
        }
    }

    /// Queue a color temperature command.
    ///
    /// Returns `Err(CommandError::Unsupported)` unless the engine was
    /// configured with color temperature support, or
    /// `Err(CommandError::Encoding(..))` if the level is outside 1..=1000.
    pub fn set_color_temperature(&self, level: u16) -> Result<(), CommandError> {
        if !self.color_temperature {
            return Err(CommandError::Unsupported);
        }
        let command = Command::ColorTemperature(level);
        match command.validate() {
            Ok(()) => {
                self.slot.replace(command);
                Ok(())
            }
            Err(error) => Err(CommandError::Encoding(error)),
        }
    }

    /// Queue a pairing broadcast.
    pub fn pair(&self) {
        self.slot.replace(Command::Pair);
    }
}

/// A receiver handle for a [`CommandSlot`].
///
/// This is a lightweight reference that can be cloned and passed around.
/// Typically only the engine drains the slot.
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a> {
    slot: &'a CommandSlot,
}

impl CommandReceiver<'_> {
    /// Take the pending command, if any (non-blocking).
    pub fn take(&self) -> Option<Command> {
        self.slot.take()
    }
}
