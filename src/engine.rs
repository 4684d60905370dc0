use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::address::DeviceAddress;
use crate::burst_scheduler::{BurstScheduler, BurstStatus};
use crate::codec::FrameCodec;
use crate::command::{Command, CommandReceiver};
use crate::config::EngineConfig;
use crate::counter::SequenceCounter;
use crate::hooks::{HookContext, HookRegistry, SendHook};
use crate::{RadioDriver, TransmitError};

/// Scheduling outcome of one engine poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStep {
    /// Nothing to do; poll again once a command may have arrived.
    Idle,
    /// More work is ready; poll again with a fresh timestamp.
    Continue,
    /// Sleep until the deadline, then poll again.
    Wait(Instant),
    /// The radio failed mid-burst; the command was abandoned.
    Aborted(TransmitError),
}

/// Engine lifecycle state.
#[derive(Clone, Copy)]
enum EngineState {
    Idle,
    Encoding(Command),
    Sending(Command),
}

/// Broadcast protocol engine - the main orchestrator.
///
/// Takes commands from the slot one at a time, encodes each into a frame
/// with the current counter value and hands it to the burst scheduler.
/// Everything runs inside `poll`; the engine never blocks or sleeps.
///
/// # Usage
///
/// ```ignore
/// static COMMANDS: CommandSlot = CommandSlot::new();
///
/// let config = EngineSettings::default().validate()?;
/// let mut engine = ProtocolEngine::new(COMMANDS.receiver(), &config, radio, HiFlyingCodec);
///
/// loop {
///     match engine.poll(Instant::now()) {
///         EngineStep::Idle => wait_for_command_signal(),
///         EngineStep::Continue => {}
///         EngineStep::Wait(deadline) => sleep_until(deadline),
///         EngineStep::Aborted(error) => report_radio_error(error),
///     }
/// }
/// ```
pub struct ProtocolEngine<'a, D: RadioDriver, C: FrameCodec> {
    // External dependencies and configuration
    commands: CommandReceiver<'a>,
    codec: C,
    config: EngineConfig,
    address: DeviceAddress,

    // Internal state
    state: EngineState,
    counter: SequenceCounter,

    // Internal dependencies
    burst: BurstScheduler<D>,
    hooks: HookRegistry,
}

impl<'a, D: RadioDriver, C: FrameCodec> ProtocolEngine<'a, D, C> {
    /// Create a new engine from a validated configuration.
    ///
    /// The broadcast address is derived from the configured instance id
    /// once, here, and stays fixed.
    pub fn new(commands: CommandReceiver<'a>, config: &EngineConfig, driver: D, codec: C) -> Self {
        Self {
            commands,
            codec,
            config: *config,
            address: DeviceAddress::derive(config.instance_id()),
            state: EngineState::Idle,
            counter: SequenceCounter::new(config.counter(), config.counter_wrap()),
            burst: BurstScheduler::new(driver),
            hooks: HookRegistry::new(),
        }
    }

    /// Register a hook to run before the first packet of each burst.
    ///
    /// Returns the hook if the list is full.
    pub fn add_before_send(&mut self, hook: SendHook) -> Result<(), SendHook> {
        self.hooks.add_before(hook)
    }

    /// Register a hook to run after the last packet of each burst.
    ///
    /// Returns the hook if the list is full.
    pub fn add_after_send(&mut self, hook: SendHook) -> Result<(), SendHook> {
        self.hooks.add_after(hook)
    }

    /// Perform one engine step (non-blocking).
    ///
    /// This is the main loop step. Call this continuously, waiting as
    /// directed by the returned [`EngineStep`].
    pub fn poll(&mut self, now: Instant) -> EngineStep {
        match self.state {
            EngineState::Idle => {
                let Some(command) = self.commands.take() else {
                    return EngineStep::Idle;
                };
                self.state = EngineState::Encoding(command);
                EngineStep::Continue
            }
            EngineState::Encoding(command) => self.start_burst(command, now),
            EngineState::Sending(command) => self.pump_burst(command, now),
        }
    }

    /// Encode the command and arm its burst.
    ///
    /// Capability support is enforced against the engine's own
    /// configuration here; a color temperature command that reached the
    /// slot without going through a matching sender is dropped.
    fn start_burst(&mut self, command: Command, now: Instant) -> EngineStep {
        if matches!(command, Command::ColorTemperature(_)) && !self.config.color_temperature() {
            #[cfg(feature = "esp32-log")]
            println!("dropping unsupported command: {:?}", command);
            self.state = EngineState::Idle;
            return EngineStep::Continue;
        }

        let frame = match self.codec.encode(command, self.counter.value(), self.address) {
            Ok(frame) => frame,
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("dropping unencodable command: {:?}", _error);
                self.state = EngineState::Idle;
                return EngineStep::Continue;
            }
        };

        let context = HookContext {
            command,
            counter: self.counter.value(),
        };
        self.hooks.run_before(&context);

        self.burst.start(
            frame,
            self.address,
            self.config.packet_count(),
            self.config.packet_interval(),
            now,
        );
        self.state = EngineState::Sending(command);
        EngineStep::Continue
    }

    /// Pump the active burst and settle the command when it ends.
    fn pump_burst(&mut self, command: Command, now: Instant) -> EngineStep {
        match self.burst.poll(now) {
            BurstStatus::Sent => EngineStep::Continue,
            BurstStatus::Wait(deadline) => EngineStep::Wait(deadline),
            BurstStatus::Complete => {
                self.finish_burst(command);
                EngineStep::Continue
            }
            BurstStatus::Failed(error) => {
                self.finish_burst(command);
                EngineStep::Aborted(error)
            }
            BurstStatus::Idle => {
                // Nothing left to pump
                self.state = EngineState::Idle;
                EngineStep::Continue
            }
        }
    }

    /// Run the after-send hooks and advance the counter.
    ///
    /// The counter moves exactly once per accepted command, completed or
    /// aborted, and only after the hooks saw its burst value.
    fn finish_burst(&mut self, command: Command) {
        let context = HookContext {
            command,
            counter: self.counter.value(),
        };
        self.hooks.run_after(&context);
        self.counter.advance();
        self.state = EngineState::Idle;
    }

    /// Current sequence counter value.
    pub const fn counter(&self) -> u16 {
        self.counter.value()
    }

    /// The derived device address broadcasts are sent from.
    pub const fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Get a reference to the radio driver.
    pub fn driver(&self) -> &D {
        self.burst.driver()
    }

    /// Get a mutable reference to the radio driver.
    pub fn driver_mut(&mut self) -> &mut D {
        self.burst.driver_mut()
    }
}
