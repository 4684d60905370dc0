//! Advertising frame codecs.
//!
//! Each supported bulb family gets one codec implementing the `FrameCodec`
//! trait. Encoding is pure: the same command, counter and address always
//! produce the same frame, so a burst can re-send one encoded payload.

pub mod checksum;
pub mod cipher;

mod deli16;
mod hiflying;

use heapless::Vec;

pub use deli16::Deli16Codec;
pub use hiflying::HiFlyingCodec;

use crate::address::DeviceAddress;
use crate::command::Command;

/// Maximum payload of a legacy BLE advertising frame.
pub const ADV_DATA_CAPACITY: usize = 31;

/// Page byte carried by every frame.
const PAGE: u8 = 3;

/// Frame encoding strategy.
pub trait FrameCodec {
    /// Encode one command into the advertising payload for its burst.
    fn encode(
        &self,
        command: Command,
        counter: u16,
        address: DeviceAddress,
    ) -> Result<CommandFrame, EncodingError>;
}

/// Reasons a command cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// Brightness level outside 1..=1000
    Brightness(u16),
    /// Color temperature level outside 1..=1000
    ColorTemperature(u16),
    /// Payload would exceed the advertising data limit
    Overflow,
}

/// One encoded advertising payload.
///
/// Frames are transient: built when a burst starts, handed to the radio
/// for each repeat, dropped when the burst ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    bytes: Vec<u8, ADV_DATA_CAPACITY>,
}

impl CommandFrame {
    /// Build a frame from raw payload bytes.
    ///
    /// Returns `Err(EncodingError::Overflow)` if the payload exceeds
    /// [`ADV_DATA_CAPACITY`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncodingError> {
        Vec::from_slice(bytes)
            .map(|bytes| Self { bytes })
            .map_err(|()| EncodingError::Overflow)
    }

    /// Raw payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
