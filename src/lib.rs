#![no_std]

pub mod address;
pub mod burst_scheduler;
pub mod codec;
pub mod command;
pub mod config;
pub mod counter;
pub mod engine;
pub mod hooks;

pub use command::{
    Command, CommandError, CommandReceiver, CommandSender, CommandSlot, LEVEL_MAX, LEVEL_MIN,
};
pub use config::{ConfigError, EngineConfig, EngineSettings};
pub use engine::{EngineStep, ProtocolEngine};
pub use address::DeviceAddress;
pub use burst_scheduler::{BurstScheduler, BurstStatus};
pub use codec::{
    ADV_DATA_CAPACITY, CommandFrame, Deli16Codec, EncodingError, FrameCodec, HiFlyingCodec,
};
pub use counter::{SequenceCounter, WrapMode};
pub use hooks::{HookContext, HookError, HookRegistry, MAX_SEND_HOOKS, SendHook};

pub use embassy_time::{Duration, Instant};

/// Abstract radio driver trait
///
/// Implement this trait to support different BLE stacks and platforms.
/// The protocol engine is generic over this trait.
pub trait RadioDriver {
    /// Broadcast a single advertising frame from the given device address
    fn broadcast(
        &mut self,
        address: DeviceAddress,
        frame: &CommandFrame,
    ) -> Result<(), TransmitError>;
}

/// Error returned when the radio failed to put a frame on the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitError;
