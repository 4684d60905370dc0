use embassy_time::Duration;

use crate::counter::WrapMode;

const INSTANCE_ID_MIN: u8 = 1;
const INSTANCE_ID_MAX: u8 = 99;
const PACKET_COUNT_MIN: u8 = 1;
const PACKET_COUNT_MAX: u8 = 10;
const COUNTER_MIN: u16 = 1;

/// Raw engine settings as provided by the integrator.
///
/// Validate into an [`EngineConfig`] before building the engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineSettings {
    /// Identity offset distinguishing co-located bulb groups (1-99)
    pub instance_id: u8,
    /// Delay between the end of one packet send and the start of the next
    pub packet_interval: Duration,
    /// Number of identical packets per burst (1-10)
    pub packet_count: u8,
    /// Initial sequence counter value (non-zero)
    pub counter: u16,
    /// Where the counter restarts after 65535
    pub counter_wrap: WrapMode,
    /// Whether color temperature commands are accepted
    pub color_temperature: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            instance_id: 1,
            packet_interval: Duration::from_millis(10),
            packet_count: 3,
            counter: 1,
            counter_wrap: WrapMode::ToOne,
            color_temperature: false,
        }
    }
}

impl EngineSettings {
    /// Validate the settings into an immutable engine configuration.
    pub fn validate(self) -> Result<EngineConfig, ConfigError> {
        if !(INSTANCE_ID_MIN..=INSTANCE_ID_MAX).contains(&self.instance_id) {
            return Err(ConfigError::InstanceId(self.instance_id));
        }
        if self.packet_interval.as_ticks() == 0 {
            return Err(ConfigError::PacketInterval(self.packet_interval));
        }
        if !(PACKET_COUNT_MIN..=PACKET_COUNT_MAX).contains(&self.packet_count) {
            return Err(ConfigError::PacketCount(self.packet_count));
        }
        if self.counter < COUNTER_MIN {
            return Err(ConfigError::Counter(self.counter));
        }
        Ok(EngineConfig {
            instance_id: self.instance_id,
            packet_interval: self.packet_interval,
            packet_count: self.packet_count,
            counter: self.counter,
            counter_wrap: self.counter_wrap,
            color_temperature: self.color_temperature,
        })
    }
}

/// Validated engine configuration.
///
/// Only [`EngineSettings::validate`] constructs this; the fields are fixed
/// for the lifetime of the engine and never re-checked.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    instance_id: u8,
    packet_interval: Duration,
    packet_count: u8,
    counter: u16,
    counter_wrap: WrapMode,
    color_temperature: bool,
}

impl EngineConfig {
    pub const fn instance_id(&self) -> u8 {
        self.instance_id
    }

    pub const fn packet_interval(&self) -> Duration {
        self.packet_interval
    }

    pub const fn packet_count(&self) -> u8 {
        self.packet_count
    }

    pub const fn counter(&self) -> u16 {
        self.counter
    }

    pub const fn counter_wrap(&self) -> WrapMode {
        self.counter_wrap
    }

    pub const fn color_temperature(&self) -> bool {
        self.color_temperature
    }
}

/// Settings rejected by [`EngineSettings::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Instance id outside 1..=99
    InstanceId(u8),
    /// Packet interval must be positive
    PacketInterval(Duration),
    /// Packet count outside 1..=10
    PacketCount(u8),
    /// Counter must start non-zero
    Counter(u16),
}
