//! Burst transmission pacing.
//!
//! Paces the repeated packets of one command burst without async/await or
//! platform-specific timers. The caller owns the wait between packets.

use embassy_time::{Duration, Instant};

use crate::address::DeviceAddress;
use crate::codec::CommandFrame;
use crate::{RadioDriver, TransmitError};

/// Progress of the active burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstStatus {
    /// No burst is active.
    Idle,
    /// A packet just went out; poll again with a fresh timestamp.
    Sent,
    /// Waiting for the next packet deadline.
    Wait(Instant),
    /// All packets of the burst have been sent.
    Complete,
    /// The radio failed; remaining packets were abandoned.
    Failed(TransmitError),
}

/// Paces one burst of identical advertising packets.
///
/// Owns the radio driver as its single writer. At most one packet is sent
/// per `poll` call, and the inter-packet deadline is armed on the first
/// poll after a send returns, so the interval is measured from the end of
/// one send to the start of the next. A stalled caller shifts the tail of
/// the burst instead of bunching packets.
pub struct BurstScheduler<D: RadioDriver> {
    driver: D,
    active: Option<ActiveBurst>,
}

struct ActiveBurst {
    frame: CommandFrame,
    address: DeviceAddress,
    interval: Duration,
    remaining: u8,
    /// None between a send and the poll that arms the next deadline.
    deadline: Option<Instant>,
}

impl<D: RadioDriver> BurstScheduler<D> {
    /// Create an idle scheduler wrapping the radio driver.
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            active: None,
        }
    }

    /// Begin a new burst with its first packet due immediately.
    ///
    /// Replaces any burst still in flight; callers gate on [`Self::is_idle`].
    /// A `count` of zero arms nothing.
    pub fn start(
        &mut self,
        frame: CommandFrame,
        address: DeviceAddress,
        count: u8,
        interval: Duration,
        now: Instant,
    ) {
        if count == 0 {
            self.active = None;
            return;
        }
        self.active = Some(ActiveBurst {
            frame,
            address,
            interval,
            remaining: count,
            deadline: Some(now),
        });
    }

    /// Advance the burst by at most one packet.
    ///
    /// The caller is responsible for waiting until the returned deadline
    /// before polling again.
    pub fn poll(&mut self, now: Instant) -> BurstStatus {
        let Some(burst) = &mut self.active else {
            return BurstStatus::Idle;
        };

        let deadline = match burst.deadline {
            Some(deadline) => deadline,
            None => {
                // First poll after a send: the previous packet has fully
                // left the driver, so the interval starts here.
                let deadline = now + burst.interval;
                burst.deadline = Some(deadline);
                return BurstStatus::Wait(deadline);
            }
        };

        if now < deadline {
            return BurstStatus::Wait(deadline);
        }

        if let Err(error) = self.driver.broadcast(burst.address, &burst.frame) {
            self.active = None;
            return BurstStatus::Failed(error);
        }

        burst.remaining -= 1;
        if burst.remaining == 0 {
            self.active = None;
            return BurstStatus::Complete;
        }

        burst.deadline = None;
        BurstStatus::Sent
    }

    /// Whether no burst is in flight.
    pub const fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Get a reference to the radio driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the radio driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
