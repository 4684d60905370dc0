/// Restart value applied when the sequence counter passes 65535.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Wrap to 0, the plain overflow of a 16-bit counter (what stock
    /// bulb firmware does)
    ToZero,
    /// Wrap to 1, staying inside the 1..=65535 range initial counters
    /// are validated against
    ToOne,
}

/// 16-bit sequence counter, stepped once per accepted command.
///
/// Every packet of a burst carries the same counter value; the counter
/// moves only after the burst ends, whether it completed or was aborted.
#[derive(Debug, Clone, Copy)]
pub struct SequenceCounter {
    value: u16,
    wrap: WrapMode,
}

impl SequenceCounter {
    pub const fn new(initial: u16, wrap: WrapMode) -> Self {
        Self { value: initial, wrap }
    }

    /// Current counter value.
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Step to the next value, applying the wrap policy at 65535.
    ///
    /// Returns the new value.
    pub fn advance(&mut self) -> u16 {
        self.value = match (self.value, self.wrap) {
            (u16::MAX, WrapMode::ToZero) => 0,
            (u16::MAX, WrapMode::ToOne) => 1,
            (value, _) => value + 1,
        };
        self.value
    }
}
