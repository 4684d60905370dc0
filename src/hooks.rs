//! Before/after-send observation hooks.
//!
//! Hooks let integrators react to bursts (persist the counter, blink a
//! status LED, log) without touching the transmit path: a failing hook is
//! counted and logged, never escalated.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::Command;

/// Maximum number of hooks per list.
pub const MAX_SEND_HOOKS: usize = 8;

/// Observation payload passed to send hooks.
#[derive(Debug, Clone, Copy)]
pub struct HookContext {
    /// The command being broadcast
    pub command: Command,
    /// Sequence counter value embedded in the burst's frames
    pub counter: u16,
}

/// Error a hook may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookError;

/// Observer callback invoked around a burst.
pub type SendHook = fn(&HookContext) -> Result<(), HookError>;

/// Ordered before-send and after-send hook lists.
///
/// Hooks run in registration order.
#[derive(Default)]
pub struct HookRegistry {
    before: Vec<SendHook, MAX_SEND_HOOKS>,
    after: Vec<SendHook, MAX_SEND_HOOKS>,
}

impl HookRegistry {
    pub const fn new() -> Self {
        Self {
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    /// Register a hook to run before the first packet of a burst.
    ///
    /// Returns the hook if the list is full.
    pub fn add_before(&mut self, hook: SendHook) -> Result<(), SendHook> {
        self.before.push(hook)
    }

    /// Register a hook to run after the last packet of a burst.
    ///
    /// Returns the hook if the list is full.
    pub fn add_after(&mut self, hook: SendHook) -> Result<(), SendHook> {
        self.after.push(hook)
    }

    /// Run the before-send hooks in order; returns how many failed.
    pub fn run_before(&self, context: &HookContext) -> usize {
        Self::run(&self.before, context)
    }

    /// Run the after-send hooks in order; returns how many failed.
    pub fn run_after(&self, context: &HookContext) -> usize {
        Self::run(&self.after, context)
    }

    fn run(hooks: &[SendHook], context: &HookContext) -> usize {
        let mut failed = 0;
        for hook in hooks {
            if hook(context).is_err() {
                failed += 1;
            }
        }
        #[cfg(feature = "esp32-log")]
        if failed > 0 {
            println!("send hooks failed: {}", failed);
        }
        failed
    }
}
