//! Tick-source capability.
//!
//! The controller never polls time itself: it asks a [`Clock`] for a tick
//! subscription and keeps the returned handle as its cancellation token.
//! Whoever owns the clock (the run loop, or a test) delivers the actual
//! once-per-second `tick()` calls.

/// Cancellation token for a scheduled tick subscription.
///
/// Consumed by `cancel`, so a handle cannot be cancelled twice and the
/// controller can never hold a dead handle.
pub trait TickHandle {
    fn cancel(self);
}

/// One-per-second tick source.
pub trait Clock {
    type Handle: TickHandle;

    /// Start a new tick subscription and return its cancellation handle.
    fn schedule(&mut self) -> Self::Handle;
}

/// Clock backed by the main event loop.
///
/// The loop measures elapsed wall time and calls `tick()` once per second
/// while the controller is running, so the handle carries no machinery of
/// its own; it only marks the subscription live.
pub struct SystemClock;

pub struct SystemHandle;

impl TickHandle for SystemHandle {
    fn cancel(self) {}
}

impl Clock for SystemClock {
    type Handle = SystemHandle;

    fn schedule(&mut self) -> SystemHandle {
        SystemHandle
    }
}
