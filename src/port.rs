//! Contracts consumed from the external kernel and hardware
//!
//! The workload never touches the scheduler or a peripheral register
//! directly. Everything it needs from outside is one of these traits,
//! implemented by the kernel port on target and by plain doubles in
//! host tests.

use crate::types::{PinLevel, Tick};

/// Services the workload requires from the underlying kernel.
///
/// Two distinct delay primitives are deliberately kept apart:
/// [`sleep_until`](Kernel::sleep_until) computes each wake as
/// `last_wake + period` and therefore does not drift with execution-time
/// jitter, while [`sleep_for`](Kernel::sleep_for) measures from "now" and
/// drifts by the caller's own execution time each cycle. The heartbeat
/// producer uses the relative form; every other task uses the absolute
/// form. This is a known inconsistency in the task set, kept as is, not
/// an invitation to unify the two primitives.
pub trait Kernel {
    /// Current value of the global tick counter
    fn now(&self) -> Tick;

    /// Relative delay: suspend the caller for `ticks` from now
    fn sleep_for(&self, ticks: Tick);

    /// Absolute-deadline wake: advance `last_wake` by `period` and
    /// suspend the caller until that instant
    fn sleep_until(&self, last_wake: &mut Tick, period: Tick);
}

/// A digital input line sampled once per button-monitor period.
///
/// Sampling has no side effects and must be safe from a task context.
pub trait DigitalInput {
    fn read_level(&self) -> PinLevel;
}

/// The synchronous output sink the relay forwards messages to.
///
/// Expected to be fast enough not to threaten the relay's own period;
/// transmission failures are not surfaced to this core.
pub trait ByteSink {
    fn write_bytes(&mut self, buf: &[u8]);
}
