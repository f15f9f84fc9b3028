//! Periodic task/queue coordination core for a tick-driven RTOS workload
//!
//! Six periodic tasks cooperate through one bounded message channel:
//! - Two button monitors that turn sampled pin transitions into messages
//! - A heartbeat producer that emits a fixed message every period
//! - A relay consumer that drains the channel into a byte sink
//! - Two load simulators that burn CPU time to perturb scheduling
//!
//! The kernel underneath (scheduler, context switch, tick source) and the
//! hardware at the edges (pin sampling, serial output) are external; this
//! crate consumes them through the traits in [`port`].

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Critical Section ============

#[cfg(target_arch = "arm")]
mod cs_impl {
    use cortex_m::interrupt;
    use cortex_m::register::primask;
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct SingleCoreCriticalSection;
    set_impl!(SingleCoreCriticalSection);

    unsafe impl Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let was_active = primask::read().is_active();
            interrupt::disable();
            was_active
        }

        unsafe fn release(was_active: RawRestoreState) {
            if was_active {
                unsafe { interrupt::enable() }
            }
        }
    }
}

// ============ Modules ============

pub mod log;
mod lang_items;

pub mod channel;
pub mod config;
pub mod edge;
pub mod error;
pub mod message;
pub mod port;
pub mod stats;
pub mod tasks;
pub mod taskset;
pub mod types;

// ============ Re-exports ============

pub use channel::Channel;
pub use config::*;
pub use edge::EdgeDetector;
pub use error::{Error, Result};
pub use message::Message;
pub use port::{ByteSink, DigitalInput, Kernel};
pub use stats::STATS;
pub use taskset::{init, TaskSpec, TASK_TABLE};
pub use types::*;
