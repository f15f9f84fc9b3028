//! The task set and its one-time startup step
//!
//! The kernel owns scheduling; this module owns the facts it schedules
//! from. [`TASK_TABLE`] is the full description of the six periodic
//! units - name, period, priority, stack budget, instrumentation tag -
//! and [`init`] is the single startup step that must succeed before any
//! of them is registered.

use crate::channel::Channel;
use crate::config::{
    CFG_BUTTON_PERIOD, CFG_HEARTBEAT_PERIOD, CFG_LOAD_1_PERIOD, CFG_LOAD_2_PERIOD,
    CFG_RELAY_PERIOD, CFG_TASK_PRIO, CFG_TASK_STACK_WORDS,
};
use crate::error::Result;
use crate::info;
use crate::types::{Prio, TaskTag, Tick};

/// Registration descriptor for one periodic unit of computation.
///
/// Created once at startup; the task it describes runs forever.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    /// Task name, for the kernel's bookkeeping and debug output
    pub name: &'static str,
    /// Activation period in ticks
    pub period: Tick,
    /// Scheduling priority (all six share [`CFG_TASK_PRIO`])
    pub prio: Prio,
    /// Stack budget in words
    pub stack_words: usize,
    /// Opaque tag correlating this task with its instrumentation slot
    pub tag: TaskTag,
}

const fn spec(name: &'static str, period: Tick, tag: TaskTag) -> TaskSpec {
    TaskSpec {
        name,
        period,
        prio: CFG_TASK_PRIO,
        stack_words: CFG_TASK_STACK_WORDS,
        tag,
    }
}

/// The six periodic units, in registration order
pub static TASK_TABLE: [TaskSpec; 6] = [
    spec("Button 1 Monitor", CFG_BUTTON_PERIOD, TaskTag::ButtonOneMonitor),
    spec("Button 2 Monitor", CFG_BUTTON_PERIOD, TaskTag::ButtonTwoMonitor),
    spec(
        "Periodic Transmitter",
        CFG_HEARTBEAT_PERIOD,
        TaskTag::PeriodicHeartbeat,
    ),
    spec("UART Receiver", CFG_RELAY_PERIOD, TaskTag::Relay),
    spec("Load 1 Simulation", CFG_LOAD_1_PERIOD, TaskTag::LoadOne),
    spec("Load 2 Simulation", CFG_LOAD_2_PERIOD, TaskTag::LoadTwo),
];

/// Descriptor for one task, by tag
pub fn spec_for(tag: TaskTag) -> &'static TaskSpec {
    &TASK_TABLE[tag.index()]
}

/// One-time startup: create the shared channel before any task of the
/// set is registered with the kernel.
///
/// Failure here is unrecoverable and must halt the process before
/// scheduling begins; there is no retry path.
pub fn init(channel: &Channel) -> Result<()> {
    channel.create()?;
    info!("channel created, {} tasks ready to register", TASK_TABLE.len());
    Ok(())
}
