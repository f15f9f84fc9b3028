//! Core type definitions for the relay workload

/// Tick counter type
pub type Tick = u32;

/// Task priority (0 = highest priority)
pub type Prio = u8;

/// Sampled level of a digital input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinLevel {
    Low = 0,
    High = 1,
}

/// A detected transition between two consecutive samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Edge {
    /// Low at the previous sample, high at the current one
    Rising = 0,
    /// High at the previous sample, low at the current one
    Falling = 1,
}

/// Opaque per-task tag, carried by each task descriptor and consumed
/// only by the instrumentation registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TaskTag {
    ButtonOneMonitor = 0,
    ButtonTwoMonitor = 1,
    PeriodicHeartbeat = 2,
    Relay = 3,
    LoadOne = 4,
    LoadTwo = 5,
}

impl TaskTag {
    /// All six tags, in task-table order
    pub const ALL: [TaskTag; 6] = [
        TaskTag::ButtonOneMonitor,
        TaskTag::ButtonTwoMonitor,
        TaskTag::PeriodicHeartbeat,
        TaskTag::Relay,
        TaskTag::LoadOne,
        TaskTag::LoadTwo,
    ];

    /// Dense index for per-task instrumentation slots
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}
