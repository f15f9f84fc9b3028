//! Process-wide instrumentation registry
//!
//! Tracks, per task, the timestamps of the last switch-in and switch-out
//! and the busy ticks accumulated between them, plus a global system time
//! and a derived CPU load percentage. The registry itself is passive: the
//! switch hooks are invoked by the kernel on every task entry and exit,
//! and the load figure is recomputed by whatever aggregator cares to call
//! [`Stats::recompute_load`]. Tasks never read each other's slots; the
//! tag is the only coupling.

use portable_atomic::{AtomicU32, Ordering};

use crate::types::{TaskTag, Tick};

const SLOTS: usize = TaskTag::ALL.len();

const ZERO: AtomicU32 = AtomicU32::new(0);

/// Per-task timing samples and the global load counters
pub struct Stats {
    in_time: [AtomicU32; SLOTS],
    out_time: [AtomicU32; SLOTS],
    busy: [AtomicU32; SLOTS],
    system_time: AtomicU32,
    cpu_load: AtomicU32,
}

/// The one registry instance, initialized at startup and updated by the
/// kernel's switch hooks for the lifetime of the process
pub static STATS: Stats = Stats::new();

impl Stats {
    pub const fn new() -> Self {
        Stats {
            in_time: [ZERO; SLOTS],
            out_time: [ZERO; SLOTS],
            busy: [ZERO; SLOTS],
            system_time: ZERO,
            cpu_load: ZERO,
        }
    }

    /// Hook: `tag` was switched in at `now`
    pub fn task_switched_in(&self, tag: TaskTag, now: Tick) {
        self.in_time[tag.index()].store(now, Ordering::Relaxed);
        self.advance_system_time(now);
    }

    /// Hook: `tag` was switched out at `now`.
    ///
    /// Accumulates the ticks since the matching switch-in into the
    /// task's busy total.
    pub fn task_switched_out(&self, tag: TaskTag, now: Tick) {
        let i = tag.index();
        let entered = self.in_time[i].load(Ordering::Relaxed);
        self.out_time[i].store(now, Ordering::Relaxed);
        self.busy[i].fetch_add(now.wrapping_sub(entered), Ordering::Relaxed);
        self.advance_system_time(now);
    }

    /// Busy ticks accumulated by one task so far
    pub fn busy_ticks(&self, tag: TaskTag) -> Tick {
        self.busy[tag.index()].load(Ordering::Relaxed)
    }

    /// Timestamps of the last switch-in and switch-out of one task
    pub fn last_switch(&self, tag: TaskTag) -> (Tick, Tick) {
        let i = tag.index();
        (
            self.in_time[i].load(Ordering::Relaxed),
            self.out_time[i].load(Ordering::Relaxed),
        )
    }

    /// Busy ticks summed over all six tasks
    pub fn total_busy(&self) -> Tick {
        let mut total: Tick = 0;
        for tag in TaskTag::ALL {
            total = total.wrapping_add(self.busy_ticks(tag));
        }
        total
    }

    /// Monotonic system time, advanced by the switch hooks
    pub fn system_time(&self) -> Tick {
        self.system_time.load(Ordering::Relaxed)
    }

    fn advance_system_time(&self, now: Tick) {
        self.system_time.fetch_max(now, Ordering::Relaxed);
    }

    /// Recompute the CPU load percentage as of `now`:
    /// total busy ticks / elapsed ticks * 100.
    ///
    /// Returns the new figure and stores it for [`Stats::cpu_load`]
    /// readers. Zero elapsed time reads as zero load.
    pub fn recompute_load(&self, now: Tick) -> u32 {
        self.advance_system_time(now);
        let elapsed = self.system_time();
        let load = if elapsed == 0 {
            0
        } else {
            // u64 intermediate so busy * 100 cannot overflow
            ((self.total_busy() as u64 * 100) / elapsed as u64) as u32
        };
        self.cpu_load.store(load, Ordering::Relaxed);
        load
    }

    /// Most recently computed CPU load percentage
    pub fn cpu_load(&self) -> u32 {
        self.cpu_load.load(Ordering::Relaxed)
    }

    /// Zero every counter. Intended for host tests that share the
    /// process-wide registry.
    pub fn reset(&self) {
        for i in 0..SLOTS {
            self.in_time[i].store(0, Ordering::Relaxed);
            self.out_time[i].store(0, Ordering::Relaxed);
            self.busy[i].store(0, Ordering::Relaxed);
        }
        self.system_time.store(0, Ordering::Relaxed);
        self.cpu_load.store(0, Ordering::Relaxed);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
