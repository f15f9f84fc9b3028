//! Host simulation of the six-task relay workload
//!
//! Plays the external kernel's role on a simulated tick clock: walks the
//! task table, dispatches each task at its period, scripts a waveform on
//! both button lines, wraps every dispatch in the instrumentation hooks,
//! and prints whatever the relay forwards. The heartbeat producer is
//! rescheduled relative to its completion time, every other task on
//! absolute deadlines, so its drift under load is visible in the output.
//!
//! Run with: cargo run --example host_sim

use std::cell::Cell;

use edgerelay::port::{ByteSink, DigitalInput, Kernel};
use edgerelay::tasks::{ButtonMonitor, Heartbeat, LoadSimulator, Relay};
use edgerelay::taskset::{self, TASK_TABLE};
use edgerelay::types::{PinLevel, TaskTag, Tick};
use edgerelay::{Channel, STATS};

/// Simulated run length in ticks
const RUN_TICKS: Tick = 5_000;

/// Nominal execution cost charged per dispatch, indexed by task tag
const EXEC_COST: [Tick; 6] = [1, 1, 1, 1, 1, 5];

struct SimClock {
    now: Cell<Tick>,
}

impl SimClock {
    fn new() -> Self {
        SimClock { now: Cell::new(0) }
    }

    /// Move the clock forward to `tick`, never backwards: a blocked send
    /// inside a dispatch may already have advanced it further
    fn advance_to(&self, tick: Tick) {
        if self.now.get() < tick {
            self.now.set(tick);
        }
    }
}

impl Kernel for SimClock {
    fn now(&self) -> Tick {
        self.now.get()
    }

    fn sleep_for(&self, ticks: Tick) {
        self.now.set(self.now.get().wrapping_add(ticks));
    }

    fn sleep_until(&self, last_wake: &mut Tick, period: Tick) {
        *last_wake = last_wake.wrapping_add(period);
        self.advance_to(*last_wake);
    }
}

/// Button line that toggles every `half_period` ticks of the sim clock
struct SimButton<'a> {
    clock: &'a SimClock,
    half_period: Tick,
}

impl DigitalInput for SimButton<'_> {
    fn read_level(&self) -> PinLevel {
        if (self.clock.now() / self.half_period) % 2 == 1 {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

/// Sink that prints each relayed payload with its arrival tick
struct StdoutSink<'a> {
    clock: &'a SimClock,
}

impl ByteSink for StdoutSink<'_> {
    fn write_bytes(&mut self, buf: &[u8]) {
        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        let text = String::from_utf8_lossy(&buf[..end]);
        println!("[{:>5}] relayed: {:?}", self.clock.now(), text.trim());
    }
}

fn main() {
    let channel = Channel::new();
    taskset::init(&channel).expect("channel creation is fatal at startup");

    let clock = SimClock::new();
    let mut button_1 = ButtonMonitor::button_one(SimButton {
        clock: &clock,
        half_period: 300,
    });
    let mut button_2 = ButtonMonitor::button_two(SimButton {
        clock: &clock,
        half_period: 700,
    });
    let mut heartbeat = Heartbeat::new();
    let mut relay = Relay::new(StdoutSink { clock: &clock });
    let mut load_1 = LoadSimulator::load_one();
    let mut load_2 = LoadSimulator::load_two();

    // Next activation per task. Absolute-wake tasks advance these by
    // their period from the scheduled instant; the heartbeat advances
    // from its completion instant, which is what makes it drift.
    let mut next_wake: [Tick; 6] = [0; 6];
    let mut dispatches: [u32; 6] = [0; 6];

    for tick in 0..=RUN_TICKS {
        clock.advance_to(tick);

        for spec in TASK_TABLE {
            let slot = spec.tag.index();
            if tick < next_wake[slot] {
                continue;
            }

            STATS.task_switched_in(spec.tag, clock.now());
            match spec.tag {
                TaskTag::ButtonOneMonitor => button_1.poll(&clock, &channel),
                TaskTag::ButtonTwoMonitor => button_2.poll(&clock, &channel),
                TaskTag::PeriodicHeartbeat => heartbeat.poll(&channel),
                TaskTag::Relay => relay.poll(&channel),
                TaskTag::LoadOne => load_1.poll(),
                TaskTag::LoadTwo => load_2.poll(),
            }
            let done = clock.now().wrapping_add(EXEC_COST[slot]);
            STATS.task_switched_out(spec.tag, done);
            dispatches[slot] += 1;

            next_wake[slot] = if spec.tag == TaskTag::PeriodicHeartbeat {
                // Relative delay: cadence drifts by execution time
                done + spec.period
            } else {
                next_wake[slot] + spec.period
            };
        }
    }

    let load = STATS.recompute_load(RUN_TICKS);
    println!();
    println!("=== {} ticks simulated ===", RUN_TICKS);
    for spec in TASK_TABLE {
        let slot = spec.tag.index();
        println!(
            "{:<22} period {:>3}  dispatches {:>4}  busy {:>5} ticks",
            spec.name,
            spec.period,
            dispatches[slot],
            STATS.busy_ticks(spec.tag),
        );
    }
    println!("cpu load: {load}%");

    let heartbeat_period = TASK_TABLE[TaskTag::PeriodicHeartbeat.index()].period;
    println!(
        "heartbeat drift: {} dispatches vs {} at a drift-free cadence",
        dispatches[TaskTag::PeriodicHeartbeat.index()],
        RUN_TICKS / heartbeat_period + 1,
    );
}
