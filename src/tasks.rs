//! The six periodic task bodies
//!
//! Each task is a struct owning its private state (detector, payloads,
//! sink); nothing here is shared between tasks except the channel passed
//! in by the caller. Every task splits into a single-cycle `poll`, which
//! does the work of one activation and never sleeps, and a diverging
//! `run` loop that applies the task's delay discipline around `poll`.
//! Host tests drive `poll` directly; on target the kernel registers `run`
//! as the task entry.
//!
//! Delay disciplines: the button monitors, relay and load simulators wake
//! on absolute deadlines and do not drift; the heartbeat producer uses a
//! relative delay and drifts by its own execution time each cycle. See
//! [`crate::port::Kernel`] for why that asymmetry is preserved.

use crate::channel::Channel;
use crate::config::{
    CFG_BUTTON_PERIOD, CFG_BUTTON_SEND_TIMEOUT, CFG_HEARTBEAT_PERIOD, CFG_LOAD_1_ITERATIONS,
    CFG_LOAD_1_PERIOD, CFG_LOAD_2_ITERATIONS, CFG_LOAD_2_PERIOD, CFG_RELAY_PERIOD,
};
use crate::edge::EdgeDetector;
use crate::message::{
    Message, BUTTON_1_FALLING, BUTTON_1_RISING, BUTTON_2_FALLING, BUTTON_2_RISING, HEARTBEAT,
};
use crate::port::{ByteSink, DigitalInput, Kernel};
use crate::types::{Edge, PinLevel, TaskTag};
use crate::{trace, warn};

// ============ Button monitors ============

/// Samples one digital input every period and turns each detected
/// transition into exactly one message on the channel.
pub struct ButtonMonitor<I: DigitalInput> {
    input: I,
    detector: EdgeDetector,
    rising: Message,
    falling: Message,
    tag: TaskTag,
}

impl<I: DigitalInput> ButtonMonitor<I> {
    /// Monitor for button 1 (first input line)
    pub fn button_one(input: I) -> Self {
        ButtonMonitor {
            input,
            detector: EdgeDetector::new(PinLevel::Low),
            rising: BUTTON_1_RISING,
            falling: BUTTON_1_FALLING,
            tag: TaskTag::ButtonOneMonitor,
        }
    }

    /// Monitor for button 2 (second input line)
    pub fn button_two(input: I) -> Self {
        ButtonMonitor {
            input,
            detector: EdgeDetector::new(PinLevel::Low),
            rising: BUTTON_2_RISING,
            falling: BUTTON_2_FALLING,
            tag: TaskTag::ButtonTwoMonitor,
        }
    }

    #[inline]
    pub fn tag(&self) -> TaskTag {
        self.tag
    }

    /// One activation: sample, detect, send on edge.
    ///
    /// A send that cannot complete within the bounded timeout drops the
    /// message; nothing is retried and no error leaves the task.
    pub fn poll<K: Kernel>(&mut self, kernel: &K, channel: &Channel) {
        let current = self.input.read_level();
        if let Some(edge) = self.detector.sample(current) {
            let msg = match edge {
                Edge::Rising => &self.rising,
                Edge::Falling => &self.falling,
            };
            trace!("button edge enqueued");
            if let Err(err) = channel.send(kernel, msg, CFG_BUTTON_SEND_TIMEOUT) {
                // A full channel is a silent drop by policy; anything
                // else means the startup step never ran
                if !err.is_benign() {
                    warn!("edge message skipped, channel not ready");
                }
            }
        }
    }

    /// Task entry: absolute-deadline wake every [`CFG_BUTTON_PERIOD`]
    /// ticks, so sampling cadence does not drift with jitter in `poll`.
    pub fn run<K: Kernel>(mut self, kernel: &K, channel: &Channel) -> ! {
        let mut last_wake = kernel.now();
        loop {
            self.poll(kernel, channel);
            kernel.sleep_until(&mut last_wake, CFG_BUTTON_PERIOD);
        }
    }
}

// ============ Heartbeat producer ============

/// Unconditionally offers the heartbeat payload every period. The send
/// is a zero-timeout attempt: on a full channel the beat for that cycle
/// is dropped silently and the next cycle is unaffected.
pub struct Heartbeat;

impl Heartbeat {
    pub fn new() -> Self {
        Heartbeat
    }

    #[inline]
    pub fn tag(&self) -> TaskTag {
        TaskTag::PeriodicHeartbeat
    }

    pub fn poll(&mut self, channel: &Channel) {
        if let Err(err) = channel.try_send(&HEARTBEAT) {
            if !err.is_benign() {
                warn!("heartbeat skipped, channel not ready");
            }
        }
    }

    /// Task entry: relative delay, so the cadence drifts by this task's
    /// own execution time each cycle
    pub fn run<K: Kernel>(mut self, kernel: &K, channel: &Channel) -> ! {
        loop {
            self.poll(channel);
            kernel.sleep_for(CFG_HEARTBEAT_PERIOD);
        }
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new()
    }
}

// ============ Relay consumer ============

/// Drains the channel one message per period and forwards each full
/// fixed-size buffer to the output sink. Relay order is exactly channel
/// dequeue order.
pub struct Relay<S: ByteSink> {
    sink: S,
}

impl<S: ByteSink> Relay<S> {
    pub fn new(sink: S) -> Self {
        Relay { sink }
    }

    #[inline]
    pub fn tag(&self) -> TaskTag {
        TaskTag::Relay
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// One activation: non-blocking receive; an empty channel means
    /// nothing to do this cycle
    pub fn poll(&mut self, channel: &Channel) {
        match channel.try_receive() {
            Ok(msg) => self.sink.write_bytes(msg.as_bytes()),
            Err(err) => {
                if !err.is_benign() {
                    warn!("relay idle, channel not ready");
                }
            }
        }
    }

    /// Task entry: absolute-deadline wake every [`CFG_RELAY_PERIOD`]
    /// ticks
    pub fn run<K: Kernel>(mut self, kernel: &K, channel: &Channel) -> ! {
        let mut last_wake = kernel.now();
        loop {
            self.poll(channel);
            kernel.sleep_until(&mut last_wake, CFG_RELAY_PERIOD);
        }
    }
}

// ============ Load simulators ============

/// Pure CPU burn with no I/O and no shared state. Exists only to occupy
/// deterministic slices of processor time and perturb the scheduling of
/// the other tasks.
pub struct LoadSimulator {
    iterations: u32,
    period: u32,
    tag: TaskTag,
}

impl LoadSimulator {
    /// First load simulator: short burn at a fast period
    pub fn load_one() -> Self {
        LoadSimulator {
            iterations: CFG_LOAD_1_ITERATIONS,
            period: CFG_LOAD_1_PERIOD,
            tag: TaskTag::LoadOne,
        }
    }

    /// Second load simulator: long burn at a slow period
    pub fn load_two() -> Self {
        LoadSimulator {
            iterations: CFG_LOAD_2_ITERATIONS,
            period: CFG_LOAD_2_PERIOD,
            tag: TaskTag::LoadTwo,
        }
    }

    #[inline]
    pub fn tag(&self) -> TaskTag {
        self.tag
    }

    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// One activation: the fixed-iteration busy loop. `black_box` keeps
    /// the otherwise dead loop from being optimized out.
    pub fn poll(&mut self) {
        for i in 0..self.iterations {
            core::hint::black_box(i);
        }
    }

    /// Task entry: absolute-deadline wake at this simulator's period
    pub fn run<K: Kernel>(mut self, kernel: &K) -> ! {
        let mut last_wake = kernel.now();
        let period = self.period;
        loop {
            self.poll();
            kernel.sleep_until(&mut last_wake, period);
        }
    }
}
