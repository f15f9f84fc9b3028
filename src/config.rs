//! Compile-time configuration for the relay workload
//!
//! These constants fix the shape of the task set and the shared channel.

use crate::types::{Prio, Tick};

/// System tick rate in Hz
pub const CFG_TICK_RATE_HZ: u32 = 1000;

/// Size of one channel element in bytes
pub const CFG_MSG_SIZE: usize = 32;

/// Number of elements the shared channel can buffer
pub const CFG_CHANNEL_CAPACITY: usize = 10;

/// Sampling period of both button monitors
pub const CFG_BUTTON_PERIOD: Tick = 50;

/// Period of the heartbeat producer
pub const CFG_HEARTBEAT_PERIOD: Tick = 100;

/// Period of the relay consumer
pub const CFG_RELAY_PERIOD: Tick = 20;

/// Period of the first load simulator
pub const CFG_LOAD_1_PERIOD: Tick = 10;

/// Period of the second load simulator
pub const CFG_LOAD_2_PERIOD: Tick = 100;

/// Busy-loop iterations of the first load simulator (calibration constant)
pub const CFG_LOAD_1_ITERATIONS: u32 = 33_200;

/// Busy-loop iterations of the second load simulator (calibration constant)
pub const CFG_LOAD_2_ITERATIONS: u32 = 78_330;

/// Ticks a button monitor is willing to block in `send`
pub const CFG_BUTTON_SEND_TIMEOUT: Tick = 10;

/// Priority shared by all six tasks (no priority differentiation)
pub const CFG_TASK_PRIO: Prio = 0;

/// Stack budget per task, in words
pub const CFG_TASK_STACK_WORDS: usize = 128;
