//! Bounded FIFO message channel shared by all producers and one consumer
//!
//! The channel is the only shared mutable resource in the task set. It
//! buffers up to [`CFG_CHANNEL_CAPACITY`] fixed-size messages, copied by
//! value in both directions, and serializes concurrent producer sends
//! into a single arrival order: the order in which sends win the critical
//! section. Mutual exclusion is internal to the channel; task logic never
//! manages a lock of its own.
//!
//! Timeouts are tick granular. A blocked sender or receiver retries once
//! per tick through a one-tick voluntary suspension on the kernel, so the
//! caller never holds the critical section while waiting.

use core::cell::UnsafeCell;

use portable_atomic::{AtomicBool, Ordering};

use crate::config::CFG_CHANNEL_CAPACITY;
use crate::error::{Error, Result};
use crate::message::Message;
use crate::port::Kernel;
use crate::types::Tick;

/// Fixed-capacity ring of messages. Only ever touched inside the
/// channel's critical section.
struct Fifo {
    buf: [Message; CFG_CHANNEL_CAPACITY],
    head: usize,
    len: usize,
}

impl Fifo {
    const fn new() -> Self {
        Fifo {
            buf: [Message::empty(); CFG_CHANNEL_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    fn push(&mut self, msg: &Message) -> bool {
        if self.len == CFG_CHANNEL_CAPACITY {
            return false;
        }
        let tail = (self.head + self.len) % CFG_CHANNEL_CAPACITY;
        self.buf[tail] = *msg;
        self.len += 1;
        true
    }

    fn pop(&mut self) -> Option<Message> {
        if self.len == 0 {
            return None;
        }
        let msg = self.buf[self.head];
        self.head = (self.head + 1) % CFG_CHANNEL_CAPACITY;
        self.len -= 1;
        Some(msg)
    }
}

/// The shared bounded channel.
///
/// Constructed once before any task starts ([`Channel::create`]) and
/// injected into every task that needs it; never re-created for the
/// lifetime of the process.
pub struct Channel {
    fifo: UnsafeCell<Fifo>,
    created: AtomicBool,
}

// Interior access only happens inside critical sections
unsafe impl Sync for Channel {}

impl Channel {
    pub const fn new() -> Self {
        Channel {
            fifo: UnsafeCell::new(Fifo::new()),
            created: AtomicBool::new(false),
        }
    }

    /// One-time startup step. Must complete before any producer or
    /// consumer runs; a second attempt within the same process fails
    /// without touching the buffered set.
    pub fn create(&self) -> Result<()> {
        if self.created.swap(true, Ordering::AcqRel) {
            return Err(Error::ChannelCreated);
        }
        Ok(())
    }

    #[inline]
    pub fn is_created(&self) -> bool {
        self.created.load(Ordering::Acquire)
    }

    /// Number of buffered messages, in `0..=CFG_CHANNEL_CAPACITY`
    pub fn len(&self) -> usize {
        critical_section::with(|_cs| unsafe { &*self.fifo.get() }.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == CFG_CHANNEL_CAPACITY
    }

    /// Non-blocking send: enqueue at the tail or fail immediately.
    ///
    /// # Errors
    /// * [`Error::ChannelUnavailable`] - channel was never created
    /// * [`Error::ChannelFull`] - no free slot; the message is dropped
    pub fn try_send(&self, msg: &Message) -> Result<()> {
        if !self.is_created() {
            return Err(Error::ChannelUnavailable);
        }

        critical_section::with(|_cs| {
            let fifo = unsafe { &mut *self.fifo.get() };
            if fifo.push(msg) {
                Ok(())
            } else {
                Err(Error::ChannelFull)
            }
        })
    }

    /// Non-blocking receive: dequeue the oldest message or fail
    /// immediately.
    ///
    /// # Errors
    /// * [`Error::ChannelUnavailable`] - channel was never created
    /// * [`Error::ChannelEmpty`] - nothing buffered
    pub fn try_receive(&self) -> Result<Message> {
        if !self.is_created() {
            return Err(Error::ChannelUnavailable);
        }

        critical_section::with(|_cs| {
            let fifo = unsafe { &mut *self.fifo.get() };
            fifo.pop().ok_or(Error::ChannelEmpty)
        })
    }

    /// Send with a bounded wait.
    ///
    /// Succeeds if a free slot turns up within `timeout` ticks, else
    /// fails with [`Error::ChannelFull`]. A zero timeout is exactly
    /// [`Channel::try_send`]: an explicit, non-retried drop when full.
    pub fn send<K: Kernel>(&self, kernel: &K, msg: &Message, timeout: Tick) -> Result<()> {
        let start = kernel.now();
        loop {
            match self.try_send(msg) {
                Err(Error::ChannelFull) if timeout > 0 => {
                    if kernel.now().wrapping_sub(start) >= timeout {
                        return Err(Error::ChannelFull);
                    }
                    kernel.sleep_for(1);
                }
                other => return other,
            }
        }
    }

    /// Receive with a bounded wait.
    ///
    /// Yields the oldest buffered message if one turns up within
    /// `timeout` ticks, else fails with [`Error::ChannelEmpty`].
    pub fn receive<K: Kernel>(&self, kernel: &K, timeout: Tick) -> Result<Message> {
        let start = kernel.now();
        loop {
            match self.try_receive() {
                Err(Error::ChannelEmpty) if timeout > 0 => {
                    if kernel.now().wrapping_sub(start) >= timeout {
                        return Err(Error::ChannelEmpty);
                    }
                    kernel.sleep_for(1);
                }
                other => return other,
            }
        }
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}
