//! Fixed-size channel messages and the workload's constant payloads
//!
//! Every element that crosses the shared channel is a 32-byte text buffer,
//! copied by value on send and on receive. Short payloads are zero padded;
//! the relay forwards the full buffer, padding included, exactly as the
//! producer enqueued it.

use crate::config::CFG_MSG_SIZE;

/// One channel element: a fixed-capacity text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    buf: [u8; CFG_MSG_SIZE],
}

impl Message {
    /// An all-zero message
    pub const fn empty() -> Self {
        Message {
            buf: [0; CFG_MSG_SIZE],
        }
    }

    /// Build a message from a text payload.
    ///
    /// The payload must fit in [`CFG_MSG_SIZE`] bytes; the remainder of
    /// the buffer is zero padded. Panics at compile time when used in a
    /// const context with an oversized payload.
    pub const fn from_text(text: &str) -> Self {
        let src = text.as_bytes();
        assert!(src.len() <= CFG_MSG_SIZE, "payload exceeds element size");

        let mut buf = [0u8; CFG_MSG_SIZE];
        let mut i = 0;
        while i < src.len() {
            buf[i] = src[i];
            i += 1;
        }
        Message { buf }
    }

    /// The full fixed-size buffer, padding included
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8; CFG_MSG_SIZE] {
        &self.buf
    }

    /// The text payload, without the zero padding
    pub fn text(&self) -> &str {
        let end = self
            .buf
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(CFG_MSG_SIZE);
        // Messages are only ever built from &str payloads
        core::str::from_utf8(&self.buf[..end]).unwrap_or("")
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Message {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.text());
    }
}

// ============ Constant payloads ============

/// Heartbeat payload, emitted unconditionally every heartbeat period
pub const HEARTBEAT: Message = Message::from_text("\n Periodic Message \n");

/// Button 1 falling-edge payload
pub const BUTTON_1_FALLING: Message = Message::from_text("\n Button 1 Falling Edge \n");

/// Button 1 rising-edge payload
pub const BUTTON_1_RISING: Message = Message::from_text("\n Button 1 Rising Edge \n");

/// Button 2 falling-edge payload
pub const BUTTON_2_FALLING: Message = Message::from_text("\n Button 2 Falling Edge \n");

/// Button 2 rising-edge payload
pub const BUTTON_2_RISING: Message = Message::from_text("\n Button 2 Rising Edge \n");
