//! Error types for the relay workload
//!
//! Uses Rust's Result pattern. No error here is ever retried: a failed
//! send is a dropped message, a failed receive is an idle cycle. Only
//! startup failures are fatal, and those halt before scheduling begins.

/// Workload error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Error {
    /// Send could not complete within its timeout; the message is dropped
    ChannelFull = 1,
    /// Receive found no message within its timeout; nothing to do this cycle
    ChannelEmpty = 2,
    /// Channel was never created; the operation is skipped this cycle
    ChannelUnavailable = 3,
    /// Channel was already created (one-time startup step attempted twice)
    ChannelCreated = 4,
}

/// Result type alias for workload operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Whether this outcome is part of normal steady-state operation
    /// rather than a startup defect
    #[inline]
    pub fn is_benign(self) -> bool {
        matches!(self, Error::ChannelFull | Error::ChannelEmpty)
    }
}
