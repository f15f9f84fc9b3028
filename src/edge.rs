//! Transition detection over periodically sampled digital inputs
//!
//! Each input line gets its own detector. The state machine is two
//! levels, `previous` and `current`: a sample that differs from the
//! previous one is exactly one edge, a sample that matches it is none.
//! `previous` is updated unconditionally every sample, whether or not a
//! transition fired, so a level held across consecutive samples can
//! never re-emit and a maximal run of same-level samples yields exactly
//! one edge at its boundary.

use crate::types::{Edge, PinLevel};

/// Debounced per-line transition detector
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    previous: PinLevel,
}

impl EdgeDetector {
    /// Detector whose first comparison is against `initial`.
    ///
    /// The task set starts every line at [`PinLevel::Low`], so a line
    /// that is already high at the first sample reads as one rising
    /// edge.
    pub const fn new(initial: PinLevel) -> Self {
        EdgeDetector { previous: initial }
    }

    /// Feed one sample, returning the transition it completes, if any
    pub fn sample(&mut self, current: PinLevel) -> Option<Edge> {
        let edge = match (self.previous, current) {
            (PinLevel::High, PinLevel::Low) => Some(Edge::Falling),
            (PinLevel::Low, PinLevel::High) => Some(Edge::Rising),
            _ => None,
        };
        self.previous = current;
        edge
    }

    /// Level observed at the prior sampling instant
    #[inline(always)]
    pub fn previous(&self) -> PinLevel {
        self.previous
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new(PinLevel::Low)
    }
}
