//! Lock engagement window: when a section is allowed to hold the page scroll.

/// Section bounds relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub bottom: f64,
    pub viewport_height: f64,
}

impl SectionGeometry {
    /// Y coordinate of the trigger line for `threshold` (fraction of viewport height).
    pub fn trigger_line(&self, threshold: f64) -> f64 {
        threshold * self.viewport_height
    }

    /// True while the top edge has crossed the trigger line and the section
    /// has not yet scrolled fully past the top of the viewport.
    pub fn in_window(&self, threshold: f64) -> bool {
        self.top <= self.trigger_line(threshold) && self.bottom > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    Completed,
    LeftWindow,
    ReverseExit,
    Unmounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockDecision {
    Engage,
    Release(ReleaseReason),
    Hold,
}

/// Two-state transition table for one visibility check.
///
/// `armed` is false right after a reverse exit so the section does not
/// grab the page again before the user has scrolled back out of it.
pub fn decide(locked: bool, in_window: bool, is_complete: bool, armed: bool) -> LockDecision {
    match (locked, in_window, is_complete) {
        (false, true, false) if armed => LockDecision::Engage,
        (true, _, true) => LockDecision::Release(ReleaseReason::Completed),
        (true, false, false) => LockDecision::Release(ReleaseReason::LeftWindow),
        _ => LockDecision::Hold,
    }
}
