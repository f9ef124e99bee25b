use log::{debug, warn};

use super::engagement::{decide, LockDecision, ReleaseReason, SectionGeometry};
use super::input::{DeltaBatch, Direction, TouchTracker};
use super::surface::ScrollSurface;
use super::token::{AcquireError, LockOwner, ScrollLockToken};

/// Caller-owned state the controller re-reads on every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    pub lock_threshold: f64,
    pub is_complete: bool,
    pub can_reverse_exit: bool,
    /// Caller's progress is at 0.
    pub at_start: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            lock_threshold: 0.3,
            is_complete: false,
            can_reverse_exit: false,
            at_start: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Let the browser scroll natively.
    PassThrough,
    /// Suppress the event; schedule a frame if asked.
    Captured { schedule_frame: bool },
}

impl InputOutcome {
    pub fn is_captured(&self) -> bool {
        matches!(self, InputOutcome::Captured { .. })
    }
}

/// Per-section engagement state. Locked exactly while `token` is held.
pub struct EngagementState<S: ScrollSurface> {
    token: Option<ScrollLockToken<S>>,
    touch: TouchTracker,
}

impl<S: ScrollSurface> EngagementState<S> {
    pub fn locked(&self) -> bool {
        self.token.is_some()
    }

    pub fn saved_scroll_offset(&self) -> Option<f64> {
        self.token.as_ref().map(|token| token.saved_offset())
    }

    pub fn touch_origin(&self) -> Option<f64> {
        self.touch.origin()
    }
}

/// Gates native page scrolling for one section and turns wheel/touch input
/// into batched progress deltas.
pub struct ScrollLockController<S: ScrollSurface + Clone> {
    owner: LockOwner,
    surface: S,
    options: ControllerOptions,
    state: EngagementState<S>,
    batch: DeltaBatch,
    armed: bool,
}

impl<S: ScrollSurface + Clone> ScrollLockController<S> {
    pub fn new(owner: LockOwner, surface: S, lock_threshold: f64) -> Self {
        Self {
            owner,
            surface,
            options: ControllerOptions {
                lock_threshold,
                ..ControllerOptions::default()
            },
            state: EngagementState {
                token: None,
                touch: TouchTracker::default(),
            },
            batch: DeltaBatch::default(),
            armed: true,
        }
    }

    pub fn update_options(&mut self, options: ControllerOptions) {
        self.options = options;
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    pub fn owner(&self) -> LockOwner {
        self.owner
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked()
    }

    pub fn state(&self) -> &EngagementState<S> {
        &self.state
    }

    pub fn saved_offset(&self) -> Option<f64> {
        self.state.saved_scroll_offset()
    }

    /// Re-evaluates the lock against the section's current position. Runs on
    /// every scroll/resize tick and whenever the caller's completion changes.
    /// Returns the transition that actually took place.
    pub fn check_visibility(&mut self, geometry: SectionGeometry) -> LockDecision {
        let in_window = geometry.in_window(self.options.lock_threshold);
        if !in_window && !self.armed {
            debug!("{} re-armed", self.owner);
            self.armed = true;
        }

        let decision = decide(self.is_locked(), in_window, self.options.is_complete, self.armed);
        match decision {
            LockDecision::Engage => {
                if !self.engage() {
                    return LockDecision::Hold;
                }
            }
            LockDecision::Release(reason) => self.release(reason),
            LockDecision::Hold => {}
        }
        decision
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> InputOutcome {
        self.route(delta_y)
    }

    pub fn on_touch_start(&mut self, y: f64) {
        self.state.touch.start(y);
    }

    pub fn on_touch_move(&mut self, y: f64) -> InputOutcome {
        match self.state.touch.advance(y) {
            Some(delta) => self.route(delta),
            None if self.is_locked() => InputOutcome::Captured { schedule_frame: false },
            None => InputOutcome::PassThrough,
        }
    }

    /// Drains the deltas gathered since the last frame.
    pub fn flush_frame(&mut self) -> Option<(f64, Direction)> {
        self.batch.take().map(|delta| (delta, Direction::of(delta)))
    }

    /// Force-releases the page. Called on unmount; safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.release(ReleaseReason::Unmounted);
        self.batch.clear();
        self.state.touch.reset();
    }

    fn route(&mut self, delta: f64) -> InputOutcome {
        if !self.is_locked() {
            return InputOutcome::PassThrough;
        }

        let reversing = delta < 0.0 && self.batch.pending() <= 0.0;
        if self.options.can_reverse_exit && self.options.at_start && reversing {
            self.release(ReleaseReason::ReverseExit);
            self.armed = false;
            return InputOutcome::PassThrough;
        }

        if delta == 0.0 {
            return InputOutcome::Captured { schedule_frame: false };
        }
        InputOutcome::Captured {
            schedule_frame: self.batch.push(delta),
        }
    }

    fn engage(&mut self) -> bool {
        match ScrollLockToken::acquire(self.owner, self.surface.clone()) {
            Ok(token) => {
                debug!("{} locked page at offset {}", self.owner, token.saved_offset());
                self.state.token = Some(token);
                true
            }
            Err(AcquireError::Held(holder)) => {
                debug!("{} wants the lock but {} holds it", self.owner, holder);
                false
            }
            Err(err) => {
                warn!("{} failed to lock page scroll: {}", self.owner, err);
                false
            }
        }
    }

    fn release(&mut self, reason: ReleaseReason) {
        if let Some(token) = self.state.token.take() {
            let offset = token.release();
            debug!("{} released page ({:?}), restored offset {}", self.owner, reason, offset);
        }
    }
}

impl<S: ScrollSurface + Clone> Drop for ScrollLockController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
