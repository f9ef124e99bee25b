//! Scroll-lock controller: pins the page while a section drives its
//! animation from wheel and touch input, then hands scrolling back.

pub mod controller;
pub mod dom;
pub mod engagement;
pub mod hook;
pub mod input;
pub mod progress;
pub mod surface;
pub mod token;

pub use controller::{ControllerOptions, EngagementState, InputOutcome, ScrollLockController};
pub use dom::DomSurface;
pub use engagement::{LockDecision, ReleaseReason, SectionGeometry};
pub use hook::{use_scroll_lock, UseScrollLockHandle, UseScrollLockOptions};
pub use input::Direction;
pub use progress::Progress;
pub use surface::{BodyStyle, ScrollSurface, SurfaceError};
pub use token::{AcquireError, LockOwner, ScrollLockToken};
