//! Exclusive ownership of the page scroll.
//!
//! Body styles are global, so at most one section may have the page pinned.
//! The slot below records who that is; the first claim wins and later
//! claimants are refused until the holder's token is released or dropped.

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use log::warn;
use thiserror::Error;

use super::surface::{BodyStyle, ScrollSurface, SurfaceError};

static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

thread_local! {
    static LOCK_SLOT: Cell<Option<LockOwner>> = const { Cell::new(None) };
}

/// Identity of a section that may request the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockOwner(u32);

impl LockOwner {
    pub fn next() -> Self {
        LockOwner(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LockOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section#{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("page scroll is already locked by {0}")]
    Held(LockOwner),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Current holder of the page lock, if any.
pub fn current_holder() -> Option<LockOwner> {
    LOCK_SLOT.with(|slot| slot.get())
}

fn claim(owner: LockOwner) -> Result<(), AcquireError> {
    LOCK_SLOT.with(|slot| match slot.get() {
        Some(holder) => Err(AcquireError::Held(holder)),
        None => {
            slot.set(Some(owner));
            Ok(())
        }
    })
}

fn free(owner: LockOwner) {
    LOCK_SLOT.with(|slot| {
        if slot.get() == Some(owner) {
            slot.set(None);
        }
    });
}

/// Proof that `owner` has the page pinned. Restores the page exactly once,
/// on [`ScrollLockToken::release`] or on drop.
pub struct ScrollLockToken<S: ScrollSurface> {
    owner: LockOwner,
    surface: S,
    saved_offset: f64,
    saved_style: BodyStyle,
    released: bool,
}

impl<S: ScrollSurface> ScrollLockToken<S> {
    pub fn acquire(owner: LockOwner, surface: S) -> Result<Self, AcquireError> {
        claim(owner)?;

        let saved_offset = surface.scroll_offset();
        let saved_style = match surface.body_style() {
            Ok(style) => style,
            Err(err) => {
                free(owner);
                return Err(err.into());
            }
        };

        if let Err(err) = surface.apply_body_style(&BodyStyle::pinned(saved_offset)) {
            // Partial writes must not leave the page half frozen
            if let Err(rollback) = surface.apply_body_style(&saved_style) {
                warn!("{} could not roll back body style: {}", owner, rollback);
            }
            free(owner);
            return Err(err.into());
        }

        Ok(Self {
            owner,
            surface,
            saved_offset,
            saved_style,
            released: false,
        })
    }

    pub fn owner(&self) -> LockOwner {
        self.owner
    }

    pub fn saved_offset(&self) -> f64 {
        self.saved_offset
    }

    /// Unpins the page and returns the offset it was restored to.
    pub fn release(mut self) -> f64 {
        self.restore();
        self.saved_offset
    }

    fn restore(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Err(err) = self.surface.apply_body_style(&self.saved_style) {
            warn!("{} could not restore body style: {}", self.owner, err);
        }
        self.surface.scroll_to(self.saved_offset);
        free(self.owner);
    }
}

impl<S: ScrollSurface> Drop for ScrollLockToken<S> {
    fn drop(&mut self) {
        self.restore();
    }
}
