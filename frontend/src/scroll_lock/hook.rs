use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{trace, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, TouchEvent, WheelEvent, Window};
use yew::prelude::*;

use super::controller::{ControllerOptions, InputOutcome, ScrollLockController};
use super::dom::{geometry_of, DomSurface};
use super::input::{wheel_delta_pixels, Direction};
use super::token::LockOwner;

type SharedController = Rc<RefCell<ScrollLockController<DomSurface>>>;
type SharedOptions = Rc<RefCell<UseScrollLockOptions>>;

#[derive(Clone, PartialEq)]
pub struct UseScrollLockOptions {
    /// Fraction of viewport height used as the trigger line.
    pub lock_threshold: f64,
    /// Forces the lock off once the animation has finished.
    pub is_complete: bool,
    pub can_reverse_exit: bool,
    pub at_start: bool,
    /// Receives one batched delta per animation frame while locked.
    pub on_progress: Callback<(f64, Direction)>,
}

impl UseScrollLockOptions {
    fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            lock_threshold: self.lock_threshold,
            is_complete: self.is_complete,
            can_reverse_exit: self.can_reverse_exit,
            at_start: self.at_start,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UseScrollLockHandle {
    pub is_locked: bool,
}

/// Locks page scroll while the section behind `node` sits in its engagement
/// window and feeds wheel/touch input to `options.on_progress` instead.
#[hook]
pub fn use_scroll_lock(node: NodeRef, options: UseScrollLockOptions) -> UseScrollLockHandle {
    let controller = use_mut_ref(|| {
        ScrollLockController::new(LockOwner::next(), DomSurface, options.lock_threshold)
    });
    let latest = use_mut_ref(|| options.clone());
    let locked = use_state_eq(|| false);

    controller.borrow_mut().update_options(options.controller_options());
    *latest.borrow_mut() = options.clone();

    {
        let controller = controller.clone();
        let latest = latest.clone();
        let locked = locked.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let bindings = web_sys::window().map(|window| {
                    attach(&window, node.clone(), controller.clone(), latest, locked)
                });

                move || {
                    drop(bindings);
                    controller.borrow_mut().teardown();
                }
            },
            node.clone(),
        );
    }

    // Completion and progress changes don't scroll the page, so re-check here
    {
        let controller = controller.clone();
        let locked = locked.setter();
        use_effect_with_deps(
            move |_| {
                run_visibility_check(&node, &controller, &locked);
                || ()
            },
            (options.is_complete, options.at_start),
        );
    }

    UseScrollLockHandle { is_locked: *locked }
}

fn run_visibility_check(node: &NodeRef, controller: &SharedController, locked: &UseStateSetter<bool>) {
    let Some(window) = web_sys::window() else { return };
    let Some(element) = node.cast::<Element>() else { return };
    let Some(geometry) = geometry_of(&element, &window) else { return };

    let is_locked = {
        let mut controller = controller.borrow_mut();
        controller.check_visibility(geometry);
        controller.is_locked()
    };
    locked.set(is_locked);
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn touch_y(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.client_y() as f64)
}

fn settle(
    event: &Event,
    outcome: InputOutcome,
    frames: &FrameScheduler,
    controller: &SharedController,
    locked: &UseStateSetter<bool>,
) {
    if let InputOutcome::Captured { schedule_frame } = outcome {
        event.prevent_default();
        event.stop_propagation();
        if schedule_frame {
            frames.schedule();
        }
    }
    // A reverse exit unlocks from inside an input handler
    let is_locked = controller.borrow().is_locked();
    locked.set(is_locked);
}

/// Everything attached to `window` for one mounted section.
struct Bindings {
    listeners: Vec<WindowListener>,
    frames: Rc<FrameScheduler>,
}

impl Drop for Bindings {
    fn drop(&mut self) {
        self.listeners.clear();
        self.frames.cancel();
    }
}

fn attach(
    window: &Window,
    node: NodeRef,
    controller: SharedController,
    latest: SharedOptions,
    locked: UseStateSetter<bool>,
) -> Bindings {
    let frames = Rc::new(FrameScheduler::new(window.clone(), {
        let controller = controller.clone();
        move || {
            let flushed = controller.borrow_mut().flush_frame();
            if let Some((delta, direction)) = flushed {
                trace!("frame delta {} {}", delta, direction.as_str());
                let on_progress = latest.borrow().on_progress.clone();
                on_progress.emit((delta, direction));
            }
        }
    }));

    let visibility = |event_name: &'static str| {
        let node = node.clone();
        let controller = controller.clone();
        let locked = locked.clone();
        WindowListener::new(window, event_name, true, move |_: Event| {
            run_visibility_check(&node, &controller, &locked);
        })
    };

    let wheel = {
        let controller = controller.clone();
        let frames = frames.clone();
        let locked = locked.clone();
        WindowListener::new(window, "wheel", false, move |event: Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else { return };
            let delta = wheel_delta_pixels(wheel.delta_y(), wheel.delta_mode(), viewport_height());
            let outcome = controller.borrow_mut().on_wheel(delta);
            settle(&event, outcome, &frames, &controller, &locked);
        })
    };

    let touch_start = {
        let controller = controller.clone();
        WindowListener::new(window, "touchstart", true, move |event: Event| {
            if let Some(y) = touch_y(&event) {
                controller.borrow_mut().on_touch_start(y);
            }
        })
    };

    let touch_move = {
        let controller = controller.clone();
        let frames = frames.clone();
        let locked = locked.clone();
        WindowListener::new(window, "touchmove", false, move |event: Event| {
            let Some(y) = touch_y(&event) else { return };
            let outcome = controller.borrow_mut().on_touch_move(y);
            settle(&event, outcome, &frames, &controller, &locked);
        })
    };

    let listeners = vec![
        visibility("scroll"),
        visibility("resize"),
        wheel,
        touch_start,
        touch_move,
    ];

    // Initial check, the section may already be past the line on mount
    run_visibility_check(&node, &controller, &locked);

    Bindings { listeners, frames }
}

/// A window event listener removed again on drop.
struct WindowListener {
    window: Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// `passive: false` is required for listeners that call `preventDefault`
    /// on wheel and touchmove.
    fn new(window: &Window, event_name: &'static str, passive: bool, handler: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);

        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event_name,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Failed to listen for {}: {:?}", event_name, err);
        }

        Self {
            window: window.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event_name, self.callback.as_ref().unchecked_ref());
    }
}

/// Coalesces input onto the display refresh: at most one pending
/// `requestAnimationFrame` at a time.
struct FrameScheduler {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut(f64)>,
}

impl FrameScheduler {
    fn new(window: Window, mut on_frame: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));
        let callback = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move |_timestamp: f64| {
                pending.set(None);
                on_frame();
            }) as Box<dyn FnMut(f64)>)
        };
        Self { window, pending, callback }
    }

    fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        match self.window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
        }
    }

    fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

impl Drop for FrameScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
