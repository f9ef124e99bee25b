#![cfg(target_arch = "wasm32")]

use coaching_frontend::components::before_after::{BeforeAfterProps, BeforeAfterReveal};
use coaching_frontend::config::ScrollLockSettings;
use coaching_frontend::scroll_lock::{DomSurface, ScrollSurface};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, WheelEvent, WheelEventInit};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount point placed first in the body, so the section starts above the trigger line.
fn mount_root() -> Element {
    let document = document();
    let root = document.create_element("div").unwrap();
    let body = document.body().unwrap();
    body.insert_before(&root, body.first_child().as_ref()).unwrap();
    root
}

fn props() -> BeforeAfterProps {
    BeforeAfterProps {
        title: "Before and after".to_string(),
        before: html! { <p>{"before"}</p> },
        after: html! { <p>{"after"}</p> },
        settings: ScrollLockSettings::default(),
    }
}

/// Dispatches a cancelable wheel event on `window`; returns whether a listener prevented it.
fn wheel(delta_y: f64) -> bool {
    let init = WheelEventInit::new();
    init.set_delta_y(delta_y);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = WheelEvent::new_with_event_init_dict("wheel", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn progress_bar_style() -> Option<String> {
    document()
        .query_selector(".reveal-progress-bar")
        .unwrap()
        .and_then(|bar| bar.get_attribute("style"))
}

async fn settle() {
    TimeoutFuture::new(100).await;
}

#[wasm_bindgen_test]
async fn unmounting_while_locked_restores_body_and_stops_capturing_wheel() {
    let root = mount_root();
    let app = yew::Renderer::<BeforeAfterReveal>::with_root_and_props(root.clone(), props()).render();
    settle().await;

    assert_eq!(DomSurface.body_style().unwrap().position, "fixed");
    assert!(wheel(40.0));

    app.destroy();
    settle().await;

    assert!(DomSurface.body_style().unwrap().is_unset());
    assert!(!wheel(40.0));
    root.remove();
}

#[wasm_bindgen_test]
async fn wheel_input_is_batched_per_frame_and_completion_unlocks() {
    let root = mount_root();
    let app = yew::Renderer::<BeforeAfterReveal>::with_root_and_props(root.clone(), props()).render();
    settle().await;

    // Two ticks before the next frame land as one 200px delta
    assert!(wheel(100.0));
    assert!(wheel(100.0));
    settle().await;
    assert_eq!(progress_bar_style().as_deref(), Some("width: 30.00%;"));
    assert_eq!(DomSurface.body_style().unwrap().position, "fixed");

    assert!(wheel(600.0));
    settle().await;
    assert_eq!(progress_bar_style().as_deref(), Some("width: 100.00%;"));
    assert!(DomSurface.body_style().unwrap().is_unset());
    assert!(!wheel(40.0));

    app.destroy();
    settle().await;
    root.remove();
}
