#![cfg(target_arch = "wasm32")]

use coaching_frontend::scroll_lock::{BodyStyle, DomSurface, LockOwner, ScrollLockToken, ScrollSurface};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> web_sys::HtmlElement {
    web_sys::window().unwrap().document().unwrap().body().unwrap()
}

#[wasm_bindgen_test]
fn pinned_style_lands_on_body_and_is_removed_on_release() {
    let token = ScrollLockToken::acquire(LockOwner::next(), DomSurface).unwrap();
    let style = body().style();
    assert_eq!(style.get_property_value("position").unwrap(), "fixed");
    assert_eq!(style.get_property_value("overflow").unwrap(), "hidden");

    token.release();
    assert!(DomSurface.body_style().unwrap().is_unset());
}

#[wasm_bindgen_test]
fn existing_inline_styles_are_restored() {
    body().style().set_property("overflow", "auto").unwrap();

    let token = ScrollLockToken::acquire(LockOwner::next(), DomSurface).unwrap();
    drop(token);

    let mut expected = BodyStyle::default();
    expected.overflow = "auto".to_string();
    assert_eq!(DomSurface.body_style().unwrap(), expected);

    body().style().remove_property("overflow").unwrap();
}
