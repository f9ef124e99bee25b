use wasm_bindgen::JsValue;
use web_sys::{CssStyleDeclaration, Element, Window};

use super::engagement::SectionGeometry;
use super::surface::{BodyStyle, ScrollSurface, SurfaceError};

/// The real page: `window.scrollY` plus the inline style of `document.body`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomSurface;

fn js_error(value: JsValue) -> SurfaceError {
    SurfaceError::Style(format!("{:?}", value))
}

fn body_style_declaration() -> Result<CssStyleDeclaration, SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
    let document = window.document().ok_or(SurfaceError::NoWindow)?;
    let body = document.body().ok_or(SurfaceError::NoBody)?;
    Ok(body.style())
}

impl ScrollSurface for DomSurface {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn body_style(&self) -> Result<BodyStyle, SurfaceError> {
        let declaration = body_style_declaration()?;
        let mut style = BodyStyle::default();
        for property in BodyStyle::PROPERTIES {
            let value = declaration.get_property_value(property).map_err(js_error)?;
            style.set(property, value);
        }
        Ok(style)
    }

    fn apply_body_style(&self, style: &BodyStyle) -> Result<(), SurfaceError> {
        let declaration = body_style_declaration()?;
        for (property, value) in style.entries() {
            if value.is_empty() {
                declaration.remove_property(property).map_err(js_error)?;
            } else {
                declaration.set_property(property, value).map_err(js_error)?;
            }
        }
        Ok(())
    }

    fn scroll_to(&self, offset: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, offset);
        }
    }
}

/// Viewport-relative bounds of `element`, or `None` if the viewport height
/// cannot be read.
pub fn geometry_of(element: &Element, window: &Window) -> Option<SectionGeometry> {
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(SectionGeometry {
        top: rect.top(),
        bottom: rect.bottom(),
        viewport_height,
    })
}
