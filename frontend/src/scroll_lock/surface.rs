use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no browser window available")]
    NoWindow,
    #[error("document has no body")]
    NoBody,
    #[error("failed to write body style: {0}")]
    Style(String),
}

/// The inline body styles touched while the page is scroll-locked.
/// Empty strings mean the property is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyStyle {
    pub overflow: String,
    pub position: String,
    pub top: String,
    pub width: String,
}

impl BodyStyle {
    pub const PROPERTIES: [&'static str; 4] = ["overflow", "position", "top", "width"];

    /// Freezes the page in place at `offset`.
    pub fn pinned(offset: f64) -> Self {
        Self {
            overflow: "hidden".to_string(),
            position: "fixed".to_string(),
            top: format!("-{}px", offset),
            width: "100%".to_string(),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        match property {
            "overflow" => Some(self.overflow.as_str()),
            "position" => Some(self.position.as_str()),
            "top" => Some(self.top.as_str()),
            "width" => Some(self.width.as_str()),
            _ => None,
        }
    }

    pub fn set(&mut self, property: &str, value: String) {
        match property {
            "overflow" => self.overflow = value,
            "position" => self.position = value,
            "top" => self.top = value,
            "width" => self.width = value,
            _ => {}
        }
    }

    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("overflow", self.overflow.as_str()),
            ("position", self.position.as_str()),
            ("top", self.top.as_str()),
            ("width", self.width.as_str()),
        ]
    }

    pub fn is_unset(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_empty())
    }
}

/// The document-wide scroll state a lock suspends and restores.
pub trait ScrollSurface {
    fn scroll_offset(&self) -> f64;
    fn body_style(&self) -> Result<BodyStyle, SurfaceError>;
    fn apply_body_style(&self, style: &BodyStyle) -> Result<(), SurfaceError>;
    fn scroll_to(&self, offset: f64);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_style_freezes_at_offset() {
        let style = BodyStyle::pinned(640.0);
        assert_eq!(style.overflow, "hidden");
        assert_eq!(style.position, "fixed");
        assert_eq!(style.top, "-640px");
        assert_eq!(style.width, "100%");
        assert!(!style.is_unset());
    }

    #[test]
    fn get_and_set_cover_every_property() {
        let mut style = BodyStyle::default();
        assert!(style.is_unset());
        for property in BodyStyle::PROPERTIES {
            style.set(property, format!("{}-value", property));
        }
        for property in BodyStyle::PROPERTIES {
            assert_eq!(style.get(property), Some(format!("{}-value", property).as_str()));
        }
        assert_eq!(style.get("margin"), None);
    }
}
