/// Normalized animation progress driven by accumulated input delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    value: f64,
    sensitivity: f64,
}

impl Progress {
    pub fn new(sensitivity: f64) -> Self {
        Self { value: 0.0, sensitivity }
    }

    /// Applies a raw delta and returns the clamped progress.
    pub fn apply(&mut self, delta: f64) -> f64 {
        self.value = (self.value + delta * self.sensitivity).clamp(0.0, 1.0);
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value >= 1.0
    }

    pub fn is_at_start(&self) -> bool {
        self.value <= 0.0
    }

    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity;
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_unit_range() {
        let mut progress = Progress::new(0.01);
        assert!(progress.is_at_start());

        assert_eq!(progress.apply(50.0), 0.5);
        assert_eq!(progress.apply(500.0), 1.0);
        assert!(progress.is_complete());

        assert_eq!(progress.apply(-1000.0), 0.0);
        assert!(progress.is_at_start());
    }

    #[test]
    fn reset_returns_to_start() {
        let mut progress = Progress::new(0.5);
        progress.apply(1.0);
        progress.reset();
        assert_eq!(progress.value(), 0.0);
    }
}
