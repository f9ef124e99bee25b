#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn of(delta: f64) -> Self {
        if delta < 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

// WheelEvent.deltaMode values
pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

const LINE_HEIGHT_PX: f64 = 16.0;

/// Converts a wheel delta into pixels. Firefox reports line deltas for
/// mouse wheels, some trackpads report whole pages.
pub fn wheel_delta_pixels(delta: f64, mode: u32, viewport_height: f64) -> f64 {
    match mode {
        DELTA_LINE => delta * LINE_HEIGHT_PX,
        DELTA_PAGE => delta * viewport_height,
        _ => delta,
    }
}

/// Last touch Y coordinate of the gesture in progress.
#[derive(Debug, Default, Clone)]
pub struct TouchTracker {
    origin: Option<f64>,
}

impl TouchTracker {
    pub fn start(&mut self, y: f64) {
        self.origin = Some(y);
    }

    /// Delta since the previous touch point; dragging up is positive.
    pub fn advance(&mut self, y: f64) -> Option<f64> {
        let previous = self.origin.replace(y)?;
        Some(previous - y)
    }

    pub fn origin(&self) -> Option<f64> {
        self.origin
    }

    pub fn reset(&mut self) {
        self.origin = None;
    }
}

/// Sums input deltas between animation frames so each frame applies one delta.
#[derive(Debug, Default, Clone)]
pub struct DeltaBatch {
    pending: Option<f64>,
}

impl DeltaBatch {
    /// Adds `delta` to the batch. Returns true when this is the first delta
    /// since the last flush, i.e. a frame needs scheduling.
    pub fn push(&mut self, delta: f64) -> bool {
        match self.pending.as_mut() {
            Some(sum) => {
                *sum += delta;
                false
            }
            None => {
                self.pending = Some(delta);
                true
            }
        }
    }

    pub fn pending(&self) -> f64 {
        self.pending.unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    pub fn take(&mut self) -> Option<f64> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_sign() {
        assert_eq!(Direction::of(100.0), Direction::Down);
        assert_eq!(Direction::of(-3.0), Direction::Up);
        assert_eq!(Direction::of(100.0).as_str(), "down");
    }

    #[test]
    fn line_and_page_deltas_become_pixels() {
        assert_eq!(wheel_delta_pixels(3.0, DELTA_LINE, 800.0), 48.0);
        assert_eq!(wheel_delta_pixels(-1.0, DELTA_PAGE, 800.0), -800.0);
        assert_eq!(wheel_delta_pixels(42.0, DELTA_PIXEL, 800.0), 42.0);
    }

    #[test]
    fn touch_drag_up_is_forward() {
        let mut touch = TouchTracker::default();
        assert_eq!(touch.advance(300.0), None);

        touch.start(500.0);
        assert_eq!(touch.advance(450.0), Some(50.0));
        assert_eq!(touch.advance(470.0), Some(-20.0));
        assert_eq!(touch.origin(), Some(470.0));

        touch.reset();
        assert_eq!(touch.advance(100.0), None);
    }

    #[test]
    fn batch_schedules_once_per_frame_and_keeps_the_sum() {
        let mut batch = DeltaBatch::default();
        let deltas = [12.5, -3.0, 40.0, 0.5, -10.0];

        let scheduled: Vec<bool> = deltas.iter().map(|d| batch.push(*d)).collect();
        assert_eq!(scheduled, vec![true, false, false, false, false]);
        assert_eq!(batch.take(), Some(deltas.iter().sum()));
        assert!(batch.is_empty());
        assert_eq!(batch.take(), None);

        assert!(batch.push(1.0));
    }
}
