use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in image pixel space, used for face bounding
/// boxes and brightness sampling regions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Left half of the box, split at the horizontal center.
    pub fn left_half(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width / 2.0, self.height)
    }

    /// Right half of the box, split at the horizontal center.
    pub fn right_half(&self) -> BoundingBox {
        BoundingBox::new(self.x + self.width / 2.0, self.y, self.width / 2.0, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area() {
        assert_relative_eq!(BoundingBox::new(0.0, 0.0, 20.0, 30.0).area(), 600.0);
    }

    #[test]
    fn test_degenerate_zero_width() {
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 30.0).is_degenerate());
    }

    #[test]
    fn test_degenerate_negative_height() {
        assert!(BoundingBox::new(0.0, 0.0, 30.0, -1.0).is_degenerate());
    }

    #[test]
    fn test_non_degenerate() {
        assert!(!BoundingBox::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_halves_split_at_horizontal_center() {
        let b = BoundingBox::new(100.0, 50.0, 200.0, 300.0);
        let left = b.left_half();
        let right = b.right_half();

        assert_relative_eq!(left.x, 100.0);
        assert_relative_eq!(left.width, 100.0);
        assert_relative_eq!(right.x, 200.0);
        assert_relative_eq!(right.width, 100.0);
        assert_relative_eq!(left.height, 300.0);
        assert_relative_eq!(right.height, 300.0);
    }
}
