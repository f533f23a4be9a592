use serde::{Deserialize, Serialize};

/// A 2-D offset within an image, in the detector's coordinate space.
///
/// Rekognition reports geometry as ratios of the image dimensions, so both
/// fields normally fall in [0, 1]. The type does not enforce a range —
/// whatever the detector supplied passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Offset from the top edge.
    pub top: f64,
    /// Offset from the left edge.
    pub left: f64,
}

/// Axis-aligned rectangle around one detected object.
///
/// Accepts both snake_case and Rekognition's PascalCase field names when
/// deserialized. Zero-size boxes are legal input and carry zero weight in
/// the focal-point computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Offset of the top edge from the top of the image.
    #[serde(alias = "Top")]
    pub top: f64,
    /// Offset of the left edge from the left of the image.
    #[serde(alias = "Left")]
    pub left: f64,
    /// Width of the box.
    #[serde(alias = "Width")]
    pub width: f64,
    /// Height of the box.
    #[serde(alias = "Height")]
    pub height: f64,
}

impl BoundingBox {
    /// Create a box from its top-left corner and size.
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Geometric midpoint of the rectangle.
    pub fn center(&self) -> Point {
        Point {
            top: self.top + self.height / 2.0,
            left: self.left + self.width / 2.0,
        }
    }
}
