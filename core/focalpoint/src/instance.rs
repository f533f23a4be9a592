use crate::geometry::{BoundingBox, Point};

/// Label name Rekognition uses for detected people. Exact, case-sensitive.
pub(crate) const PERSON_LABEL: &str = "Person";

/// One detected occurrence of a named label within a photo.
///
/// Carries the owning label's name alongside the per-instance confidence
/// and bounding box, so a flat sequence of instances is self-describing.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelInstance {
    name: String,
    confidence: f64,
    bounding_box: BoundingBox,
}

impl LabelInstance {
    /// Create an instance from a label name, confidence score, and box.
    pub fn new(name: impl Into<String>, confidence: f64, bounding_box: BoundingBox) -> Self {
        Self {
            name: name.into(),
            confidence,
            bounding_box,
        }
    }

    /// The owning label's name (e.g. "Person", "Dog").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Detection confidence, in whatever scale the detector reports
    /// (Rekognition uses 0–100).
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// The instance's bounding box.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Midpoint of the instance's bounding box.
    pub fn center(&self) -> Point {
        self.bounding_box.center()
    }

    /// Relevance weight of this instance in the focal-point computation.
    ///
    /// Not the rectangle area: this is `100 × bottom × right`, the product
    /// of the box's lower-right corner coordinates. Every focal point the
    /// production gallery has stored was computed with this formula —
    /// changing it moves every stored crop center.
    pub fn area(&self) -> f64 {
        100.0
            * (self.bounding_box.top + self.bounding_box.height)
            * (self.bounding_box.left + self.bounding_box.width)
    }

    /// Whether this instance is a person detection.
    pub fn is_person(&self) -> bool {
        self.name == PERSON_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_uses_the_corner_product_formula() {
        // 100 * (0.2 + 0.1) * (0.3 + 0.4) = 21.0
        let i = LabelInstance::new("Dog", 90.0, BoundingBox::new(0.2, 0.3, 0.4, 0.1));
        assert!((i.area() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn area_is_zero_for_a_box_at_the_origin() {
        let i = LabelInstance::new("Dog", 90.0, BoundingBox::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(i.area(), 0.0);
    }

    #[test]
    fn area_is_not_width_times_height() {
        // A zero-size box away from the origin still has nonzero "area".
        let i = LabelInstance::new("Dog", 90.0, BoundingBox::new(0.5, 0.5, 0.0, 0.0));
        assert!((i.area() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn person_match_is_exact_and_case_sensitive() {
        let bbox = BoundingBox::new(0.0, 0.0, 0.1, 0.1);
        assert!(LabelInstance::new("Person", 99.0, bbox).is_person());
        assert!(!LabelInstance::new("person", 99.0, bbox).is_person());
        assert!(!LabelInstance::new("Persons", 99.0, bbox).is_person());
        assert!(!LabelInstance::new("Dog", 99.0, bbox).is_person());
    }

    #[test]
    fn center_comes_from_the_bounding_box() {
        let i = LabelInstance::new("Cat", 80.0, BoundingBox::new(0.1, 0.2, 0.6, 0.4));
        let c = i.center();
        assert!((c.top - 0.3).abs() < 1e-12);
        assert!((c.left - 0.5).abs() < 1e-12);
    }
}
