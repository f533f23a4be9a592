//! Focal-point computation for photo galleries: aggregate the object
//! detections reported for a photo into a single center of interest, then
//! derive smart-crop regions anchored on it.
//!
//! # Example
//!
//! ```
//! use focalpoint::{BoundingBox, DetectedInstance, DetectedLabel, LabelCollection};
//!
//! let person = DetectedLabel {
//!     name: "Person".into(),
//!     confidence: 99.1,
//!     instances: vec![DetectedInstance {
//!         confidence: 99.1,
//!         bounding_box: BoundingBox::new(0.2, 0.3, 0.1, 0.4),
//!     }],
//! };
//!
//! let mut collection = LabelCollection::new();
//! collection.add(&person);
//!
//! let focus = collection.center_of_gravity().unwrap();
//! assert!((focus.top - 0.4).abs() < 1e-9);
//! assert!((focus.left - 0.35).abs() < 1e-9);
//! ```
#![warn(missing_docs)]

mod crop;
mod detection;
mod error;
mod geometry;
mod instance;

use tracing::{debug, trace};

/// Crop-region geometry anchored on a focal point.
pub use crop::{centered_crop, focal_crop, CropRegion};
/// Typed detection-response records and the JSON parsing boundary.
pub use detection::{parse_detect_labels, DetectedInstance, DetectedLabel};
/// Error type returned by focalpoint operations.
pub use error::FocusError;
/// Geometry value types.
pub use geometry::{BoundingBox, Point};
/// One detected occurrence of a label.
pub use instance::LabelInstance;

/// Which detections participate in the focal point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FocusMode {
    /// When at least one person was detected, weight only the person
    /// instances — a person in frame outranks any other object.
    #[default]
    PersonPriority,

    /// Weight every instance regardless of label.
    AllInstances,
}

/// Accumulates the detected instances for one photo and computes the
/// area-weighted focal point.
///
/// One collection belongs to one photo's detection run: create it empty,
/// [`add`](LabelCollection::add) each label as the backend reports it, then
/// read [`center_of_gravity`](LabelCollection::center_of_gravity). Adding
/// more instances after a read is permitted — the next read reflects
/// everything added so far.
#[derive(Debug, Clone, Default)]
pub struct LabelCollection {
    instances: Vec<LabelInstance>,
    mode: FocusMode,
}

impl LabelCollection {
    /// Create an empty collection with the default person-priority mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with an explicit mode.
    pub fn with_mode(mode: FocusMode) -> Self {
        Self {
            instances: Vec::new(),
            mode,
        }
    }

    /// Append one instance per record in `label`, in report order.
    ///
    /// The same label may be added across multiple calls; nothing is
    /// deduplicated. Labels without instances contribute nothing.
    pub fn add(&mut self, label: &DetectedLabel) {
        for record in &label.instances {
            self.push(LabelInstance::new(
                label.name.clone(),
                record.confidence,
                record.bounding_box,
            ));
        }
    }

    /// Append a single already-built instance.
    pub fn push(&mut self, instance: LabelInstance) {
        trace!(
            name = instance.name(),
            confidence = instance.confidence(),
            "instance added"
        );
        self.instances.push(instance);
    }

    /// Number of accumulated instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// All accumulated instances, in insertion order.
    pub fn instances(&self) -> &[LabelInstance] {
        &self.instances
    }

    /// The active mode.
    pub fn mode(&self) -> &FocusMode {
        &self.mode
    }

    /// Switch modes. Affects subsequent reads only.
    pub fn set_mode(&mut self, mode: FocusMode) {
        self.mode = mode;
    }

    /// All instances ordered by descending confidence.
    ///
    /// Stable sort ascending, then reversed — equal-confidence runs come
    /// out in reverse insertion order. Downstream display code depends on
    /// that exact tie-break, so this must not become a descending
    /// comparator.
    pub fn sorted_by_confidence(&self) -> Vec<&LabelInstance> {
        let mut sorted: Vec<&LabelInstance> = self.instances.iter().collect();
        sorted.sort_by(|a, b| {
            a.confidence()
                .partial_cmp(&b.confidence())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted.reverse();
        sorted
    }

    /// Whether any accumulated instance is a person detection.
    pub fn contains_person(&self) -> bool {
        self.instances.iter().any(LabelInstance::is_person)
    }

    /// Area-weighted centroid of the relevant instance centers.
    ///
    /// Under [`FocusMode::PersonPriority`], if at least one person is
    /// present only person instances participate. Returns `None` when no
    /// instance participates or every participating box is degenerate
    /// (total weight zero); callers that want center framing for such
    /// photos can fall back to [`centered_crop`].
    ///
    /// Deterministic: the same insertion sequence always yields the same
    /// point, and repeated reads of an unmodified collection are
    /// bit-identical.
    pub fn center_of_gravity(&self) -> Option<Point> {
        let person_only = self.mode == FocusMode::PersonPriority && self.contains_person();

        let mut weighted_top = 0.0;
        let mut weighted_left = 0.0;
        let mut total_weight = 0.0;

        for instance in &self.instances {
            if person_only && !instance.is_person() {
                continue;
            }
            let weight = instance.area();
            let center = instance.center();
            weighted_top += center.top * weight;
            weighted_left += center.left * weight;
            total_weight += weight;
        }

        if total_weight == 0.0 {
            debug!(
                instances = self.instances.len(),
                "zero total weight, photo has no focal point"
            );
            return None;
        }

        let point = Point {
            top: weighted_top / total_weight,
            left: weighted_left / total_weight,
        };
        debug!(
            person_only,
            top = point.top,
            left = point.left,
            "focal point computed"
        );
        Some(point)
    }
}
