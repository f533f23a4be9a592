//! Typed records for the detection backend's response format.
//!
//! The backend (AWS Rekognition `DetectLabels`) reports a list of labels,
//! each with zero or more located instances. Parsing is strict: a record
//! missing a required field fails the whole response rather than being
//! filled with a default, since a defaulted confidence or box would feed
//! garbage into the weighted centroid.

use serde::{Deserialize, Serialize};

use crate::error::FocusError;
use crate::geometry::BoundingBox;

/// One located occurrence of a label: where it is and how sure the
/// detector is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedInstance {
    /// Per-instance confidence (Rekognition scale, 0–100).
    #[serde(alias = "Confidence")]
    pub confidence: f64,
    /// Location of the instance within the photo.
    #[serde(alias = "BoundingBox")]
    pub bounding_box: BoundingBox,
}

/// One label from a detection response, with all of its instances.
///
/// Scene-level labels ("Outdoors", "Nature") have an empty instance list;
/// they are legal input and contribute nothing to the focal point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLabel {
    /// The label's name (e.g. "Person", "Dog").
    #[serde(alias = "Name")]
    pub name: String,
    /// Label-level confidence (Rekognition scale, 0–100).
    #[serde(alias = "Confidence")]
    pub confidence: f64,
    /// Located instances of this label, in report order.
    #[serde(alias = "Instances")]
    pub instances: Vec<DetectedInstance>,
}

impl DetectedLabel {
    /// Reject non-finite numbers before they can reach the centroid
    /// arithmetic. JSON cannot express NaN, but out-of-range literals
    /// (`1e999`) parse to infinity and would poison every downstream sum.
    pub fn validate(&self) -> Result<(), FocusError> {
        if !self.confidence.is_finite() {
            return Err(FocusError::NonFiniteLabelField {
                label: self.name.clone(),
                field: "confidence",
            });
        }
        for (index, instance) in self.instances.iter().enumerate() {
            let check = |value: f64, field: &'static str| {
                if value.is_finite() {
                    Ok(())
                } else {
                    Err(FocusError::NonFiniteInstanceField {
                        label: self.name.clone(),
                        index,
                        field,
                    })
                }
            };
            check(instance.confidence, "confidence")?;
            let b = &instance.bounding_box;
            check(b.top, "top")?;
            check(b.left, "left")?;
            check(b.width, "width")?;
            check(b.height, "height")?;
        }
        Ok(())
    }
}

/// The top-level `DetectLabels` response shape.
#[derive(Debug, Deserialize)]
struct DetectLabelsResponse {
    #[serde(alias = "Labels")]
    labels: Vec<DetectedLabel>,
}

/// Parse a Rekognition `DetectLabels` response body into typed labels.
///
/// Accepts both Rekognition's PascalCase keys and snake_case. Fails on
/// malformed JSON, missing required fields, and non-finite numeric values.
pub fn parse_detect_labels(json: &str) -> Result<Vec<DetectedLabel>, FocusError> {
    let response: DetectLabelsResponse =
        serde_json::from_str(json).map_err(|e| FocusError::MalformedResponse(e.to_string()))?;

    for label in &response.labels {
        label.validate()?;
    }

    Ok(response.labels)
}
