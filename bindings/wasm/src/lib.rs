use serde::Deserialize;
use wasm_bindgen::prelude::*;

use focalpoint::{
    centered_crop, focal_crop, parse_detect_labels, FocusError, FocusMode, LabelCollection, Point,
};

/// Options for focal-point computation, passed as a JavaScript object.
///
/// All fields are optional.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FocusOptions {
    pub mode: Option<String>,
}

fn string_to_mode(mode: &str) -> Result<FocusMode, JsValue> {
    match mode {
        "person-priority" => Ok(FocusMode::PersonPriority),
        "all-instances" => Ok(FocusMode::AllInstances),
        _ => Err(make_error(
            "INVALID_OPTIONS",
            &format!("unknown mode: {mode}"),
        )),
    }
}

/// Create a JS `Error` with a `code` property.
fn make_error(code: &str, message: &str) -> JsValue {
    let err = js_sys::Error::new(message);
    let _ = js_sys::Reflect::set(&err, &"code".into(), &JsValue::from_str(code));
    JsValue::from(err)
}

/// Convert a `FocusError` into a JS `Error` with a machine-readable `code`.
fn to_js_error(e: FocusError) -> JsValue {
    let code = match &e {
        FocusError::MalformedResponse(_) => "MALFORMED_RESPONSE",
        FocusError::NonFiniteLabelField { .. } | FocusError::NonFiniteInstanceField { .. } => {
            "NON_FINITE_FIELD"
        }
        FocusError::InvalidAspect(_) => "INVALID_ASPECT",
        FocusError::ZeroDimensions => "ZERO_DIMENSIONS",
    };
    make_error(code, &e.to_string())
}

fn parse_options(options: JsValue) -> Result<FocusOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(FocusOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| make_error("INVALID_OPTIONS", &format!("invalid options: {e}")))
    }
}

fn build_point_object(point: &Point) -> Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"top".into(), &JsValue::from(point.top))?;
    js_sys::Reflect::set(&obj, &"left".into(), &JsValue::from(point.left))?;
    Ok(JsValue::from(obj))
}

/// Compute the focal point of a photo from its detection response.
///
/// Returns a `{top, left}` object in normalized coordinates, or `null`
/// when the photo has no focal point (no located instances, or only
/// degenerate boxes).
///
/// @param labels_json - A Rekognition `DetectLabels` response body
/// @param options - Optional object with fields: mode
///   ("person-priority" | "all-instances")
#[wasm_bindgen(js_name = "focalPoint")]
pub fn focal_point(labels_json: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let opts = parse_options(options)?;
    let mode = match opts.mode.as_deref() {
        Some(m) => string_to_mode(m)?,
        None => FocusMode::default(),
    };

    let labels = parse_detect_labels(labels_json).map_err(to_js_error)?;

    let mut collection = LabelCollection::with_mode(mode);
    for label in &labels {
        collection.add(label);
    }

    match collection.center_of_gravity() {
        Some(point) => build_point_object(&point),
        None => Ok(JsValue::NULL),
    }
}

/// Compute the thumbnail crop region for a source image.
///
/// When `top`/`left` are provided (a focal point from [`focalPoint`]),
/// the crop is anchored on it; when omitted, the crop is center-framed.
///
/// @param source_width - Source image width in pixels
/// @param source_height - Source image height in pixels
/// @param aspect - Target aspect ratio (width / height)
/// @param top - Optional normalized focal-point top
/// @param left - Optional normalized focal-point left
#[wasm_bindgen(js_name = "cropRegion")]
pub fn crop_region(
    source_width: u32,
    source_height: u32,
    aspect: f64,
    top: Option<f64>,
    left: Option<f64>,
) -> Result<JsValue, JsValue> {
    let region = match (top, left) {
        (Some(top), Some(left)) => {
            focal_crop(source_width, source_height, aspect, Point { top, left })
        }
        _ => centered_crop(source_width, source_height, aspect),
    }
    .map_err(to_js_error)?;

    let obj = js_sys::Object::new();
    js_sys::Reflect::set(&obj, &"x".into(), &JsValue::from(region.x))?;
    js_sys::Reflect::set(&obj, &"y".into(), &JsValue::from(region.y))?;
    js_sys::Reflect::set(&obj, &"width".into(), &JsValue::from(region.width))?;
    js_sys::Reflect::set(&obj, &"height".into(), &JsValue::from(region.height))?;
    Ok(JsValue::from(obj))
}
