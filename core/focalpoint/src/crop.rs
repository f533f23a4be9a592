use crate::error::FocusError;
use crate::geometry::Point;

/// Crop region within a source image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// X coordinate of the top-left corner.
    pub x: u32,
    /// Y coordinate of the top-left corner.
    pub y: u32,
    /// Width of the region.
    pub width: u32,
    /// Height of the region.
    pub height: u32,
}

/// Calculate the largest crop of the given aspect ratio (width / height)
/// that fits the source, positioned so `focus` sits as close to the crop
/// center as the image bounds allow.
///
/// `focus` is in normalized coordinates, as produced by
/// [`center_of_gravity`](crate::LabelCollection::center_of_gravity). The
/// region never extends past the source edges; a focal point near a border
/// slides the crop flush against that border instead.
pub fn focal_crop(
    source_width: u32,
    source_height: u32,
    aspect: f64,
    focus: Point,
) -> Result<CropRegion, FocusError> {
    if source_width == 0 || source_height == 0 {
        return Err(FocusError::ZeroDimensions);
    }
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(FocusError::InvalidAspect(aspect));
    }

    let (crop_width, crop_height) = fit_aspect(source_width, source_height, aspect);

    // Focal point is normalized — convert to source pixels.
    let focus_x = focus.left * source_width as f64;
    let focus_y = focus.top * source_height as f64;

    let x = (focus_x - crop_width as f64 / 2.0)
        .round()
        .max(0.0)
        .min(source_width.saturating_sub(crop_width) as f64) as u32;
    let y = (focus_y - crop_height as f64 / 2.0)
        .round()
        .max(0.0)
        .min(source_height.saturating_sub(crop_height) as f64) as u32;

    Ok(CropRegion {
        x,
        y,
        width: crop_width,
        height: crop_height,
    })
}

/// Center-framed crop of the given aspect ratio, for photos where no focal
/// point could be computed.
pub fn centered_crop(
    source_width: u32,
    source_height: u32,
    aspect: f64,
) -> Result<CropRegion, FocusError> {
    focal_crop(
        source_width,
        source_height,
        aspect,
        Point {
            top: 0.5,
            left: 0.5,
        },
    )
}

/// Largest width/height of the target aspect that fits the source.
/// Dimensions are clamped to at least one pixel.
fn fit_aspect(source_width: u32, source_height: u32, aspect: f64) -> (u32, u32) {
    if (source_width as f64 / source_height as f64) > aspect {
        // Source is wider than the target aspect — constrain by height
        let h = source_height;
        let w = ((h as f64 * aspect).round() as u32).clamp(1, source_width);
        (w, h)
    } else {
        // Source is taller than (or equal to) the target aspect — constrain by width
        let w = source_width;
        let h = ((w as f64 / aspect).round() as u32).clamp(1, source_height);
        (w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_square_crop_of_a_landscape_source() {
        // 800x300, aspect 1.0 — constrain by height, center horizontally
        let crop = centered_crop(800, 300, 1.0).unwrap();
        assert_eq!(crop.width, 300);
        assert_eq!(crop.height, 300);
        // focus_x = 400, x = 400 - 150 = 250
        assert_eq!(crop.x, 250);
        assert_eq!(crop.y, 0);
    }

    #[test]
    fn focus_positions_the_crop() {
        // 1000x500, aspect 1.0 → 500x500 crop; focus at 30% from left
        let focus = Point {
            top: 0.5,
            left: 0.3,
        };
        let crop = focal_crop(1000, 500, 1.0, focus).unwrap();
        // focus_x = 300, x = 300 - 250 = 50
        assert_eq!(crop.x, 50);
        assert_eq!(crop.y, 0);
        assert_eq!(crop.width, 500);
        assert_eq!(crop.height, 500);
    }

    #[test]
    fn focus_near_an_edge_clamps_to_the_border() {
        // Focus far right: x would be 900 - 250 = 650, clamped to 1000 - 500
        let focus = Point {
            top: 0.5,
            left: 0.9,
        };
        let crop = focal_crop(1000, 500, 1.0, focus).unwrap();
        assert_eq!(crop.x, 500);
        assert_eq!(crop.x + crop.width, 1000);
    }

    #[test]
    fn focus_past_the_left_border_clamps_to_zero() {
        let focus = Point {
            top: 0.5,
            left: 0.0,
        };
        let crop = focal_crop(1000, 500, 1.0, focus).unwrap();
        assert_eq!(crop.x, 0);
    }

    #[test]
    fn tall_source_with_portrait_aspect_constrains_by_width() {
        // 300x800, aspect 0.75 → 300x400
        let crop = centered_crop(300, 800, 0.75).unwrap();
        assert_eq!(crop.width, 300);
        assert_eq!(crop.height, 400);
        assert_eq!(crop.x, 0);
        // focus_y = 400, y = 400 - 200 = 200
        assert_eq!(crop.y, 200);
    }

    #[test]
    fn exact_aspect_needs_no_crop_offset() {
        let crop = centered_crop(300, 400, 0.75).unwrap();
        assert_eq!(
            crop,
            CropRegion {
                x: 0,
                y: 0,
                width: 300,
                height: 400
            }
        );
    }

    #[test]
    fn extreme_aspect_clamps_to_one_pixel() {
        let crop = centered_crop(100, 100, 1000.0).unwrap();
        assert_eq!(crop.width, 100);
        assert_eq!(crop.height, 1);
    }

    #[test]
    fn zero_source_is_an_error() {
        let err = centered_crop(0, 100, 1.0).unwrap_err();
        assert!(matches!(err, FocusError::ZeroDimensions));
    }

    #[test]
    fn non_positive_aspect_is_an_error() {
        assert!(matches!(
            centered_crop(100, 100, 0.0).unwrap_err(),
            FocusError::InvalidAspect(_)
        ));
        assert!(matches!(
            centered_crop(100, 100, -1.5).unwrap_err(),
            FocusError::InvalidAspect(_)
        ));
        assert!(matches!(
            centered_crop(100, 100, f64::NAN).unwrap_err(),
            FocusError::InvalidAspect(_)
        ));
    }
}
