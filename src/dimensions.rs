//! Pure dimension arithmetic for proportional resizing.

/// Longer of the two sides.
pub fn longest_side(width: u32, height: u32) -> u32 {
    width.max(height)
}

/// Calculate the output size that maps the longer source side onto `target_size`.
///
/// The shorter side is scaled by the same ratio and truncated toward zero.
/// Only a strictly wider image is treated as landscape, so a square source
/// takes the portrait branch: `new_height = target_size` and the width is
/// derived from it, which for a square yields the same value.
///
/// The derived side never drops below one pixel.
///
/// # Arguments
/// * `width` - Source width in pixels
/// * `height` - Source height in pixels
/// * `target_size` - Desired length of the longer side
///
/// # Returns
/// * `(new_width, new_height)`
///
/// # Example
/// ```
/// use droid_icons::scaled_dimensions;
///
/// assert_eq!(scaled_dimensions(100, 200, 800), (400, 800));
/// assert_eq!(scaled_dimensions(300, 200, 48), (48, 32));
/// assert_eq!(scaled_dimensions(200, 200, 72), (72, 72));
/// ```
pub fn scaled_dimensions(width: u32, height: u32, target_size: u32) -> (u32, u32) {
    if width > height {
        (target_size, scale_side(height, target_size, width))
    } else {
        (scale_side(width, target_size, height), target_size)
    }
}

/// `side * target / reference`, truncated, at least 1.
///
/// Integer math keeps a square source exactly square; a float ratio can
/// land just below the whole number.
fn scale_side(side: u32, target: u32, reference: u32) -> u32 {
    let scaled = side as u64 * target as u64 / reference as u64;
    (scaled as u32).max(1)
}
