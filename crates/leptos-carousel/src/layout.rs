//! Carousel Layout Math
//!
//! Slide widths per viewport breakpoint and the track offset that centers a slide.

/// Gap between slides on the track, in pixels
pub const DEFAULT_GAP_PX: u32 = 32;

/// Slide width used when the viewport cannot be measured
pub const FALLBACK_SLIDE_WIDTH: u32 = 800;

/// Slide width above the last breakpoint
pub const WIDE_SLIDE_WIDTH: u32 = 1100;

/// (viewport upper bound exclusive, slide width), checked in order
pub const BREAKPOINTS: &[(f64, u32)] = &[
    (640.0, 300),
    (768.0, 500),
    (1024.0, 700),
];

/// Width of a single slide for the given viewport width
pub fn slide_width_for(viewport: Option<f64>) -> u32 {
    let Some(viewport) = viewport else {
        return FALLBACK_SLIDE_WIDTH;
    };
    BREAKPOINTS
        .iter()
        .find(|(upper, _)| viewport < *upper)
        .map(|(_, width)| *width)
        .unwrap_or(WIDE_SLIDE_WIDTH)
}

/// Per-slide widths; every slide shares the bucket width
pub fn slide_widths(viewport: Option<f64>, count: usize) -> Vec<u32> {
    vec![slide_width_for(viewport); count]
}

/// Total track width: all slides plus the gaps between them
pub fn track_width(widths: &[u32], gap: u32) -> u32 {
    let gaps = widths.len().saturating_sub(1) as u32;
    widths.iter().sum::<u32>() + gap * gaps
}

/// Horizontal translation (px) that puts the center of `active` on the center of the track.
///
/// Returns 0 with no selection or an index past the end of `widths`.
pub fn center_offset(widths: &[u32], gap: u32, active: Option<usize>) -> i32 {
    let Some(index) = active else { return 0 };
    let Some(&width) = widths.get(index) else { return 0 };

    let before: u32 = widths[..index].iter().sum();
    let center_of_slide = before as f64 + (index as u32 * gap) as f64 + width as f64 / 2.0;
    let track_center = track_width(widths, gap) as f64 / 2.0;

    round_half_up(track_center - center_of_slide)
}

// Math.round semantics: -0.5 -> 0, 0.5 -> 1
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
