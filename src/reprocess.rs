//! Per-frame reprocessing steps for pixel buffers.
//!
//! Each step mutates a color buffer in place and does a bounded amount of
//! work, so an animation can apply one step per frame and let the effect
//! unfold over time.

use crate::color::Rgb;

/// Advance a gradual in-place sort of the buffer by one step.
///
/// Scans left to right and swaps the first adjacent pair where the left
/// color compares less than the right, then returns. At most one swap per
/// call, so successive calls walk the buffer toward descending channel
/// order one frame at a time. Empty and single-element buffers are left
/// untouched.
pub fn sort_step(colors: &mut [Rgb]) {
    for i in 0..colors.len().saturating_sub(1) {
        if colors[i] < colors[i + 1] {
            colors.swap(i, i + 1);
            return;
        }
    }
}
