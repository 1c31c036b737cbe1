//! Ground-truth relations used to label sampled inputs.

use perceptron_rs::Vector;

/// `[1, r, g, b]` with each channel in `[0, 1)`.
pub type Color = Vector<4>;

/// Relative luminance above one half.
pub fn is_bright(color: &Color) -> bool {
    0.2126 * color[1] + 0.7152 * color[2] + 0.0722 * color[3] > 0.5
}

/// Positive when the features sum to more than half their count.
///
/// Splits the unit hypercube into two halves of equal volume.
pub fn half_plane<const S: usize>(input: &Vector<S>) -> bool {
    let features = &input[1..];
    features.iter().sum::<f64>() > features.len() as f64 / 2.0
}
