//! Unicode sparklines for inline metric trends.

/// Unicode block characters, lowest to highest.
pub const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render the most recent `width` finite values as a sparkline.
///
/// Older values are dropped rather than subsampled so the tail of the
/// series, which is what a validation meter cares about, stays exact.
pub fn sparkline(values: &[f32], width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let finite: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let tail = &finite[finite.len().saturating_sub(width)..];
    if tail.is_empty() {
        return String::new();
    }

    let min = tail.iter().copied().fold(f32::INFINITY, f32::min);
    let max = tail.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;

    if range < f32::EPSILON {
        return SPARK_CHARS[4].to_string().repeat(tail.len());
    }

    tail.iter()
        .map(|v| {
            let idx = ((v - min) / range * 7.0).round() as usize;
            SPARK_CHARS[idx.min(7)]
        })
        .collect()
}
