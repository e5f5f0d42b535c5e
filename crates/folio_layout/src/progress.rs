//! Scroll progress and derived curves

use folio_platform::ScrollMetrics;

/// Scroll ratio of a container, in `[0, 1]`
///
/// Containers whose content fits report 0.
pub fn compute_progress(metrics: &ScrollMetrics) -> f32 {
    let max_scroll = metrics.scroll_height - metrics.client_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_top / max_scroll).clamp(0.0, 1.0)
}

/// Linear remap of the progress window `[start, end]` to `0..=100`
///
/// Progress before the window is 0, after it 100.
pub fn remap_range(progress: f32, start: f32, end: f32) -> f32 {
    if end <= start {
        return if progress >= end { 100.0 } else { 0.0 };
    }
    ((progress - start) / (end - start) * 100.0).clamp(0.0, 100.0)
}

/// Progress (`0..=100`) of segment `index` when `total` (`0..=100`) sweeps
/// across weighted segments in order
///
/// Used for staggered effects where each word fills in turn, with longer
/// words taking a larger share of the sweep.
pub fn segment_progress(total: f32, weights: &[f32], index: usize) -> f32 {
    let sum: f32 = weights.iter().sum();
    let Some(weight) = weights.get(index) else {
        return 0.0;
    };
    if sum <= 0.0 || *weight <= 0.0 {
        return if total >= 100.0 { 100.0 } else { 0.0 };
    }

    let start: f32 = weights[..index].iter().map(|w| w / sum * 100.0).sum();
    let span = weight / sum * 100.0;

    if total <= start {
        0.0
    } else if total >= start + span {
        100.0
    } else {
        (total - start) / span * 100.0
    }
}

/// Opacity of an overlay that only shows below the colour boundary
pub fn overlay_opacity(split_percent: f32, max_opacity: f32) -> f32 {
    ((100.0 - split_percent.clamp(0.0, 100.0)) / 100.0) * max_opacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let max_scroll = 1200.0;
        let mut last = -1.0;
        for step in 0..=120 {
            let top = max_scroll * step as f32 / 120.0;
            let p = compute_progress(&ScrollMetrics::new(top, 2000.0, 800.0));
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
        }
        assert_eq!(compute_progress(&ScrollMetrics::new(0.0, 2000.0, 800.0)), 0.0);
        assert_eq!(compute_progress(&ScrollMetrics::new(1200.0, 2000.0, 800.0)), 1.0);
    }

    #[test]
    fn test_progress_unscrollable() {
        assert_eq!(compute_progress(&ScrollMetrics::new(0.0, 800.0, 800.0)), 0.0);
        assert_eq!(compute_progress(&ScrollMetrics::new(0.0, 500.0, 800.0)), 0.0);
    }

    #[test]
    fn test_remap_range() {
        assert_eq!(remap_range(0.1, 0.3, 0.8), 0.0);
        assert!((remap_range(0.55, 0.3, 0.8) - 50.0).abs() < 1e-3);
        assert_eq!(remap_range(0.9, 0.3, 0.8), 100.0);
    }

    #[test]
    fn test_segment_progress() {
        // Four words of 4, 6, 7 and 5 characters
        let weights = [4.0, 6.0, 7.0, 5.0];
        assert_eq!(segment_progress(0.0, &weights, 0), 0.0);
        assert_eq!(segment_progress(100.0, &weights, 3), 100.0);

        // Half-way through the first word's share
        let first_share = 4.0 / 22.0 * 100.0;
        let p = segment_progress(first_share / 2.0, &weights, 0);
        assert!((p - 50.0).abs() < 1e-3);
        assert_eq!(segment_progress(first_share / 2.0, &weights, 1), 0.0);

        assert_eq!(segment_progress(50.0, &weights, 9), 0.0);
    }

    #[test]
    fn test_overlay_opacity() {
        assert_eq!(overlay_opacity(100.0, 0.4), 0.0);
        assert!((overlay_opacity(0.0, 0.4) - 0.4).abs() < 1e-6);
        assert!((overlay_opacity(50.0, 0.4) - 0.2).abs() < 1e-6);
    }
}
