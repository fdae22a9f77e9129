//! Tests for recipe constants and their relationships

#[cfg(test)]
mod tests {
    use inkposter::io::configuration::{
        ANALYSIS_MAX_SIDE, BACKGROUND_FILL, BURST_BASE_RAYS, BURST_MIN_STRENGTH,
        DEFAULT_PROFILE_KEY, EDGE_LAYER_OPACITY, EDGE_THRESHOLD_BASE, EDGE_THRESHOLD_SPAN,
        HALFTONE_MAX_SPACING, KMEANS_ITERATIONS, OUTPUT_SUFFIX, PALETTE_SIZE, POSTER_LEVELS_BASE,
        PROFILE_EDGE_THRESHOLD, SAMPLES_PER_IMAGE,
    };

    // Tests palette clustering constants
    // Verified by changing the palette size
    #[test]
    fn test_palette_constants() {
        assert_eq!(PALETTE_SIZE, 6);
        assert_eq!(KMEANS_ITERATIONS, 8);
        assert_eq!(SAMPLES_PER_IMAGE, 4000);
        assert_eq!(ANALYSIS_MAX_SIDE, 256);
    }

    // Tests the profiling threshold sits inside the range the ink layer can reach
    // Verified by raising the profiling threshold above the base
    #[test]
    fn test_edge_thresholds_relationship() {
        assert!(PROFILE_EDGE_THRESHOLD > EDGE_THRESHOLD_BASE - EDGE_THRESHOLD_SPAN);
        assert!(PROFILE_EDGE_THRESHOLD < EDGE_THRESHOLD_BASE);
        assert!(EDGE_LAYER_OPACITY > 0.0 && EDGE_LAYER_OPACITY <= 1.0);
    }

    // Tests background is opaque light gray
    // Verified by making the background translucent
    #[test]
    fn test_background_is_opaque_gray() {
        let [r, g, b, a] = BACKGROUND_FILL;
        assert_eq!(a, 255);
        assert!(r == g && g == b);
        assert!(r > 200);
    }

    // Tests layer constants keep the posterizer and overlays well-formed
    // Verified by lowering the base level count below two
    #[test]
    fn test_layer_constants() {
        assert!(POSTER_LEVELS_BASE >= 2.0);
        assert_eq!(BURST_BASE_RAYS, 16);
        assert!(BURST_MIN_STRENGTH > 0.0);
        assert!(HALFTONE_MAX_SPACING > 8);
    }

    // Tests output suffix and profile key are safe as file names
    // Verified by adding a path separator to the suffix
    #[test]
    fn test_names_are_filesystem_safe() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars().chain(DEFAULT_PROFILE_KEY.chars()) {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "invalid file name character: {ch}"
            );
        }
    }
}
