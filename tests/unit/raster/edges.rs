//! Tests for Sobel edge masks, edge density and ink thickening

#[cfg(test)]
mod tests {
    use inkposter::raster::PixelBuffer;
    use inkposter::raster::edges::{
        detect_edges, edge_density, gradient_magnitude, luminance_field, thicken,
        thickening_radius,
    };

    fn split_black_white(width: u32, height: u32, boundary: u32) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..height {
            for x in 0..width {
                let v = if x < boundary { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        PixelBuffer::new(width, height, data).expect("valid split buffer")
    }

    fn is_edge(mask: &PixelBuffer, x: u32, y: u32) -> bool {
        mask.pixel(x, y).is_some_and(|px| px[3] == 255)
    }

    // Tests a hard vertical edge marks the columns on both sides of the boundary and nothing else
    // Verified by comparing magnitude with >= instead of > and lowering the threshold to zero
    #[test]
    fn test_vertical_split_marks_boundary_columns() {
        let (width, height, boundary) = (10, 8, 5);
        let mask = detect_edges(&split_black_white(width, height, boundary), 50.0);

        for y in 1..height - 1 {
            assert!(is_edge(&mask, boundary - 1, y), "row {y} left of boundary");
            assert!(is_edge(&mask, boundary, y), "row {y} right of boundary");
            for x in (1..boundary - 1).chain(boundary + 1..width - 1) {
                assert!(!is_edge(&mask, x, y), "interior ({x}, {y}) marked");
            }
        }
    }

    // Tests the one-pixel border is never evaluated
    // Verified by extending the convolution loop to the border with clamped reads
    #[test]
    fn test_border_left_unmarked() {
        let (width, height, boundary) = (10, 8, 5);
        let mask = detect_edges(&split_black_white(width, height, boundary), 50.0);

        for x in 0..width {
            assert!(!is_edge(&mask, x, 0));
            assert!(!is_edge(&mask, x, height - 1));
        }
        for y in 0..height {
            assert!(!is_edge(&mask, 0, y));
            assert!(!is_edge(&mask, width - 1, y));
        }
    }

    // Tests mask color is always black with binary alpha
    // Verified by copying source color into the mask
    #[test]
    fn test_mask_is_black_with_binary_alpha() {
        let mask = detect_edges(&split_black_white(12, 6, 4), 50.0);
        for px in mask.pixels() {
            assert_eq!(&px[..3], &[0, 0, 0]);
            assert!(px[3] == 0 || px[3] == 255);
        }
    }

    // Tests a uniform image and a tiny image have no edges
    // Verified by returning a constant magnitude
    #[test]
    fn test_no_edges_without_gradient() {
        let flat = PixelBuffer::filled(9, 9, [120, 30, 200, 255]).expect("valid buffer");
        assert!(edge_density(&detect_edges(&flat, 0.0)).abs() < f64::EPSILON);

        let tiny = split_black_white(2, 2, 1);
        assert!(edge_density(&detect_edges(&tiny, 0.0)).abs() < f64::EPSILON);
    }

    // Tests flat neighbourhoods of any color give an exactly zero gradient
    // Verified by accumulating the kernel weights term by term in kernel order
    #[test]
    fn test_flat_gradient_is_exactly_zero() {
        for rgba in [[120, 30, 200, 255], [17, 250, 3, 255], [255, 255, 255, 255], [1, 2, 3, 0]] {
            let flat = PixelBuffer::filled(9, 7, rgba).expect("valid buffer");
            let magnitude = gradient_magnitude(&luminance_field(&flat));
            assert!(magnitude.iter().all(|m| m.abs() < f64::MIN_POSITIVE), "{rgba:?}");
            assert!(edge_density(&detect_edges(&flat, 0.0)).abs() < f64::EPSILON);
        }
    }

    // Tests the threshold is strict and scales with the contrast of the step
    // Verified by marking pixels at exactly the threshold
    #[test]
    fn test_threshold_is_strict() {
        let source = split_black_white(6, 5, 3);
        let magnitude = gradient_magnitude(&luminance_field(&source));
        let peak = magnitude.iter().copied().fold(0.0, f64::max);

        assert!((peak - 4.0 * 255.0).abs() < 1e-6);
        assert!(edge_density(&detect_edges(&source, peak)).abs() < f64::EPSILON);
        assert!(edge_density(&detect_edges(&source, peak - 1.0)) > 0.0);
    }

    // Tests edge density is the marked fraction of all pixels
    // Verified by dividing by the interior pixel count
    #[test]
    fn test_edge_density_fraction() {
        let mut data = vec![0u8; 4 * 4 * 4];
        data[3] = 255;
        data[7] = 255;
        let mask = PixelBuffer::new(4, 4, data).expect("valid mask");
        assert!((edge_density(&mask) - 2.0 / 16.0).abs() < f64::EPSILON);
    }

    // Tests blur radius follows round(1 + 3w) within [1, 4]
    // Verified by truncating instead of rounding the radius
    #[test]
    fn test_thickening_radius() {
        assert_eq!(thickening_radius(0.0), 1);
        assert_eq!(thickening_radius(0.3), 2);
        assert_eq!(thickening_radius(0.6), 3);
        assert_eq!(thickening_radius(1.0), 4);
        assert_eq!(thickening_radius(5.0), 4);
    }

    // Tests thickening spreads a thin line sideways while keeping black ink
    // Verified by skipping the blur and only applying the alpha gain
    #[test]
    fn test_thicken_widens_lines() {
        let mask = detect_edges(&split_black_white(30, 20, 15), 50.0);
        let thick = thicken(&mask, 0.6).expect("thickening succeeds");

        assert_eq!(thick.dimensions(), mask.dimensions());

        let marked = |buffer: &PixelBuffer| buffer.pixels().filter(|px| px[3] > 0).count();
        assert!(marked(&thick) > marked(&mask));

        let row = 10;
        let covered: Vec<u32> = (0..30)
            .filter(|&x| thick.pixel(x, row).is_some_and(|px| px[3] > 0))
            .collect();
        assert!(covered.len() > 2, "line should cover more than two columns");
        assert!(covered.contains(&14) && covered.contains(&15));
        assert!(thick.pixel(15, row).is_some_and(|px| px[3] > 128));

        for px in thick.pixels() {
            assert_eq!(&px[..3], &[0, 0, 0]);
        }
    }
}
