//! Tests for motif shape counts, determinism and placement

#[cfg(test)]
mod tests {
    use inkposter::pipeline::MotifPack;
    use inkposter::synth::layer::{InkShape, surface};
    use inkposter::synth::motifs::{draw_motifs, motif_shapes, shape_count};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tiny_skia::{Color, Path};

    fn path_of(shape: &InkShape) -> &Path {
        match shape {
            InkShape::Stroke { path, .. } | InkShape::Fill { path } => path,
        }
    }

    fn outlines(shapes: &[InkShape]) -> Vec<Vec<(f32, f32)>> {
        shapes
            .iter()
            .map(|shape| path_of(shape).points().iter().map(|p| (p.x, p.y)).collect())
            .collect()
    }

    // Tests per-pack shape counts at the ends and middle of the intensity range
    // Verified by rounding instead of flooring the intensity term
    #[test]
    fn test_shape_counts() {
        let expected = [
            (MotifPack::None, [0, 0, 0]),
            (MotifPack::Waves, [3, 5, 8]),
            (MotifPack::Flames, [25, 45, 65]),
            (MotifPack::Psychedelia, [4, 7, 10]),
        ];
        for (pack, counts) in expected {
            for (intensity, count) in [0.0, 0.5, 1.0].into_iter().zip(counts) {
                assert_eq!(shape_count(pack, intensity), count, "{pack} at {intensity}");
            }
        }
    }

    // Tests every pack generates exactly its advertised number of shapes
    // Verified by dropping the last flame tongue
    #[test]
    fn test_generated_shapes_match_counts() {
        let mut rng = StdRng::seed_from_u64(11);
        for pack in [
            MotifPack::None,
            MotifPack::Waves,
            MotifPack::Flames,
            MotifPack::Psychedelia,
        ] {
            for intensity in [0.0, 0.35, 1.0] {
                let shapes = motif_shapes(pack, 200, 150, intensity, &mut rng);
                assert_eq!(shapes.len(), shape_count(pack, intensity));
            }
        }
    }

    // Tests waves ignore the random source entirely
    // Verified by adding random jitter to wave crest centers
    #[test]
    fn test_waves_are_deterministic() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(999);
        let first = motif_shapes(MotifPack::Waves, 160, 120, 0.6, &mut a);
        let second = motif_shapes(MotifPack::Waves, 160, 120, 0.6, &mut b);
        assert_eq!(outlines(&first), outlines(&second));
        assert!(first.iter().all(|s| matches!(s, InkShape::Stroke { .. })));
    }

    // Tests flames vary with the random source but repeat for a pinned seed
    // Verified by fixing flame height at its lower bound
    #[test]
    fn test_flames_follow_random_source() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            outlines(&motif_shapes(MotifPack::Flames, 200, 100, 0.5, &mut rng))
        };
        assert_eq!(run(5), run(5));
        assert_ne!(run(5), run(6));
    }

    // Tests flames sit on the baseline and rise 20% to 45% of the canvas height
    // Verified by anchoring flames at the bottom edge
    #[test]
    fn test_flames_anchor_on_baseline() {
        let (width, height) = (300, 200);
        let base = height as f32 * 0.85;
        let mut rng = StdRng::seed_from_u64(3);
        let shapes = motif_shapes(MotifPack::Flames, width, height, 1.0, &mut rng);

        for shape in &shapes {
            assert!(matches!(shape, InkShape::Fill { .. }));
            let bounds = path_of(shape).bounds();
            assert!((bounds.bottom() - base).abs() < 1e-3);
            let rise = base - bounds.top();
            assert!(rise >= height as f32 * 0.2 - 1e-3);
            assert!(rise <= height as f32 * 0.45 + 1e-3);
        }
    }

    // Tests spirals stay centered near their quadrant anchors
    // Verified by removing the quadrant anchor cycle
    #[test]
    fn test_spirals_cycle_through_quadrants() {
        let (width, height) = (400.0_f32, 400.0_f32);
        let mut rng = StdRng::seed_from_u64(8);
        let shapes = motif_shapes(MotifPack::Psychedelia, 400, 400, 0.0, &mut rng);
        let anchors = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

        for (shape, (ax, ay)) in shapes.iter().zip(anchors.iter().cycle()) {
            let points = path_of(shape).points();
            let start = points.first().expect("spiral has points");
            assert!((start.x / width - ax).abs() <= 0.1 + 1e-3);
            assert!((start.y / height - ay).abs() <= 0.1 + 1e-3);
            assert_eq!(points.len(), 201);
        }
    }

    // Tests the none pack and zero intensity leave the canvas untouched
    // Verified by drawing motifs at full opacity regardless of intensity
    #[test]
    fn test_draw_motifs_noop_cases() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut canvas = surface(50, 50).expect("surface allocates");
        canvas.fill(Color::WHITE);
        let before = canvas.clone();

        draw_motifs(&mut canvas, MotifPack::None, 1.0, &mut rng);
        assert_eq!(canvas.data(), before.data());

        draw_motifs(&mut canvas, MotifPack::Waves, 0.0, &mut rng);
        assert_eq!(canvas.data(), before.data());

        draw_motifs(&mut canvas, MotifPack::Flames, 1.0, &mut rng);
        assert_ne!(canvas.data(), before.data());
    }
}
