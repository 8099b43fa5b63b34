use image::{DynamicImage, GenericImageView};

use super::error::PreviewError;

/// Largest width and height of a preview, in pixels.
pub const MAX_PREVIEW_SIDE: u32 = 100;

/// Grayscale ramp used for text rendering, darkest first.
const RAMP: &[u8] = b" .:-=+*#%@";

/// A decoded profile picture bounded to [`MAX_PREVIEW_SIDE`] on each axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    image: DynamicImage,
}

impl Thumbnail {
    /// Decodes image bytes and scales the result down to fit the preview
    /// bounds. Images already within bounds keep their size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PreviewError> {
        let image = image::load_from_memory(bytes).map_err(PreviewError::Decode)?;
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        let image = if width > MAX_PREVIEW_SIDE || height > MAX_PREVIEW_SIDE {
            image.thumbnail(MAX_PREVIEW_SIDE, MAX_PREVIEW_SIDE)
        } else {
            image
        };
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Renders the thumbnail as grayscale text fitted inside `cols` x `rows`
    /// cells, preserving aspect ratio.
    pub fn render_ascii(&self, cols: u32, rows: u32) -> Vec<String> {
        if cols == 0 || rows == 0 {
            return Vec::new();
        }
        let (cols, rows) = fit(self.width(), self.height(), cols, rows);
        let luma = self
            .image
            .resize_exact(cols, rows, image::imageops::FilterType::Triangle)
            .to_luma8();

        (0..luma.height())
            .map(|y| {
                (0..luma.width())
                    .map(|x| {
                        let level = luma.get_pixel(x, y)[0] as usize;
                        RAMP[level * (RAMP.len() - 1) / 255] as char
                    })
                    .collect()
            })
            .collect()
    }
}

/// Largest `(w, h)` within `max_w` x `max_h` with the aspect of `width` x `height`.
fn fit(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (max_w.max(1), max_h.max(1));
    }
    let scale = (max_w as f32 / width as f32).min(max_h as f32 / height as f32);
    let w = (width as f32 * scale).round().clamp(1.0, max_w as f32) as u32;
    let h = (height as f32 * scale).round().clamp(1.0, max_h as f32) as u32;
    (w, h)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;

    /// Encodes a solid white image of the given size in `format`.
    pub(crate) fn encoded_bytes(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([255, 255, 255, 255]),
        ));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    /// Encodes a solid white PNG of the given size.
    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        encoded_bytes(width, height, ImageFormat::Png)
    }

    #[test]
    fn small_image_keeps_its_size() {
        let thumb = Thumbnail::from_bytes(&png_bytes(40, 20)).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (40, 20));
    }

    #[test]
    fn wide_image_capped_by_width() {
        let thumb = Thumbnail::from_bytes(&png_bytes(400, 200)).unwrap();
        assert_eq!(thumb.width(), 100);
        assert_eq!(thumb.height(), 50);
    }

    #[test]
    fn tall_image_capped_by_height() {
        let thumb = Thumbnail::from_bytes(&png_bytes(150, 300)).unwrap();
        assert_eq!(thumb.height(), 100);
        assert_eq!(thumb.width(), 50);
    }

    #[test]
    fn common_formats_decode() {
        for format in [
            ImageFormat::Bmp,
            ImageFormat::Ico,
            ImageFormat::Tiff,
            ImageFormat::WebP,
        ] {
            let thumb = Thumbnail::from_bytes(&encoded_bytes(12, 8, format))
                .unwrap_or_else(|e| panic!("{format:?}: {e:?}"));
            assert_eq!((thumb.width(), thumb.height()), (12, 8), "{format:?}");
        }
    }

    #[test]
    fn large_bmp_is_capped() {
        let thumb = Thumbnail::from_bytes(&encoded_bytes(200, 100, ImageFormat::Bmp)).unwrap();
        assert_eq!((thumb.width(), thumb.height()), (100, 50));
    }

    #[test]
    fn corrupt_bytes_fail_to_decode() {
        let mut bytes = png_bytes(10, 10);
        bytes.truncate(20);
        let err = Thumbnail::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, PreviewError::Decode(_)));
        assert_eq!(err.to_string(), "Could not read the image file");
    }

    #[test]
    fn ascii_render_fits_cells() {
        let thumb = Thumbnail::from_bytes(&png_bytes(100, 50)).unwrap();
        let lines = thumb.render_ascii(20, 20);
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.chars().count() == 20));
        // Solid white lands at the bright end of the ramp.
        assert!(lines.iter().all(|l| l.chars().all(|c| c != ' ')));
    }

    #[test]
    fn ascii_render_zero_area_is_empty() {
        let thumb = Thumbnail::from_bytes(&png_bytes(4, 4)).unwrap();
        assert!(thumb.render_ascii(0, 5).is_empty());
    }

    #[test]
    fn fit_preserves_aspect() {
        assert_eq!(fit(100, 50, 20, 20), (20, 10));
        assert_eq!(fit(50, 100, 20, 20), (10, 20));
        assert_eq!(fit(0, 10, 4, 3), (4, 3));
    }
}
