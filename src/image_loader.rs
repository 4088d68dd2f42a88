use crate::config::PLACEHOLDER_SVG;
use crate::error::Result;
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decoded RGBA8 pixels, ready to hand to the UI thread.
pub struct LoadedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes an image file on the calling thread.
/// UIスレッドをブロックしないよう、rayonのワーカーから呼ぶこと。
pub fn load_image_blocking(path: &Path) -> Result<LoadedImage> {
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();
    let (width, height) = image.dimensions();

    Ok(LoadedImage {
        data: image.into_raw(),
        width,
        height,
    })
}

pub fn create_slint_image(image: LoadedImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&image.data, image.width, image.height);
    Image::from_rgba8(buffer)
}

/// The "image unavailable" placeholder used for broken images.
pub fn placeholder_image() -> Image {
    Image::load_from_svg_data(PLACEHOLDER_SVG.as_bytes()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn decodes_png_to_rgba() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("pixel.png");
        image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]))
            .save(&path)
            .expect("failed to write png");

        let loaded = load_image_blocking(&path).expect("decode failed");
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(loaded.data.len(), 3 * 2 * 4);
        assert_eq!(&loaded.data[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not an image").expect("failed to write file");
        assert!(load_image_blocking(&path).is_err());
        assert!(load_image_blocking(&dir.path().join("missing.jpg")).is_err());
    }
}
