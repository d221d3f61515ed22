use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use crate::engine::error::{EngineError, EngineResult};

pub const OPEN_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
pub const DEFAULT_SAVE_EXTENSION: &str = "png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Other,
}

pub fn detect_image_kind(path: &Path) -> ImageKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ImageKind::Other;
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => ImageKind::Png,
        "jpg" | "jpeg" => ImageKind::Jpeg,
        _ => ImageKind::Other,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub pixels: RgbaImage,
    /// Whether the file carried an alpha channel before widening to RGBA.
    pub has_alpha: bool,
}

pub fn decode_image(path: &Path) -> EngineResult<DecodedImage> {
    if path.as_os_str().is_empty() {
        return Err(EngineError::EmptyPath);
    }

    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(DecodedImage {
        has_alpha: image.color().has_alpha(),
        pixels: image.to_rgba8(),
    })
}

/// Appends the default extension when the chosen path has none.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    path.with_extension(DEFAULT_SAVE_EXTENSION)
}

pub fn save_format(path: &Path) -> EngineResult<ImageFormat> {
    match detect_image_kind(path) {
        ImageKind::Png => Ok(ImageFormat::Png),
        ImageKind::Jpeg => Ok(ImageFormat::Jpeg),
        ImageKind::Other => ImageFormat::from_path(path)
            .map_err(|_| EngineError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Saves as RGBA only when `keep_alpha` is set and the format can store it.
pub fn encode_image(image: &RgbaImage, keep_alpha: bool, path: &Path) -> EngineResult<()> {
    let format = save_format(path)?;
    let image = DynamicImage::ImageRgba8(image.clone());
    let image = if keep_alpha && format != ImageFormat::Jpeg {
        image
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
    };
    image.save_with_format(path, format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, ImageBuffer, Rgb, Rgba};
    use tempfile::TempDir;

    #[test]
    fn detect_image_kind_handles_supported_formats() {
        assert_eq!(detect_image_kind(Path::new("a.png")), ImageKind::Png);
        assert_eq!(detect_image_kind(Path::new("a.PNG")), ImageKind::Png);
        assert_eq!(detect_image_kind(Path::new("a.jpg")), ImageKind::Jpeg);
        assert_eq!(detect_image_kind(Path::new("a.jpeg")), ImageKind::Jpeg);
        assert_eq!(detect_image_kind(Path::new("a.bmp")), ImageKind::Other);
        assert_eq!(detect_image_kind(Path::new("noext")), ImageKind::Other);
    }

    #[test]
    fn default_extension_only_added_when_missing() {
        assert_eq!(
            with_default_extension(Path::new("out/picture")),
            PathBuf::from("out/picture.png")
        );
        assert_eq!(
            with_default_extension(Path::new("out/picture.jpg")),
            PathBuf::from("out/picture.jpg")
        );
    }

    #[test]
    fn save_format_rejects_unknown_extensions() {
        assert!(matches!(
            save_format(Path::new("a.notanimage")),
            Err(EngineError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn decode_image_reads_jpeg_as_rgba() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("sample.jpg");
        let img = ImageBuffer::from_fn(80, 45, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        img.save(&path).expect("jpeg should be saved");

        let decoded = decode_image(&path).expect("jpeg should decode");
        assert_eq!(decoded.pixels.dimensions(), (80, 45));
        assert_eq!(decoded.pixels.get_pixel(0, 0)[3], 255);
        assert!(!decoded.has_alpha);
    }

    #[test]
    fn decode_image_reports_missing_and_garbage_files() {
        let dir = TempDir::new().expect("tempdir should be created");
        assert!(matches!(
            decode_image(&dir.path().join("missing.png")),
            Err(EngineError::Io(_))
        ));

        let garbage = dir.path().join("garbage.png");
        std::fs::write(&garbage, b"definitely not a png").expect("file should be written");
        assert!(decode_image(&garbage).is_err());

        assert!(matches!(
            decode_image(Path::new("")),
            Err(EngineError::EmptyPath)
        ));
    }

    #[test]
    fn png_roundtrip_is_lossless() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("roundtrip.png");
        let image = RgbaImage::from_fn(9, 5, |x, y| Rgba([x as u8 * 20, y as u8 * 40, 3, 128]));

        encode_image(&image, true, &path).expect("png should encode");
        let reloaded = decode_image(&path).expect("png should decode");
        assert!(reloaded.has_alpha);
        assert_eq!(reloaded.pixels, image);
    }

    #[test]
    fn png_without_alpha_is_written_as_rgb() {
        let dir = TempDir::new().expect("tempdir should be created");
        let source = dir.path().join("rgb.png");
        ImageBuffer::from_fn(6, 4, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 7]))
            .save(&source)
            .expect("png should be saved");

        let decoded = decode_image(&source).expect("png should decode");
        assert!(!decoded.has_alpha);

        let target = dir.path().join("copy.png");
        encode_image(&decoded.pixels, decoded.has_alpha, &target).expect("png should encode");
        let written = image::open(&target).expect("png should reopen");
        assert_eq!(written.color(), ColorType::Rgb8);
        assert_eq!(written.to_rgba8(), decoded.pixels);
    }

    #[test]
    fn jpeg_save_drops_alpha() {
        let dir = TempDir::new().expect("tempdir should be created");
        let path = dir.path().join("alpha.jpg");
        let image = RgbaImage::from_pixel(8, 8, Rgba([200, 10, 10, 40]));

        encode_image(&image, true, &path).expect("jpeg should encode");
        let reloaded = decode_image(&path).expect("jpeg should decode");
        assert!(!reloaded.has_alpha);
        assert_eq!(reloaded.pixels.dimensions(), (8, 8));
        assert_eq!(reloaded.pixels.get_pixel(4, 4)[3], 255);
    }
}
