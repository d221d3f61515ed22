use image::{GrayImage, Luma, Rgba, RgbaImage};

/// ITU-R 601 luma in 16.16 fixed point, rounded.
pub fn luma(pixel: &Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    let weighted = u32::from(r) * 19_595 + u32::from(g) * 38_470 + u32::from(b) * 7_471;
    ((weighted + 0x8000) >> 16) as u8
}

pub fn to_grayscale(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(image.get_pixel(x, y))])
    })
}

/// Scales every color channel by `factor`, blending against black.
pub fn brightness(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_color_channels(image, |_, value| blend_channel(0.0, value, factor))
}

/// Stretches every color channel away from the image's mean luma.
pub fn contrast(image: &RgbaImage, factor: f32) -> RgbaImage {
    let mean = f32::from(mean_luma(image));
    map_color_channels(image, |_, value| blend_channel(mean, value, factor))
}

/// Moves every pixel away from its own gray value.
pub fn saturation(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_color_channels(image, |pixel, value| {
        blend_channel(f32::from(luma(pixel)), value, factor)
    })
}

fn mean_luma(image: &RgbaImage) -> u8 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0;
    }
    let total: u64 = image.pixels().map(|pixel| u64::from(luma(pixel))).sum();
    ((total as f64 / count as f64) + 0.5) as u8
}

/// Clamps, then truncates toward zero.
fn blend_channel(degenerate: f32, value: u8, factor: f32) -> u8 {
    (degenerate + factor * (f32::from(value) - degenerate)).clamp(0.0, 255.0) as u8
}

fn map_color_channels<F>(image: &RgbaImage, channel: F) -> RgbaImage
where
    F: Fn(&Rgba<u8>, u8) -> u8,
{
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let source = *pixel;
        for index in 0..3 {
            pixel[index] = channel(&source, source[index]);
        }
    }
    out
}
