use image::{GrayImage, RgbaImage};
use imageproc::edges::canny;

use crate::engine::enhance::to_grayscale;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeThresholds {
    pub low: f32,
    pub high: f32,
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self {
            low: 100.0,
            high: 200.0,
        }
    }
}

/// Canny edge mask of the image's luma.
///
/// `imageproc` smooths with a Gaussian (sigma 1.4) before taking Sobel
/// gradients and measures strength as the L2 norm. Steps that an unblurred
/// L1 Canny would pass at the same thresholds can fall below `high` here.
pub fn detect_edges(image: &RgbaImage, thresholds: EdgeThresholds) -> GrayImage {
    canny(&to_grayscale(image), thresholds.low, thresholds.high)
}

/// Adds `weight * edge` to every color channel, saturating at 255.
pub fn overlay_edges(image: &RgbaImage, edges: &GrayImage, weight: f32) -> RgbaImage {
    let mut out = image.clone();
    for (pixel, edge) in out.pixels_mut().zip(edges.pixels()) {
        let lift = weight * f32::from(edge[0]);
        for index in 0..3 {
            pixel[index] = (f32::from(pixel[index]) + lift).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
