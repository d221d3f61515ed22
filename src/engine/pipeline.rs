use std::ops::RangeInclusive;

use image::RgbaImage;

use crate::engine::edges::{detect_edges, overlay_edges, EdgeThresholds};
use crate::engine::enhance;
use crate::engine::error::{EngineError, EngineResult};

pub const COLOR_FACTOR_RANGE: RangeInclusive<f32> = 0.0..=2.0;
pub const EDGE_STRENGTH_RANGE: RangeInclusive<f32> = 0.0..=10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustments {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub edge_strength: f32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            edge_strength: 0.0,
        }
    }
}

impl Adjustments {
    pub fn validate(&self) -> EngineResult<()> {
        if !self.brightness.is_finite() {
            return Err(EngineError::NonFiniteAdjustment("brightness"));
        }
        if !self.contrast.is_finite() {
            return Err(EngineError::NonFiniteAdjustment("contrast"));
        }
        if !self.saturation.is_finite() {
            return Err(EngineError::NonFiniteAdjustment("saturation"));
        }
        if !self.edge_strength.is_finite() {
            return Err(EngineError::NonFiniteAdjustment("edge_strength"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub edge_thresholds: EdgeThresholds,
    /// Edge strength is divided by this before blending.
    pub edge_weight_divisor: f32,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            edge_thresholds: EdgeThresholds::default(),
            edge_weight_divisor: 10.0,
        }
    }
}

/// Runs brightness, contrast, saturation and the edge overlay, in that order.
pub fn apply_adjustments(
    original: &RgbaImage,
    adjustments: Adjustments,
    settings: PipelineSettings,
) -> EngineResult<RgbaImage> {
    adjustments.validate()?;
    if original.width() == 0 || original.height() == 0 {
        return Err(EngineError::EmptyImage {
            width: original.width(),
            height: original.height(),
        });
    }

    let image = enhance::brightness(original, adjustments.brightness);
    let image = enhance::contrast(&image, adjustments.contrast);
    let image = enhance::saturation(&image, adjustments.saturation);

    if adjustments.edge_strength <= 0.0 {
        return Ok(image);
    }

    let edges = detect_edges(&image, settings.edge_thresholds);
    let weight = adjustments.edge_strength / settings.edge_weight_divisor;
    Ok(overlay_edges(&image, &edges, weight))
}
