use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbaImage;

use crate::engine::codec::{decode_image, encode_image, with_default_extension};
use crate::engine::{apply_adjustments, Adjustments, EngineError, EngineResult, PipelineSettings};

#[derive(Debug, Clone)]
struct LoadedImage {
    original: RgbaImage,
    current: RgbaImage,
    has_alpha: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    loaded: Option<LoadedImage>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn original(&self) -> Option<&RgbaImage> {
        self.loaded.as_ref().map(|loaded| &loaded.original)
    }

    pub fn current(&self) -> Option<&RgbaImage> {
        self.loaded.as_ref().map(|loaded| &loaded.current)
    }

    /// Replaces the held image. On failure the previous image stays loaded.
    pub fn load(&mut self, path: &Path) -> EngineResult<()> {
        let decoded = decode_image(path)?;
        log::info!(
            "loaded {:?} ({}x{}, alpha: {})",
            path,
            decoded.pixels.width(),
            decoded.pixels.height(),
            decoded.has_alpha
        );

        self.loaded = Some(LoadedImage {
            current: decoded.pixels.clone(),
            original: decoded.pixels,
            has_alpha: decoded.has_alpha,
        });
        Ok(())
    }

    /// Rebuilds the current image from the original. On failure the previous
    /// current image is kept.
    pub fn recompute(
        &mut self,
        adjustments: Adjustments,
        settings: PipelineSettings,
    ) -> EngineResult<&RgbaImage> {
        let loaded = self.loaded.as_mut().ok_or(EngineError::NoImageLoaded)?;

        let started = Instant::now();
        let current = apply_adjustments(&loaded.original, adjustments, settings)?;
        log::debug!(
            "pipeline {:?} finished in {}ms",
            adjustments,
            started.elapsed().as_millis()
        );

        loaded.current = current;
        Ok(&loaded.current)
    }

    /// Writes the current image and returns the path actually written. Alpha
    /// is only written back when the loaded file had it.
    pub fn save(&self, path: &Path) -> EngineResult<PathBuf> {
        let loaded = self.loaded.as_ref().ok_or(EngineError::NoImageLoaded)?;
        let target = with_default_extension(path);
        encode_image(&loaded.current, loaded.has_alpha, &target)?;
        log::info!("saved current image to {:?}", target);
        Ok(target)
    }
}
