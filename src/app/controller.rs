use std::path::Path;

use image::RgbaImage;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Status};
use crate::engine::{Adjustments, EngineResult, ImageStatistics};
use crate::infra::config::AppConfig;
use crate::store::ImageStore;

pub struct ApplicationController {
    config: AppConfig,
    state: AppState,
    store: ImageStore,
}

impl ApplicationController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config.zoom_step),
            config,
            store: ImageStore::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_image(&self) -> Option<&RgbaImage> {
        self.store.current()
    }

    pub fn has_image(&self) -> bool {
        self.store.is_loaded()
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        let result = match event {
            AppEvent::LoadImage(path) => self.load_image(&path),
            AppEvent::SetAdjustments(adjustments) => self.set_adjustments(adjustments),
            AppEvent::ZoomIn => {
                self.state.zoom.zoom_in();
                Ok(())
            }
            AppEvent::ZoomOut => {
                self.state.zoom.zoom_out();
                Ok(())
            }
            AppEvent::SaveImage(path) => self.save_image(&path),
        };

        if let Err(error) = result {
            log::error!("{error}");
            self.state.status = Status::Error(error.to_string());
        }
    }

    fn load_image(&mut self, path: &Path) -> EngineResult<()> {
        self.store.load(path)?;
        self.state.statistics = self.store.original().map(ImageStatistics::compute);
        self.state.source_path = Some(path.to_path_buf());
        self.state.status = Status::Info(format!("opened {}", path.display()));
        self.state.image_revision += 1;
        self.refresh_current()
    }

    fn set_adjustments(&mut self, adjustments: Adjustments) -> EngineResult<()> {
        adjustments.validate()?;
        self.state.adjustments = adjustments;
        if !self.store.is_loaded() {
            return Ok(());
        }
        self.refresh_current()
    }

    fn refresh_current(&mut self) -> EngineResult<()> {
        self.store
            .recompute(self.state.adjustments, self.config.pipeline)?;
        self.state.image_revision += 1;
        Ok(())
    }

    fn save_image(&mut self, path: &Path) -> EngineResult<()> {
        if !self.store.is_loaded() {
            log::debug!("save requested with no image loaded");
            return Ok(());
        }
        let written = self.store.save(path)?;
        self.state.status = Status::Info(format!("saved {}", written.display()));
        Ok(())
    }
}
