use std::path::PathBuf;

use crate::engine::{Adjustments, ImageStatistics};

/// Display-only multiplier on top of the aspect-fit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    factor: f32,
    step: f32,
}

impl Zoom {
    pub fn new(step: f32) -> Self {
        Self { factor: 1.0, step }
    }

    pub fn factor(self) -> f32 {
        self.factor
    }

    pub fn zoom_in(&mut self) {
        self.factor *= self.step;
    }

    pub fn zoom_out(&mut self) {
        self.factor /= self.step;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Info(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub adjustments: Adjustments,
    pub zoom: Zoom,
    pub statistics: Option<ImageStatistics>,
    pub source_path: Option<PathBuf>,
    /// Bumped every time the current image is replaced.
    pub image_revision: u64,
    pub status: Status,
}

impl AppState {
    pub fn new(zoom_step: f32) -> Self {
        Self {
            adjustments: Adjustments::default(),
            zoom: Zoom::new(zoom_step),
            statistics: None,
            source_path: None,
            image_revision: 0,
            status: Status::Idle,
        }
    }
}
