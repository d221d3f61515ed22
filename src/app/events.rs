use std::path::PathBuf;

use crate::engine::Adjustments;

#[derive(Debug, Clone)]
pub enum AppEvent {
    LoadImage(PathBuf),
    SetAdjustments(Adjustments),
    ZoomIn,
    ZoomOut,
    SaveImage(PathBuf),
}
