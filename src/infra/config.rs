use crate::engine::PipelineSettings;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub zoom_step: f32,
    pub pipeline: PipelineSettings,
    pub default_save_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Image Manipulator".to_string(),
            window_size: [1200.0, 800.0],
            zoom_step: 1.2,
            pipeline: PipelineSettings::default(),
            default_save_name: "untitled.png".to_string(),
        }
    }
}
