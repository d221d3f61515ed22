pub mod codec;
pub mod edges;
pub mod enhance;
pub mod error;
pub mod pipeline;
pub mod stats;

pub use error::{EngineError, EngineResult};
pub use pipeline::{apply_adjustments, Adjustments, PipelineSettings};
pub use stats::ImageStatistics;
