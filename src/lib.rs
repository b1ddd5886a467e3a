pub mod history;
pub mod logging;
pub mod model;
pub mod render;
pub mod save;
pub mod settings;
pub mod surface;
pub mod tracker;

pub use history::StrokeHistory;
pub use model::{Color, Stroke, StrokeStyle};
pub use render::RasterSurface;
pub use surface::AnnotationSurface;
pub use tracker::StrokeTracker;
