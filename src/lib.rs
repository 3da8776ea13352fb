#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod drawable;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use drawable::{Drawable, Sticker, Stroke};
pub use error::{SketchError, SketchResult};
pub use history::History;
pub use input::{InputController, InputEvent, InputHandler, InputState};
pub use preview::ToolPreview;
pub use renderer::Renderer;
pub use state::SketchState;
pub use surface::Surface;
pub use tools::Tool;
