//! Audio hand-off layer
//!
//! The playlist never decodes or streams audio. Playing the current song
//! forwards its [`AudioHandle`](crate::model::AudioHandle) to an
//! [`AudioRenderer`] supplied by the host.

mod log_renderer;
mod traits;

pub use log_renderer::LogRenderer;
pub use traits::AudioRenderer;
