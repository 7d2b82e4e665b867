//! Ra'yee backend: describes an uploaded image with a vision-language model
//! and speaks the description back in Amharic.

pub mod config_manager;
pub mod error;
pub mod handlers;
pub mod image;
pub mod routes;
pub mod state;
pub mod translate;
pub mod tts;
pub mod utils;
pub mod vision;

pub use config_manager::Config;
pub use error::AppError;
pub use state::AppState;
