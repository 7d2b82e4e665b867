pub mod main;
pub mod system;
pub mod translator;
pub mod tts;
pub mod tts_preprocessor;
pub mod utils;
pub mod vision;

pub use main::Config;
pub use system::SystemConfig;
pub use translator::TranslatorConfig;
pub use tts::TTSConfig;
pub use tts_preprocessor::TTSPreprocessorConfig;
pub use vision::VisionConfig;
