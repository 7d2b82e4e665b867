pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{AudioFormat, AudioOutput, TTSInterface, TtsError};
pub use client::GoogleTTSClient;
pub use factory::TTSFactory;
