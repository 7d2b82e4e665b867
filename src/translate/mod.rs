pub mod interface;
pub mod client;

pub use interface::{TranslateError, TranslateInterface};
pub use client::HttpTranslator;
