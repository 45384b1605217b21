//! Core module - Application infrastructure around the rules engine
//!
//! - [`error`] - `CoreError` and the `CoreResult` alias
//! - [`settings_persistence`] - [`EngineSettings`] and its JSON file

pub mod error;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use settings_persistence::{
    load_settings, save_settings, settings_path, try_load_settings, EngineSettings,
};
