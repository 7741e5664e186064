//! Configuration module for pugg.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{GeneralSettings, Settings, StudySettings, YoutubeSettings};
