use thiserror::Error;

/// Errors raised at the boundaries of the synastry engine.
///
/// The analysis itself never fails; these cover chart validation, settings
/// loading and the background runner.
#[derive(Error, Debug)]
pub enum SynastryError {
    #[error("Invalid chart {chart}: {reason}")]
    InvalidChart { chart: u8, reason: String },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Background analysis failed: {0}")]
    TaskFailed(String),
}
