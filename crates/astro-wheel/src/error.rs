use thiserror::Error;

/// Errors raised while validating the wheel configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(String),
    #[error("Unknown aspect in config: {0}")]
    UnknownAspect(String),
    #[error("Unknown body in config: {0}")]
    UnknownBody(String),
    #[error("Invalid color for {key}: {value} (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor { key: String, value: String },
    #[error("Invalid fraction for {key}: {value} (must lie strictly between 0 and 1)")]
    InvalidFraction { key: String, value: f64 },
    #[error("Invalid separation for {key}: {value} (must be at least 0 and below 180)")]
    InvalidSeparation { key: String, value: f64 },
    #[error("Invalid orb for {aspect}: {value}")]
    InvalidOrb { aspect: String, value: f64 },
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: f64 },
}

/// Chart angle that must be supplied with every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleName {
    Ascendant,
    Midheaven,
}

impl std::fmt::Display for AngleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AngleName::Ascendant => f.write_str("ascendant"),
            AngleName::Midheaven => f.write_str("midheaven"),
        }
    }
}

/// Terminal error for a render. Nothing is emitted when one is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Expected exactly 12 house cusps, found {found}")]
    InvalidCuspCount { found: usize },
    #[error("Missing required angle: {0}")]
    MissingAngle(AngleName),
    #[error("Non-finite value for {field}: {value}")]
    NonFiniteValue { field: String, value: f64 },
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("A {0} wheel needs a second chart")]
    MissingSecondChart(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type ChartResult<T> = Result<T, ChartError>;
