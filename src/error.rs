use core::fmt;

/// Rejected tuning. Raised only while building an engine, never mid-run.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonFinite { field: &'static str },
    NonPositive { field: &'static str, value: f64 },
    FlapNotUpward { value: f32 },
    ActorOutOfBounds,
    GapTooLarge { gap: f32, min_segment: f32, playfield: f32 },
    ActorTallerThanGap { actor: f32, gap: f32 },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "{field} must be a finite number"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero (got {value})")
            }
            Self::FlapNotUpward { value } => {
                write!(f, "flap_impulse must be negative (upward), got {value}")
            }
            Self::ActorOutOfBounds => write!(f, "actor does not fit inside the playfield"),
            Self::GapTooLarge {
                gap,
                min_segment,
                playfield,
            } => write!(
                f,
                "gap {gap} plus two {min_segment} segments exceeds playfield height {playfield}"
            ),
            Self::ActorTallerThanGap { actor, gap } => {
                write!(f, "actor height {actor} cannot pass through gap {gap}")
            }
            Self::Parse(msg) => write!(f, "invalid config file: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
