use thiserror::Error;

/// Why a formula string could not be turned into atom counts.
///
/// Positions are character offsets into the formula body (the part before
/// any `^` charge suffix).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    #[error("formula is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("closing parenthesis at position {pos} has no matching '('")]
    UnmatchedClose { pos: usize },

    #[error("{open} parenthesis group(s) left open")]
    UnclosedGroup { open: usize },

    #[error("empty parenthesis group at position {pos}")]
    EmptyGroup { pos: usize },

    #[error("number at position {pos} does not follow an element or group")]
    DanglingNumber { pos: usize },

    #[error("zero count at position {pos}")]
    ZeroCount { pos: usize },

    #[error("malformed charge suffix '{suffix}'")]
    BadCharge { suffix: String },

    #[error("atom count overflow")]
    Overflow,
}

/// Failures of the profile persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser storage is not available")]
    Unavailable,

    #[error("storage access failed: {0}")]
    Access(String),

    #[error("failed to serialize profiles: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("display name must not be blank")]
    BlankName,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures at the handwriting grading boundary.
#[derive(Debug, Error)]
pub enum GradingError {
    #[error("invalid grading request: {0}")]
    InvalidRequest(&'static str),

    #[error("grading request failed: {0}")]
    Transport(String),

    #[error("grading service answered with HTTP {status}")]
    Status { status: u16 },

    #[error("could not decode grading response: {0}")]
    Decode(String),

    #[error("grading failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        last: Box<GradingError>,
    },
}

impl From<gloo_net::Error> for GradingError {
    fn from(e: gloo_net::Error) -> Self {
        GradingError::Transport(e.to_string())
    }
}
