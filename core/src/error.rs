use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    /// No sensor reported a reading in this cycle.
    NoData,
    /// A phrase override document could not be used.
    InvalidPhrases(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoData => f.write_str("no sensor reported any reading"),
            EngineError::InvalidPhrases(reason) => write!(f, "invalid phrase pools: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::InvalidPhrases(err.to_string())
    }
}
