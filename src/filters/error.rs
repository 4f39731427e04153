/// Raised while loading a filter document, never during search: every clause
/// is fully validated and normalized before the first seed is evaluated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("{path}: unknown clause type {kind:?}")]
    UnknownType { path: String, kind: String },

    #[error("{path}: unknown {domain} value {value:?}")]
    UnknownValue { path: String, domain: &'static str, value: String },

    #[error("{path}: ante {ante} is out of range 1..=8")]
    AnteOutOfRange { path: String, ante: i64 },

    #[error("{path}: score is only meaningful on a `should` clause")]
    ScoreOnNonShould { path: String },

    #[error("{path}: clause has no values after expansion")]
    EmptyValues { path: String },

    #[error("{path}: min must be at least 1, got {min}")]
    NegativeMin { path: String, min: i64 },

    #[error("{path}: {kind} clause has no nested clauses")]
    EmptyCompound { path: String, kind: String },

    #[error("{path}: {message}")]
    Malformed { path: String, message: String },
}
