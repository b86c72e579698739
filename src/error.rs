use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("config must be a JSON object")]
    NotAnObject,

    #[error("field `{field}` must be {expected}")]
    WrongType { field: &'static str, expected: &'static str },

    #[error("unknown variant `{0}` (expected `compact` or `sparse`)")]
    UnknownVariant(String),

    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum WorkloadError {
    #[error("line {line}: unknown operation `{op}`")]
    UnknownOp { line: usize, op: String },

    #[error("line {line}: `{op}` takes {expected} argument(s), got {got}")]
    Arity { line: usize, op: String, expected: usize, got: usize },

    #[error("line {line}: `{arg}` is not a valid element")]
    BadElement { line: usize, arg: String },
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Workload(#[from] WorkloadError),

    #[error("index {index} is outside the compact universe of {capacity}")]
    OutOfRange { index: usize, capacity: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
