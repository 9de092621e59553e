use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate node name: {0}")]
    DuplicateNode(String),

    #[error("edge endpoint is not a declared node: {0}")]
    UnknownNode(String),
}
