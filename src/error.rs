use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("expected direction set is empty")]
    EmptyDirectionSet,

    #[error("direction component out of range in ({0}, {1}), must be -1, 0 or 1")]
    InvalidDirectionComponent(i32, i32),

    #[error("movement threshold must be positive, got {0}")]
    InvalidThreshold(i32),
}
