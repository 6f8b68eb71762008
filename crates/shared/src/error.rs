use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{kind} id must not be empty")]
    EmptyId { kind: &'static str },
}
