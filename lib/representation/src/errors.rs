use thiserror::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepresentationError {
    #[error("Expression term `{0}` has no RDF term counterpart")]
    NotAnRdfTerm(String),
}
