use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("{primitive}() takes {expected} arguments, got {got}")]
    Arity {
        primitive: String,
        expected: &'static str,
        got: usize,
    },
    #[error("matrix() takes 6 arguments, got {0}")]
    Matrix(usize),
    #[error("invalid number {0:?} in transform")]
    Number(String),
}

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse svg xml: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("invalid transform on <{tag}>: {source}")]
    Transform {
        tag: String,
        #[source]
        source: TransformError,
    },
}

impl SvgError {
    /// True when only the circle being resolved is lost, not the document.
    pub fn skips_circle(&self) -> bool {
        matches!(self, SvgError::Transform{source: TransformError::Matrix(_), ..})
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SymbolicError {
    #[error("no value bound for symbol {0}")]
    Unbound(String),
    #[error("no branch of the piecewise expression applies")]
    NoBranch,
    #[error("cannot integrate: {0}")]
    Unsupported(String),
}
