// src/error.rs

//! Error types for the cookbook catalog
//!
//! A single error enum covers the whole library. Variants fall into four
//! kinds (see [`ErrorKind`]): validation failures at registration time,
//! lookup failures when a queried name is missing or of the wrong kind,
//! resolution failures when a recipe tree cannot be expanded, and storage
//! failures from the file and database layers.

use thiserror::Error;

/// Errors produced by catalog operations
#[derive(Error, Debug)]
pub enum Error {
    /// Entry shape is malformed (empty name, negative quantity, ...)
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// An entry with this name already exists as an ingredient or recipe
    #[error("An entry named '{0}' already exists")]
    DuplicateName(String),

    /// A recipe lists the same required item more than once
    #[error("Recipe '{recipe}' lists required item '{item}' more than once")]
    DuplicateRequiredItem { recipe: String, item: String },

    /// The queried name is not in the catalog
    #[error("'{0}' not found")]
    NotFound(String),

    /// The queried name is an ingredient where a recipe was expected
    #[error("'{0}' is an ingredient, not a recipe")]
    NotARecipe(String),

    /// A recipe tree references a name that is neither ingredient nor recipe
    #[error("Recipe '{recipe}' requires unknown item '{item}'")]
    UnresolvableReference { recipe: String, item: String },

    /// A recipe requires itself, directly or transitively
    #[error("Cyclic reference detected: {}", .0.join(" -> "))]
    CyclicReference(Vec<String>),

    /// Cookbook file or config could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
}

/// Broad classification of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected at registration or input parsing
    Validation,
    /// Queried name missing or of the wrong kind
    Lookup,
    /// Recipe tree could not be expanded
    Resolution,
    /// File system or database failure
    Storage,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidEntry(_)
            | Error::DuplicateName(_)
            | Error::DuplicateRequiredItem { .. }
            | Error::ParseError(_) => ErrorKind::Validation,
            Error::NotFound(_) | Error::NotARecipe(_) => ErrorKind::Lookup,
            Error::UnresolvableReference { .. } | Error::CyclicReference(_) => {
                ErrorKind::Resolution
            }
            Error::IoError(_) | Error::DatabaseError(_) => ErrorKind::Storage,
        }
    }
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;
