//! Error types for the Larder system.
//!
//! Uses `thiserror` for ergonomic error definition. Every variant except the
//! I/O and internal ones describes invalid user input; the dispatch boundary
//! renders them as messages and none are fatal to the session.

use chrono::NaiveDate;
use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Larder operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an empty input error for the named input.
    #[must_use]
    pub fn empty_input(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyInput(what.into()))
    }

    /// Creates a missing grocery error.
    #[must_use]
    pub fn no_such_grocery(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoSuchGrocery(name.into()))
    }

    /// Creates a duplicate grocery error.
    #[must_use]
    pub fn duplicate_grocery(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateGrocery(name.into()))
    }

    /// Creates a missing parameter error for a command and its marker.
    #[must_use]
    pub fn missing_parameter(command: impl Into<String>, marker: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingParameter {
            command: command.into(),
            marker: marker.into(),
        })
    }

    /// Creates an incomplete parameter error for a marker.
    #[must_use]
    pub fn incomplete_parameter(marker: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncompleteParameter(marker.into()))
    }

    /// Creates a past expiration date error.
    #[must_use]
    pub fn past_expiration(date: NaiveDate) -> Self {
        Self::new(ErrorKind::PastExpiration(date))
    }

    /// Creates a same location error.
    #[must_use]
    pub fn same_location(grocery: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(ErrorKind::SameLocation {
            grocery: grocery.into(),
            location: location.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required input string was empty.
    #[error("{0} cannot be empty")]
    EmptyInput(String),

    /// No grocery with the given name exists.
    #[error("no such grocery ({0})")]
    NoSuchGrocery(String),

    /// A grocery with the given name already exists.
    #[error("grocery ({0}) is already being tracked")]
    DuplicateGrocery(String),

    /// The command's delimiter marker was absent from the input.
    #[error("wrong format for {command}: expected GROCERY {marker}VALUE")]
    MissingParameter {
        /// The command verb being parsed.
        command: String,
        /// The delimiter marker the command expects.
        marker: String,
    },

    /// The value after the delimiter marker was empty.
    #[error("the parameter after {0} is missing")]
    IncompleteParameter(String),

    /// Amount or threshold was not a valid whole number.
    #[error("amount must be a whole number greater than 0")]
    InvalidAmount,

    /// Cost was not a valid non-negative number.
    #[error("cost must be a number of at least 0")]
    InvalidCost,

    /// Expiration date did not match the expected format.
    #[error("expiration date must be written as YYYY-MM-DD")]
    DateFormat,

    /// Expiration date lies strictly before today.
    #[error("expiration date {0} has already passed")]
    PastExpiration(NaiveDate),

    /// Attempted to use a grocery that is out of stock.
    #[error("cannot use a grocery that is out of stock")]
    CannotUse,

    /// The grocery is already stored in the given location.
    #[error("{grocery} is already stored in {location}")]
    SameLocation {
        /// The grocery being moved.
        grocery: String,
        /// The location it already occupies.
        location: String,
    },

    /// Rating was outside the accepted range.
    #[error("rating must be between 1 and 5")]
    InvalidRating,

    /// Calories were not a valid non-negative number.
    #[error("calories must be a number of at least 0")]
    InvalidCalories,

    /// A prompted numeric field was not a positive number.
    #[error("{0} must be a positive number")]
    InvalidNumber(String),

    /// The verb was not recognized in the active mode.
    #[error("invalid command, type 'help' to see what you can do")]
    InvalidCommand,

    /// An I/O operation failed.
    #[error("io error: {0}")]
    Io(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
