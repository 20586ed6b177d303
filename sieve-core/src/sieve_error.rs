// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types carried through sieve stages.
//!
//! [`SieveError`] is the payload of a [`StreamItem::Error`](crate::StreamItem::Error).
//! It describes a failure that happened upstream of a stage and is propagated
//! downstream like any other item. Misuse of a stage itself (closing a flow twice,
//! a panicking operator) is not an error value: it is a bug and aborts the
//! process.
//!
//! # Examples
//!
//! ```
//! use sieve_core::{SieveError, Result};
//!
//! fn parse_reading() -> Result<u32> {
//!     Err(SieveError::stream_error("sensor offline"))
//! }
//!
//! assert!(parse_reading().is_err());
//! ```

/// Root error type for items flowing through a stage.
#[derive(Debug, thiserror::Error)]
pub enum SieveError {
    /// A producer or an upstream stage reported a failure.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided producers and callbacks.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Several errors collected into one item.
    #[error("Multiple errors occurred: {count} errors")]
    MultipleErrors {
        /// Number of errors that occurred
        count: usize,
        /// The individual errors
        errors: Vec<SieveError>,
    },
}

impl SieveError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Aggregate multiple user errors into a `MultipleErrors` variant
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_core::SieveError;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("bad reading: {0}")]
    /// struct BadReading(u32);
    ///
    /// let result = SieveError::from_user_errors(vec![BadReading(1), BadReading(2)]);
    /// assert!(matches!(result, SieveError::MultipleErrors { count: 2, .. }));
    /// ```
    pub fn from_user_errors<E>(errors: Vec<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let count = errors.len();
        let errors = errors
            .into_iter()
            .map(|e| Self::UserError(Box::new(e)))
            .collect();

        Self::MultipleErrors { count, errors }
    }
}

/// Specialized Result type for sieve operations
pub type Result<T> = std::result::Result<T, SieveError>;

/// Conversion of any standard error into a [`SieveError`].
pub trait IntoSieveError {
    /// Convert this error into a `SieveError` with additional context
    fn into_sieve_error(self, context: &str) -> SieveError;

    /// Convert this error into a `SieveError` without additional context
    fn into_sieve(self) -> SieveError
    where
        Self: Sized,
    {
        self.into_sieve_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoSieveError for E {
    fn into_sieve_error(self, context: &str) -> SieveError {
        if context.is_empty() {
            SieveError::user_error(self)
        } else {
            SieveError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(SieveError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(SieveError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<SieveError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            SieveError::UserError(inner) => SieveError::StreamProcessingError {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}

impl Clone for SieveError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // Boxed user errors cannot be cloned; keep their message.
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::MultipleErrors { count, errors } => Self::MultipleErrors {
                count: *count,
                errors: errors.clone(),
            },
        }
    }
}
