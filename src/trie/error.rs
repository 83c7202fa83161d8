//! Error type reported by fallible trie mutation.

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

// =#========================================================================#=
// INSERT ERROR
// =#========================================================================#=
/// Error returned when [insert](crate::PrefixTree::insert) cannot allocate
/// storage for a new edge or chain node.
///
/// Allocation failure is the only failure mode of the trie. A failed insert
/// rolls back any partial mutation before returning, so the tree is left
/// exactly in its pre-call state and all invariants keep holding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertError {
    /// Underlying reservation failure; absent only for injected test failures
    source: Option<TryReserveError>,
}

impl InsertError {
    /// Creates an error from a failed vector reservation.
    pub(crate) fn reservation_failed(source: TryReserveError) -> Self {
        InsertError {
            source: Some(source),
        }
    }

    /// Creates a forced failure for allocation-injection tests.
    #[cfg(test)]
    pub(crate) fn injected() -> Self {
        InsertError { source: None }
    }
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to allocate storage while growing the trie")
    }
}

impl Error for InsertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn Error + 'static))
    }
}

impl From<TryReserveError> for InsertError {
    fn from(source: TryReserveError) -> Self {
        InsertError::reservation_failed(source)
    }
}
