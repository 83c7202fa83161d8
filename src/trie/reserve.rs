//! Fallible growth seam for the trie's backing vectors.
//!
//! All vector growth performed on the mutation path funnels through
//! [reserve_one], so allocation failure surfaces as an
//! [InsertError](crate::InsertError) instead of aborting the process.
//! Under `cfg(test)` the seam additionally consults a thread-local
//! failpoint, letting tests force the n-th reservation of a call to fail
//! and exercise the rollback paths without a failing allocator.

use crate::trie::error::InsertError;

#[cfg(test)]
use std::cell::Cell;

#[cfg(test)]
thread_local! {
    /// Number of successful reservations remaining before a forced failure;
    /// `None` disables injection.
    static FAIL_BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Ensures `vec` has room for one more element, reporting failure instead
/// of aborting.
pub(crate) fn reserve_one<T>(vec: &mut Vec<T>) -> Result<(), InsertError> {
    #[cfg(test)]
    consume_fail_budget()?;

    vec.try_reserve(1).map_err(InsertError::from)
}

/// Forces the `n`-th reservation (0-based) on this thread to fail.
///
/// The forced failure fires once; reservations after it succeed again.
#[cfg(test)]
pub(crate) fn fail_after(n: usize) {
    FAIL_BUDGET.with(|budget| budget.set(Some(n)));
}

/// Clears any pending forced failure on this thread.
#[cfg(test)]
pub(crate) fn reset_failpoint() {
    FAIL_BUDGET.with(|budget| budget.set(None));
}

#[cfg(test)]
fn consume_fail_budget() -> Result<(), InsertError> {
    FAIL_BUDGET.with(|budget| match budget.get() {
        Some(0) => {
            budget.set(None);
            Err(InsertError::injected())
        }
        Some(remaining) => {
            budget.set(Some(remaining - 1));
            Ok(())
        }
        None => Ok(()),
    })
}
