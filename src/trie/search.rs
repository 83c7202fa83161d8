//! Lower-bound binary search over sorted slices.
//!
//! This is the shared comparison primitive of the trie: a node uses it to
//! find the sorted insertion index for a new edge label, and (via an exact
//! match check on the returned index) to test whether a label is present.

/// Returns the smallest index at which `key` could be inserted into `items`
/// while keeping it sorted.
///
/// `items` must be sorted ascending. The returned index `i` satisfies:
/// every element of `items[..i]` is `< key` and every element of
/// `items[i..]` is `>= key`. If every element is less than `key`, the
/// returned index is `items.len()`.
///
/// Runs in O(log n) comparisons on a half-open index range and never
/// allocates. `key` itself is present in `items` iff the returned index is
/// in range and `items[i] == key`.
///
/// # Arguments
/// * `items` - Sorted slice to search
/// * `key` - Key to find the insertion point for
///
/// # Examples
/// ```
/// use sortrie::trie::search::lower_bound;
///
/// let labels = [b'i', b'k', b'w'];
/// assert_eq!(lower_bound(&labels, &b'a'), 0);
/// assert_eq!(lower_bound(&labels, &b'k'), 1); // exact match
/// assert_eq!(lower_bound(&labels, &b'm'), 2);
/// assert_eq!(lower_bound(&labels, &b'z'), 3); // past the end
/// assert_eq!(lower_bound::<u8>(&[], &b'a'), 0);
/// ```
pub fn lower_bound<T: Ord>(items: &[T], key: &T) -> usize {
    let mut left = 0;
    let mut right = items.len();

    while left < right {
        // Midpoint of the half-open range [left, right),
        // written so it cannot overflow
        let mid = left + (right - left) / 2;
        if items[mid] < *key {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    left
}
