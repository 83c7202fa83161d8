use proptest::prelude::*;
use sortrie::lower_bound;

#[test]
fn test_lower_bound_on_empty_slice() {
    let empty: [u32; 0] = [];
    assert_eq!(lower_bound(&empty, &7), 0);
}

#[test]
fn test_lower_bound_before_all_elements() {
    let items = [10, 20, 30];
    assert_eq!(lower_bound(&items, &5), 0);
}

#[test]
fn test_lower_bound_after_all_elements() {
    let items = [10, 20, 30];
    assert_eq!(lower_bound(&items, &40), 3);
}

#[test]
fn test_lower_bound_finds_exact_match() {
    let items = [10, 20, 30];
    assert_eq!(lower_bound(&items, &10), 0);
    assert_eq!(lower_bound(&items, &20), 1);
    assert_eq!(lower_bound(&items, &30), 2);
}

#[test]
fn test_lower_bound_between_elements() {
    let items = [10, 20, 30];
    assert_eq!(lower_bound(&items, &15), 1);
    assert_eq!(lower_bound(&items, &25), 2);
}

#[test]
fn test_lower_bound_on_single_element() {
    assert_eq!(lower_bound(&[b'k'], &b'a'), 0);
    assert_eq!(lower_bound(&[b'k'], &b'k'), 0);
    assert_eq!(lower_bound(&[b'k'], &b'z'), 1);
}

#[test]
fn test_lower_bound_works_for_str_elements() {
    let items = ["kaka", "kea", "tui", "weka"];
    assert_eq!(lower_bound(&items, &"kea"), 1);
    assert_eq!(lower_bound(&items, &"moa"), 2);
}

proptest! {
    /// The returned index splits any sorted slice into `< key` and `>= key`.
    #[test]
    fn prop_lower_bound_partitions_sorted_input(
        mut items in prop::collection::vec(0u32..1000, 0..64),
        key in 0u32..1000,
    ) {
        items.sort_unstable();
        let index = lower_bound(&items, &key);

        prop_assert!(index <= items.len());
        prop_assert!(items[..index].iter().all(|item| *item < key));
        prop_assert!(items[index..].iter().all(|item| *item >= key));
    }

    /// Inserting at the returned index keeps the slice sorted.
    #[test]
    fn prop_insertion_at_lower_bound_keeps_order(
        mut items in prop::collection::vec(0u32..1000, 0..64),
        key in 0u32..1000,
    ) {
        items.sort_unstable();
        items.dedup();
        let index = lower_bound(&items, &key);
        items.insert(index, key);

        prop_assert!(items.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
