//! Property tests for page arithmetic and the cursor.

use paged::Pager;
use proptest::prelude::*;

fn items_and_length() -> impl Strategy<Value = (Vec<u16>, usize)> {
    (prop::collection::vec(any::<u16>(), 0..200), 1usize..40)
}

proptest! {
    #[test]
    fn last_page_is_ceiling((items, len) in items_and_length()) {
        let pager = Pager::with_page_length(&items, len).unwrap();
        prop_assert_eq!(pager.last_page(), items.len().div_ceil(len));
    }

    #[test]
    fn pages_partition_the_items((items, len) in items_and_length()) {
        let pager = Pager::with_page_length(&items, len).unwrap();

        let mut joined = Vec::with_capacity(items.len());
        for n in 1..=pager.last_page() {
            let page = pager.page(n).unwrap();
            prop_assert!(!page.is_empty());
            prop_assert!(page.len() <= len);
            joined.extend_from_slice(page);
        }
        prop_assert_eq!(joined, items);
    }

    #[test]
    fn pages_past_the_end_are_empty(
        (items, len) in items_and_length(),
        extra in 1usize..1000,
    ) {
        let pager = Pager::with_page_length(&items, len).unwrap();
        prop_assert!(pager.page(pager.last_page() + extra).unwrap().is_empty());
    }

    #[test]
    fn non_positive_pages_are_rejected(n in i64::MIN..=0) {
        let items = [1u8, 2, 3];
        let pager = Pager::new(&items);
        prop_assert!(pager.page(n).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn next_replays_pages_then_stops(
        (items, len) in items_and_length(),
        start in 1usize..20,
        extra_calls in 1usize..5,
    ) {
        let mut pager = Pager::with_page_length(&items, len).unwrap();
        pager.set_current_page(start).unwrap();
        pager.reset();

        for n in 1..=pager.last_page() {
            prop_assert_eq!(pager.next(), Some(pager.page(n).unwrap()));
        }
        for _ in 0..extra_calls {
            prop_assert_eq!(pager.next(), None);
        }
        prop_assert_eq!(pager.current_page(), pager.last_page() + 1 + extra_calls);
    }

    #[test]
    fn page_length_change_follows_anchor(
        old_len in 1usize..50,
        page in 1usize..50,
        new_len in 1usize..50,
    ) {
        let items: Vec<u8> = Vec::new();
        let mut pager = Pager::with_page_length(&items, old_len).unwrap();
        pager.set_current_page(page).unwrap();

        pager.set_page_length(new_len).unwrap();

        let first_rank = 1 + old_len * (page - 1);
        prop_assert_eq!(pager.current_page(), 1 + first_rank / new_len);
        prop_assert_eq!(pager.page_length(), new_len);
    }

    #[test]
    fn current_page_items_match_page(
        (items, len) in items_and_length(),
        page in 1usize..30,
    ) {
        let mut pager = Pager::with_page_length(&items, len).unwrap();
        pager.set_current_page(page).unwrap();
        prop_assert_eq!(pager.current_page_items(), pager.page(page).unwrap());
    }
}
