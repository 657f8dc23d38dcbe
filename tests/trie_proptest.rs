use proptest::prelude::*;
use radix_index::RadixTree;
use std::collections::BTreeSet;

// A small alphabet makes shared prefixes, and therefore splits, common.
fn word() -> impl Strategy<Value = String> {
    "[abcé]{1,6}"
}

proptest! {
    #[test]
    fn test_search_matches_std_set(
        words in proptest::collection::vec(word(), 0..40),
        prefix in "[abcé]{0,3}",
    ) {
        let mut model = BTreeSet::new();
        let mut tree = RadixTree::new();

        for w in &words {
            let fresh = model.insert(w.clone());
            prop_assert_eq!(tree.insert(w), Ok(fresh), "insert result mismatch for {:?}", w);
        }

        let expected: Vec<String> = model.iter().filter(|w| w.starts_with(&prefix)).cloned().collect();
        let got: BTreeSet<String> = tree.search(&prefix).into_iter().collect();
        let got: Vec<String> = got.into_iter().collect();
        prop_assert_eq!(got, expected);

        prop_assert_eq!(tree.len(), model.len(), "Length mismatch");
        for w in &model {
            prop_assert!(tree.contains(w), "missing {:?}", w);
        }
    }

    #[test]
    fn test_every_word_found_once_under_its_prefixes(words in proptest::collection::vec(word(), 1..30)) {
        let tree: RadixTree = words.iter().collect();

        for w in &words {
            for (end, _) in w.char_indices() {
                let hits = tree.search(&w[..end]);
                prop_assert_eq!(hits.iter().filter(|h| *h == w).count(), 1);
            }
            prop_assert_eq!(tree.search("").iter().filter(|h| *h == w).count(), 1);
        }
    }

    #[test]
    fn test_insert_twice_is_idempotent(words in proptest::collection::vec(word(), 1..30)) {
        let once: RadixTree = words.iter().collect();
        let mut twice = once.clone();
        twice.extend(words.iter());

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.search(""), twice.search(""));
    }

    #[test]
    fn test_invariants_after_any_insert_order(mut words in proptest::collection::vec(word(), 0..40)) {
        let forward: RadixTree = words.iter().collect();
        prop_assert_eq!(forward.check_invariants(), Ok(()));

        words.reverse();
        let backward: RadixTree = words.iter().collect();
        prop_assert_eq!(backward.check_invariants(), Ok(()));

        // The shape of a radix tree depends only on the set of words.
        prop_assert_eq!(forward.snapshot(), backward.snapshot());
    }
}
