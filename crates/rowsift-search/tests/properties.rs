//! Property tests for the similarity functions.

use proptest::prelude::*;
use rowsift_search::{composite_score, sequence_ratio, token_overlap};

proptest! {
    #[test]
    fn sequence_ratio_stays_in_range(a in ".*", b in ".*") {
        let score = sequence_ratio(&a, &b);
        prop_assert!(score <= 100);
    }

    #[test]
    fn sequence_ratio_is_symmetric(a in ".*", b in ".*") {
        prop_assert_eq!(sequence_ratio(&a, &b), sequence_ratio(&b, &a));
    }

    #[test]
    fn sequence_ratio_identity_is_100(s in ".+") {
        prop_assert_eq!(sequence_ratio(&s, &s), 100);
    }

    #[test]
    fn sequence_ratio_empty_side_is_0(s in ".*") {
        prop_assert_eq!(sequence_ratio(&s, ""), 0);
        prop_assert_eq!(sequence_ratio("", &s), 0);
    }

    #[test]
    fn composite_identity_is_100(s in ".+") {
        prop_assert_eq!(composite_score(&s, &s, true), 100);
    }

    #[test]
    fn composite_containment_is_pinned_at_85(s in ".+") {
        // Strictly longer value containing the keyword: never equal, always
        // a substring, so the flat containment score applies.
        let value = format!("{s}+{s}");
        prop_assert_eq!(composite_score(&s, &value, true), 85);
    }

    #[test]
    fn composite_stays_in_range(a in ".*", b in ".*") {
        prop_assert!(composite_score(&a, &b, false) <= 100);
    }

    #[test]
    fn token_overlap_stays_in_range(a in ".*", b in ".*") {
        prop_assert!(token_overlap(&a, &b) <= 100);
    }
}
