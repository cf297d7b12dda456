//! Excerpt extraction properties

use proptest::prelude::*;
use questc::domain::value_objects::{clip, first_line_excerpt, MAX_EXCERPT_LEN, UNKNOWN_ERROR};

proptest! {
    #[test]
    fn excerpt_is_single_bounded_line(output in "\\PC{0,1200}") {
        let excerpt = first_line_excerpt(&output);
        prop_assert!(!excerpt.is_empty());
        prop_assert!(!excerpt.contains('\n'));
        prop_assert!(excerpt.chars().count() <= MAX_EXCERPT_LEN);
        if output.trim().is_empty() {
            prop_assert_eq!(excerpt, UNKNOWN_ERROR);
        }
    }

    #[test]
    fn clip_respects_width(text in "\\PC{0,200}", width in 1usize..100) {
        prop_assert!(clip(&text, width).chars().count() <= width);
    }
}
