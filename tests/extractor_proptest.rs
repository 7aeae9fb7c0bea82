//! Property-based tests for the example extractor
//!
//! These ensure the marker scan holds its structural invariants for
//! arbitrary interleavings of markers and content lines.

use proptest::prelude::*;
use smpl_tools::corpus::Document;
use smpl_tools::extract::{extract_listings, CODE_MARKER, TEXT_MARKER};

/// A document line: a marker or content that can never collide with one
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(CODE_MARKER.to_string()),
        1 => Just(TEXT_MARKER.to_string()),
        3 => "[a-z0-9 =+().]{0,16}",
    ]
}

proptest! {
    #[test]
    fn listing_count_equals_code_marker_count(
        lines in prop::collection::vec(line_strategy(), 0..60)
    ) {
        let code_markers = lines.iter().filter(|l| l.as_str() == CODE_MARKER).count();
        let documents = [Document::new("gen.mbl", lines)];
        prop_assert_eq!(extract_listings(&documents).len(), code_markers);
    }

    #[test]
    fn markers_never_appear_inside_listings(
        lines in prop::collection::vec(line_strategy(), 0..60)
    ) {
        let documents = [Document::new("gen.mbl", lines)];
        for listing in extract_listings(&documents) {
            for collected in listing.lines() {
                prop_assert_ne!(collected, CODE_MARKER);
                prop_assert_ne!(collected, TEXT_MARKER);
            }
        }
    }

    #[test]
    fn splitting_the_corpus_mid_document_never_merges_listings(
        a in prop::collection::vec(line_strategy(), 0..30),
        b in prop::collection::vec(line_strategy(), 0..30),
    ) {
        // Two documents produce at least the listings each would alone; a
        // trailing open region in the first never swallows the second.
        let together = extract_listings(&[
            Document::new("a.mbl", a.clone()),
            Document::new("b.mbl", b.clone()),
        ]);
        let alone_a = extract_listings(&[Document::new("a.mbl", a)]);
        let alone_b = extract_listings(&[Document::new("b.mbl", b)]);
        prop_assert_eq!(together, [alone_a, alone_b].concat());
    }
}
