//! Property-based tests for response extraction.
//!
//! However the upstream chops its output text into fragments, the
//! extracted card must be the one the unsplit text describes.

use proptest::prelude::*;
use serde_json::{Value, json};

use termcard_core::TermCard;
use termcard_llm::{Extractor, OutputFragments, TextStrategy};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_card() -> impl Strategy<Value = TermCard> {
    (".{0,24}", ".{0,24}", ".{0,24}", ".{0,48}").prop_map(
        |(english, pronunciation_ar, arabic, description_ar)| TermCard {
            english,
            pronunciation_ar,
            arabic,
            description_ar,
        },
    )
}

/// Split `text` at the given char-boundary-snapped cut points.
fn split_at_points(text: &str, mut cuts: Vec<usize>) -> Vec<String> {
    cuts.iter_mut().for_each(|c| {
        *c %= text.len() + 1;
        while !text.is_char_boundary(*c) {
            *c -= 1;
        }
    });
    cuts.sort_unstable();

    let mut parts = Vec::new();
    let mut start = 0;
    for cut in cuts {
        parts.push(text[start..cut].to_string());
        start = cut;
    }
    parts.push(text[start..].to_string());
    parts
}

fn response(parts: &[String], items: usize) -> Value {
    // Contiguous runs of fragments over at most `items` output items.
    let per_item = parts.len().div_ceil(items.max(1)).max(1);
    let output: Vec<Value> = parts
        .chunks(per_item)
        .map(|chunk| {
            let content: Vec<Value> = chunk
                .iter()
                .map(|p| json!({ "type": "output_text", "text": p }))
                .collect();
            json!({ "type": "message", "content": content })
        })
        .collect();
    json!({ "output": output })
}

// ---------------------------------------------------------------------------
// Property: fragment concatenation reconstructs the original text
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn fragments_concatenate_to_original(
        card in arb_card(),
        cuts in prop::collection::vec(any::<usize>(), 0..8),
        items in 1usize..4,
    ) {
        let text = serde_json::to_string(&card).expect("serialize");
        let parts = split_at_points(&text, cuts);
        let resp = response(&parts, items);

        prop_assert_eq!(OutputFragments.extract(&resp).unwrap_or_default(), text);
    }

    #[test]
    fn split_card_equals_unsplit_card(
        card in arb_card(),
        cuts in prop::collection::vec(any::<usize>(), 0..8),
        items in 1usize..4,
    ) {
        let text = serde_json::to_string(&card).expect("serialize");
        let whole = Extractor::default()
            .card(&response(std::slice::from_ref(&text), 1))
            .expect("unsplit card");
        let split = Extractor::default()
            .card(&response(&split_at_points(&text, cuts), items))
            .expect("split card");

        prop_assert_eq!(&whole, &card);
        prop_assert_eq!(split, whole);
    }

    #[test]
    fn non_output_fragments_never_leak(noise in ".{1,32}") {
        let resp = json!({
            "output": [{ "content": [
                { "type": "reasoning_text", "text": noise },
                { "type": "output_text", "text": "x" },
            ]}]
        });
        let extracted = OutputFragments.extract(&resp);
        prop_assert_eq!(extracted.as_deref(), Some("x"));
    }
}
