//! Property-based tests for msnpack.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use msnpack::Speaker;
use msnpack::config::ChunkConfig;
use msnpack::core::{Turn, chunk_turns};
use msnpack::parsing::{ParticipantMap, first_token, heavy_normalize, light_normalize};

/// Display names as they show up in logs: letters, accents, tags, moods.
fn arb_name() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "Jane", "doe", "Éloïse", "B0b", " ", "  ", "[away]", "(busy)", " - mood", ":", ".",
            "!", "♥", "😊", "[b]", "[/b]", "_x_",
        ]),
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

fn arb_turns(max: usize) -> impl Strategy<Value = Vec<Turn>> {
    prop::collection::vec(
        (any::<bool>(), "[a-z ]{0,10}").prop_map(|(own, value)| {
            let from = if own { Speaker::Own } else { Speaker::Other };
            Turn::new(from, value)
        }),
        0..max,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Heavy normalization is a fixed point after one application.
    #[test]
    fn heavy_normalize_is_idempotent(name in arb_name()) {
        let once = heavy_normalize(&name);
        prop_assert_eq!(heavy_normalize(&once), once);
    }

    /// Heavy output is lower-case, trimmed and single-spaced.
    #[test]
    fn heavy_normalize_shape(name in arb_name()) {
        let heavy = heavy_normalize(&name);
        prop_assert_eq!(heavy.trim(), heavy.as_str());
        prop_assert!(!heavy.contains("  "));
        prop_assert_eq!(heavy.to_lowercase(), heavy.clone());
        prop_assert!(heavy.starts_with(first_token(&heavy)));
    }

    /// Light normalization is idempotent too.
    #[test]
    fn light_normalize_is_idempotent(name in arb_name()) {
        let once = light_normalize(&name);
        prop_assert_eq!(light_normalize(&once), once);
    }

    /// The first identifier inserted for a key always wins.
    #[test]
    fn participant_map_first_write_wins(
        key in "[a-z]{1,8}",
        first in "[a-z]{1,8}@example\\.com",
        later in prop::collection::vec("[a-z]{1,8}@example\\.org", 1..5),
    ) {
        let mut map = ParticipantMap::new();
        prop_assert!(map.insert(key.clone(), &first));
        for id in &later {
            prop_assert!(!map.insert(key.clone(), id));
        }
        prop_assert_eq!(map.get(&key), Some(first.as_str()));
        prop_assert_eq!(map.len(), 1);
    }

    /// Chunks never exceed the maximum, keep order and honor the minimum.
    #[test]
    fn chunking_respects_bounds(
        turns in arb_turns(200),
        max_len in 1usize..60,
        min_len in 0usize..10,
    ) {
        let config = ChunkConfig::new().with_max_len(max_len).with_min_len(min_len);
        let total = turns.len();
        let chunks = chunk_turns(turns.clone(), &config);

        for chunk in &chunks {
            prop_assert!(chunk.len() <= max_len);
            prop_assert!(chunk.len() >= min_len);
            prop_assert!(!chunk.is_empty());
        }

        if total > max_len {
            for chunk in &chunks {
                let offset = chunk.offset.unwrap_or_default();
                prop_assert_eq!(offset % max_len, 0);
                prop_assert_eq!(&turns[offset..offset + chunk.len()], chunk.conversations.as_slice());
            }
        } else {
            prop_assert!(chunks.iter().all(|c| c.offset.is_none()));
            prop_assert!(chunks.len() <= 1);
        }
    }

    /// Without a minimum every turn lands in exactly one chunk.
    #[test]
    fn chunking_without_minimum_loses_nothing(turns in arb_turns(150), max_len in 1usize..50) {
        let config = ChunkConfig::new().with_max_len(max_len).with_min_len(0);
        let total = turns.len();
        let chunks = chunk_turns(turns, &config);
        let written: usize = chunks.iter().map(|c| c.len()).sum();
        prop_assert_eq!(written, total);
    }

    /// Speaker labels depend only on identifier equality, ignoring case.
    #[test]
    fn speaker_resolution(id in "[a-z]{1,8}@example\\.com", other in "[a-z]{1,8}@example\\.org") {
        prop_assert_eq!(Speaker::resolve(Some(&id.to_uppercase()), &id), Speaker::Own);
        prop_assert_eq!(Speaker::resolve(Some(&other), &id), Speaker::Other);
        prop_assert_eq!(Speaker::resolve(None, &id), Speaker::Other);
    }
}
