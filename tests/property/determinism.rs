//! Property-based tests for determinism and skip guarantees

use digitmap::dialplan::{Context, Dialplan, Extension, Include, Priority};
use digitmap::digitmap::MapGenerator;
use proptest::prelude::*;

/// Pattern bodies drawn from the dialplan alphabet
fn pattern_body() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9NZX.!*#]{1,8}").unwrap()
}

fn extension() -> impl Strategy<Value = Extension> {
    (
        prop_oneof![
            pattern_body().prop_map(|b| format!("_{}", b)),
            Just("s".to_string()),
            Just("i".to_string()),
            Just("t".to_string()),
            Just("a".to_string()),
        ],
        prop_oneof![Just(Priority::Hint), (1u32..4).prop_map(Priority::Step)],
    )
        .prop_map(|(name, priority)| Extension::new(name, priority, "NoOp()"))
}

/// Up to five contexts `c0..c4` with arbitrary includes between them, cycles included.
fn dialplan() -> impl Strategy<Value = Vec<(Vec<Extension>, Vec<(usize, String)>)>> {
    proptest::collection::vec(
        (
            proptest::collection::vec(extension(), 0..5),
            proptest::collection::vec((0usize..5, "[0-9]{0,2}"), 0..3),
        ),
        1..5,
    )
}

fn build(spec: &[(Vec<Extension>, Vec<(usize, String)>)]) -> Dialplan {
    let dialplan = Dialplan::new();
    for (i, (extensions, includes)) in spec.iter().enumerate() {
        let mut context = Context::new(format!("c{}", i));
        for extension in extensions {
            context.add_extension(extension.clone());
        }
        for (target, prefix) in includes {
            context.add_include(Include::with_prefix(&format!("c{}", target), prefix));
        }
        dialplan.insert(context);
    }
    dialplan
}

proptest! {
    #[test]
    fn test_generation_is_deterministic(spec in dialplan()) {
        let dialplan = build(&spec);
        let generator = MapGenerator::new(&dialplan);
        let first = generator.generate_string("c0", 64 * 1024);
        let second = generator.generate_string("c0", 64 * 1024);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_non_dialable_entries_never_appear(spec in dialplan()) {
        let dialplan = build(&spec);
        let dialable = spec
            .iter()
            .flat_map(|(extensions, _)| extensions.iter())
            .any(|e| !e.is_reserved() && e.priority().is_first());
        let map = MapGenerator::new(&dialplan)
            .generate_string("c0", 64 * 1024)
            .unwrap();
        if !dialable {
            prop_assert_eq!(map, "");
        }
    }

    #[test]
    fn test_small_buffer_never_yields_partial_map(spec in dialplan(), capacity in 1usize..32) {
        let dialplan = build(&spec);
        let generator = MapGenerator::new(&dialplan);
        let full = generator.generate_string("c0", 64 * 1024).unwrap();
        match generator.generate_string("c0", capacity) {
            Ok(map) => prop_assert_eq!(map, full),
            Err(err) => {
                let exhausted = matches!(err, digitmap::error::GenerateError::BufferExhausted { .. });
                prop_assert!(exhausted, "unexpected error: {:?}", err);
            }
        }
    }
}
