//! Concurrent generation against a shared dialplan

use digitmap::dialplan::{loader, Context, Extension, Include};
use digitmap::digitmap::{MapGenerator, DEFAULT_BUFFER_SIZE};
use std::sync::Arc;
use std::thread;

use crate::integration::{SAMPLE_DIALPLAN, SAMPLE_MAP};

#[test]
fn test_parallel_generations_are_independent() {
    let dialplan = Arc::new(loader::parse_str(SAMPLE_DIALPLAN).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dialplan = Arc::clone(&dialplan);
            thread::spawn(move || {
                let root = if i % 2 == 0 { "default" } else { "intl" };
                let map = MapGenerator::new(dialplan.as_ref())
                    .generate_string(root, DEFAULT_BUFFER_SIZE)
                    .unwrap();
                (root, map)
            })
        })
        .collect();

    for handle in handles {
        let (root, map) = handle.join().unwrap();
        match root {
            "default" => assert_eq!(map, SAMPLE_MAP),
            _ => assert_eq!(map, "x."),
        }
    }
}

#[test]
fn test_generation_alongside_writer() {
    let dialplan = Arc::new(loader::parse_str(SAMPLE_DIALPLAN).unwrap());

    let writer = {
        let dialplan = Arc::clone(&dialplan);
        thread::spawn(move || {
            for i in 0..50 {
                let local = dialplan.context_or_insert("local");
                local
                    .write()
                    .add_extension(Extension::first(format!("55{}", i), "NoOp()"));
            }
            dialplan.insert(Context::new("extra").with_include(Include::new("default")));
        })
    };

    for _ in 0..20 {
        // Entries may or may not include the writer's additions; it must never fail
        // for lack of room or deadlock.
        let map = MapGenerator::new(dialplan.as_ref())
            .generate_string("default", 64 * 1024)
            .unwrap();
        assert!(map.starts_with("0|1[2-9]xx[2-9]xxxxxx|9,[2-9]xxxxxx"));
    }
    writer.join().unwrap();
}
