use std::sync::Arc;
use std::thread;

use goggles::{Document, RuleSet};

fn main() {
    let ruleset = Arc::new(
        RuleSet::from_text(
            "$site=docs.rs,boost=2\n\
             $site=w3schools.com,downrank=3\n\
             /ads/$discard",
        )
        .expect("failed to compile directives"),
    );

    let urls = [
        "https://docs.rs/serde",
        "https://w3schools.com/html",
        "https://docs.rs/ads/x",
        "https://example.org/",
    ];

    let handles: Vec<_> = urls
        .into_iter()
        .enumerate()
        .map(|(i, url)| {
            let rs = Arc::clone(&ruleset);
            thread::spawn(move || {
                let result = rs.evaluate_url(url);
                println!("Thread {i}: {url} -> {result:?}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
