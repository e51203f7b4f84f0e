use goggles::{Document, RuleSet};

fn main() {
    // One directive per line: `pattern$options`.
    let ruleset = RuleSet::from_text(
        "$site=docs.rs,boost=2\n\
         /blog/*$downrank=1\n\
         /ads/$discard",
    )
    .expect("failed to compile directives");

    println!("{ruleset}");

    for url in [
        "https://docs.rs/regex/latest",
        "https://example.com/blog/2024/post",
        "https://docs.rs/ads/banner",
        "https://example.com/",
    ] {
        let doc = Document::new(url).expect("invalid candidate url");
        println!("{url}: {}", ruleset.evaluate(&doc));
    }
}
