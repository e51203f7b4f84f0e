use goggles::{Document, RuleSet};

fn main() {
    // Precedence, weakest first: generic discard, downrank, boost, specific discard.
    // The generic `$discard` only applies when nothing stronger fires.
    let ruleset = RuleSet::from_text(
        "$discard\n\
         $site=good.com,boost=3\n\
         $site=meh.com,downrank=2\n\
         /spam/$discard",
    )
    .expect("failed to compile directives");

    let cases = [
        ("Boosted site", "https://good.com/article"),
        ("Downranked site", "https://meh.com/article"),
        ("Spam on a boosted site", "https://good.com/spam/offer"),
        ("Anything else", "https://other.net/"),
    ];

    for (label, url) in cases {
        let doc = Document::new(url).expect("invalid candidate url");
        println!("{label}: {}", ruleset.evaluate(&doc));
    }
}
