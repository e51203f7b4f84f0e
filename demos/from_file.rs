use goggles::{Document, RuleSet};

fn main() {
    let ruleset = RuleSet::from_file("demos/rules.goggle").expect("failed to load directives");

    println!("{ruleset}");
    for rule in ruleset.rules() {
        println!("  line {}: {rule}", rule.line());
    }

    let doc = Document::new("https://doc.rust-lang.org/book/ch01-00-getting-started.html")
        .expect("invalid candidate url")
        .with_title("Getting Started - The Rust Programming Language");

    println!("Outcome: {}", ruleset.evaluate(&doc));
}
