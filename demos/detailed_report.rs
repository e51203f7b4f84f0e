use goggles::{Document, RuleSet};

fn main() {
    let ruleset = RuleSet::from_text(
        "$discard\n\
         $site=stackoverflow.com,boost=2\n\
         /questions/*/rust^$boost=4\n\
         \n\
         tutorial$intitle,downrank=1",
    )
    .expect("failed to compile directives");

    let doc = Document::new("https://stackoverflow.com/questions/42/rust/")
        .expect("invalid candidate url")
        .with_title("A Rust tutorial question");

    let report = ruleset.evaluate_detailed(&doc);

    println!("{report}");
    println!();
    println!("Lines that fired: {:?}", report.fired());
    println!("Winning line: {:?}", report.winner());
    if let Some(rule) = report
        .winner()
        .and_then(|line| ruleset.rules().iter().find(|r| r.line() == line))
    {
        println!("Winning directive: {rule}");
    }
    println!("Duration: {:?}", report.duration());
}
