use std::time::Instant;

use crate::{Action, Document, EvaluationReport, FieldTarget, Outcome, Rule};

/// Test one rule against a document.
///
/// Returns the rule's action when the rule fires. A rule without an action
/// never yields one, even when its site and pattern match.
pub(crate) fn test_one(rule: &Rule, doc: &Document) -> Option<Action> {
    if let Some(site) = &rule.site
        && site != doc.host()
    {
        return None;
    }

    let target = rule.fields.primary().unwrap_or(FieldTarget::Url);
    let text = doc.field(target)?;
    if let Some(pattern) = &rule.pattern
        && !pattern.is_match(text)
    {
        return None;
    }

    match rule.action {
        Some(action) => {
            log::trace!("line {} fired on {}: {action}", rule.line, doc.url());
            Some(action)
        }
        None => {
            log::trace!("line {} matched {} but has no action", rule.line, doc.url());
            None
        }
    }
}

pub(crate) fn evaluate(rules: &[Rule], doc: &Document) -> Outcome {
    rules
        .iter()
        .filter_map(|rule| test_one(rule, doc))
        .max()
        .map_or(Outcome::NoOpinion, Outcome::from)
}

pub(crate) fn evaluate_detailed(rules: &[Rule], doc: &Document) -> EvaluationReport {
    let start = Instant::now();

    let mut fired = Vec::new();
    let mut best: Option<(Action, usize)> = None;

    for rule in rules {
        if let Some(action) = test_one(rule, doc) {
            fired.push(rule.line);
            if best.is_none_or(|(current, _)| action > current) {
                best = Some((action, rule.line));
            }
        }
    }

    let outcome = best.map_or(Outcome::NoOpinion, |(action, _)| action.outcome());
    let winner = best.map(|(_, line)| line);
    let duration = start.elapsed();

    EvaluationReport::new(outcome, fired, winner, duration)
}

#[cfg(test)]
mod tests {
    use crate::{Document, Outcome, Rule, RuleSet};

    fn doc(url: &str) -> Document {
        Document::new(url).unwrap()
    }

    fn eval(text: &str, doc: &Document) -> Outcome {
        RuleSet::from_text(text).unwrap().evaluate(doc)
    }

    fn fire(line: &str, doc: &Document) -> Option<i64> {
        Rule::parse(line).unwrap().test(doc).map(|a| a.score().unwrap_or(0))
    }

    #[test]
    fn site_scope_is_exact_host() {
        let rule = "$boost=1, site=example.com";
        assert_eq!(fire(rule, &doc("https://example.com/any/path")), Some(1));
        assert_eq!(fire(rule, &doc("https://en.example.com/any/path")), None);
    }

    #[test]
    fn site_scope_is_case_sensitive() {
        let mixed = doc("https://Example.com/x");
        assert_eq!(eval("$site=Example.com,boost=2", &mixed), Outcome::Score(2));
        assert_eq!(eval("$site=example.com,boost=2", &mixed), Outcome::NoOpinion);
        assert_eq!(
            eval("$site=Example.com,boost=2", &doc("https://example.com/x")),
            Outcome::NoOpinion
        );
    }

    #[test]
    fn site_scope_matches_unicode_host() {
        let d = doc("https://bücher.de/katalog");
        assert_eq!(eval("$site=bücher.de,boost", &d), Outcome::Score(1));
    }

    #[test]
    fn generic_discard_discards_any_url() {
        let rule = Rule::parse("$discard").unwrap();
        assert!(rule.test(&doc("https://example.com")).is_some());
    }

    #[test]
    fn basic_pattern_and_boost() {
        assert_eq!(fire("/any/path$boost", &doc("https://example.com/any/path")), Some(1));
        assert_eq!(fire("/any/path$boost", &doc("https://example.com/any")), None);
    }

    #[test]
    fn glob_pattern_and_boost() {
        let rule = "/any/*/path$boost";
        assert_eq!(fire(rule, &doc("https://example.com/any/glob/path")), Some(1));
        assert_eq!(fire(rule, &doc("https://example.com/any/path")), None);
    }

    #[test]
    fn separator_and_boost() {
        let rule = "/foo.js^$boost";
        assert_eq!(fire(rule, &doc("https://example.org/foo.js")), Some(1));
        assert_eq!(fire(rule, &doc("https://example.org/foo.js?param=42")), Some(1));
        assert_eq!(fire(rule, &doc("https://example.org/foo.js/")), Some(1));
        assert_eq!(fire(rule, &doc("https://example.org/foo.jsx")), None);

        let rule = "^cis198-2016s^$boost=3";
        assert_eq!(fire(rule, &doc("https://example.org/cis198-2016s/")), Some(3));
        assert_eq!(fire(rule, &doc("https://example.org/xcis198-2016s/")), None);
    }

    #[test]
    fn anchors_and_boost() {
        let rule = "|https://en.$boost";
        assert_eq!(fire(rule, &doc("https://en.wikipedia.org")), Some(1));
        assert_eq!(fire(rule, &doc("https://de.wikipedia.org")), None);

        let rule = "/some/path.html|$boost";
        assert_eq!(fire(rule, &doc("https://de.wikipedia.org/some/path.html")), Some(1));
        assert_eq!(
            fire(rule, &doc("https://de.wikipedia.org/some/path.html?nope=1")),
            None
        );

        let rule = "|https://brave.com|$boost";
        assert_eq!(fire(rule, &doc("https://brave.com")), Some(1));
        assert_eq!(fire(rule, &doc("https://brave.com/some_path")), None);
        assert_eq!(fire(rule, &doc("https://en.brave.com")), None);
    }

    #[test]
    fn intitle_tests_title_only() {
        let rule = "good title$intitle, boost";
        let base = "https://en.brave.com";
        assert_eq!(fire(rule, &doc(base).with_title("this is a good title")), Some(1));
        assert_eq!(fire(rule, &doc(base).with_title("this is a bad title")), None);
    }

    #[test]
    fn indescription_tests_description_only() {
        let rule = "good description$indescription, boost";
        let base = "https://en.brave.com";
        assert_eq!(
            fire(rule, &doc(base).with_description("this is a good description")),
            Some(1)
        );
        assert_eq!(
            fire(rule, &doc(base).with_description("this is a bad description")),
            None
        );
    }

    #[test]
    fn incontent_tests_content_only() {
        let rule = "good content$incontent, boost";
        let base = "https://en.brave.com";
        assert_eq!(fire(rule, &doc(base).with_content("this is a good content")), Some(1));
        assert_eq!(fire(rule, &doc(base).with_content("this is a bad content")), None);
    }

    #[test]
    fn missing_field_text_never_fires() {
        assert_eq!(fire("$intitle,boost", &doc("https://example.com")), None);
        assert_eq!(
            fire("$intitle,boost", &doc("https://example.com").with_title("")),
            Some(1)
        );
    }

    #[test]
    fn first_flag_in_priority_order_wins() {
        // incontent is ignored because intitle outranks it.
        let rule = "needle$incontent,intitle,boost";
        let d = doc("https://example.com")
            .with_title("nothing here")
            .with_content("needle");
        assert_eq!(fire(rule, &d), None);

        let d = doc("https://example.com")
            .with_title("needle")
            .with_content("nothing");
        assert_eq!(fire(rule, &d), Some(1));
    }

    #[test]
    fn site_mismatch_short_circuits() {
        let rule = "$site=example.com,intitle,boost";
        let d = doc("https://other.com").with_title("anything");
        assert_eq!(fire(rule, &d), None);
    }

    #[test]
    fn inert_rule_contributes_nothing() {
        let d = doc("https://example.com/any/path");
        assert_eq!(eval("/any/path", &d), Outcome::NoOpinion);
        assert_eq!(eval("/any/path\n$downrank=2", &d), Outcome::Score(-2));
    }

    #[test]
    fn strongest_boost_wins() {
        let d = doc("https://example.com/x");
        let rules = "$site=example.com,boost=3\n$site=example.com,boost=1";
        assert_eq!(eval(rules, &d), Outcome::Score(3));
    }

    #[test]
    fn boost_beats_downrank() {
        let d = doc("https://example.com/posts/1");
        let rules = "$site=example.com,downrank=3\n/posts/$boost=3";
        assert_eq!(eval(rules, &d), Outcome::Score(3));
    }

    #[test]
    fn weakest_downrank_wins() {
        let d = doc("https://example.com/x");
        assert_eq!(eval("$downrank=5\n$downrank=2", &d), Outcome::Score(-2));
    }

    #[test]
    fn specific_discard_beats_boost() {
        let d = doc("https://example.com/spam");
        assert_eq!(eval("$boost=100\n/spam$discard", &d), Outcome::Discard);
    }

    #[test]
    fn generic_discard_is_fallback() {
        let rules = "$discard\n$site=good.com,boost=2\n$site=meh.com,downrank=1";
        assert_eq!(eval(rules, &doc("https://good.com")), Outcome::Score(2));
        assert_eq!(eval(rules, &doc("https://meh.com")), Outcome::Score(-1));
        assert_eq!(eval(rules, &doc("https://other.com")), Outcome::Discard);
    }

    #[test]
    fn no_match_is_no_opinion() {
        let d = doc("https://example.com");
        assert_eq!(eval("$site=other.com,discard", &d), Outcome::NoOpinion);
        assert_eq!(eval("", &d), Outcome::NoOpinion);
    }

    #[test]
    fn detailed_reports_fired_lines_and_winner() {
        let ruleset = RuleSet::from_text(
            "$site=example.com,boost=1\n/nope$discard\n\n/posts/$boost=4\n/posts",
        )
        .unwrap();
        let report = ruleset.evaluate_detailed(&doc("https://example.com/posts/1"));
        assert_eq!(report.outcome(), Outcome::Score(4));
        assert_eq!(report.fired(), &[1, 4]);
        assert_eq!(report.winner(), Some(4));
    }

    #[test]
    fn detailed_winner_is_earliest_among_equals() {
        let ruleset = RuleSet::from_text("$boost=2\n$boost=2").unwrap();
        let report = ruleset.evaluate_detailed(&doc("https://example.com"));
        assert_eq!(report.winner(), Some(1));
    }

    #[test]
    fn detailed_matches_plain_evaluate() {
        let ruleset = RuleSet::from_text("$discard\n/a$downrank=2\n/a/b$boost").unwrap();
        for url in ["https://x.com/a/b", "https://x.com/a", "https://x.com/"] {
            let d = doc(url);
            assert_eq!(ruleset.evaluate_detailed(&d).outcome(), ruleset.evaluate(&d));
        }
    }
}
