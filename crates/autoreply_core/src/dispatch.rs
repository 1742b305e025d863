use crate::{Rule, RuleStore};

/// First enabled rule, in store order, whose trigger occurs in `text`
/// ignoring case.
pub fn first_match<'a>(rules: &'a RuleStore, text: &str) -> Option<&'a Rule> {
    let haystack = text.to_lowercase();
    rules
        .enabled()
        .find(|rule| haystack.contains(&rule.trigger.to_lowercase()))
}
