use std::collections::BTreeMap;

pub type RuleId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: RuleId,
    /// Lowercased keyword; matched as a substring of incoming text.
    pub trigger: String,
    pub response: String,
    pub enabled: bool,
}

/// Ordered rule collection.
///
/// Ids come from a monotonic counter and are never reused, so iterating the
/// map in key order is the same as iterating in insertion order. Dispatch
/// relies on that for first-match semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStore {
    rules: BTreeMap<RuleId, Rule>,
    next_id: RuleId,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self {
            rules: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an enabled rule. Returns `None` (and changes nothing) when
    /// either field is blank.
    /// Fields are stored as typed; only the trigger is lowercased.
    pub fn add(&mut self, trigger: &str, response: &str) -> Option<RuleId> {
        if trigger.trim().is_empty() || response.trim().is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.rules.insert(
            id,
            Rule {
                id,
                trigger: trigger.to_lowercase(),
                response: response.to_string(),
                enabled: true,
            },
        );
        Some(id)
    }

    /// Flips `enabled`. Returns `false` for an unknown id.
    pub fn toggle(&mut self, id: RuleId) -> bool {
        match self.rules.get_mut(&id) {
            Some(rule) => {
                rule.enabled = !rule.enabled;
                true
            }
            None => false,
        }
    }

    /// Removes the rule. Returns `false` for an unknown id.
    pub fn delete(&mut self, id: RuleId) -> bool {
        self.rules.remove(&id).is_some()
    }

    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Rule> {
        self.iter().filter(|rule| rule.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_lowercases_trigger_and_keeps_text_as_typed() {
        let mut store = RuleStore::new();
        let id = store.add(" Hello ", " Hi there! ").unwrap();
        let rule = store.get(id).unwrap();
        assert_eq!(rule.trigger, " hello ");
        assert_eq!(rule.response, " Hi there! ");
        assert!(rule.enabled);
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut store = RuleStore::new();
        assert_eq!(store.add("", "reply"), None);
        assert_eq!(store.add("hello", "   "), None);
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = RuleStore::new();
        let first = store.add("a", "1").unwrap();
        assert!(store.delete(first));
        let second = store.add("b", "2").unwrap();
        assert_ne!(first, second);
        assert!(second > first);
    }
}
