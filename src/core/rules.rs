use std::collections::HashSet;

use crate::core::matcher::{MatchContext, Trigger};

/// Static payload of a rule, turned into an owned entry when the rule fires.
pub trait Template {
    type Entry;

    /// Tag used to drop a second entry for the same advice.
    fn identity_key(&self) -> &'static str;

    fn build(&self) -> Self::Entry;
}

pub struct Rule<T: 'static> {
    pub trigger: Trigger,
    pub template: T,
}

/// Ordered entries plus the identity keys already emitted.
pub struct Matched<E> {
    entries: Vec<E>,
    keys: HashSet<&'static str>,
}

impl<E> Default for Matched<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            keys: HashSet::new(),
        }
    }
}

impl<E> Matched<E> {
    /// Append unless an entry with `key` is already present. First one wins.
    pub fn push(&mut self, key: &'static str, entry: E) -> bool {
        if !self.keys.insert(key) {
            tracing::debug!(key = key, "duplicate recommendation skipped");
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }
}

/// Evaluate `rules` in declaration order, appending every match to `out`.
pub fn scan<T: Template>(rules: &[Rule<T>], ctx: &MatchContext, out: &mut Matched<T::Entry>) {
    for rule in rules {
        if rule.trigger.matches(ctx) {
            let key = rule.template.identity_key();
            if out.push(key, rule.template.build()) {
                tracing::debug!(key = key, "rule fired");
            }
        }
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
