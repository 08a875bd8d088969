//! Translation lookup.
//!
//! The labeler only needs a way to turn a dotted key into display text; that
//! contract is [`Translate`]. [`TranslationTable`] is an in-memory
//! implementation fed from nested JSON trees, which is enough for tests and
//! for hosts that already hold their messages in memory.

use std::collections::HashMap;

use serde_json::Value;

/// Placeholder prefix returned by [`TranslationTable`] for unknown keys.
pub const MISSING_TRANSLATION_PREFIX: &str = "translation missing: ";

/// Translation lookup service.
///
/// Implementations decide what to return for a missing key; the labeler passes
/// the result through untouched.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<T: Translate + ?Sized> Translate for &T {
    fn translate(&self, key: &str) -> String {
        (**self).translate(key)
    }
}

/// Flat key -> text table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a nested JSON tree.
    ///
    /// `{"activerecord": {"attributes": {"payment": {"status/paid": "Paid"}}}}`
    /// yields the key `activerecord.attributes.payment.status/paid`. Non-string
    /// leaves are skipped.
    pub fn from_value(value: &Value) -> Self {
        let mut table = Self::new();
        table.merge_value(value);
        table
    }

    /// Merges a nested JSON tree into the table, overwriting existing keys.
    pub fn merge_value(&mut self, value: &Value) {
        flatten_json(value, String::new(), &mut self.entries);
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for TranslationTable {
    fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(key, "translation missing");
                format!("{}{}", MISSING_TRANSLATION_PREFIX, key)
            }
        }
    }
}

fn flatten_json(value: &Value, prefix: String, result: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) => {
            result.insert(prefix, s.clone());
        }
        _ => {}
    }
}
