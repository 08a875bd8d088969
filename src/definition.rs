//! Enum definitions supplied by the host model.
//!
//! An [`EnumDefinition`] maps raw value tokens to their stored identifiers in
//! declaration order. Hosts expose their enums through [`EnumDefinitions`];
//! [`EnumCatalog`] is a ready-made, serde-friendly implementation.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Stored identifier of an enum value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EnumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumId::Int(id) => write!(f, "{}", id),
            EnumId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for EnumId {
    fn from(id: i64) -> Self {
        EnumId::Int(id)
    }
}

impl From<i32> for EnumId {
    fn from(id: i32) -> Self {
        EnumId::Int(id.into())
    }
}

impl From<&str> for EnumId {
    fn from(id: &str) -> Self {
        EnumId::Text(id.to_string())
    }
}

impl From<String> for EnumId {
    fn from(id: String) -> Self {
        EnumId::Text(id)
    }
}

/// Ordered mapping from raw token to stored identifier for a single enum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumDefinition {
    values: IndexMap<String, EnumId>,
}

impl EnumDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, keeps declaration order.
    pub fn with(mut self, token: impl Into<String>, id: impl Into<EnumId>) -> Self {
        self.insert(token, id);
        self
    }

    /// Inserts a value. Re-inserting a token replaces its id but keeps its position.
    pub fn insert(&mut self, token: impl Into<String>, id: impl Into<EnumId>) {
        self.values.insert(token.into(), id.into());
    }

    pub fn get(&self, token: &str) -> Option<&EnumId> {
        self.values.get(token)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.values.contains_key(token)
    }

    /// Iterates `(token, id)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnumId)> {
        self.values.iter().map(|(token, id)| (token.as_str(), id))
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnumDefinition
where
    K: Into<String>,
    V: Into<EnumId>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(token, id)| (token.into(), id.into()))
                .collect(),
        }
    }
}

/// Enum definition provider implemented by host models.
pub trait EnumDefinitions {
    /// Key of the model in translation paths, e.g. `payment` or `special_payment`.
    fn model_key(&self) -> &str;

    /// Definition of the named enum, `None` if the model has no such enum.
    fn enum_definition(&self, enum_name: &str) -> Option<&EnumDefinition>;

    fn has_enum(&self, enum_name: &str) -> bool {
        self.enum_definition(enum_name).is_some()
    }
}

impl<D: EnumDefinitions + ?Sized> EnumDefinitions for &D {
    fn model_key(&self) -> &str {
        (**self).model_key()
    }

    fn enum_definition(&self, enum_name: &str) -> Option<&EnumDefinition> {
        (**self).enum_definition(enum_name)
    }
}

/// All enums of one model, keyed by enum name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumCatalog {
    pub model_key: String,
    #[serde(default)]
    pub enums: IndexMap<String, EnumDefinition>,
}

impl EnumCatalog {
    pub fn new(model_key: impl Into<String>) -> Self {
        Self {
            model_key: model_key.into(),
            enums: IndexMap::new(),
        }
    }

    pub fn with_enum(mut self, enum_name: impl Into<String>, definition: EnumDefinition) -> Self {
        self.enums.insert(enum_name.into(), definition);
        self
    }

    pub fn enum_names(&self) -> impl Iterator<Item = &str> {
        self.enums.keys().map(String::as_str)
    }
}

impl EnumDefinitions for EnumCatalog {
    fn model_key(&self) -> &str {
        &self.model_key
    }

    fn enum_definition(&self, enum_name: &str) -> Option<&EnumDefinition> {
        self.enums.get(enum_name)
    }
}
