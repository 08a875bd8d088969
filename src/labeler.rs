//! Enum labeling: forward translation, label maps, select options and
//! reverse lookup for the enums of one host model.

use indexmap::IndexMap;

use crate::{
    config::LabelerConfig,
    definition::{EnumDefinition, EnumDefinitions},
    error::{HumanizeEnumError, Result},
    normalize::normalize_token,
    option::SelectOption,
    translation::Translate,
};

/// Translates the enums of a host model.
///
/// Built once per model at startup from the model's enum definitions and a
/// translation service. Both collaborators may be borrowed (`&D`, `&T`) or
/// owned.
#[derive(Debug, Clone)]
pub struct EnumLabeler<D, T> {
    definitions: D,
    translator: T,
    config: LabelerConfig,
}

impl<D, T> EnumLabeler<D, T>
where
    D: EnumDefinitions,
    T: Translate,
{
    pub fn new(definitions: D, translator: T) -> Self {
        Self {
            definitions,
            translator,
            config: LabelerConfig::default(),
        }
    }

    /// Builds a labeler with a custom key layout, rejecting configs that
    /// fail [`LabelerConfig::validate`].
    pub fn with_config(
        definitions: D,
        translator: T,
        config: LabelerConfig,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            definitions,
            translator,
            config,
        })
    }

    pub fn config(&self) -> &LabelerConfig {
        &self.config
    }

    pub fn definitions(&self) -> &D {
        &self.definitions
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Fails with [`HumanizeEnumError::UnknownEnumKey`] unless `enum_name` is
    /// defined on the model.
    pub fn check_enum(&self, enum_name: &str) -> Result<()> {
        self.definition(enum_name).map(|_| ())
    }

    /// Translation key for a raw value:
    /// `<namespace>.<attributesScope>.<modelKey>.<enumName>/<fragment>`.
    ///
    /// Does not check that the enum exists.
    pub fn translation_key(&self, enum_name: &str, raw_value: &str) -> String {
        let fragment = if self.config.normalize_tokens {
            normalize_token(raw_value)
        } else {
            raw_value.to_string()
        };
        format!(
            "{}.{}/{}",
            self.config.key_prefix(self.definitions.model_key()),
            enum_name,
            fragment
        )
    }

    /// Translated label of `raw_value`.
    ///
    /// Only the enum name is validated; `raw_value` need not be one of the
    /// enum's defined tokens. Missing translations are whatever the
    /// translation service returns for them.
    pub fn humanize_enum(&self, enum_name: &str, raw_value: &str) -> Result<String> {
        self.check_enum(enum_name)?;
        Ok(self.translate(enum_name, raw_value))
    }

    /// Raw token -> label, in declaration order.
    pub fn humanize_enums(&self, enum_name: &str) -> Result<IndexMap<String, String>> {
        Ok(self
            .enum_options(enum_name)?
            .into_iter()
            .map(|option| (option.value, option.text))
            .collect())
    }

    /// One [`SelectOption`] per defined value, in declaration order, with
    /// `checked` unset.
    pub fn enum_options(&self, enum_name: &str) -> Result<Vec<SelectOption>> {
        let definition = self.definition(enum_name)?;
        Ok(definition
            .iter()
            .map(|(token, id)| {
                SelectOption::new(id.clone(), token, self.translate(enum_name, token))
            })
            .collect())
    }

    /// Raw token whose label equals `label` exactly.
    ///
    /// Returns `Ok(None)` when no label matches. When several tokens share a
    /// label, the first in declaration order wins.
    pub fn dehumanize_enum(&self, enum_name: &str, label: &str) -> Result<Option<String>> {
        let found = self
            .enum_options(enum_name)?
            .into_iter()
            .find(|option| option.text == label)
            .map(|option| option.value);

        if found.is_none() {
            tracing::debug!(
                model = self.definitions.model_key(),
                enum_name,
                label,
                "no enum value matches label"
            );
        }
        Ok(found)
    }

    /// Like [`dehumanize_enum`](Self::dehumanize_enum), but returns the
    /// normalized key fragment of the match (`Camel status` -> `camel_status`).
    pub fn dehumanize_enum_key(&self, enum_name: &str, label: &str) -> Result<Option<String>> {
        Ok(self
            .dehumanize_enum(enum_name, label)?
            .map(|token| normalize_token(&token)))
    }

    fn definition(&self, enum_name: &str) -> Result<&EnumDefinition> {
        let unknown =
            || HumanizeEnumError::unknown_enum_key(enum_name, self.definitions.model_key());
        if !self.definitions.has_enum(enum_name) {
            return Err(unknown());
        }
        self.definitions.enum_definition(enum_name).ok_or_else(unknown)
    }

    fn translate(&self, enum_name: &str, raw_value: &str) -> String {
        let key = self.translation_key(enum_name, raw_value);
        tracing::debug!(key = %key, "translating enum value");
        self.translator.translate(&key)
    }
}
