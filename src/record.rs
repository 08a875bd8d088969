//! Instance-level wrappers: label the value a host record currently holds.

use indexmap::IndexMap;

use crate::{
    definition::EnumDefinitions,
    error::Result,
    labeler::EnumLabeler,
    option::SelectOption,
    translation::Translate,
};

/// A host record that stores enum values.
pub trait EnumRecord {
    /// Current raw value of the named enum attribute, `None` if unset.
    fn enum_value(&self, enum_name: &str) -> Option<&str>;
}

impl<R: EnumRecord + ?Sized> EnumRecord for &R {
    fn enum_value(&self, enum_name: &str) -> Option<&str> {
        (**self).enum_value(enum_name)
    }
}

/// A labeler bound to one record.
#[derive(Debug)]
pub struct RecordLabeler<'a, R: ?Sized, D, T> {
    labeler: &'a EnumLabeler<D, T>,
    record: &'a R,
}

impl<D, T> EnumLabeler<D, T>
where
    D: EnumDefinitions,
    T: Translate,
{
    pub fn for_record<'a, R>(&'a self, record: &'a R) -> RecordLabeler<'a, R, D, T>
    where
        R: EnumRecord + ?Sized,
    {
        RecordLabeler {
            labeler: self,
            record,
        }
    }
}

impl<R, D, T> RecordLabeler<'_, R, D, T>
where
    R: EnumRecord + ?Sized,
    D: EnumDefinitions,
    T: Translate,
{
    /// Label of the record's current value. An unset value is looked up
    /// with an empty key fragment.
    pub fn humanize_enum(&self, enum_name: &str) -> Result<String> {
        let value = self.record.enum_value(enum_name).unwrap_or_default();
        self.labeler.humanize_enum(enum_name, value)
    }

    pub fn humanize_enums(&self, enum_name: &str) -> Result<IndexMap<String, String>> {
        self.labeler.humanize_enums(enum_name)
    }

    pub fn enum_options(&self, enum_name: &str) -> Result<Vec<SelectOption>> {
        self.labeler.enum_options(enum_name)
    }

    /// Options with `checked` set: `Some(true)` for the record's current
    /// value, `Some(false)` for the rest.
    pub fn selected_options(&self, enum_name: &str) -> Result<Vec<SelectOption>> {
        let current = self.record.enum_value(enum_name);
        Ok(self
            .labeler
            .enum_options(enum_name)?
            .into_iter()
            .map(|option| {
                let checked = current == Some(option.value.as_str());
                option.with_checked(checked)
            })
            .collect())
    }
}
