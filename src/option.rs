use serde::Serialize;

use crate::definition::EnumId;

/// One entry of a select widget: stored id, raw value and translated label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub id: EnumId,
    pub value: String,
    pub text: String,
    /// Unset unless the caller knows which value is selected.
    pub checked: Option<bool>,
}

impl SelectOption {
    pub fn new(id: EnumId, value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            text: text.into(),
            checked: None,
        }
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}
