//! humanize_enum - translated labels for model enum attributes
//!
//! Given a model's enum definitions (raw token -> stored id) and a translation
//! service, this crate translates enum values into display labels, builds
//! select-widget options, and maps labels back to raw values.
//!
//! ## Module Structure
//!
//! - `config`: Translation key layout and config file loading
//! - `definition`: Enum definitions and the provider trait host models implement
//! - `error`: Error types
//! - `labeler`: Forward translation, option lists and reverse lookup
//! - `normalize`: Raw token to translation-key fragment conversion
//! - `option`: Select option records
//! - `record`: Instance-level wrappers over a host record
//! - `translation`: Translation lookup trait and in-memory table
//!
//! ## Example
//!
//! ```
//! use humanize_enum::{EnumCatalog, EnumDefinition, EnumLabeler, TranslationTable};
//! use serde_json::json;
//!
//! let catalog = EnumCatalog::new("payment").with_enum(
//!     "status",
//!     EnumDefinition::new().with("initial", 1).with("paid", 2),
//! );
//! let table = TranslationTable::from_value(&json!({
//!     "activerecord": { "attributes": { "payment": {
//!         "status/initial": "Initial status",
//!         "status/paid": "Payment processed"
//!     }}}
//! }));
//!
//! let labeler = EnumLabeler::new(&catalog, &table);
//! assert_eq!(labeler.humanize_enum("status", "paid").unwrap(), "Payment processed");
//! assert_eq!(
//!     labeler.dehumanize_enum("status", "Initial status").unwrap(),
//!     Some("initial".to_string())
//! );
//! ```

pub mod config;
pub mod definition;
pub mod error;
pub mod labeler;
pub mod normalize;
pub mod option;
pub mod record;
pub mod translation;

pub use config::LabelerConfig;
pub use definition::{EnumCatalog, EnumDefinition, EnumDefinitions, EnumId};
pub use error::{HumanizeEnumError, Result};
pub use labeler::EnumLabeler;
pub use normalize::normalize_token;
pub use option::SelectOption;
pub use record::{EnumRecord, RecordLabeler};
pub use translation::{Translate, TranslationTable};
