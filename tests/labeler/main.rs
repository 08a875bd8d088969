use humanize_enum::{
    EnumCatalog, EnumDefinition, EnumId, EnumLabeler, EnumRecord, HumanizeEnumError,
    TranslationTable,
};
use pretty_assertions::assert_eq;
use serde_json::json;


pub struct Payment {
    pub status: Option<String>,
}

impl Payment {
    pub fn new(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
        }
    }
}

impl EnumRecord for Payment {
    fn enum_value(&self, enum_name: &str) -> Option<&str> {
        match enum_name {
            "status" => self.status.as_deref(),
            _ => None,
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn translations() -> TranslationTable {
    TranslationTable::from_value(&json!({
        "activerecord": {
            "attributes": {
                "payment": {
                    "status/initial": "Initial status",
                    "status/paid": "Payment processed",
                    "status/error": "Payment error"
                },
                "special_payment": {
                    "status/module/status": "Module status",
                    "status/camel_status": "Camel status",
                    "status/kebab_status": "Kebab status"
                }
            }
        }
    }))
}

fn payment_enums() -> EnumCatalog {
    EnumCatalog::new("payment").with_enum(
        "status",
        EnumDefinition::new()
            .with("initial", 1)
            .with("paid", 2)
            .with("error", 3),
    )
}

fn payment_labeler() -> EnumLabeler<EnumCatalog, TranslationTable> {
    init_tracing();
    EnumLabeler::new(payment_enums(), translations())
}

#[test]
fn test_humanize_enum() {
    let labeler = payment_labeler();
    assert_eq!(labeler.humanize_enum("status", "initial").unwrap(), "Initial status");
    assert_eq!(labeler.humanize_enum("status", "paid").unwrap(), "Payment processed");
}

#[test]
fn test_humanize_enum_unknown_enum() {
    let labeler = payment_labeler();
    let err = labeler.humanize_enum("undefined_enum", "pending").unwrap_err();
    assert!(matches!(err, HumanizeEnumError::UnknownEnumKey { .. }));
}

#[test]
fn test_humanize_enums() {
    let labeler = payment_labeler();
    let labels = labeler.humanize_enums("status").unwrap();
    let pairs: Vec<(&str, &str)> = labels
        .iter()
        .map(|(token, label)| (token.as_str(), label.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("initial", "Initial status"),
            ("paid", "Payment processed"),
            ("error", "Payment error"),
        ]
    );
}

#[test]
fn test_dehumanize_enum() {
    let labeler = payment_labeler();
    let lookup = |label: &str| labeler.dehumanize_enum("status", label).unwrap();

    assert_eq!(lookup("Initial status").as_deref(), Some("initial"));
    assert_eq!(lookup("Payment processed").as_deref(), Some("paid"));
    assert_eq!(lookup("Payment error").as_deref(), Some("error"));
    assert_eq!(lookup("Non-existing status"), None);
}

#[test]
fn test_dehumanize_round_trip() {
    let labeler = payment_labeler();
    for token in ["initial", "paid", "error"] {
        let label = labeler.humanize_enum("status", token).unwrap();
        assert_eq!(
            labeler.dehumanize_enum("status", &label).unwrap().as_deref(),
            Some(token)
        );
    }
}

#[test]
fn test_enum_options() {
    let labeler = payment_labeler();
    let options = labeler.enum_options("status").unwrap();

    assert_eq!(options.len(), payment_enums().enums["status"].len());
    assert_eq!(options[0].id, EnumId::Int(1));
    insta::assert_json_snapshot!(options, @r#"
    [
      {
        "id": 1,
        "value": "initial",
        "text": "Initial status",
        "checked": null
      },
      {
        "id": 2,
        "value": "paid",
        "text": "Payment processed",
        "checked": null
      },
      {
        "id": 3,
        "value": "error",
        "text": "Payment error",
        "checked": null
      }
    ]
    "#);
}

#[test]
fn test_enum_options_unknown_enum() {
    let labeler = payment_labeler();
    assert_eq!(
        labeler.enum_options("undefined_enum"),
        Err(HumanizeEnumError::unknown_enum_key("undefined_enum", "payment"))
    );
}

#[test]
fn test_record_humanize_enum() {
    let labeler = payment_labeler();
    let mut payment = Payment::new("initial");
    assert_eq!(
        labeler.for_record(&payment).humanize_enum("status").unwrap(),
        "Initial status"
    );

    payment.status = Some("paid".to_string());
    assert_eq!(
        labeler.for_record(&payment).humanize_enum("status").unwrap(),
        "Payment processed"
    );

    payment.status = Some("error".to_string());
    assert_eq!(
        labeler.for_record(&payment).humanize_enum("status").unwrap(),
        "Payment error"
    );
}

#[test]
fn test_record_humanize_enum_unknown_enum() {
    let labeler = payment_labeler();
    let payment = Payment::new("initial");
    assert!(
        labeler
            .for_record(&payment)
            .humanize_enum("undefined_enum")
            .is_err()
    );
}
