//! Payment method specific groups, sent under the method's own name
//! (`ideal[bank]`, `sepa_debit[iban]`, ...).

#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    card::CardParams,
    constants::STATEMENT_DESCRIPTOR_FIELD,
    form::{FieldsBuilder, FormEncodable, FormFields},
    types::SourceType,
};

/// Details shared by bank redirect methods that only take a statement descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct BankRedirectDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct IdealDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Customer's bank, e.g. `ing`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct SepaDebitDetails {
    pub iban: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct SofortDetails {
    /// Country code of the customer's bank
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct ThreeDSecureDetails {
    /// ID of the card source to authenticate
    pub card: String,
}

/// Method-specific group of a source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceDetails {
    Bancontact(BankRedirectDetails),
    Card(CardParams),
    Giropay(BankRedirectDetails),
    Ideal(IdealDetails),
    SepaDebit(SepaDebitDetails),
    Sofort(SofortDetails),
    ThreeDSecure(ThreeDSecureDetails),
}

impl SourceDetails {
    /// Source type these details belong to
    pub fn source_type(&self) -> SourceType {
        match self {
            SourceDetails::Bancontact(_) => SourceType::Bancontact,
            SourceDetails::Card(_) => SourceType::Card,
            SourceDetails::Giropay(_) => SourceType::Giropay,
            SourceDetails::Ideal(_) => SourceType::Ideal,
            SourceDetails::SepaDebit(_) => SourceType::SepaDebit,
            SourceDetails::Sofort(_) => SourceType::Sofort,
            SourceDetails::ThreeDSecure(_) => SourceType::ThreeDSecure,
        }
    }

    /// Name of the group the details are sent under
    pub fn group_name(&self) -> String {
        self.source_type().to_string()
    }

    pub fn form_fields(&self) -> FormFields {
        match self {
            SourceDetails::Bancontact(details) | SourceDetails::Giropay(details) => {
                FieldsBuilder::new()
                    .some_string(
                        STATEMENT_DESCRIPTOR_FIELD,
                        details.statement_descriptor.as_ref(),
                    )
                    .build()
            }
            SourceDetails::Card(card) => card.form_fields(),
            SourceDetails::Ideal(details) => FieldsBuilder::new()
                .some_string(
                    STATEMENT_DESCRIPTOR_FIELD,
                    details.statement_descriptor.as_ref(),
                )
                .some_string("bank", details.bank.as_ref())
                .build(),
            SourceDetails::SepaDebit(details) => {
                FieldsBuilder::new().string("iban", &details.iban).build()
            }
            SourceDetails::Sofort(details) => FieldsBuilder::new()
                .string("country", &details.country)
                .some_string(
                    STATEMENT_DESCRIPTOR_FIELD,
                    details.statement_descriptor.as_ref(),
                )
                .build(),
            SourceDetails::ThreeDSecure(details) => {
                FieldsBuilder::new().string("card", &details.card).build()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormValue;

    #[test]
    fn test_group_names() {
        let details = SourceDetails::SepaDebit(SepaDebitDetails {
            iban: "DE89370400440532013000".to_string(),
        });
        assert_eq!(details.group_name(), "sepa_debit");

        let details = SourceDetails::ThreeDSecure(ThreeDSecureDetails {
            card: "src_123".to_string(),
        });
        assert_eq!(details.group_name(), "three_d_secure");
    }

    #[test]
    fn test_missing_statement_descriptor_leaves_empty_group() {
        let details = SourceDetails::Giropay(BankRedirectDetails::default());
        assert!(details.form_fields().is_empty());
    }

    #[test]
    fn test_ideal_fields() {
        let details = SourceDetails::Ideal(IdealDetails {
            statement_descriptor: None,
            bank: Some("ing".to_string()),
        });
        let fields = details.form_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["bank"], FormValue::from("ing"));
    }

    #[test]
    fn test_parse_details_yaml() {
        let yaml = r#"
type: sofort
country: DE
statement_descriptor: ORDER AT11990
"#;

        let details: SourceDetails = serde_yml::from_str(yaml).unwrap();
        match &details {
            SourceDetails::Sofort(sofort) => {
                assert_eq!(sofort.country, "DE");
                assert_eq!(sofort.statement_descriptor.as_deref(), Some("ORDER AT11990"));
            }
            _ => panic!("Expected Sofort details"),
        }
    }
}
