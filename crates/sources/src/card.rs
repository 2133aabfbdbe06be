//! Card details supplied by the caller.

#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::form::{FieldsBuilder, FormEncodable, FormFields};

/// Raw card details as collected from the customer.
///
/// Every field is sent as-is; no Luhn, expiry or CVC check happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct CardParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_month: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp_year: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    /// Cardholder name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CardParams {
    pub fn new(number: impl Into<String>, exp_month: u64, exp_year: u64) -> Self {
        Self {
            number: Some(number.into()),
            exp_month: Some(exp_month),
            exp_year: Some(exp_year),
            ..Default::default()
        }
    }

    /// Set the card verification code
    pub fn with_some_cvc(mut self, cvc: Option<String>) -> Self {
        self.cvc = cvc;
        self
    }

    /// Set the cardholder name
    pub fn with_some_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

impl FormEncodable for CardParams {
    fn root_object_name(&self) -> Option<&str> {
        Some("card")
    }

    fn form_fields(&self) -> FormFields {
        FieldsBuilder::new()
            .some_string("number", self.number.as_ref())
            .some_integer("exp_month", self.exp_month)
            .some_integer("exp_year", self.exp_year)
            .some_string("cvc", self.cvc.as_ref())
            .some_string("name", self.name.as_ref())
            .some_string("address_line1", self.address_line1.as_ref())
            .some_string("address_line2", self.address_line2.as_ref())
            .some_string("address_city", self.address_city.as_ref())
            .some_string("address_state", self.address_state.as_ref())
            .some_string("address_zip", self.address_zip.as_ref())
            .some_string("address_country", self.address_country.as_ref())
            .some_string("currency", self.currency.as_ref())
            .build()
    }
}
