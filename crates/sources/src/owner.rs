//! Owner and redirect groups of a source.

#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    constants::RETURN_URL_FIELD,
    form::{FieldsBuilder, FormFields},
};

/// Postal address of a payment instrument owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Two-letter country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// Returns true when no address line is set
    pub fn is_empty(&self) -> bool {
        self.form_fields().is_empty()
    }

    pub fn form_fields(&self) -> FormFields {
        FieldsBuilder::new()
            .some_string("line1", self.line1.as_ref())
            .some_string("line2", self.line2.as_ref())
            .some_string("city", self.city.as_ref())
            .some_string("state", self.state.as_ref())
            .some_string("postal_code", self.postal_code.as_ref())
            .some_string("country", self.country.as_ref())
            .build()
    }
}

/// Information about the owner of the payment instrument
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct Owner {
    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Owner {
    /// Owner identified only by name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Owner identified only by email
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Set the address
    pub fn with_some_address(mut self, address: Option<Address>) -> Self {
        self.address = address.filter(|address| !address.is_empty());
        self
    }

    /// Returns true when no owner field is set
    pub fn is_empty(&self) -> bool {
        self.form_fields().is_empty()
    }

    pub fn form_fields(&self) -> FormFields {
        let address = self
            .address
            .as_ref()
            .map(Address::form_fields)
            .unwrap_or_default();
        FieldsBuilder::new()
            .some_string("name", self.name.as_ref())
            .some_string("email", self.email.as_ref())
            .some_string("phone", self.phone.as_ref())
            .group("address", address)
            .build()
    }
}

/// Parameters of the redirect flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct Redirect {
    /// Where the customer is sent back to once they authenticated the payment
    pub return_url: String,
}

impl Redirect {
    pub fn new(return_url: impl Into<String>) -> Self {
        Self {
            return_url: return_url.into(),
        }
    }

    pub fn form_fields(&self) -> FormFields {
        FieldsBuilder::new()
            .string(RETURN_URL_FIELD, &self.return_url)
            .build()
    }
}
