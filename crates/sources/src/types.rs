//! Vocabularies shared by every source: payment method type, authentication
//! flow and usage.
//!
//! All three encode to their snake_case wire names. An unset flow or usage is
//! represented by `Option::None` on [`SourceParams`](crate::SourceParams),
//! never by [`SourceFlow::None`], which is a real flow sent as `"none"`.

use std::{
    convert::Infallible,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SourceParamsError;

/// Payment method of a source.
///
/// Two types are equal when they share a wire name, so `Unknown("card")`
/// equals `Card`. Use [`SourceType::from_raw`] to get the named variant.
#[derive(Debug, Clone)]
pub enum SourceType {
    Bancontact,
    Bitcoin,
    Card,
    Giropay,
    Ideal,
    SepaDebit,
    Sofort,
    ThreeDSecure,
    /// Any type this crate does not know about yet, kept as its raw wire name
    Unknown(String),
}

impl SourceType {
    /// Type for a wire name, falling back to `Unknown` for names this crate
    /// does not know
    pub fn from_raw(raw: &str) -> Self {
        match SourceType::from_str(raw) {
            Ok(source_type) => source_type,
            Err(never) => match never {},
        }
    }

    /// Wire name of the type, also used as the name of its nested form group
    pub fn as_str(&self) -> &str {
        match self {
            SourceType::Bancontact => "bancontact",
            SourceType::Bitcoin => "bitcoin",
            SourceType::Card => "card",
            SourceType::Giropay => "giropay",
            SourceType::Ideal => "ideal",
            SourceType::SepaDebit => "sepa_debit",
            SourceType::Sofort => "sofort",
            SourceType::ThreeDSecure => "three_d_secure",
            SourceType::Unknown(raw) => raw,
        }
    }

    /// Returns true for the bank redirect methods that only settle in euros
    pub fn is_euro_only(&self) -> bool {
        matches!(
            self,
            SourceType::Bancontact
                | SourceType::Giropay
                | SourceType::Ideal
                | SourceType::SepaDebit
                | SourceType::Sofort
        )
    }
}

impl PartialEq for SourceType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for SourceType {}

impl Hash for SourceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Display for SourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let source_type = match s {
            "bancontact" => SourceType::Bancontact,
            "bitcoin" => SourceType::Bitcoin,
            "card" => SourceType::Card,
            "giropay" => SourceType::Giropay,
            "ideal" => SourceType::Ideal,
            "sepa_debit" => SourceType::SepaDebit,
            "sofort" => SourceType::Sofort,
            "three_d_secure" => SourceType::ThreeDSecure,
            other => SourceType::Unknown(other.to_string()),
        };
        Ok(source_type)
    }
}

impl Serialize for SourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SourceType::from_raw(&s))
    }
}

/// Authentication flow of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SourceFlow {
    /// Customer is redirected to a third party to authenticate
    Redirect,
    /// Customer pushes funds to a receiver address
    Receiver,
    /// Customer confirms with a verification code
    Verification,
    /// No authentication step
    None,
}

impl SourceFlow {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFlow::Redirect => "redirect",
            SourceFlow::Receiver => "receiver",
            SourceFlow::Verification => "verification",
            SourceFlow::None => "none",
        }
    }
}

impl Display for SourceFlow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFlow {
    type Err = SourceParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "redirect" => Ok(SourceFlow::Redirect),
            "receiver" => Ok(SourceFlow::Receiver),
            "verification" => Ok(SourceFlow::Verification),
            "none" => Ok(SourceFlow::None),
            other => Err(SourceParamsError::UnknownFlow(other.to_string())),
        }
    }
}

/// Whether a source can be charged more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SourceUsage {
    Reusable,
    SingleUse,
}

impl SourceUsage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceUsage::Reusable => "reusable",
            SourceUsage::SingleUse => "single_use",
        }
    }
}

impl Display for SourceUsage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceUsage {
    type Err = SourceParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reusable" => Ok(SourceUsage::Reusable),
            "single_use" => Ok(SourceUsage::SingleUse),
            other => Err(SourceParamsError::UnknownUsage(other.to_string())),
        }
    }
}
