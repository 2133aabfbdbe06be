//! Parameters of a source creation request.
//!
//! [`SourceParams`] is a plain carrier: it holds whatever it is given and
//! never validates. Use one of the per-method constructors in
//! [`factories`](crate::factories) to get a consistent set of parameters, or
//! [`SourceParamsBuilder`] for a combination no constructor covers.
//!
//! # Example YAML template
//!
//! ```yaml
//! type: ideal
//! amount: 1099
//! currency: EUR
//! flow: redirect
//! usage: single_use
//! owner:
//!   name: Jenny Rosen
//! redirect:
//!   return_url: https://example.com/return
//! details:
//!   type: ideal
//!   bank: ing
//! ```

use indexmap::IndexMap;
#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    constants::{
        ADDITIONAL_PARAMETERS_GROUP, AMOUNT_FIELD, CURRENCY_FIELD, FLOW_FIELD, METADATA_FIELD,
        OWNER_FIELD, REDIRECT_FIELD, TOKEN_FIELD, TYPE_FIELD, USAGE_FIELD,
    },
    details::SourceDetails,
    error::{Result, SourceParamsError},
    form::{FieldsBuilder, FormEncodable, FormFields, FormValue, merge_fields},
    owner::{Owner, Redirect},
    types::{SourceFlow, SourceType, SourceUsage},
};

/// Parameters used to create a source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct SourceParams {
    /// Payment method of the source
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schemars", schemars(with = "Option<String>"))]
    pub source_type: Option<SourceType>,

    /// Amount in the smallest currency unit (e.g. 1099 for €10.99)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    /// Three-letter ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Authentication flow. Unset lets the API infer it from the type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<SourceFlow>,

    /// Unset lets the API pick the usage the type allows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<SourceUsage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, String>>,

    /// Owner of the payment instrument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    /// Required when `flow` is redirect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Redirect>,

    /// Token whose properties override the other parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Group specific to the payment method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<SourceDetails>,

    /// Parameters not modelled above, merged into the request as-is
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub additional_api_parameters: FormFields,
}

impl SourceParams {
    pub fn new(source_type: SourceType) -> Self {
        Self {
            source_type: Some(source_type),
            ..Default::default()
        }
    }

    /// Set the amount
    pub fn with_some_amount(mut self, amount: Option<u64>) -> Self {
        self.amount = amount;
        self
    }

    /// Set the currency
    pub fn with_some_currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }

    /// Set the flow
    pub fn with_some_flow(mut self, flow: Option<SourceFlow>) -> Self {
        self.flow = flow;
        self
    }

    /// Set the usage
    pub fn with_some_usage(mut self, usage: Option<SourceUsage>) -> Self {
        self.usage = usage;
        self
    }

    /// Set the metadata. An empty map unsets it.
    pub fn with_some_metadata(mut self, metadata: Option<IndexMap<String, String>>) -> Self {
        self.metadata = metadata.filter(|metadata| !metadata.is_empty());
        self
    }

    /// Set the owner. An owner without any field unsets it.
    pub fn with_some_owner(mut self, owner: Option<Owner>) -> Self {
        self.owner = owner.filter(|owner| !owner.is_empty());
        self
    }

    /// Set the redirect return URL
    pub fn with_some_return_url(mut self, return_url: Option<String>) -> Self {
        self.redirect = return_url.map(Redirect::new);
        self
    }

    /// Set the token
    pub fn with_some_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Set the method-specific details
    pub fn with_some_details(mut self, details: Option<SourceDetails>) -> Self {
        self.details = details;
        self
    }

    /// Add a parameter that is not modelled by a dedicated field
    pub fn add_api_parameter(mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.additional_api_parameters
            .insert(key.into(), value.into());
        self
    }

    /// Wire name of the type, if set
    pub fn raw_type(&self) -> Option<&str> {
        self.source_type.as_ref().map(SourceType::as_str)
    }

    /// Load a template from YAML and check its shape
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let params: SourceParams =
            serde_yml::from_str(yaml).map_err(|e| SourceParamsError::Parse(e.to_string()))?;
        SourceParamsBuilder::from(params).build()
    }
}

impl FormEncodable for SourceParams {
    fn form_fields(&self) -> FormFields {
        let metadata = self
            .metadata
            .as_ref()
            .map(|metadata| {
                metadata
                    .iter()
                    .map(|(key, value)| (key.clone(), FormValue::String(value.clone())))
                    .collect::<FormFields>()
            })
            .unwrap_or_default();
        let owner = self
            .owner
            .as_ref()
            .map(Owner::form_fields)
            .unwrap_or_default();
        let redirect = self
            .redirect
            .as_ref()
            .map(Redirect::form_fields)
            .unwrap_or_default();

        let mut builder = FieldsBuilder::new()
            .some_string(TYPE_FIELD, self.raw_type().map(str::to_string).as_ref())
            .some_integer(AMOUNT_FIELD, self.amount)
            .some_string(CURRENCY_FIELD, self.currency.as_ref())
            .some_string(
                FLOW_FIELD,
                self.flow.map(|flow| flow.as_str().to_string()).as_ref(),
            )
            .some_string(
                USAGE_FIELD,
                self.usage.map(|usage| usage.as_str().to_string()).as_ref(),
            )
            .group(METADATA_FIELD, metadata)
            .group(OWNER_FIELD, owner)
            .group(REDIRECT_FIELD, redirect)
            .some_string(TOKEN_FIELD, self.token.as_ref());

        if let Some(details) = &self.details {
            builder = builder.group(&details.group_name(), details.form_fields());
        }

        let mut fields = builder.build();
        merge_fields(&mut fields, &self.additional_api_parameters);
        fields
    }
}

/// Validating builder for parameters no per-method constructor covers
#[derive(Debug, Clone, Default)]
pub struct SourceParamsBuilder {
    params: SourceParams,
}

impl From<SourceParams> for SourceParamsBuilder {
    fn from(params: SourceParams) -> Self {
        Self { params }
    }
}

impl SourceParamsBuilder {
    pub fn new(source_type: SourceType) -> Self {
        Self {
            params: SourceParams::new(source_type),
        }
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.params.amount = Some(amount);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.params.currency = Some(currency.into());
        self
    }

    pub fn flow(mut self, flow: SourceFlow) -> Self {
        self.params.flow = Some(flow);
        self
    }

    pub fn usage(mut self, usage: SourceUsage) -> Self {
        self.params.usage = Some(usage);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .metadata
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn owner(mut self, owner: Owner) -> Self {
        self.params.owner = Some(owner);
        self
    }

    pub fn return_url(mut self, return_url: impl Into<String>) -> Self {
        self.params.redirect = Some(Redirect::new(return_url));
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.params.token = Some(token.into());
        self
    }

    pub fn details(mut self, details: SourceDetails) -> Self {
        self.params.details = Some(details);
        self
    }

    pub fn api_parameter(mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.params
            .additional_api_parameters
            .insert(key.into(), value.into());
        self
    }

    /// Check the shape of the parameters and return them
    pub fn build(self) -> Result<SourceParams> {
        let params = self.params;
        let params = SourceParams {
            metadata: params.metadata.filter(|metadata| !metadata.is_empty()),
            owner: params.owner.filter(|owner| !owner.is_empty()),
            ..params
        };

        if let Err(e) = check_shape(&params) {
            warn!(error = %e, "Rejected source params");
            return Err(e);
        }
        Ok(params)
    }
}

fn check_shape(params: &SourceParams) -> Result<()> {
    if params.source_type.is_none() {
        return Err(SourceParamsError::MissingType);
    }
    if let (Some(amount), None) = (params.amount, &params.currency) {
        return Err(SourceParamsError::AmountWithoutCurrency(amount));
    }
    let has_return_url = params
        .redirect
        .as_ref()
        .is_some_and(|redirect| !redirect.return_url.is_empty());
    if params.flow == Some(SourceFlow::Redirect) && !has_return_url {
        return Err(SourceParamsError::MissingReturnUrl);
    }
    if let (Some(expected), Some(details)) = (&params.source_type, &params.details) {
        let found = details.source_type();
        if &found != expected {
            return Err(SourceParamsError::DetailsTypeMismatch {
                expected: expected.clone(),
                found,
            });
        }
    }
    if let Some(metadata) = &params.metadata {
        check_keys(METADATA_FIELD, metadata.keys())?;
    }
    check_parameter_keys(&params.additional_api_parameters)?;
    check_parameter_conflicts(params)
}

/// Extra parameters may extend a modelled group but never replace a field
fn check_parameter_conflicts(params: &SourceParams) -> Result<()> {
    let scalars = [
        TYPE_FIELD,
        AMOUNT_FIELD,
        CURRENCY_FIELD,
        FLOW_FIELD,
        USAGE_FIELD,
        TOKEN_FIELD,
    ];
    let details_group = params.details.as_ref().map(SourceDetails::group_name);
    let groups = [METADATA_FIELD, OWNER_FIELD, REDIRECT_FIELD];

    for (key, value) in &params.additional_api_parameters {
        let is_group = groups.contains(&key.as_str()) || details_group.as_ref() == Some(key);
        let conflicts = match value {
            FormValue::Map(_) => scalars.contains(&key.as_str()),
            _ => scalars.contains(&key.as_str()) || is_group,
        };
        if conflicts {
            return Err(SourceParamsError::ConflictingParameter(key.clone()));
        }
    }
    Ok(())
}

fn check_parameter_keys(fields: &FormFields) -> Result<()> {
    check_keys(ADDITIONAL_PARAMETERS_GROUP, fields.keys())?;
    for value in fields.values() {
        if let FormValue::Map(nested) = value {
            check_parameter_keys(nested)?;
        }
    }
    Ok(())
}

fn check_keys<'a>(group: &'static str, keys: impl Iterator<Item = &'a String>) -> Result<()> {
    for key in keys {
        if key.is_empty() || key.contains(['[', ']']) {
            return Err(SourceParamsError::InvalidKey {
                group,
                key: key.clone(),
            });
        }
    }
    Ok(())
}
