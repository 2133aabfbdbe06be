//! MoneyMQ Sources
//!
//! Typed parameters for creating Stripe payment sources (`POST /v1/sources`).
//!
//! # Overview
//!
//! - [`SourceParams`] - Every field the creation endpoint accepts
//! - Per-method constructors - [`SourceParams::bancontact`],
//!   [`SourceParams::bitcoin`], [`SourceParams::card`],
//!   [`SourceParams::giropay`], [`SourceParams::ideal`],
//!   [`SourceParams::sepa_debit`], [`SourceParams::sofort`] and
//!   [`SourceParams::three_d_secure`]
//! - [`SourceParamsBuilder`] - Validating builder for other combinations
//! - [`form`] - Flattening into `group[field]` pairs and body encoding
//!
//! # Quick Start
//!
//! ```
//! use moneymq_sources::{SourceParams, form::encode_body};
//!
//! let params = SourceParams::ideal(
//!     1099,
//!     "Jenny Rosen",
//!     "https://example.com/return",
//!     None,
//!     Some("ing"),
//! );
//! let body = encode_body(&params).unwrap();
//! assert!(body.starts_with("type=ideal&amount=1099&currency=EUR"));
//! ```
//!
//! Sending the body, authentication and retries belong to the HTTP client.

pub mod card;
pub mod constants;
pub mod details;
pub mod error;
pub mod factories;
pub mod form;
pub mod owner;
pub mod params;
pub mod types;

pub use card::CardParams;
pub use details::{
    BankRedirectDetails, IdealDetails, SepaDebitDetails, SofortDetails, SourceDetails,
    ThreeDSecureDetails,
};
pub use error::{FormEncodeError, Result, SourceParamsError};
pub use form::{FormEncodable, FormFields, FormValue};
pub use owner::{Address, Owner, Redirect};
pub use params::{SourceParams, SourceParamsBuilder};
pub use types::{SourceFlow, SourceType, SourceUsage};
