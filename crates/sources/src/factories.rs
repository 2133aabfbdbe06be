//! Per-method constructors for [`SourceParams`].
//!
//! Each constructor takes the inputs its payment method requires and fills
//! in the type, flow, usage, currency and nested groups the method mandates.
//! Only the shape is guaranteed: amounts, IBANs and country codes are left
//! for the API to validate.

use tracing::debug;

use crate::{
    card::CardParams,
    constants::EURO_CURRENCY,
    details::{
        BankRedirectDetails, IdealDetails, SepaDebitDetails, SofortDetails, SourceDetails,
        ThreeDSecureDetails,
    },
    owner::{Address, Owner, Redirect},
    params::SourceParams,
    types::{SourceFlow, SourceType, SourceUsage},
};

impl SourceParams {
    /// Params for a Bancontact source.
    ///
    /// * `amount` - Amount to charge, in cents
    /// * `name` - Full name of the account holder
    /// * `return_url` - Where the customer lands after verifying the payment
    /// * `statement_descriptor` - Custom statement descriptor, sent as
    ///   `bancontact[statement_descriptor]`
    pub fn bancontact(
        amount: u64,
        name: impl Into<String>,
        return_url: impl Into<String>,
        statement_descriptor: Option<&str>,
    ) -> Self {
        let details = SourceDetails::Bancontact(BankRedirectDetails {
            statement_descriptor: statement_descriptor.map(str::to_string),
        });
        built(euro_redirect(
            SourceType::Bancontact,
            amount,
            Some(Owner::with_name(name)),
            return_url,
            details,
        ))
    }

    /// Params for a Bitcoin source, authenticated through a receiver address
    pub fn bitcoin(amount: u64, currency: impl Into<String>, email: impl Into<String>) -> Self {
        built(SourceParams {
            source_type: Some(SourceType::Bitcoin),
            amount: Some(amount),
            currency: Some(currency.into()),
            flow: Some(SourceFlow::Receiver),
            owner: Some(Owner::with_email(email)),
            ..Default::default()
        })
    }

    /// Params for a card source. Every set field of `card` is copied into
    /// the `card` group.
    pub fn card(card: &CardParams) -> Self {
        built(SourceParams {
            source_type: Some(SourceType::Card),
            details: Some(SourceDetails::Card(card.clone())),
            ..Default::default()
        })
    }

    /// Params for a Giropay source. See [`SourceParams::bancontact`] for the
    /// arguments.
    pub fn giropay(
        amount: u64,
        name: impl Into<String>,
        return_url: impl Into<String>,
        statement_descriptor: Option<&str>,
    ) -> Self {
        let details = SourceDetails::Giropay(BankRedirectDetails {
            statement_descriptor: statement_descriptor.map(str::to_string),
        });
        built(euro_redirect(
            SourceType::Giropay,
            amount,
            Some(Owner::with_name(name)),
            return_url,
            details,
        ))
    }

    /// Params for an iDEAL source. `bank` is sent as `ideal[bank]`.
    pub fn ideal(
        amount: u64,
        name: impl Into<String>,
        return_url: impl Into<String>,
        statement_descriptor: Option<&str>,
        bank: Option<&str>,
    ) -> Self {
        let details = SourceDetails::Ideal(IdealDetails {
            statement_descriptor: statement_descriptor.map(str::to_string),
            bank: bank.map(str::to_string),
        });
        built(euro_redirect(
            SourceType::Ideal,
            amount,
            Some(Owner::with_name(name)),
            return_url,
            details,
        ))
    }

    /// Params for a SEPA Direct Debit source.
    ///
    /// * `name` - Full name of the account holder
    /// * `iban` - IBAN of the account to debit
    /// * `address_line1` - First address line of the account holder
    /// * `city`, `postal_code` - Account holder's city and postal code
    /// * `country` - Account holder's two-letter country code
    pub fn sepa_debit(
        name: impl Into<String>,
        iban: impl Into<String>,
        address_line1: Option<&str>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        let address = Address {
            line1: address_line1.map(str::to_string),
            city: Some(city.into()),
            postal_code: Some(postal_code.into()),
            country: Some(country.into()),
            ..Default::default()
        };
        built(SourceParams {
            source_type: Some(SourceType::SepaDebit),
            currency: Some(EURO_CURRENCY.to_string()),
            owner: Some(Owner::with_name(name).with_some_address(Some(address))),
            details: Some(SourceDetails::SepaDebit(SepaDebitDetails { iban: iban.into() })),
            ..Default::default()
        })
    }

    /// Params for a Sofort source. `country` is the country of the
    /// customer's bank and is sent as `sofort[country]`.
    pub fn sofort(
        amount: u64,
        return_url: impl Into<String>,
        country: impl Into<String>,
        statement_descriptor: Option<&str>,
    ) -> Self {
        let details = SourceDetails::Sofort(SofortDetails {
            country: country.into(),
            statement_descriptor: statement_descriptor.map(str::to_string),
        });
        built(euro_redirect(
            SourceType::Sofort,
            amount,
            None,
            return_url,
            details,
        ))
    }

    /// Params for a 3D Secure source authenticating the card source `card`
    pub fn three_d_secure(
        amount: u64,
        currency: impl Into<String>,
        return_url: impl Into<String>,
        card: impl Into<String>,
    ) -> Self {
        built(SourceParams {
            source_type: Some(SourceType::ThreeDSecure),
            amount: Some(amount),
            currency: Some(currency.into()),
            flow: Some(SourceFlow::Redirect),
            redirect: Some(Redirect::new(return_url)),
            details: Some(SourceDetails::ThreeDSecure(ThreeDSecureDetails {
                card: card.into(),
            })),
            ..Default::default()
        })
    }
}

/// Single-use euro payment authenticated by a redirect
fn euro_redirect(
    source_type: SourceType,
    amount: u64,
    owner: Option<Owner>,
    return_url: impl Into<String>,
    details: SourceDetails,
) -> SourceParams {
    SourceParams {
        source_type: Some(source_type),
        amount: Some(amount),
        currency: Some(EURO_CURRENCY.to_string()),
        flow: Some(SourceFlow::Redirect),
        usage: Some(SourceUsage::SingleUse),
        owner,
        redirect: Some(Redirect::new(return_url)),
        details: Some(details),
        ..Default::default()
    }
}

fn built(params: SourceParams) -> SourceParams {
    debug!(
        source_type = params.raw_type().unwrap_or_default(),
        flow = ?params.flow,
        "Built source params"
    );
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormEncodable, encode_body, flatten_encodable};

    const RETURN_URL: &str = "https://example.com/return";

    fn pairs(params: &SourceParams) -> Vec<(String, String)> {
        flatten_encodable(params)
    }

    fn value_of(params: &SourceParams, key: &str) -> Option<String> {
        pairs(params)
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn all_factories() -> Vec<(SourceType, SourceParams)> {
        vec![
            (
                SourceType::Bancontact,
                SourceParams::bancontact(1099, "Jenny Rosen", RETURN_URL, None),
            ),
            (
                SourceType::Bitcoin,
                SourceParams::bitcoin(1000, "usd", "jenny@example.com"),
            ),
            (
                SourceType::Card,
                SourceParams::card(&CardParams::new("4242424242424242", 12, 2030)),
            ),
            (
                SourceType::Giropay,
                SourceParams::giropay(1099, "Jenny Rosen", RETURN_URL, None),
            ),
            (
                SourceType::Ideal,
                SourceParams::ideal(1099, "Jenny Rosen", RETURN_URL, None, None),
            ),
            (
                SourceType::SepaDebit,
                SourceParams::sepa_debit(
                    "Jenny Rosen",
                    "DE89370400440532013000",
                    None,
                    "Berlin",
                    "10115",
                    "DE",
                ),
            ),
            (
                SourceType::Sofort,
                SourceParams::sofort(1099, RETURN_URL, "DE", None),
            ),
            (
                SourceType::ThreeDSecure,
                SourceParams::three_d_secure(1099, "usd", RETURN_URL, "src_123"),
            ),
        ]
    }

    #[test]
    fn test_type_matches_factory() {
        for (source_type, params) in all_factories() {
            assert_eq!(params.source_type.as_ref(), Some(&source_type));
            assert_eq!(
                value_of(&params, "type"),
                Some(source_type.to_string()),
                "Failed for type: {}",
                source_type
            );
        }
    }

    #[test]
    fn test_redirect_factories_carry_return_url() {
        for (source_type, params) in all_factories() {
            if params.flow != Some(SourceFlow::Redirect) {
                continue;
            }
            assert_eq!(
                value_of(&params, "redirect[return_url]").as_deref(),
                Some(RETURN_URL),
                "Failed for type: {}",
                source_type
            );
        }
    }

    #[test]
    fn test_euro_factories_set_currency() {
        for (source_type, params) in all_factories() {
            if !source_type.is_euro_only() {
                continue;
            }
            assert_eq!(
                value_of(&params, "currency").as_deref(),
                Some("EUR"),
                "Failed for type: {}",
                source_type
            );
        }
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        for (_, params) in all_factories() {
            assert_eq!(encode_body(&params).unwrap(), encode_body(&params).unwrap());
        }
    }

    #[test]
    fn test_no_empty_groups_are_sent() {
        for (source_type, params) in all_factories() {
            for (key, value) in params.form_fields() {
                if let Some(group) = value.as_map() {
                    assert!(!group.is_empty(), "Empty {} group for {}", key, source_type);
                }
            }
        }
    }

    #[test]
    fn test_bancontact() {
        let params = SourceParams::bancontact(1099, "Jenny Rosen", RETURN_URL, None);
        let pairs = pairs(&params);

        for (key, value) in [
            ("type", "bancontact"),
            ("amount", "1099"),
            ("currency", "EUR"),
            ("flow", "redirect"),
            ("usage", "single_use"),
            ("owner[name]", "Jenny Rosen"),
            ("redirect[return_url]", RETURN_URL),
        ] {
            assert!(
                pairs.contains(&(key.to_string(), value.to_string())),
                "Missing {}={}",
                key,
                value
            );
        }
        assert!(!pairs.iter().any(|(k, _)| k == "bancontact[statement_descriptor]"));
    }

    #[test]
    fn test_bancontact_statement_descriptor_is_nested() {
        let params =
            SourceParams::bancontact(1099, "Jenny Rosen", RETURN_URL, Some("ORDER AT11990"));
        assert_eq!(
            value_of(&params, "bancontact[statement_descriptor]").as_deref(),
            Some("ORDER AT11990")
        );
        assert_eq!(value_of(&params, "statement_descriptor"), None);
    }

    #[test]
    fn test_bitcoin() {
        let params = SourceParams::bitcoin(1000, "usd", "jenny@example.com");
        assert_eq!(value_of(&params, "flow").as_deref(), Some("receiver"));
        assert_eq!(value_of(&params, "currency").as_deref(), Some("usd"));
        assert_eq!(
            value_of(&params, "owner[email]").as_deref(),
            Some("jenny@example.com")
        );
        assert_eq!(value_of(&params, "usage"), None);
        assert_eq!(value_of(&params, "owner[name]"), None);
    }

    #[test]
    fn test_card_copies_card_fields() {
        let card = CardParams {
            cvc: Some("123".to_string()),
            name: Some("Jenny Rosen".to_string()),
            address_zip: Some("10115".to_string()),
            ..CardParams::new("4242424242424242", 12, 2030)
        };
        let params = SourceParams::card(&card);

        assert_eq!(
            pairs(&params),
            vec![
                ("type".to_string(), "card".to_string()),
                ("card[number]".to_string(), "4242424242424242".to_string()),
                ("card[exp_month]".to_string(), "12".to_string()),
                ("card[exp_year]".to_string(), "2030".to_string()),
                ("card[cvc]".to_string(), "123".to_string()),
                ("card[name]".to_string(), "Jenny Rosen".to_string()),
                ("card[address_zip]".to_string(), "10115".to_string()),
            ]
        );
    }

    #[test]
    fn test_giropay() {
        let params = SourceParams::giropay(1099, "Jenny Rosen", RETURN_URL, Some("ORDER 123"));
        assert_eq!(value_of(&params, "flow").as_deref(), Some("redirect"));
        assert_eq!(
            value_of(&params, "giropay[statement_descriptor]").as_deref(),
            Some("ORDER 123")
        );
    }

    #[test]
    fn test_ideal_optional_inputs() {
        let params = SourceParams::ideal(1099, "Jenny Rosen", RETURN_URL, None, Some("ing"));
        assert_eq!(value_of(&params, "ideal[bank]").as_deref(), Some("ing"));
        assert_eq!(value_of(&params, "ideal[statement_descriptor]"), None);

        let params = SourceParams::ideal(1099, "Jenny Rosen", RETURN_URL, None, None);
        assert!(!pairs(&params).iter().any(|(k, _)| k.starts_with("ideal[")));
    }

    #[test]
    fn test_sepa_debit() {
        let params = SourceParams::sepa_debit(
            "Jenny Rosen",
            "DE89370400440532013000",
            None,
            "Berlin",
            "10115",
            "DE",
        );
        let pairs = pairs(&params);

        for (key, value) in [
            ("type", "sepa_debit"),
            ("currency", "EUR"),
            ("owner[name]", "Jenny Rosen"),
            ("owner[address][city]", "Berlin"),
            ("owner[address][postal_code]", "10115"),
            ("owner[address][country]", "DE"),
            ("sepa_debit[iban]", "DE89370400440532013000"),
        ] {
            assert!(
                pairs.contains(&(key.to_string(), value.to_string())),
                "Missing {}={}",
                key,
                value
            );
        }
        assert!(!pairs.iter().any(|(k, _)| k == "owner[address][line1]"));
        assert!(!pairs.iter().any(|(k, _)| k == "amount" || k == "flow"));
    }

    #[test]
    fn test_sepa_debit_with_address_line() {
        let params = SourceParams::sepa_debit(
            "Jenny Rosen",
            "DE89370400440532013000",
            Some("Unter den Linden 1"),
            "Berlin",
            "10115",
            "DE",
        );
        assert_eq!(
            value_of(&params, "owner[address][line1]").as_deref(),
            Some("Unter den Linden 1")
        );
    }

    #[test]
    fn test_sofort() {
        let params = SourceParams::sofort(1099, RETURN_URL, "DE", None);
        assert_eq!(value_of(&params, "sofort[country]").as_deref(), Some("DE"));
        assert_eq!(value_of(&params, "usage").as_deref(), Some("single_use"));
        assert_eq!(value_of(&params, "sofort[statement_descriptor]"), None);
        assert!(params.owner.is_none());
    }

    #[test]
    fn test_three_d_secure() {
        let params = SourceParams::three_d_secure(1099, "usd", RETURN_URL, "src_123");
        let pairs = pairs(&params);

        assert!(pairs.contains(&("type".to_string(), "three_d_secure".to_string())));
        assert!(pairs.contains(&("flow".to_string(), "redirect".to_string())));
        assert!(pairs.contains(&("three_d_secure[card]".to_string(), "src_123".to_string())));
        assert!(pairs.contains(&("currency".to_string(), "usd".to_string())));
    }

    #[test]
    fn test_zero_amount_is_accepted() {
        let params = SourceParams::giropay(0, "Jenny Rosen", RETURN_URL, None);
        assert_eq!(value_of(&params, "amount").as_deref(), Some("0"));
    }

    #[test]
    fn test_encoded_body() {
        let params = SourceParams::sofort(1099, RETURN_URL, "DE", None);
        let body = encode_body(&params).unwrap();
        assert_eq!(
            body,
            "type=sofort&amount=1099&currency=EUR&flow=redirect&usage=single_use\
             &redirect%5Breturn_url%5D=https%3A%2F%2Fexample.com%2Freturn\
             &sofort%5Bcountry%5D=DE"
        );
    }
}
