/// Currency used by every euro-only bank payment method
pub const EURO_CURRENCY: &str = "EUR";

/// Payment method of the source
pub const TYPE_FIELD: &str = "type";

/// Amount in the smallest currency unit
pub const AMOUNT_FIELD: &str = "amount";

/// Three-letter ISO currency code
pub const CURRENCY_FIELD: &str = "currency";

/// Authentication flow
pub const FLOW_FIELD: &str = "flow";

/// Single use or reusable
pub const USAGE_FIELD: &str = "usage";

/// Caller-defined key/value group
pub const METADATA_FIELD: &str = "metadata";

/// Owner of the payment instrument
pub const OWNER_FIELD: &str = "owner";

/// Redirect flow group
pub const REDIRECT_FIELD: &str = "redirect";

/// Token overriding the other parameters
pub const TOKEN_FIELD: &str = "token";

/// Name reported for invalid keys in additional API parameters
pub const ADDITIONAL_PARAMETERS_GROUP: &str = "additional_api_parameters";

/// Statement descriptor nested under a method group
pub const STATEMENT_DESCRIPTOR_FIELD: &str = "statement_descriptor";

/// Return URL nested under the redirect group
pub const RETURN_URL_FIELD: &str = "return_url";
