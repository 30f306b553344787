//! Replacement tokens for each masking mode

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Token for kinds with no dedicated placeholder.
pub const FALLBACK_PLACEHOLDER: &str = "[MASKED]";

/// Width of a hash-mode token.
pub const HASH_TOKEN_LEN: usize = 8;

/// Prefix of a tokenize-mode token.
pub const TOKEN_PREFIX: &str = "ENC_";

/// Hex chars after [`TOKEN_PREFIX`].
pub const TOKEN_HEX_LEN: usize = 8;

lazy_static! {
    static ref PLACEHOLDERS: HashMap<&'static str, &'static str> = {
        let mut table = HashMap::new();
        table.insert("EMAIL", "[EMAIL_MASKED]");
        table.insert("PHONE", "[PHONE_MASKED]");
        table.insert("ID_NUMBER", "[ID_MASKED]");
        table.insert("PERSON", "[NAME_MASKED]");
        table.insert("BIRTH_DATE", "[BIRTH_DATE_MASKED]");
        table.insert("BIRTH_PLACE", "[BIRTH_PLACE_MASKED]");
        table.insert("ADDRESS", "[ADDRESS_MASKED]");
        table.insert("IBAN", "[IBAN_MASKED]");
        table.insert("CREDIT_CARD", "[CARD_MASKED]");
        table.insert("IP_ADDRESS", "[IP_MASKED]");
        table.insert("MAC_ADDRESS", "[MAC_MASKED]");
        table.insert("IMEI", "[IMEI_MASKED]");
        table.insert("LICENSE_PLATE", "[PLATE_MASKED]");
        table.insert("PASSPORT", "[PASSPORT_MASKED]");
        table.insert("DRIVER_LICENSE", "[LICENSE_MASKED]");
        table.insert("TAX_NUMBER", "[TAX_MASKED]");
        table.insert("GPS_COORDINATES", "[GPS_MASKED]");
        table
    };
}

/// Placeholder for `kind` in replace mode. Total: unknown kinds get
/// [`FALLBACK_PLACEHOLDER`].
pub fn placeholder_for(kind: &str) -> &'static str {
    PLACEHOLDERS.get(kind).copied().unwrap_or(FALLBACK_PLACEHOLDER)
}

/// Deterministic digest token for hash mode.
pub fn hash_token(value: &str) -> String {
    let digest = blake3::hash(value.as_bytes()).to_hex();
    digest.as_str()[..HASH_TOKEN_LEN].to_string()
}

/// Random opaque token for tokenize mode, e.g. `ENC_3f9a01bc`.
pub fn random_token() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}", TOKEN_PREFIX, &id[..TOKEN_HEX_LEN])
}

/// True if `token` has the shape produced by [`random_token`].
pub fn is_random_token(token: &str) -> bool {
    token
        .strip_prefix(TOKEN_PREFIX)
        .is_some_and(|hex| {
            hex.len() == TOKEN_HEX_LEN
                && hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}
