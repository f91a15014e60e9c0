//! Wallet address validation and canonicalization
//!
//! Pure syntax checks for Ethereum addresses: fixed 40-digit hex body with
//! an optional EIP-55 checksum. Uniform-case input (all-lowercase or
//! all-uppercase hex) is accepted without checksum verification; mixed-case
//! input must carry a correct checksum. No I/O.

use alloy_primitives::Address;

use crate::errors::InvalidAddress;

/// Check whether a candidate string is a syntactically valid wallet address.
///
/// Returns `false` for empty input rather than raising an error: an empty
/// form field is not worth reporting, while a malformed non-empty string is
/// still just `false` here and surfaced upstream by the presentation layer.
///
/// # Examples
///
/// ```
/// use olyfolio::is_valid_address;
///
/// assert!(is_valid_address("0x12a8141ede9e39343e0aa2362762f6f53d10f292"));
/// assert!(!is_valid_address(""));
/// assert!(!is_valid_address("not-an-address"));
/// ```
pub fn is_valid_address(candidate: &str) -> bool {
    let Some(hex) = candidate.strip_prefix("0x") else {
        return false;
    };
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }

    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    if !(has_upper && has_lower) {
        // Uniform case carries no checksum to verify
        return true;
    }

    Address::parse_checksummed(candidate, None).is_ok()
}

/// Canonicalize a wallet address string into the chain's address form.
///
/// Accepts exactly the inputs [`is_valid_address`] accepts. Exists so the
/// balance fetcher can defend against being called directly with a string
/// that never went through the validator.
pub fn canonicalize(candidate: &str) -> Result<Address, InvalidAddress> {
    if !is_valid_address(candidate) {
        return Err(InvalidAddress::new(candidate));
    }

    candidate
        .parse::<Address>()
        .map_err(|_| InvalidAddress::new(candidate))
}
