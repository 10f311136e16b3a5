//! IP Validator Port
//!
//! Defines the interface for checking the syntax of an input IP string.

/// Syntax check for the input IP string.
///
/// NOTE the inverted polarity: `is_invalid` returns `true` when the string
/// is NOT a syntactically valid IPv4/IPv6 address. The resolver gates on
/// "validator says invalid"; flipping this silently breaks every valid-IP
/// resolution, so implementations must keep the convention.
pub trait IpValidator: Send + Sync {
    /// Returns true when `ip` is not a valid IP address.
    fn is_invalid(&self, ip: &str) -> bool;
}
