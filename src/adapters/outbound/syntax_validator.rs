//! Syntax IP Validator
//!
//! Implements IpValidator using std::net address parsing.

use crate::domain::ports::IpValidator;
use std::net::IpAddr;

/// Validator backed by `IpAddr` parsing.
///
/// Keeps the port's inverted polarity: true means the input is not a
/// valid IPv4 or IPv6 address.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxIpValidator;

impl IpValidator for SyntaxIpValidator {
    fn is_invalid(&self, ip: &str) -> bool {
        ip.parse::<IpAddr>().is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv4_is_not_invalid() {
        assert!(!SyntaxIpValidator.is_invalid("8.8.8.8"));
        assert!(!SyntaxIpValidator.is_invalid("192.168.1.1"));
        assert!(!SyntaxIpValidator.is_invalid("255.255.255.255"));
    }

    #[test]
    fn test_valid_ipv6_is_not_invalid() {
        assert!(!SyntaxIpValidator.is_invalid("::1"));
        assert!(!SyntaxIpValidator.is_invalid("2001:4860:4860::8888"));
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(SyntaxIpValidator.is_invalid("not-an-ip"));
        assert!(SyntaxIpValidator.is_invalid("8.8.8"));
        assert!(SyntaxIpValidator.is_invalid("999.0.0.1"));
        assert!(SyntaxIpValidator.is_invalid("8.8.8.8/24"));
    }

    #[test]
    fn test_empty_string_is_invalid() {
        assert!(SyntaxIpValidator.is_invalid(""));
    }

    #[test]
    fn test_hostname_is_invalid() {
        // Only literal addresses pass; names are not resolved here
        assert!(SyntaxIpValidator.is_invalid("dns.google"));
    }
}
