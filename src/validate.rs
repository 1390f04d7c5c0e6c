//! Input sanitizing and validation
//!
//! Cheap syntax checks run on every input line before it is sent to the
//! lookup service.

use crate::error::{Error, Result};
use crate::types::QueryMode;
use std::net::IpAddr;

/// Trim surrounding whitespace from an input line
pub fn sanitize_input(input: &str) -> &str {
    input.trim()
}

/// Check that the input is an IPv4 or IPv6 address
pub fn validate_ip(input: &str) -> Result<()> {
    input
        .parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| Error::invalid_input(format!("invalid IP address: {input}")))
}

/// Check that the input looks like a domain name
pub fn validate_domain(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(Error::invalid_input("domain cannot be empty"));
    }
    if !input.contains('.') {
        return Err(Error::invalid_input("invalid domain: must contain TLD"));
    }
    if input.starts_with('.') || input.ends_with('.') {
        return Err(Error::invalid_input(
            "invalid domain: cannot start or end with dot",
        ));
    }
    if input.contains("..") {
        return Err(Error::invalid_input(
            "invalid domain: cannot contain consecutive dots",
        ));
    }
    if input.contains(' ') {
        return Err(Error::invalid_input("invalid domain: cannot contain spaces"));
    }
    Ok(())
}

/// Validate an input for the given query mode
pub fn validate_for(mode: QueryMode, input: &str) -> Result<()> {
    match mode {
        QueryMode::Dns => validate_ip(input),
        QueryMode::Subs | QueryMode::Cname => validate_domain(input),
    }
}
