//! Per-step field validators.
//!
//! Each validator maps a payload to `field name -> message`. An empty map
//! means the step is valid. Field names match the camelCase wire names.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::payload::{BusinessDetails, MarketplaceConfig, MarketplacePayload, TokenSetup};

/// Field-scoped validation messages.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MAX_UNIT_NAME_CHARS: usize = 8;
pub const MIN_ROYALTY_PERCENT: f64 = 0.0;
pub const MAX_ROYALTY_PERCENT: f64 = 15.0;

static WEBSITE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid regex"));

pub fn validate_business_details(data: &BusinessDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&data.name) {
        errors.insert("name", "Business name is required".to_string());
    }

    if is_blank(&data.description) {
        errors.insert("description", "Description is required".to_string());
    } else if data.description.chars().count() < MIN_DESCRIPTION_CHARS {
        errors.insert(
            "description",
            format!("Description must be at least {MIN_DESCRIPTION_CHARS} characters"),
        );
    }

    if is_blank(&data.website) {
        errors.insert("website", "Website is required".to_string());
    } else if !WEBSITE_RE.is_match(&data.website) {
        errors.insert(
            "website",
            "Website must start with http:// or https://".to_string(),
        );
    }

    errors
}

pub fn validate_token_setup(data: &TokenSetup) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&data.token_name) {
        errors.insert("tokenName", "Token name is required".to_string());
    }

    if is_blank(&data.unit_name) {
        errors.insert("unitName", "Unit name is required".to_string());
    } else if data.unit_name.chars().count() > MAX_UNIT_NAME_CHARS {
        errors.insert(
            "unitName",
            format!("Unit name must be {MAX_UNIT_NAME_CHARS} characters or less"),
        );
    }

    if is_blank(&data.total_supply) {
        errors.insert("totalSupply", "Total supply is required".to_string());
    } else if !parse_number(&data.total_supply).is_some_and(|n| n > 0.0) {
        errors.insert(
            "totalSupply",
            "Total supply must be a positive number".to_string(),
        );
    }

    errors
}

pub fn validate_marketplace_config(data: &MarketplaceConfig) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&data.royalty_percentage) {
        errors.insert(
            "royaltyPercentage",
            "Royalty percentage is required".to_string(),
        );
    } else if !parse_number(&data.royalty_percentage)
        .is_some_and(|n| (MIN_ROYALTY_PERCENT..=MAX_ROYALTY_PERCENT).contains(&n))
    {
        errors.insert(
            "royaltyPercentage",
            "Royalty percentage must be between 0 and 15".to_string(),
        );
    }

    if data.marketplace_theme.is_none() {
        errors.insert(
            "marketplaceTheme",
            "Please select a marketplace theme".to_string(),
        );
    }

    errors
}

/// Run all three step validators over an assembled payload.
pub fn validate_payload(payload: &MarketplacePayload) -> FieldErrors {
    let mut errors = validate_business_details(&payload.business_details);
    errors.extend(validate_token_setup(&payload.token_setup));
    errors.extend(validate_marketplace_config(&payload.marketplace_config));
    errors
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Lenient numeric parse of a form value. Surrounding whitespace is ignored;
/// NaN and infinities are not numbers here.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
