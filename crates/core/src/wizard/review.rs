//! Read-only projection of the assembled payload for the review step.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::payload::{Feature, MarketplacePayload};

/// Parent domain for marketplaces without a custom domain.
pub const DEFAULT_DOMAIN_SUFFIX: &str = "nftbuilder.app";

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Lower-case `name` and replace each whitespace run with a hyphen.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// The custom domain if set, otherwise `<slug>.nftbuilder.app`.
pub fn marketplace_domain(business_name: &str, custom_domain: &str) -> String {
    if custom_domain.is_empty() {
        format!("{}.{DEFAULT_DOMAIN_SUFFIX}", slugify(business_name))
    } else {
        custom_domain.to_string()
    }
}

/// `[collection, buy]` -> `"Collection, Buy"`.
pub fn format_features(features: &[Feature]) -> String {
    features
        .iter()
        .map(|f| capitalize(f.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display values for every field on the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub business_name: String,
    pub website: String,
    pub logo: Option<String>,
    pub token_name: String,
    pub unit_name: String,
    pub total_supply: String,
    pub token_type: &'static str,
    pub decimals: String,
    pub royalty: String,
    pub theme: Option<&'static str>,
    pub domain: String,
    pub features: String,
}

impl ReviewSummary {
    pub fn from_payload(payload: &MarketplacePayload) -> Self {
        let business = &payload.business_details;
        let token = &payload.token_setup;
        let config = &payload.marketplace_config;

        Self {
            business_name: business.name.clone(),
            website: business.website.clone(),
            logo: (!business.logo.is_empty()).then(|| business.logo.clone()),
            token_name: token.token_name.clone(),
            unit_name: token.unit_name.clone(),
            total_supply: token.total_supply.clone(),
            token_type: token.token_type.label(),
            decimals: token.decimals.clone(),
            royalty: format!("{}%", config.royalty_percentage),
            theme: config.marketplace_theme.map(|t| t.label()),
            domain: marketplace_domain(&business.name, &config.custom_domain),
            features: format_features(&config.features),
        }
    }
}
