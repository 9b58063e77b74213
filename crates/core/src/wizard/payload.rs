//! Step payloads and the partial updates applied to them.
//!
//! Field values are kept as the raw strings the user typed; validators decide
//! whether they parse. Wire names are camelCase.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Business details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetails {
    pub name: String,
    pub description: String,
    pub website: String,
    /// Logo URL or data URI. Optional.
    pub logo: String,
}

// ---------------------------------------------------------------------------
// Token setup
// ---------------------------------------------------------------------------

/// Fungible token (ASA) or non-fungible token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    #[default]
    Fungible,
    Nft,
}

impl TokenType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fungible => "fungible",
            Self::Nft => "nft",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fungible => "Fungible Token (ASA)",
            Self::Nft => "Non-Fungible Token (NFT)",
        }
    }
}

/// Decimal precisions offered by the token form.
pub const DECIMAL_OPTIONS: [&str; 4] = ["0", "2", "6", "8"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSetup {
    pub token_name: String,
    pub unit_name: String,
    pub total_supply: String,
    pub token_type: TokenType,
    pub decimals: String,
}

impl Default for TokenSetup {
    fn default() -> Self {
        Self {
            token_name: String::new(),
            unit_name: String::new(),
            total_supply: String::new(),
            token_type: TokenType::Fungible,
            decimals: DECIMAL_OPTIONS[0].to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Marketplace config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketplaceTheme {
    Modern,
    Classic,
    Dark,
    Colorful,
}

impl MarketplaceTheme {
    pub fn label(self) -> &'static str {
        match self {
            Self::Modern => "Modern - Clean and minimal",
            Self::Classic => "Classic - Traditional gallery style",
            Self::Dark => "Dark - Dark mode focused",
            Self::Colorful => "Colorful - Vibrant and bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Buy,
    Sell,
    Auction,
    Offer,
    Collection,
    Analytics,
}

impl Feature {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Auction => "auction",
            Self::Offer => "offer",
            Self::Collection => "collection",
            Self::Analytics => "analytics",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceConfig {
    pub royalty_percentage: String,
    pub marketplace_theme: Option<MarketplaceTheme>,
    /// Empty means "use the derived subdomain".
    pub custom_domain: String,
    /// Selection order is kept; no duplicates.
    pub features: Vec<Feature>,
}

impl MarketplaceConfig {
    /// Add `feature` if absent, remove it if present.
    pub fn toggle_feature(&mut self, feature: Feature) {
        if let Some(pos) = self.features.iter().position(|f| *f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature);
        }
    }

    /// Replace the selection, dropping repeated entries.
    pub fn set_features(&mut self, features: Vec<Feature>) {
        self.features.clear();
        for feature in features {
            if !self.features.contains(&feature) {
                self.features.push(feature);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Assembled payload
// ---------------------------------------------------------------------------

/// Everything the wizard collects, handed to the submit collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplacePayload {
    pub business_details: BusinessDetails,
    pub token_setup: TokenSetup,
    pub marketplace_config: MarketplaceConfig,
}

// ---------------------------------------------------------------------------
// Partial updates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDetailsPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
}

impl BusinessDetailsPatch {
    pub fn apply(self, target: &mut BusinessDetails) {
        merge(&mut target.name, self.name);
        merge(&mut target.description, self.description);
        merge(&mut target.website, self.website);
        merge(&mut target.logo, self.logo);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSetupPatch {
    pub token_name: Option<String>,
    pub unit_name: Option<String>,
    pub total_supply: Option<String>,
    pub token_type: Option<TokenType>,
    pub decimals: Option<String>,
}

impl TokenSetupPatch {
    pub fn apply(self, target: &mut TokenSetup) {
        merge(&mut target.token_name, self.token_name);
        merge(&mut target.unit_name, self.unit_name);
        merge(&mut target.total_supply, self.total_supply);
        if let Some(token_type) = self.token_type {
            target.token_type = token_type;
        }
        merge(&mut target.decimals, self.decimals);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceConfigPatch {
    pub royalty_percentage: Option<String>,
    pub marketplace_theme: Option<MarketplaceTheme>,
    pub custom_domain: Option<String>,
    pub features: Option<Vec<Feature>>,
    /// Flip a single feature after `features` (if any) is applied.
    pub toggle_feature: Option<Feature>,
}

impl MarketplaceConfigPatch {
    pub fn apply(self, target: &mut MarketplaceConfig) {
        merge(&mut target.royalty_percentage, self.royalty_percentage);
        if let Some(theme) = self.marketplace_theme {
            target.marketplace_theme = Some(theme);
        }
        merge(&mut target.custom_domain, self.custom_domain);
        if let Some(features) = self.features {
            target.set_features(features);
        }
        if let Some(feature) = self.toggle_feature {
            target.toggle_feature(feature);
        }
    }
}

/// A partial update addressed to one step, tagged by `"step"` on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepPatch {
    BusinessDetails(BusinessDetailsPatch),
    TokenSetup(TokenSetupPatch),
    MarketplaceConfig(MarketplaceConfigPatch),
}

fn merge(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}
