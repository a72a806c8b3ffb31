//! Enumerated values accepted by the FoodData Central API.
//!
//! Every enum here serializes to the exact string the upstream API expects,
//! both through serde (tool input) and through [`WireValue::as_str`]
//! (query-string parsing and upstream encoding).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A closed set of string values with a fixed wire representation.
pub trait WireValue: Sized + Copy + 'static {
    /// All accepted values, in upstream documentation order.
    const ALL: &'static [Self];

    /// The exact string sent to (and accepted from) the upstream API.
    fn as_str(&self) -> &'static str;

    /// Parse a wire string, returning `None` for anything outside the enum.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == raw)
    }

    /// Comma-separated list of accepted values, for error messages.
    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Level of detail returned for food records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Abridged,
    #[default]
    Full,
}

impl WireValue for Format {
    const ALL: &'static [Self] = &[Self::Abridged, Self::Full];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Abridged => "abridged",
            Self::Full => "full",
        }
    }
}

/// Food data types.
///
/// The upstream OpenAPI document lists exactly these four; `Experimental`
/// foods are not accepted as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DataType {
    Branded,
    Foundation,
    #[serde(rename = "Survey (FNDDS)")]
    SurveyFndds,
    #[serde(rename = "SR Legacy")]
    SrLegacy,
}

impl WireValue for DataType {
    const ALL: &'static [Self] = &[
        Self::Branded,
        Self::Foundation,
        Self::SurveyFndds,
        Self::SrLegacy,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Branded => "Branded",
            Self::Foundation => "Foundation",
            Self::SurveyFndds => "Survey (FNDDS)",
            Self::SrLegacy => "SR Legacy",
        }
    }
}

/// Fields the upstream API can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum SortBy {
    #[serde(rename = "dataType.keyword")]
    DataType,
    #[serde(rename = "lowercaseDescription.keyword")]
    Description,
    #[serde(rename = "fdcId")]
    FdcId,
    #[serde(rename = "publishedDate")]
    PublishedDate,
}

impl WireValue for SortBy {
    const ALL: &'static [Self] = &[
        Self::DataType,
        Self::Description,
        Self::FdcId,
        Self::PublishedDate,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::DataType => "dataType.keyword",
            Self::Description => "lowercaseDescription.keyword",
            Self::FdcId => "fdcId",
            Self::PublishedDate => "publishedDate",
        }
    }
}

/// Sort direction. Only meaningful together with [`SortBy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl WireValue for SortOrder {
    const ALL: &'static [Self] = &[Self::Asc, Self::Desc];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Trade channels for branded foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeChannel {
    ChildNutritionFoodPrograms,
    Drug,
    FoodService,
    Grocery,
    MassMerchandising,
    Military,
    Online,
    Vending,
}

impl WireValue for TradeChannel {
    const ALL: &'static [Self] = &[
        Self::ChildNutritionFoodPrograms,
        Self::Drug,
        Self::FoodService,
        Self::Grocery,
        Self::MassMerchandising,
        Self::Military,
        Self::Online,
        Self::Vending,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::ChildNutritionFoodPrograms => "CHILD_NUTRITION_FOOD_PROGRAMS",
            Self::Drug => "DRUG",
            Self::FoodService => "FOOD_SERVICE",
            Self::Grocery => "GROCERY",
            Self::MassMerchandising => "MASS_MERCHANDISING",
            Self::Military => "MILITARY",
            Self::Online => "ONLINE",
            Self::Vending => "VENDING",
        }
    }
}

/// Default page size for paged endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size the upstream API accepts.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Default (first) page number.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Maximum number of FDC IDs per multi-food lookup.
pub const MAX_FDC_IDS: usize = 20;

/// Maximum number of nutrient numbers per lookup.
pub const MAX_NUTRIENTS: usize = 25;

/// Maximum number of data type filters.
pub const MAX_DATA_TYPES: usize = 4;

/// Maximum number of trade channel filters.
pub const MAX_TRADE_CHANNELS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_wire_value() {
        for data_type in DataType::ALL {
            let json = serde_json::to_value(data_type).unwrap();
            assert_eq!(json, data_type.as_str());
        }
        for channel in TradeChannel::ALL {
            let json = serde_json::to_value(channel).unwrap();
            assert_eq!(json, channel.as_str());
        }
        for sort_by in SortBy::ALL {
            let json = serde_json::to_value(sort_by).unwrap();
            assert_eq!(json, sort_by.as_str());
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(DataType::parse("SR Legacy"), Some(DataType::SrLegacy));
        assert_eq!(DataType::parse("Experimental"), None);
        assert_eq!(Format::parse("abridged"), Some(Format::Abridged));
        assert_eq!(Format::parse("Full"), None);
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
    }

    #[test]
    fn test_expected_lists_all_values() {
        assert_eq!(SortOrder::expected(), "asc, desc");
        assert_eq!(TradeChannel::ALL.len(), 8);
        assert_eq!(DataType::ALL.len(), MAX_DATA_TYPES);
    }

    #[test]
    fn test_format_default_is_full() {
        assert_eq!(Format::default(), Format::Full);
    }
}
