//! Multiple food lookup by FDC IDs.

use super::ResourceDefinition;
use crate::domains::fdc::types::{MAX_FDC_IDS, MAX_NUTRIENTS};
use crate::domains::fdc::{Format, UpstreamQuery, UpstreamRequest};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::query::QueryParams;

/// `food://foods?fdcIds=…&format=…&nutrients=…`
pub struct FoodsResource;

/// Validated request for up to 20 food records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodsRequest {
    pub fdc_ids: Vec<u64>,
    pub format: Format,
    pub nutrients: Vec<u32>,
}

impl ResourceDefinition for FoodsResource {
    const NAME: &'static str = "foods";
    const URI: &'static str = "food://foods";
    const URI_TEMPLATE: &'static str = "food://foods{?fdcIds,format,nutrients}";
    const TITLE: &'static str = "Foods";
    const DESCRIPTION: &'static str = "Details for up to 20 food items by FDC ID (comma \
        separated or repeated fdcIds). Unknown IDs are omitted from the result. Optional \
        format and nutrients behave as for food-details.";

    type Request = FoodsRequest;

    fn parse(params: &QueryParams) -> Result<Self::Request, ResourceError> {
        let fdc_ids = params.id_list("fdcIds", MAX_FDC_IDS)?;
        if fdc_ids.is_empty() {
            return Err(ResourceError::MissingParameter("fdcIds"));
        }

        Ok(FoodsRequest {
            fdc_ids,
            format: params.enum_value("format")?.unwrap_or_default(),
            nutrients: params.number_list("nutrients", MAX_NUTRIENTS)?,
        })
    }

    fn upstream_request(request: &Self::Request) -> UpstreamRequest {
        let query = UpstreamQuery::new()
            .set_list("fdcIds", &request.fdc_ids)
            .set_enum("format", Some(request.format))
            .set_list("nutrients", &request.nutrients);

        UpstreamRequest::new(["foods"], query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> Result<FoodsRequest, ResourceError> {
        FoodsResource::parse(&QueryParams::parse(Some(query)).unwrap())
    }

    #[test]
    fn test_missing_fdc_ids() {
        assert!(matches!(
            parse("format=abridged"),
            Err(ResourceError::MissingParameter("fdcIds"))
        ));
        assert!(parse("fdcIds=,").is_err());
    }

    #[test]
    fn test_too_many_ids() {
        let ids: Vec<String> = (1..=21).map(|i| i.to_string()).collect();
        let err = parse(&format!("fdcIds={}", ids.join(","))).unwrap_err();
        assert!(err.is_validation());

        let ids: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
        assert!(parse(&format!("fdcIds={}", ids.join(","))).is_ok());
    }

    #[test]
    fn test_non_numeric_ids_rejected() {
        for query in ["fdcIds=1,..", "fdcIds=abc", "fdcIds=1&fdcIds=x2"] {
            let err = parse(query).unwrap_err();
            assert!(
                matches!(err, ResourceError::InvalidParameter { .. }),
                "{} should be rejected",
                query
            );
        }
    }

    #[test]
    fn test_upstream_mapping() {
        let request = parse("fdcIds=534358&fdcIds=373052").unwrap();
        let upstream = FoodsResource::upstream_request(&request);

        assert_eq!(upstream.path(), "/foods");
        assert_eq!(upstream.query.get("fdcIds"), Some("534358,373052"));
        assert_eq!(upstream.query.get("format"), Some("full"));
        assert!(!upstream.query.contains("nutrients"));
    }
}
