//! Query-string parsing for resource addresses.
//!
//! Resource requests arrive as `food://<name>?key=value&...`. [`QueryParams`]
//! holds the decoded pairs and offers typed accessors; definitions use them
//! to build their request structs, so raw pairs never go further than that.

use super::error::ResourceError;
use crate::domains::fdc::WireValue;

/// Decoded query-string pairs of a resource address.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw (still percent-encoded) query string.
    pub fn parse(query: Option<&str>) -> Result<Self, ResourceError> {
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query.unwrap_or(""))
            .map_err(|e| ResourceError::invalid_uri(e.to_string()))?;
        Ok(Self { pairs })
    }

    /// First value for `name`; an empty value counts as absent.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// First value for a required parameter.
    pub fn required(&self, name: &'static str) -> Result<&str, ResourceError> {
        self.first(name)
            .ok_or(ResourceError::MissingParameter(name))
    }

    /// Required FDC ID parameter.
    pub fn required_id(&self, name: &'static str) -> Result<u64, ResourceError> {
        parse_id(name, self.required(name)?)
    }

    /// List of FDC IDs with at most `max` values.
    pub fn id_list(&self, name: &'static str, max: usize) -> Result<Vec<u64>, ResourceError> {
        let values = self.list(name);
        check_max(name, values.len(), max)?;
        values.into_iter().map(|raw| parse_id(name, raw)).collect()
    }

    /// All values for a list parameter.
    ///
    /// Accepts repeated keys (`a=1&a=2`), comma-delimited values (`a=1,2`)
    /// or a mix of both.
    pub fn list(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .flat_map(|(_, v)| v.split(','))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Optional enum parameter.
    pub fn enum_value<E: WireValue>(&self, name: &'static str) -> Result<Option<E>, ResourceError> {
        self.first(name)
            .map(|raw| parse_enum(name, raw))
            .transpose()
    }

    /// Optional enum list parameter with at most `max` values.
    pub fn enum_list<E: WireValue>(
        &self,
        name: &'static str,
        max: usize,
    ) -> Result<Vec<E>, ResourceError> {
        let values = self.list(name);
        check_max(name, values.len(), max)?;
        values.into_iter().map(|raw| parse_enum(name, raw)).collect()
    }

    /// Optional unsigned integer parameter within `min..=max`.
    pub fn number(
        &self,
        name: &'static str,
        min: u32,
        max: u32,
    ) -> Result<Option<u32>, ResourceError> {
        let Some(raw) = self.first(name) else {
            return Ok(None);
        };
        let value: u32 = raw
            .parse()
            .map_err(|_| ResourceError::invalid_parameter(name, format!("'{}' is not a positive integer", raw)))?;
        if value < min || value > max {
            return Err(ResourceError::invalid_parameter(
                name,
                format!("{} is out of range {}-{}", value, min, max),
            ));
        }
        Ok(Some(value))
    }

    /// Optional list of unsigned integers with at most `max` values.
    pub fn number_list(&self, name: &'static str, max: usize) -> Result<Vec<u32>, ResourceError> {
        let values = self.list(name);
        check_max(name, values.len(), max)?;
        values
            .into_iter()
            .map(|raw| {
                raw.parse().map_err(|_| {
                    ResourceError::invalid_parameter(name, format!("'{}' is not an integer", raw))
                })
            })
            .collect()
    }
}

/// FDC IDs are positive integers written with plain digits only.
fn parse_id(name: &'static str, raw: &str) -> Result<u64, ResourceError> {
    let invalid = || ResourceError::invalid_parameter(name, format!("'{}' is not a valid FDC ID", raw));

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid()),
    }
}

fn parse_enum<E: WireValue>(name: &'static str, raw: &str) -> Result<E, ResourceError> {
    E::parse(raw).ok_or_else(|| {
        ResourceError::invalid_parameter(
            name,
            format!("'{}' is not one of: {}", raw, E::expected()),
        )
    })
}

fn check_max(name: &'static str, count: usize, max: usize) -> Result<(), ResourceError> {
    if count > max {
        return Err(ResourceError::invalid_parameter(
            name,
            format!("at most {} values allowed, got {}", max, count),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::fdc::{DataType, Format};

    #[test]
    fn test_first_treats_empty_as_absent() {
        let params = QueryParams::parse(Some("fdcId=&format=abridged")).unwrap();
        assert_eq!(params.first("fdcId"), None);
        assert_eq!(params.first("format"), Some("abridged"));
        assert!(matches!(
            params.required("fdcId"),
            Err(ResourceError::MissingParameter("fdcId"))
        ));
    }

    #[test]
    fn test_list_accepts_both_encodings() {
        let params = QueryParams::parse(Some("fdcIds=1,2&fdcIds=3&fdcIds=")).unwrap();
        assert_eq!(params.list("fdcIds"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_percent_decoding() {
        let params = QueryParams::parse(Some("dataType=Survey%20(FNDDS),SR+Legacy")).unwrap();
        let types: Vec<DataType> = params.enum_list("dataType", 4).unwrap();
        assert_eq!(types, vec![DataType::SurveyFndds, DataType::SrLegacy]);
    }

    #[test]
    fn test_enum_value_rejects_unknown() {
        let params = QueryParams::parse(Some("format=tiny")).unwrap();
        let err = params.enum_value::<Format>("format").unwrap_err();
        assert!(err.to_string().contains("abridged, full"));
    }

    #[test]
    fn test_number_bounds() {
        let params = QueryParams::parse(Some("pageSize=201&pageNumber=x&ok=7")).unwrap();
        assert!(params.number("pageSize", 1, 200).is_err());
        assert!(params.number("pageNumber", 1, u32::MAX).is_err());
        assert_eq!(params.number("ok", 1, 200).unwrap(), Some(7));
        assert_eq!(params.number("missing", 1, 200).unwrap(), None);
    }

    #[test]
    fn test_ids_must_be_digits() {
        for raw in ["..", ".", "abc", "12a", "+5", "-1", "0", "1.5", "99999999999999999999"] {
            let params = QueryParams::parse(Some(&format!("fdcId={}", raw))).unwrap();
            let err = params.required_id("fdcId").unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", raw);
        }

        let params = QueryParams::parse(Some("fdcId=534358&fdcIds=1,2&bad=3,..")).unwrap();
        assert_eq!(params.required_id("fdcId").unwrap(), 534358);
        assert_eq!(params.id_list("fdcIds", 20).unwrap(), vec![1, 2]);
        assert!(params.id_list("bad", 20).is_err());
    }

    #[test]
    fn test_list_cardinality() {
        let params = QueryParams::parse(Some("nutrients=1,2,3")).unwrap();
        assert!(params.number_list("nutrients", 2).is_err());
        assert_eq!(params.number_list("nutrients", 25).unwrap(), vec![1, 2, 3]);
    }
}
