//! Query string parsing for the list endpoint.
//!
//! Surface:
//! - `sort=-timestamp,user` (comma-separated, `-` prefix for descending)
//! - `where=protocol==ldap,timestamp>=1700000000` (AND-combined terms,
//!   operators `==`, `!=`, `<`, `<=`, `>`, `>=`)
//! - `page=2` (1-based)
//! - `max_results=10`

use std::collections::HashMap;

use serde_json::Value;

use crate::store::{FilterExpr, FilterOp, FilterSet, SortKey};

use super::errors::{ApiError, ApiResult};

/// Parsed pagination surface of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: usize,
    /// Requested page size, before clamping.
    pub max_results: usize,
}

/// Parses the supported list query parameters.
///
/// Unsupported parameters are rejected rather than ignored. `default_limit`
/// seeds `max_results`; clamping to the configured maximum is the store's
/// job.
pub fn parse_list_params(
    params: &HashMap<String, String>,
    default_limit: usize,
) -> ApiResult<(FilterSet, Vec<SortKey>, PageParams)> {
    let mut filter = FilterSet::new();
    let mut sort = Vec::new();
    let mut page = 1usize;
    let mut max_results = default_limit;

    for (key, value) in params {
        match key.as_str() {
            "sort" => sort = parse_sort(value)?,
            "where" => filter = parse_where(value)?,
            "page" => page = parse_positive(value, "page")?,
            "max_results" => max_results = parse_positive(value, "max_results")?,
            other => {
                return Err(ApiError::InvalidQueryParam(format!(
                    "unsupported parameter '{}'",
                    other
                )));
            }
        }
    }

    Ok((filter, sort, PageParams { page, max_results }))
}

/// Parses a sort specification: `-timestamp,user`.
fn parse_sort(value: &str) -> ApiResult<Vec<SortKey>> {
    let mut keys = Vec::new();

    for part in value.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let key = match part.strip_prefix('-') {
            Some(field) if !field.is_empty() => SortKey::desc(field),
            Some(_) => {
                return Err(ApiError::InvalidQueryParam(
                    "sort field cannot be empty".into(),
                ));
            }
            None => SortKey::asc(part),
        };
        keys.push(key);
    }

    Ok(keys)
}

/// Parses a `where` clause into AND-combined predicates.
fn parse_where(value: &str) -> ApiResult<FilterSet> {
    let mut filter = FilterSet::new();

    for term in value.split(',') {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }
        filter = filter.and(parse_term(term)?);
    }

    Ok(filter)
}

/// Parses one `field <op> value` term.
///
/// Two-character operators come first so `<=` is not read as `<`.
fn parse_term(term: &str) -> ApiResult<FilterExpr> {
    const OPS: [(&str, FilterOp); 6] = [
        ("==", FilterOp::Eq),
        ("!=", FilterOp::Ne),
        ("<=", FilterOp::Le),
        (">=", FilterOp::Ge),
        ("<", FilterOp::Lt),
        (">", FilterOp::Gt),
    ];

    for (token, op) in OPS {
        if let Some(idx) = term.find(token) {
            let field = term[..idx].trim();
            let raw = term[idx + token.len()..].trim();

            if field.is_empty() || raw.is_empty() {
                return Err(ApiError::InvalidQueryParam(format!(
                    "malformed filter term '{}'",
                    term
                )));
            }

            return Ok(FilterExpr::new(field, op, parse_scalar(raw)));
        }
    }

    Err(ApiError::InvalidQueryParam(format!(
        "unrecognized filter term '{}'",
        term
    )))
}

/// Parses a filter value: null, boolean, integer, float, or string.
fn parse_scalar(raw: &str) -> Value {
    match raw {
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }

    Value::String(raw.to_string())
}

/// Parses a 1-or-greater integer parameter.
fn parse_positive(value: &str, name: &str) -> ApiResult<usize> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ApiError::InvalidQueryParam(format!(
            "'{}' must be a positive integer, got '{}'",
            name, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_no_params() {
        let (filter, sort, page) = parse_list_params(&params(&[]), 25).unwrap();
        assert!(filter.is_empty());
        assert!(sort.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.max_results, 25);
    }

    #[test]
    fn test_parse_sort() {
        let keys = parse_sort("-timestamp,user").unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].field, "timestamp");
        assert!(!keys[0].ascending);
        assert_eq!(keys[1].field, "user");
        assert!(keys[1].ascending);
    }

    #[test]
    fn test_parse_sort_rejects_bare_minus() {
        assert!(parse_sort("-").is_err());
    }

    #[test]
    fn test_parse_where_terms() {
        let filter = parse_where("protocol==ldap,timestamp>=1700000000").unwrap();
        assert_eq!(filter.filters.len(), 2);

        assert_eq!(filter.filters[0].field, "protocol");
        assert_eq!(filter.filters[0].op, FilterOp::Eq);
        assert_eq!(filter.filters[0].value, json!("ldap"));

        assert_eq!(filter.filters[1].field, "timestamp");
        assert_eq!(filter.filters[1].op, FilterOp::Ge);
        assert_eq!(filter.filters[1].value, json!(1700000000));
    }

    #[test]
    fn test_two_char_operators_win_over_one_char() {
        let filter = parse_where("timestamp<=5").unwrap();
        assert_eq!(filter.filters[0].op, FilterOp::Le);

        let filter = parse_where("timestamp!=5").unwrap();
        assert_eq!(filter.filters[0].op, FilterOp::Ne);
    }

    #[test]
    fn test_scalar_parsing() {
        assert_eq!(parse_scalar("null"), Value::Null);
        assert_eq!(parse_scalar("true"), json!(true));
        assert_eq!(parse_scalar("42"), json!(42));
        assert_eq!(parse_scalar("1.5"), json!(1.5));
        assert_eq!(parse_scalar("ldap"), json!("ldap"));
    }

    #[test]
    fn test_malformed_terms_rejected() {
        assert!(parse_where("protocol").is_err());
        assert!(parse_where("==ldap").is_err());
        assert!(parse_where("protocol==").is_err());
    }

    #[test]
    fn test_pagination_params() {
        let (_, _, page) =
            parse_list_params(&params(&[("page", "3"), ("max_results", "10")]), 25).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.max_results, 10);
    }

    #[test]
    fn test_zero_and_garbage_pagination_rejected() {
        assert!(parse_list_params(&params(&[("page", "0")]), 25).is_err());
        assert!(parse_list_params(&params(&[("max_results", "lots")]), 25).is_err());
    }

    #[test]
    fn test_unsupported_parameter_rejected() {
        let result = parse_list_params(&params(&[("embed", "1")]), 25);
        assert!(matches!(result, Err(ApiError::InvalidQueryParam(_))));
    }
}
