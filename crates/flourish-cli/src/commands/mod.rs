//! CLI command implementations

pub mod config;
pub mod gallery;
pub mod neighbors;
pub mod points;
pub mod random;

use anyhow::{Context, Result};
use flourish_curve::Harmonograph;
use flourish_params::ShortParams;

/// Where printed curve links point, if anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkOptions {
    /// Route prefix such as `/one`. Bare query strings are printed without it.
    pub route: Option<String>,
    /// Preview size appended as `sx`/`sy`.
    pub size: Option<u32>,
}

impl LinkOptions {
    /// Renders `params` as a bare query string or a `route?query` link.
    pub fn render(&self, params: &ShortParams) -> String {
        match &self.route {
            None => params.to_query_string(),
            Some(route) => {
                let extra: Vec<(&str, String)> = match self.size {
                    Some(size) => vec![("sx", size.to_string()), ("sy", size.to_string())],
                    None => Vec::new(),
                };
                params.url(route, &extra)
            }
        }
    }
}

/// Parses a query string, or a link ending in one, into short params.
///
/// Link-only keys (`sx`, `sy`) are dropped.
pub fn parse_query(input: &str) -> Result<ShortParams> {
    let query = input.split_once('?').map_or(input, |(_, q)| q);
    let mut params = ShortParams::from_query_string(query)
        .with_context(|| format!("Failed to parse query: {}", input))?;
    params.remove("sx");
    params.remove("sy");
    Ok(params)
}

/// Rebuilds a curve from a query string or link.
pub fn parse_curve(input: &str) -> Result<Harmonograph> {
    let params = parse_query(input)?;
    Harmonograph::from_short_params("", &params)
        .with_context(|| format!("Failed to decode curve: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_query_accepts_links() {
        let params = parse_query("/one?xaf=3&d=1.25&sx=200&sy=200").unwrap();
        assert_eq!(params.to_query_string(), "xaf=3&d=1.25");
        assert_eq!(parse_query("?xaf=3").unwrap().get("xaf"), Some("3"));
    }

    #[test]
    fn test_parse_curve_reports_bad_values() {
        let err = parse_curve("xaf=abc").unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("xaf"), "{}", chain);
    }

    #[test]
    fn test_link_rendering() {
        let params: ShortParams = vec![("xaf", "3")].into_iter().collect();
        assert_eq!(LinkOptions::default().render(&params), "xaf=3");

        let links = LinkOptions {
            route: Some("/one".to_string()),
            size: Some(200),
        };
        assert_eq!(links.render(&params), "/one?xaf=3&sx=200&sy=200");
    }
}
