//! Symmetry tags for random construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurveError;
use crate::wave::Parity;

/// Frequency parity constraint over the x and y pendulum sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    /// No constraint.
    #[serde(rename = "N", alias = "none")]
    None,
    /// Odd x, even y: mirror image across the x axis.
    #[serde(rename = "X")]
    X,
    /// Even x, odd y: mirror image across the y axis.
    #[serde(rename = "Y")]
    Y,
    /// Odd x, odd y: point symmetry about the origin.
    #[serde(rename = "R")]
    R,
}

impl Symmetry {
    /// Every tag.
    pub const ALL: [Symmetry; 4] = [Symmetry::None, Symmetry::X, Symmetry::Y, Symmetry::R];

    /// The constrained tags used by default.
    pub const SYMMETRIC: [Symmetry; 3] = [Symmetry::X, Symmetry::Y, Symmetry::R];

    pub fn tag(&self) -> &'static str {
        match self {
            Symmetry::None => "N",
            Symmetry::X => "X",
            Symmetry::Y => "Y",
            Symmetry::R => "R",
        }
    }

    /// Parity limits for the (x, y) dimensions.
    pub fn limits(&self) -> (Option<Parity>, Option<Parity>) {
        match self {
            Symmetry::None => (None, None),
            Symmetry::X => (Some(Parity::Odd), Some(Parity::Even)),
            Symmetry::Y => (Some(Parity::Even), Some(Parity::Odd)),
            Symmetry::R => (Some(Parity::Odd), Some(Parity::Odd)),
        }
    }

    /// Parses a list of tags, failing on the first unknown one.
    pub fn parse_all<S: AsRef<str>>(tags: &[S]) -> Result<Vec<Symmetry>, CurveError> {
        tags.iter().map(|tag| tag.as_ref().parse()).collect()
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Symmetry {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" | "none" => Ok(Symmetry::None),
            "X" => Ok(Symmetry::X),
            "Y" => Ok(Symmetry::Y),
            "R" => Ok(Symmetry::R),
            other => Err(CurveError::InvalidSymmetry(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_limits() {
        assert_eq!(Symmetry::X.limits(), (Some(Parity::Odd), Some(Parity::Even)));
        assert_eq!(Symmetry::Y.limits(), (Some(Parity::Even), Some(Parity::Odd)));
        assert_eq!(Symmetry::R.limits(), (Some(Parity::Odd), Some(Parity::Odd)));
        assert_eq!(Symmetry::None.limits(), (None, None));
    }

    #[test]
    fn test_parse() {
        assert_eq!("X".parse::<Symmetry>().unwrap(), Symmetry::X);
        assert_eq!("none".parse::<Symmetry>().unwrap(), Symmetry::None);
        assert_eq!("N".parse::<Symmetry>().unwrap(), Symmetry::None);
        assert_eq!(
            "Z".parse::<Symmetry>(),
            Err(CurveError::InvalidSymmetry("Z".to_string()))
        );
    }

    #[test]
    fn test_parse_all() {
        assert_eq!(
            Symmetry::parse_all(&["X", "R"]).unwrap(),
            vec![Symmetry::X, Symmetry::R]
        );
        assert!(Symmetry::parse_all(&["X", "x"]).is_err());
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&Symmetry::SYMMETRIC).unwrap();
        assert_eq!(json, r#"["X","Y","R"]"#);
        let parsed: Vec<Symmetry> = serde_json::from_str(r#"["none","N","R"]"#).unwrap();
        assert_eq!(parsed, vec![Symmetry::None, Symmetry::None, Symmetry::R]);
    }
}
