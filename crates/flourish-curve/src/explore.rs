//! Nearby-variant exploration.
//!
//! For every parameter of a curve, each neighbor value yields a copy of the
//! curve's short parameters with only that one key changed. An explorer
//! renders these as a row of preview thumbnails.

use flourish_params::ShortParams;
use serde::Serialize;

use crate::harmonograph::Harmonograph;

/// One neighbor of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    /// Encoded neighbor value.
    pub value: String,
    /// Full short params of the varied curve.
    pub params: ShortParams,
}

/// All neighbors of one parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantGroup {
    /// `"<owner> <parameter name>"`, e.g. `"xa frequency"`.
    pub label: String,
    /// Short key being varied.
    pub key: String,
    /// Auxiliary dimension the parameter drives, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Current encoded value.
    pub current: String,
    pub variants: Vec<Variant>,
}

/// Builds one [`VariantGroup`] per curve parameter, in parameter order.
pub fn adjacent_variants(curve: &Harmonograph) -> Vec<VariantGroup> {
    let base = curve.short_parameters();
    curve
        .parameters()
        .iter()
        .map(|param| {
            let key = param.short_key();
            let variants = param
                .encoded_neighbors()
                .into_iter()
                .map(|value| {
                    let mut params = base.clone();
                    params.insert(key.clone(), value.clone());
                    Variant { value, params }
                })
                .collect();
            VariantGroup {
                label: param.label(),
                key,
                group: param.group.map(str::to_string),
                current: param.spec.encode(param.value),
                variants,
            }
        })
        .collect()
}
