//! The [`Parameterized`] capability.
//!
//! A type declares an ordered, fixed slice of [`ParameterSpec`]s and how to
//! read and rebuild its values. Encoding, decoding, random construction and
//! adjacency queries are then provided generically over that registry.
//!
//! Declaration order matters: it fixes the layout of short parameter maps
//! and the order in which values are sampled during random construction.

use crate::context::RandomContext;
use crate::error::ParamError;
use crate::parameter::ParameterSpec;
use crate::short::ShortParams;

/// Values for a type's specs, looked up by spec key.
#[derive(Debug, Clone, Copy)]
pub struct ParamValues<'a> {
    specs: &'static [ParameterSpec],
    values: &'a [f64],
}

impl<'a> ParamValues<'a> {
    /// Pairs `values` positionally with `specs`.
    pub fn new(specs: &'static [ParameterSpec], values: &'a [f64]) -> Self {
        Self { specs, values }
    }

    /// Value of the spec with `key`.
    ///
    /// Falls back to the spec default when no value was supplied, and to
    /// `0.0` for a key the type never declared.
    pub fn get(&self, key: &str) -> f64 {
        match self.specs.iter().position(|spec| spec.key() == key) {
            Some(index) => self
                .values
                .get(index)
                .copied()
                .unwrap_or_else(|| self.specs[index].default()),
            None => 0.0,
        }
    }
}

/// One live parameter of an object, for adjacency UIs.
#[derive(Debug, Clone, Copy)]
pub struct ParameterRef<'a> {
    pub spec: &'static ParameterSpec,
    /// Instance name of the owning object.
    pub owner: &'a str,
    pub value: f64,
    /// Optional grouping supplied by a composite owner.
    pub group: Option<&'a str>,
}

impl ParameterRef<'_> {
    /// Full short key (`owner + spec key`).
    pub fn short_key(&self) -> String {
        format!("{}{}", self.owner, self.spec.key())
    }

    /// `"<owner> <display name>"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.owner, self.spec.name())
    }

    /// Neighbor values in their encoded form.
    pub fn encoded_neighbors(&self) -> Vec<String> {
        self.spec
            .neighbors(self.value)
            .into_iter()
            .map(|v| self.spec.encode(v))
            .collect()
    }
}

/// A type whose state is a fixed, declared list of scalar parameters.
pub trait Parameterized: Sized {
    /// The declared specs, in declaration order.
    fn specs() -> &'static [ParameterSpec];

    /// Instance name, used as the short key prefix.
    fn name(&self) -> &str;

    /// Current values, one per spec, in declaration order.
    fn values(&self) -> Vec<f64>;

    /// Builds an instance from values looked up by spec key.
    fn from_values(name: &str, values: ParamValues<'_>) -> Self;

    /// Encodes every parameter as `name + key -> string`.
    fn short_parameters(&self) -> ShortParams {
        Self::specs()
            .iter()
            .zip(self.values())
            .map(|(spec, value)| (format!("{}{}", self.name(), spec.key()), spec.encode(value)))
            .collect()
    }

    /// Decodes an instance named `name` from `params`.
    ///
    /// Absent keys take the spec default; present but malformed values fail.
    fn from_short_params(name: &str, params: &ShortParams) -> Result<Self, ParamError> {
        let values = Self::specs()
            .iter()
            .map(|spec| {
                let key = format!("{}{}", name, spec.key());
                match params.get(&key) {
                    Some(raw) => spec.decode(&key, raw),
                    None => Ok(spec.default()),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_values(name, ParamValues::new(Self::specs(), &values)))
    }

    /// Samples every spec in declaration order.
    fn make_random(name: &str, ctx: &mut RandomContext) -> Self {
        let values: Vec<f64> = Self::specs().iter().map(|spec| spec.sample(ctx)).collect();
        Self::from_values(name, ParamValues::new(Self::specs(), &values))
    }

    /// Every parameter with its owner and current value.
    fn parameters(&self) -> Vec<ParameterRef<'_>> {
        Self::specs()
            .iter()
            .zip(self.values())
            .map(|(spec, value)| ParameterRef {
                spec,
                owner: self.name(),
                value,
                group: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Knob {
        name: String,
        level: f64,
        steps: f64,
    }

    fn sample_level(ctx: &mut RandomContext) -> f64 {
        ctx.rng().uniform(0.0, 1.0)
    }

    static KNOB_SPECS: [ParameterSpec; 2] = [
        ParameterSpec::new("level", "l", 0.25)
            .places(2)
            .adjacent_step(0.1)
            .random(sample_level),
        ParameterSpec::new("steps", "s", 4.0).integer(),
    ];

    impl Parameterized for Knob {
        fn specs() -> &'static [ParameterSpec] {
            &KNOB_SPECS
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn values(&self) -> Vec<f64> {
            vec![self.level, self.steps]
        }

        fn from_values(name: &str, values: ParamValues<'_>) -> Self {
            Knob {
                name: name.to_string(),
                level: values.get("l"),
                steps: values.get("s"),
            }
        }
    }

    #[test]
    fn test_short_parameters_prefixes_name() {
        let knob = Knob {
            name: "k1".to_string(),
            level: 0.5,
            steps: 8.0,
        };
        let short = knob.short_parameters();
        assert_eq!(short.to_query_string(), "k1l=0.5&k1s=8");
    }

    #[test]
    fn test_from_short_params_defaults_missing() {
        let params: ShortParams = vec![("k1s", "6")].into_iter().collect();
        let knob = Knob::from_short_params("k1", &params).unwrap();
        assert_eq!(
            knob,
            Knob {
                name: "k1".to_string(),
                level: 0.25,
                steps: 6.0,
            }
        );
    }

    #[test]
    fn test_from_short_params_reports_key() {
        let params: ShortParams = vec![("k1s", "lots")].into_iter().collect();
        let err = Knob::from_short_params("k1", &params).unwrap_err();
        assert_eq!(err.key(), Some("k1s"));
    }

    #[test]
    fn test_make_random_is_deterministic_and_quantized() {
        let a = Knob::make_random("k", &mut RandomContext::new(11));
        let b = Knob::make_random("k", &mut RandomContext::new(11));
        assert_eq!(a, b);
        assert_eq!(a.steps, 4.0);

        let rebuilt = Knob::from_short_params("k", &a.short_parameters()).unwrap();
        assert_eq!(rebuilt, a);
    }

    #[test]
    fn test_parameters_feed() {
        let knob = Knob {
            name: "k".to_string(),
            level: 0.5,
            steps: 2.0,
        };
        let params = knob.parameters();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].short_key(), "kl");
        assert_eq!(params[0].label(), "k level");
        assert_eq!(params[0].encoded_neighbors(), vec!["0.3", "0.4", "0.6", "0.7"]);
        assert!(params[1].encoded_neighbors().is_empty());
    }

    #[test]
    fn test_param_values_fallbacks() {
        let values = ParamValues::new(&KNOB_SPECS, &[0.75]);
        assert_eq!(values.get("l"), 0.75);
        assert_eq!(values.get("s"), 4.0);
        assert_eq!(values.get("missing"), 0.0);
    }
}
