//! Linear amplitude envelope.

use flourish_params::{ParamValues, ParameterSpec, Parameterized};
use serde::Serialize;

static RAMP_SPECS: [ParameterSpec; 1] = [ParameterSpec::new("stop", "z", 500.0)];

/// Envelope `t / stop`: zero at `t = 0`, one at `t = stop`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ramp {
    name: String,
    stop: f64,
}

impl Ramp {
    pub fn new(name: impl Into<String>, stop: f64) -> Self {
        Self {
            name: name.into(),
            stop: RAMP_SPECS[0].quantize(stop),
        }
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    #[inline]
    pub fn sample(&self, t: f64) -> f64 {
        t / self.stop
    }

    pub fn evaluate(&self, t: &[f64]) -> Vec<f64> {
        t.iter().map(|&t| self.sample(t)).collect()
    }
}

impl Parameterized for Ramp {
    fn specs() -> &'static [ParameterSpec] {
        &RAMP_SPECS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> Vec<f64> {
        vec![self.stop]
    }

    fn from_values(name: &str, values: ParamValues<'_>) -> Self {
        Ramp::new(name, values.get("z"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flourish_params::ShortParams;

    #[test]
    fn test_evaluate() {
        let ramp = Ramp::new("r", 500.0);
        assert_eq!(ramp.evaluate(&[0.0, 250.0, 500.0]), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_short_params() {
        let ramp = Ramp::new("r", 750.0);
        assert_eq!(ramp.short_parameters().to_query_string(), "rz=750");

        let back = Ramp::from_short_params("r", &ramp.short_parameters()).unwrap();
        assert_eq!(back, ramp);

        let default = Ramp::from_short_params("r", &ShortParams::new()).unwrap();
        assert_eq!(default.stop(), 500.0);
    }

    #[test]
    fn test_no_neighbors() {
        let ramp = Ramp::new("r", 500.0);
        assert!(ramp.parameters()[0].encoded_neighbors().is_empty());
    }
}
