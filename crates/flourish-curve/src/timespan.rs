//! Sampling windows.

use flourish_params::{ParamValues, ParameterSpec, Parameterized};
use serde::Serialize;

static TIME_SPAN_SPECS: [ParameterSpec; 2] = [
    ParameterSpec::new("center", "c", 900.0).adjacent_step(100.0),
    ParameterSpec::new("width", "w", 200.0).adjacent_step(50.0),
];

/// Half-open window `[center - width / 2, center + width / 2)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSpan {
    name: String,
    center: f64,
    width: f64,
}

impl TimeSpan {
    pub fn new(name: impl Into<String>, center: f64, width: f64) -> Self {
        Self {
            name: name.into(),
            center: TIME_SPAN_SPECS[0].quantize(center),
            width: TIME_SPAN_SPECS[1].quantize(width),
        }
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// First sample time.
    pub fn start(&self) -> f64 {
        self.center - self.width / 2.0
    }

    /// Exclusive end of the window.
    pub fn end(&self) -> f64 {
        self.center + self.width / 2.0
    }

    /// Number of samples `floor(width * density / dt)`.
    ///
    /// Ratios within floating-point noise of an integer count as that
    /// integer, so `width = 200, dt = 0.01` yields exactly 20000.
    pub fn sample_count(&self, density: f64, dt: f64) -> usize {
        let ratio = self.width * density / dt;
        if !ratio.is_finite() || ratio <= 0.0 {
            return 0;
        }
        let nearest = ratio.round();
        if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
            nearest as usize
        } else {
            ratio.floor() as usize
        }
    }

    /// Sample times, evenly spaced by `dt / density`.
    pub fn sample_times(&self, density: f64, dt: f64) -> Vec<f64> {
        let step = dt / density;
        let start = self.start();
        (0..self.sample_count(density, dt))
            .map(|i| start + i as f64 * step)
            .collect()
    }
}

impl Parameterized for TimeSpan {
    fn specs() -> &'static [ParameterSpec] {
        &TIME_SPAN_SPECS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> Vec<f64> {
        vec![self.center, self.width]
    }

    fn from_values(name: &str, values: ParamValues<'_>) -> Self {
        TimeSpan::new(name, values.get("c"), values.get("w"))
    }
}
