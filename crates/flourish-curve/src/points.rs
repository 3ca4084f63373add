//! The point engine.
//!
//! Sample times run over the curve's time span with step `dt / density`.
//! For each requested dimension the waves are summed, multiplied by the
//! ramp and divided by `len(x waves) + 1`. The `x` wave count is used as
//! the normalizer whichever dimensions are requested.

use crate::error::CurveError;
use crate::harmonograph::Harmonograph;
use crate::ramp::Ramp;
use crate::wave::Wave;

/// Target interval of [`normalize_jointly`] as used by renderers.
pub const NORMALIZED_RANGE: (f64, f64) = (-0.5, 0.5);

/// Lazy, finite stream of sample tuples.
///
/// Each item has one component per requested dimension, in request order.
/// The stream is a pure function of the curve, so cloning it or calling
/// [`Harmonograph::points`] again replays the identical sequence.
#[derive(Debug, Clone)]
pub struct Points<'a> {
    channels: Vec<&'a [Wave]>,
    ramp: &'a Ramp,
    density: f64,
    start: f64,
    step: f64,
    scale: f64,
    index: usize,
    count: usize,
}

impl<'a> Points<'a> {
    pub(crate) fn new(curve: &'a Harmonograph, names: &[&str], dt: f64) -> Result<Self, CurveError> {
        curve.check_complete()?;
        let density = curve.density();
        if !dt.is_finite() || dt <= 0.0 {
            return Err(CurveError::InvalidSampling(format!(
                "dt must be finite and positive, got {}",
                dt
            )));
        }
        if !density.is_finite() || density <= 0.0 {
            return Err(CurveError::InvalidSampling(format!(
                "density must be finite and positive, got {}",
                density
            )));
        }

        let channels = names
            .iter()
            .map(|name| {
                curve
                    .dimension(name)
                    .map(|d| d.waves.as_slice())
                    .ok_or_else(|| CurveError::UnknownDimension(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (Some(ramp), Some(time_span), Some(x)) =
            (curve.ramp(), curve.time_span(), curve.dimension("x"))
        else {
            return Err(CurveError::IncompleteCurve("ramp, time span or dimension 'x'"));
        };
        let stop = ramp.stop();
        if !stop.is_finite() || stop <= 0.0 {
            return Err(CurveError::InvalidSampling(format!(
                "ramp stop must be finite and positive, got {}",
                stop
            )));
        }

        Ok(Self {
            channels,
            ramp,
            density,
            start: time_span.start(),
            step: dt / density,
            scale: (x.waves.len() + 1) as f64,
            index: 0,
            count: time_span.sample_count(density, dt),
        })
    }

    /// Time of the `index`-th sample.
    #[inline]
    pub fn time_at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    fn tuple_at(&self, index: usize) -> Vec<f64> {
        let t = self.time_at(index);
        let envelope = self.ramp.sample(t);
        self.channels
            .iter()
            .map(|waves| {
                let sum: f64 = waves.iter().map(|w| w.sample(t, self.density)).sum();
                sum * envelope / self.scale
            })
            .collect()
    }
}

impl Iterator for Points<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        if self.index >= self.count {
            return None;
        }
        let tuple = self.tuple_at(self.index);
        self.index += 1;
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Vec<f64>> {
        self.index = self.index.saturating_add(n).min(self.count);
        self.next()
    }
}

impl ExactSizeIterator for Points<'_> {}

/// Rescales all components jointly into `target`.
///
/// The min and max are taken across every component of every tuple, so
/// relative proportions between dimensions are preserved. A constant (or
/// empty) input has no range to stretch and is rejected.
pub fn normalize_jointly(points: &[Vec<f64>], target: (f64, f64)) -> Result<Vec<Vec<f64>>, CurveError> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in points.iter().flatten() {
        min = min.min(*v);
        max = max.max(*v);
    }
    let has_range = max > min;
    if !has_range {
        let value = if min.is_finite() { min } else { 0.0 };
        return Err(CurveError::DegenerateCurve { value });
    }

    let (lo, hi) = target;
    let span = max - min;
    Ok(points
        .iter()
        .map(|tuple| tuple.iter().map(|v| lo + (hi - lo) * (v - min) / span).collect())
        .collect())
}

impl Harmonograph {
    /// Samples the requested dimensions and rescales them jointly into
    /// [`NORMALIZED_RANGE`]. Not part of the default point path.
    pub fn normalized_points(&self, dimension_names: &[&str], dt: f64) -> Result<Vec<Vec<f64>>, CurveError> {
        let raw: Vec<Vec<f64>> = self.points(dimension_names, dt)?.collect();
        normalize_jointly(&raw, NORMALIZED_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmonograph::{CurveSettings, DimensionRole};
    use crate::timespan::TimeSpan;
    use pretty_assertions::assert_eq;

    fn curve(density: f64) -> Harmonograph {
        let mut curve = Harmonograph::shell(CurveSettings::new("", density, 0));
        curve.attach_dimension(
            "x",
            vec![Wave::new("xa", 2.0, 0.5, 0.0, 0.0), Wave::new("xb", 1.0, 0.25, 0.0, 0.0)],
            DimensionRole::Primary,
        );
        curve.attach_dimension("y", vec![Wave::new("ya", 3.0, 0.5, 0.0, 0.0)], DimensionRole::Primary);
        curve.attach_ramp(Ramp::new("r", 500.0));
        curve.attach_time_span(TimeSpan::new("ts", 10.0, 20.0));
        curve
    }

    #[test]
    fn test_scale_uses_x_count_for_every_dimension() {
        let c = curve(1.0);
        let pts: Vec<Vec<f64>> = c.points(&["y"], 1.0).unwrap().collect();
        let t: f64 = 5.0;
        let expected = 0.5 * (3.0 * t).sin() * (t / 500.0) / 3.0;
        assert!((pts[5][0] - expected).abs() < 1e-15);
    }

    #[test]
    fn test_exact_size_and_nth() {
        let c = curve(1.0);
        let mut pts = c.points(&["x", "y"], 1.0).unwrap();
        assert_eq!(pts.len(), 20);
        let tenth = pts.nth(10).unwrap();
        assert_eq!(pts.len(), 9);
        assert_eq!(tenth, c.points(&["x", "y"], 1.0).unwrap().nth(10).unwrap());
        assert!(pts.nth(100).is_none());
    }

    #[test]
    fn test_time_at_respects_density() {
        let c = curve(2.0);
        let pts = c.points(&["x"], 1.0).unwrap();
        assert_eq!(pts.time_at(0), 0.0);
        assert_eq!(pts.time_at(3), 1.5);
        assert_eq!(pts.len(), 40);
    }

    #[test]
    fn test_rejects_bad_dt() {
        let c = curve(1.0);
        assert!(matches!(c.points(&["x"], 0.0), Err(CurveError::InvalidSampling(_))));
        assert!(matches!(c.points(&["x"], f64::NAN), Err(CurveError::InvalidSampling(_))));
    }

    #[test]
    fn test_rejects_zero_density() {
        let c = curve(0.0);
        assert!(matches!(c.points(&["x"], 1.0), Err(CurveError::InvalidSampling(_))));
    }

    #[test]
    fn test_rejects_non_positive_ramp_stop() {
        for stop in [0.0, -500.0] {
            let mut c = curve(1.0);
            c.attach_ramp(Ramp::new("r", stop));
            assert_eq!(
                c.points(&["x", "y"], 1.0).err(),
                Some(CurveError::InvalidSampling(format!(
                    "ramp stop must be finite and positive, got {}",
                    stop
                )))
            );
        }
    }

    #[test]
    fn test_normalize_jointly() {
        let raw = vec![vec![0.0, 2.0], vec![1.0, 4.0]];
        let out = normalize_jointly(&raw, (-0.5, 0.5)).unwrap();
        assert_eq!(out, vec![vec![-0.5, 0.0], vec![-0.25, 0.5]]);
    }

    #[test]
    fn test_normalize_degenerate() {
        let raw = vec![vec![0.25, 0.25]];
        assert_eq!(
            normalize_jointly(&raw, NORMALIZED_RANGE),
            Err(CurveError::DegenerateCurve { value: 0.25 })
        );
        assert_eq!(
            normalize_jointly(&[], NORMALIZED_RANGE),
            Err(CurveError::DegenerateCurve { value: 0.0 })
        );
    }

    #[test]
    fn test_normalized_points_bounds() {
        let c = curve(1.0);
        let out = c.normalized_points(&["x", "y"], 0.5).unwrap();
        let all: Vec<f64> = out.iter().flatten().copied().collect();
        let min = all.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = all.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((min + 0.5).abs() < 1e-12);
        assert!((max - 0.5).abs() < 1e-12);
    }
}
