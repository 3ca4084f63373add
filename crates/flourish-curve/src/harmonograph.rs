//! The harmonograph curve.
//!
//! A [`Harmonograph`] is assembled in two phases: a shell carrying the
//! density/style selector, then the dimensions, ramp and time span. The
//! split exists because the number of pendulums per dimension is inferred
//! from the short-param keys before any wave list can be built.

use std::collections::BTreeSet;

use flourish_params::{
    ParamValues, ParameterRef, ParameterSpec, Parameterized, RandomContext, ShortParams,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CurveError;
use crate::points::Points;
use crate::ramp::Ramp;
use crate::style::{RenderStyle, STYLES};
use crate::symmetry::Symmetry;
use crate::timespan::TimeSpan;
use crate::wave::Wave;

/// Pendulums are lettered `a..=z` within a dimension.
pub const MAX_PENDULUMS: usize = 26;

/// Ramp stop used by random construction unless told otherwise.
pub const DEFAULT_RAMP_STOP: f64 = 500.0;

/// Window attached by random construction.
pub const RANDOM_TIME_SPAN: (f64, f64) = (1800.0, 400.0);

const RAMP_NAME: &str = "r";
const TIME_SPAN_NAME: &str = "ts";

fn density_neighbors(value: f64) -> Vec<f64> {
    vec![value * 0.8 * 0.8, value * 0.8, value / 0.8, value / 0.8 / 0.8]
}

fn style_neighbors(_: f64) -> Vec<f64> {
    (0..STYLES.len()).map(|i| i as f64).collect()
}

static SETTINGS_SPECS: [ParameterSpec; 2] = [
    ParameterSpec::new("density", "d", 1.0)
        .places(2)
        .adjacent_fn(density_neighbors),
    ParameterSpec::new("style", "s", 0.0)
        .integer()
        .adjacent_fn(style_neighbors),
];

/// The curve's own parameters: time compression and style preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveSettings {
    name: String,
    density: f64,
    style: usize,
}

impl CurveSettings {
    pub fn new(name: impl Into<String>, density: f64, style: usize) -> Self {
        Self {
            name: name.into(),
            density: SETTINGS_SPECS[0].quantize(density),
            style,
        }
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn style(&self) -> usize {
        self.style
    }
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self::new("", 1.0, 0)
    }
}

impl Parameterized for CurveSettings {
    fn specs() -> &'static [ParameterSpec] {
        &SETTINGS_SPECS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> Vec<f64> {
        vec![self.density, self.style as f64]
    }

    fn from_values(name: &str, values: ParamValues<'_>) -> Self {
        // Negative indices saturate to 0.
        CurveSettings::new(name, values.get("d"), values.get("s").max(0.0) as usize)
    }
}

/// Whether a dimension is geometry or an auxiliary modulation channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionRole {
    Primary,
    Auxiliary,
}

/// One named output channel and the pendulums summed into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub name: String,
    pub role: DimensionRole,
    pub waves: Vec<Wave>,
}

/// A parameter of the curve, tagged with the auxiliary dimension it drives.
pub type CurveParameter<'a> = ParameterRef<'a>;

/// Sum-of-pendulums curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Harmonograph {
    settings: CurveSettings,
    dimensions: Vec<Dimension>,
    ramp: Option<Ramp>,
    time_span: Option<TimeSpan>,
}

/// Instance name of the `index`-th pendulum of `dimension` (`xa`, `xb`, ...).
///
/// `index` must be below [`MAX_PENDULUMS`].
pub fn pendulum_name(dimension: &str, index: usize) -> String {
    debug_assert!(index < MAX_PENDULUMS);
    let letter = char::from(b'a' + (index % MAX_PENDULUMS) as u8);
    format!("{}{}", dimension, letter)
}

/// Number of x pendulums encoded in `params`: the distinct letters across
/// keys shaped like an x wave parameter (`x`, a letter, a wave key).
pub fn infer_pendulum_count(params: &ShortParams) -> usize {
    params
        .keys()
        .filter_map(|key| key.strip_prefix('x'))
        .filter_map(|rest| {
            let mut chars = rest.chars();
            let letter = chars.next()?;
            let field = chars.as_str();
            let is_wave_key = Wave::specs().iter().any(|spec| spec.key() == field);
            (letter.is_ascii_lowercase() && is_wave_key).then_some(letter)
        })
        .collect::<BTreeSet<char>>()
        .len()
}

fn check_pendulum_count(count: usize) -> Result<(), CurveError> {
    if count > MAX_PENDULUMS {
        return Err(CurveError::TooManyPendulums {
            count,
            max: MAX_PENDULUMS,
        });
    }
    Ok(())
}

impl Harmonograph {
    /// Creates a shell with no dimensions, ramp or time span.
    pub fn shell(settings: CurveSettings) -> Self {
        Self {
            settings,
            dimensions: Vec::new(),
            ramp: None,
            time_span: None,
        }
    }

    /// Adds a dimension, replacing one with the same name in place.
    pub fn attach_dimension(&mut self, name: impl Into<String>, waves: Vec<Wave>, role: DimensionRole) {
        let name = name.into();
        let dimension = Dimension { name, role, waves };
        match self.dimensions.iter_mut().find(|d| d.name == dimension.name) {
            Some(existing) => *existing = dimension,
            None => self.dimensions.push(dimension),
        }
    }

    pub fn attach_ramp(&mut self, ramp: Ramp) {
        self.ramp = Some(ramp);
    }

    pub fn attach_time_span(&mut self, time_span: TimeSpan) {
        debug!(center = time_span.center(), width = time_span.width(), "attach time span");
        self.time_span = Some(time_span);
    }

    pub fn name(&self) -> &str {
        self.settings.name()
    }

    pub fn settings(&self) -> &CurveSettings {
        &self.settings
    }

    pub fn density(&self) -> f64 {
        self.settings.density()
    }

    pub fn style(&self) -> usize {
        self.settings.style()
    }

    /// The style preset, if the index names one.
    pub fn render_style(&self) -> Result<&'static RenderStyle, CurveError> {
        RenderStyle::preset(self.style())
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn ramp(&self) -> Option<&Ramp> {
        self.ramp.as_ref()
    }

    pub fn time_span(&self) -> Option<&TimeSpan> {
        self.time_span.as_ref()
    }

    /// Names of the dimensions tagged [`DimensionRole::Auxiliary`].
    pub fn auxiliary_dimensions(&self) -> impl Iterator<Item = &str> {
        self.dimensions
            .iter()
            .filter(|d| d.role == DimensionRole::Auxiliary)
            .map(|d| d.name.as_str())
    }

    /// Reports the first missing piece, if any.
    pub fn check_complete(&self) -> Result<(), CurveError> {
        if self.dimension("x").is_none() {
            return Err(CurveError::IncompleteCurve("dimension 'x'"));
        }
        if self.ramp.is_none() {
            return Err(CurveError::IncompleteCurve("ramp"));
        }
        if self.time_span.is_none() {
            return Err(CurveError::IncompleteCurve("time span"));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.check_complete().is_ok()
    }

    /// Lazily samples the requested dimensions every `dt` (before density
    /// compression). See [`Points`].
    pub fn points(&self, dimension_names: &[&str], dt: f64) -> Result<Points<'_>, CurveError> {
        Points::new(self, dimension_names, dt)
    }

    /// Every parameter of every nested object: the waves of each dimension
    /// (grouped by dimension name when auxiliary), then density and style,
    /// then the time span, then the ramp.
    pub fn parameters(&self) -> Vec<CurveParameter<'_>> {
        let mut out = Vec::new();
        for dimension in &self.dimensions {
            let group = match dimension.role {
                DimensionRole::Auxiliary => Some(dimension.name.as_str()),
                DimensionRole::Primary => None,
            };
            for wave in &dimension.waves {
                out.extend(wave.parameters().into_iter().map(|p| ParameterRef { group, ..p }));
            }
        }
        out.extend(self.settings.parameters());
        if let Some(ts) = &self.time_span {
            out.extend(ts.parameters());
        }
        if let Some(ramp) = &self.ramp {
            out.extend(ramp.parameters());
        }
        out
    }

    /// The full short-parameter encoding, in [`Self::parameters`] order.
    pub fn short_parameters(&self) -> ShortParams {
        let mut out = ShortParams::new();
        for wave in self.dimensions.iter().flat_map(|d| d.waves.iter()) {
            out.merge(&wave.short_parameters());
        }
        out.merge(&self.settings.short_parameters());
        if let Some(ts) = &self.time_span {
            out.merge(&ts.short_parameters());
        }
        if let Some(ramp) = &self.ramp {
            out.merge(&ramp.short_parameters());
        }
        out
    }

    /// Rebuilds a curve from its short parameters.
    ///
    /// The pendulum count of `x` and `y` is inferred from the keys (see
    /// [`infer_pendulum_count`]); `j` and `k` always get one wave each.
    /// Missing keys fall back to their defaults.
    pub fn from_short_params(name: &str, params: &ShortParams) -> Result<Self, CurveError> {
        let pendulums = infer_pendulum_count(params);
        check_pendulum_count(pendulums)?;
        debug!(pendulums, "decoding curve from short params");

        let mut curve = Harmonograph::shell(CurveSettings::from_short_params(name, params)?);
        for dim in ["x", "y"] {
            let waves = (0..pendulums)
                .map(|i| Wave::from_short_params(&pendulum_name(dim, i), params))
                .collect::<Result<Vec<_>, _>>()?;
            curve.attach_dimension(dim, waves, DimensionRole::Primary);
        }
        for dim in ["j", "k"] {
            let wave = Wave::from_short_params(dim, params)?;
            curve.attach_dimension(dim, vec![wave], DimensionRole::Auxiliary);
        }
        curve.attach_ramp(Ramp::from_short_params(RAMP_NAME, params)?);
        curve.attach_time_span(TimeSpan::from_short_params(TIME_SPAN_NAME, params)?);
        Ok(curve)
    }

    /// Random curve under a symmetry drawn from `symmetry_choices`.
    ///
    /// The symmetry is drawn first, then `pendulum_count` waves for `x` and
    /// for `y` under its parity limits, then one unconstrained wave each for
    /// the auxiliary `j` and `k`. Deterministic for a given rng state.
    pub fn make_random(
        ctx: &mut RandomContext,
        pendulum_count: usize,
        symmetry_choices: &[Symmetry],
        ramp_stop: f64,
    ) -> Result<Self, CurveError> {
        check_pendulum_count(pendulum_count)?;
        let symmetry = *ctx
            .rng()
            .choose(symmetry_choices)
            .ok_or(CurveError::EmptySymmetryChoices)?;
        debug!(%symmetry, pendulum_count, "building random curve");

        let (x_limit, y_limit) = symmetry.limits();
        let mut curve = Harmonograph::shell(CurveSettings::default());
        for (dim, limit) in [("x", x_limit), ("y", y_limit)] {
            let waves = (0..pendulum_count)
                .map(|i| Wave::make_random_limited(&pendulum_name(dim, i), ctx, limit))
                .collect();
            curve.attach_dimension(dim, waves, DimensionRole::Primary);
        }
        for dim in ["j", "k"] {
            let wave = Wave::make_random_limited(dim, ctx, None);
            curve.attach_dimension(dim, vec![wave], DimensionRole::Auxiliary);
        }
        curve.attach_ramp(Ramp::new(RAMP_NAME, ramp_stop));
        let (center, width) = RANDOM_TIME_SPAN;
        curve.attach_time_span(TimeSpan::new(TIME_SPAN_NAME, center, width));
        Ok(curve)
    }

    /// Like [`Self::make_random`], with symmetry choices given as tags.
    pub fn make_random_with_tags<S: AsRef<str>>(
        ctx: &mut RandomContext,
        pendulum_count: usize,
        symmetry_tags: &[S],
        ramp_stop: f64,
    ) -> Result<Self, CurveError> {
        let choices = Symmetry::parse_all(symmetry_tags)?;
        Self::make_random(ctx, pendulum_count, &choices, ramp_stop)
    }
}
