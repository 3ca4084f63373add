//! Sinusoidal pendulum terms.

use std::f64::consts::TAU;

use flourish_params::{
    GlobalParameter, IntRange, ParamValues, ParameterSpec, Parameterized, RandomContext,
};
use serde::{Deserialize, Serialize};

/// Sampling domain of wave frequencies. Symmetric construction narrows it.
pub static FREQ: GlobalParameter = GlobalParameter::new("freq");

/// Any frequency in 1..=6.
pub const FREQ_ANY: IntRange = IntRange::new(1, 7, 1);
/// Even frequencies: 2, 4, 6.
pub const FREQ_EVEN: IntRange = IntRange::new(2, 7, 2);
/// Odd frequencies: 1, 3, 5.
pub const FREQ_ODD: IntRange = IntRange::new(1, 7, 2);

/// Phase is stored in radians and encoded as a fraction of a turn.
const TURNS_PER_RADIAN: f64 = 1.0 / TAU;

/// Frequency parity constraint for random construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Frequency domain for an optional parity limit.
    pub fn domain(limit: Option<Parity>) -> IntRange {
        match limit {
            None => FREQ_ANY,
            Some(Parity::Even) => FREQ_EVEN,
            Some(Parity::Odd) => FREQ_ODD,
        }
    }
}

fn random_freq(ctx: &mut RandomContext) -> f64 {
    let domain = FREQ.get(ctx, FREQ_ANY);
    domain.sample(ctx.rng()) as f64
}

fn random_amp(ctx: &mut RandomContext) -> f64 {
    ctx.rng().uniform(0.1, 1.0)
}

fn random_tweq(ctx: &mut RandomContext) -> f64 {
    ctx.rng().gauss(0.0, 0.005)
}

fn random_phase(ctx: &mut RandomContext) -> f64 {
    ctx.rng().uniform(0.0, TAU)
}

static WAVE_SPECS: [ParameterSpec; 4] = [
    ParameterSpec::new("frequency", "f", 2.0)
        .integer()
        .adjacent_step(1.0)
        .random(random_freq),
    ParameterSpec::new("amplitude", "a", 0.5)
        .places(3)
        .adjacent_step(0.2)
        .random(random_amp),
    ParameterSpec::new("frequency tweak", "t", 0.0)
        .places(6)
        .adjacent_step(0.0004)
        .random(random_tweq),
    ParameterSpec::new("phase", "p", 0.0)
        .places(4)
        .scale(TURNS_PER_RADIAN)
        .adjacent_step(0.2)
        .random(random_phase),
];

/// One pendulum: `amp * sin((freq * density + tweq) * t + phase)`.
///
/// Values are always held at their short-parameter precision, so a wave
/// rebuilt from its own short parameters is identical to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wave {
    name: String,
    freq: f64,
    amp: f64,
    tweq: f64,
    phase: f64,
}

impl Wave {
    /// Creates a wave. `phase` is in radians.
    pub fn new(name: impl Into<String>, freq: f64, amp: f64, tweq: f64, phase: f64) -> Self {
        Self {
            name: name.into(),
            freq: WAVE_SPECS[0].quantize(freq),
            amp: WAVE_SPECS[1].quantize(amp),
            tweq: WAVE_SPECS[2].quantize(tweq),
            phase: WAVE_SPECS[3].quantize(phase),
        }
    }

    pub fn freq(&self) -> f64 {
        self.freq
    }

    pub fn amp(&self) -> f64 {
        self.amp
    }

    pub fn tweq(&self) -> f64 {
        self.tweq
    }

    /// Phase in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Value at a single time.
    #[inline]
    pub fn sample(&self, t: f64, density: f64) -> f64 {
        self.amp * ((self.freq * density + self.tweq) * t + self.phase).sin()
    }

    /// Values over a vector of times.
    pub fn evaluate(&self, t: &[f64], density: f64) -> Vec<f64> {
        t.iter().map(|&t| self.sample(t, density)).collect()
    }

    /// Random wave whose frequency obeys `limit`.
    ///
    /// The limit is pushed as the active [`FREQ`] domain for the duration of
    /// the generic construction, so the frequency sampler picks it up while
    /// the other parameters use their own samplers.
    pub fn make_random_limited(name: &str, ctx: &mut RandomContext, limit: Option<Parity>) -> Self {
        ctx.scoped(&FREQ, Parity::domain(limit), |inner| {
            <Wave as Parameterized>::make_random(name, inner)
        })
    }
}

impl Parameterized for Wave {
    fn specs() -> &'static [ParameterSpec] {
        &WAVE_SPECS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> Vec<f64> {
        vec![self.freq, self.amp, self.tweq, self.phase]
    }

    fn from_values(name: &str, values: ParamValues<'_>) -> Self {
        Wave::new(
            name,
            values.get("f"),
            values.get("a"),
            values.get("t"),
            values.get("p"),
        )
    }
}
