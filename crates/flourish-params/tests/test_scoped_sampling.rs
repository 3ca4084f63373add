//! Integration tests for scoped overrides driving parameterized sampling.

use flourish_params::{
    GlobalParameter, IntRange, ParamValues, ParameterSpec, Parameterized, RandomContext,
    ShortParams,
};
use pretty_assertions::assert_eq;

static TEETH: GlobalParameter = GlobalParameter::new("teeth");
const ANY_TEETH: IntRange = IntRange::new(8, 40, 1);

fn random_teeth(ctx: &mut RandomContext) -> f64 {
    let domain = TEETH.get(ctx, ANY_TEETH);
    domain.sample(ctx.rng()) as f64
}

fn random_ratio(ctx: &mut RandomContext) -> f64 {
    ctx.rng().uniform(0.5, 2.0)
}

static GEAR_SPECS: [ParameterSpec; 2] = [
    ParameterSpec::new("teeth", "n", 12.0)
        .integer()
        .adjacent_step(2.0)
        .random(random_teeth),
    ParameterSpec::new("ratio", "r", 1.0)
        .places(3)
        .adjacent_step(0.25)
        .random(random_ratio),
];

#[derive(Debug, Clone, PartialEq)]
struct Gear {
    name: String,
    teeth: f64,
    ratio: f64,
}

impl Parameterized for Gear {
    fn specs() -> &'static [ParameterSpec] {
        &GEAR_SPECS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> Vec<f64> {
        vec![self.teeth, self.ratio]
    }

    fn from_values(name: &str, values: ParamValues<'_>) -> Self {
        Gear {
            name: name.to_string(),
            teeth: values.get("n"),
            ratio: values.get("r"),
        }
    }
}

fn gear_train(ctx: &mut RandomContext) -> Vec<Gear> {
    // Outer gears are small; the middle one is drawn from the open domain.
    let small = IntRange::new(8, 12, 2);
    let mut gears = Vec::new();
    gears.push(ctx.scoped(&TEETH, small, |inner| Gear::make_random("ga", inner)));
    gears.push(Gear::make_random("gb", ctx));
    gears.push(ctx.scoped(&TEETH, small, |inner| Gear::make_random("gc", inner)));
    gears
}

#[test]
fn test_scoped_domains_apply_only_inside() {
    for seed in 0..30 {
        let mut ctx = RandomContext::new(seed);
        let gears = gear_train(&mut ctx);
        assert!(ctx.overrides().is_empty());

        for gear in [&gears[0], &gears[2]] {
            assert!(gear.teeth == 8.0 || gear.teeth == 10.0, "seed {}: {:?}", seed, gear);
        }
        assert!(ANY_TEETH.contains(gears[1].teeth as i64));
    }
}

#[test]
fn test_random_instances_round_trip() {
    let mut ctx = RandomContext::new(3);
    let mut all = ShortParams::new();
    let gears = gear_train(&mut ctx);
    for gear in &gears {
        all.merge(&gear.short_parameters());
    }

    let parsed = ShortParams::from_query_string(&all.to_query_string()).unwrap();
    for gear in &gears {
        assert_eq!(&Gear::from_short_params(&gear.name, &parsed).unwrap(), gear);
    }
}

#[test]
fn test_same_seed_same_train() {
    let a = gear_train(&mut RandomContext::new(8));
    let b = gear_train(&mut RandomContext::new(8));
    assert_eq!(a, b);
}

#[test]
fn test_neighbor_encodings() {
    let gear = Gear {
        name: "g".to_string(),
        teeth: 12.0,
        ratio: 1.0,
    };
    let encoded: Vec<Vec<String>> = gear
        .parameters()
        .iter()
        .map(|p| p.encoded_neighbors())
        .collect();
    assert_eq!(encoded[0], vec!["8", "10", "14", "16"]);
    assert_eq!(encoded[1], vec!["0.5", "0.75", "1.25", "1.5"]);
}
