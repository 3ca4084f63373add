//! Flourish Parameter Library
//!
//! This crate provides the declarative parameter schema used by Flourish
//! curve components. A component declares an ordered list of
//! [`ParameterSpec`]s; the [`Parameterized`] trait then gives it, for free:
//!
//! - **Short parameters**: a flat `key -> string` map small enough for a URL
//! - **Decoding**: rebuilding an instance from such a map, with defaults
//! - **Random construction**: seeded sampling, narrowed by scoped overrides
//! - **Adjacency**: ordered neighbor values for "nearby variant" previews
//!
//! # Example
//!
//! ```
//! use flourish_params::{ParamValues, ParameterSpec, Parameterized, RandomContext};
//!
//! struct Gain {
//!     name: String,
//!     level: f64,
//! }
//!
//! fn random_level(ctx: &mut RandomContext) -> f64 {
//!     ctx.rng().uniform(0.0, 1.0)
//! }
//!
//! static GAIN_SPECS: [ParameterSpec; 1] = [ParameterSpec::new("level", "l", 0.5)
//!     .places(3)
//!     .adjacent_step(0.1)
//!     .random(random_level)];
//!
//! impl Parameterized for Gain {
//!     fn specs() -> &'static [ParameterSpec] {
//!         &GAIN_SPECS
//!     }
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//!     fn values(&self) -> Vec<f64> {
//!         vec![self.level]
//!     }
//!     fn from_values(name: &str, values: ParamValues<'_>) -> Self {
//!         Gain { name: name.to_string(), level: values.get("l") }
//!     }
//! }
//!
//! let gain = Gain::make_random("g", &mut RandomContext::new(42));
//! let short = gain.short_parameters();
//! let back = Gain::from_short_params("g", &short).unwrap();
//! assert_eq!(back.level, gain.level);
//! ```
//!
//! # Modules
//!
//! - [`parameter`]: Parameter descriptors and their encode/decode rules
//! - [`parameterized`]: The generic capability built over a descriptor list
//! - [`short`]: Ordered short parameter maps and query strings
//! - [`overrides`]: Named sampling domains that scopes can narrow
//! - [`context`]: Rng plus override stack for one random construction
//! - [`rng`]: Deterministic PCG32 rng and seed derivation
//! - [`error`]: Decode errors

pub mod context;
pub mod error;
pub mod overrides;
pub mod parameter;
pub mod parameterized;
pub mod rng;
pub mod short;

// Re-export commonly used types at the crate root
pub use context::{RandomContext, ScopeGuard};
pub use error::ParamError;
pub use overrides::{GlobalParameter, IntRange, OverrideStack};
pub use parameter::{AdjacentFn, Adjacency, ParameterSpec, RandomFn, ValueKind};
pub use parameterized::{ParamValues, ParameterRef, Parameterized};
pub use rng::DeterministicRng;
pub use short::ShortParams;
