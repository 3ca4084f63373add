//! CLI argument definitions for the flourish command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use flourish_cli::commands::config::ConfigOverrides;
use flourish_cli::commands::points::DEFAULT_WIDTH;
use flourish_cli::commands::LinkOptions;

/// Flourish - Harmonograph curve generator
#[derive(Parser)]
#[command(name = "flourish")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Random-generation flags shared by `random`, `gallery` and `config`.
#[derive(Args, Debug, Default)]
pub(crate) struct GenerationArgs {
    /// JSON config file to start from (default: built-in defaults)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Rng seed
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Pendulums per geometric dimension
    #[arg(short, long)]
    pub pendulums: Option<usize>,

    /// Symmetries to choose from (N, X, Y, R), comma separated
    #[arg(long = "symmetry", value_delimiter = ',')]
    pub symmetries: Vec<String>,

    /// Time at which the ramp envelope reaches one
    #[arg(long)]
    pub ramp_stop: Option<f64>,

    /// Number of curves in a gallery
    #[arg(long)]
    pub gallery_size: Option<usize>,
}

impl GenerationArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            pendulums: self.pendulums,
            symmetries: self.symmetries.clone(),
            ramp_stop: self.ramp_stop,
            gallery_size: self.gallery_size,
        }
    }
}

/// How printed curves are rendered.
#[derive(Args, Debug, Default)]
pub(crate) struct LinkArgs {
    /// Print `route?query` links instead of bare query strings
    #[arg(long)]
    pub route: Option<String>,

    /// Preview size added to links as sx/sy
    #[arg(long, requires = "route")]
    pub size: Option<u32>,
}

impl LinkArgs {
    pub fn options(&self) -> LinkOptions {
        LinkOptions {
            route: self.route.clone(),
            size: self.size,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build one random curve and print its query string
    Random {
        #[command(flatten)]
        generation: GenerationArgs,

        #[command(flatten)]
        links: LinkArgs,

        /// Print a JSON report (query, params, curve)
        #[arg(long)]
        json: bool,
    },

    /// Print sample tuples of a curve as CSV
    Points {
        /// Curve query string or link
        #[arg(short, long)]
        query: String,

        /// Dimensions to sample, comma separated (default: the style's)
        #[arg(short, long, value_delimiter = ',')]
        dims: Vec<String>,

        /// Sample step (default: the style's step for --width)
        #[arg(long)]
        dt: Option<f64>,

        /// Output width in pixels used to choose the step
        #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Rescale all components jointly into [-0.5, 0.5]
        #[arg(long)]
        normalize: bool,

        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the curves one parameter step away from a curve
    Neighbors {
        /// Curve query string or link
        #[arg(short, long)]
        query: String,

        #[command(flatten)]
        links: LinkArgs,

        /// Print the variant groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one query string per curve of a seeded gallery
    Gallery {
        #[command(flatten)]
        generation: GenerationArgs,

        #[command(flatten)]
        links: LinkArgs,

        /// Print the gallery as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved generation config as JSON
    Config {
        #[command(flatten)]
        generation: GenerationArgs,
    },
}
