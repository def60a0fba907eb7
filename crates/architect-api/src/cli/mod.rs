//! CLI command definitions for the `architect` binary.

pub mod generate;
pub mod presets;
pub mod render;
pub mod repl;
pub mod schema;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Design Deepwoken builds with a generative architect.
#[derive(Parser)]
#[command(name = "architect", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "ARCHITECT_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one build and show its dashboard.
    #[command(alias = "gen")]
    Generate {
        /// Free-text description of the build you want.
        #[arg(conflicts_with = "preset")]
        prompt: Option<String>,

        /// Use a preset prompt instead (1-5, see `architect presets`).
        #[arg(long, short)]
        preset: Option<usize>,

        /// Copy the export text to the clipboard afterwards (OSC 52).
        #[arg(long)]
        copy: bool,
    },

    /// Interactive session with history.
    Repl,

    /// List the preset prompts.
    Presets,

    /// Print the JSON Schema of a build.
    Schema {
        /// Print the response constraint sent to the text service instead.
        #[arg(long)]
        remote: bool,
    },

    /// Start the REST API server.
    Serve {
        /// Host to bind to (defaults to config.toml, then 127.0.0.1).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to config.toml, then 3000).
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
