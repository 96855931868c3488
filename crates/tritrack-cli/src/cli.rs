use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tritrack",
    about = "Tritrack: three-valued progress inference over a static requirement graph",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration: catalog references, alias rules, acyclicity
    Check {
        /// Path to the TOML configuration
        #[arg(long, default_value = "tritrack.toml")]
        config: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show overall values, user choices, and lock causes
    Show {
        /// Variable identifier (omit for the whole catalog)
        var: Option<String>,

        /// Path to the TOML configuration
        #[arg(long, default_value = "tritrack.toml")]
        config: String,

        /// Path to the persisted state sequence
        #[arg(long, default_value = ".tritrack/state.json")]
        state: String,

        /// Only variables holding a definite overall value
        #[arg(long)]
        known: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assert a value for one variable and re-run inference
    Set {
        /// Variable identifier
        var: String,

        /// true, false, or unknown
        value: String,

        /// Path to the TOML configuration
        #[arg(long, default_value = "tritrack.toml")]
        config: String,

        /// Path to the persisted state sequence
        #[arg(long, default_value = ".tritrack/state.json")]
        state: String,
    },

    /// Drop every assertion and return to the blank state
    Reset {
        /// Path to the TOML configuration
        #[arg(long, default_value = "tritrack.toml")]
        config: String,

        /// Path to the persisted state sequence
        #[arg(long, default_value = ".tritrack/state.json")]
        state: String,
    },

    /// Print the persisted code sequence for sharing
    Export {
        /// Path to the TOML configuration
        #[arg(long, default_value = "tritrack.toml")]
        config: String,

        /// Path to the persisted state sequence
        #[arg(long, default_value = ".tritrack/state.json")]
        state: String,

        /// Print the sha256 fingerprint instead of the sequence
        #[arg(long)]
        fingerprint: bool,
    },

    /// Replace the state wholesale from a JSON code sequence
    Import {
        /// JSON array of codes, e.g. '["1","","0"]'
        codes: String,

        /// Path to the TOML configuration
        #[arg(long, default_value = "tritrack.toml")]
        config: String,

        /// Path to the persisted state sequence
        #[arg(long, default_value = ".tritrack/state.json")]
        state: String,
    },
}
