//! Tritrack CLI: the `tritrack` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config, json } => commands::check::run(config, json),

        Commands::Show {
            var,
            config,
            state,
            known,
            json,
        } => commands::show::run(var, config, state, known, json),

        Commands::Set {
            var,
            value,
            config,
            state,
        } => commands::set_var::run(var, value, config, state),

        Commands::Reset { config, state } => commands::reset::run(config, state),

        Commands::Export {
            config,
            state,
            fingerprint,
        } => commands::export::run(config, state, fingerprint),

        Commands::Import {
            codes,
            config,
            state,
        } => commands::import::run(codes, config, state),
    }
}
