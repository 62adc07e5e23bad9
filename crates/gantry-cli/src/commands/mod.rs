pub mod augment;
pub mod document_schema;

use gantry_config::GantryConfig;

use crate::cli::Commands;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, config: &GantryConfig) -> anyhow::Result<()> {
    match command {
        Commands::Augment(args) => augment::handle(args, config),
        Commands::DocumentSchema => document_schema::handle(),
    }
}
