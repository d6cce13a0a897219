use crate::utils::error::Result;
use crate::utils::validation::{validate_domain_id, validate_path, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mondrian-import")]
#[command(about = "Imports Mondrian OLAP schema files into a metadata domain repository")]
pub struct CliConfig {
    #[arg(long, default_value = "./repository")]
    pub repository_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Import a schema file as a metadata domain
    Import {
        #[arg(long)]
        file: String,

        #[arg(long)]
        domain_id: String,

        #[arg(long, help = "Replace the domain if it already exists")]
        overwrite: bool,
    },
    /// Remove a metadata domain from the repository
    Remove {
        #[arg(long)]
        domain_id: String,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("repository_path", &self.repository_path)?;

        match &self.command {
            Command::Import {
                file, domain_id, ..
            } => {
                validate_path("file", file)?;
                validate_domain_id("domain_id", domain_id)
            }
            Command::Remove { domain_id } => validate_domain_id("domain_id", domain_id),
        }
    }
}
