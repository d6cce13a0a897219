use clap::Parser;
use mondrian_import::utils::{logger, validation::Validate};
use mondrian_import::{CliConfig, Command, FileDomainRepository, SchemaImportHandler};
use std::fs::File;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mondrian-import");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let repository = FileDomainRepository::new(config.repository_path.clone());
    let handler = SchemaImportHandler::new(repository);

    let result = match &config.command {
        Command::Import {
            file,
            domain_id,
            overwrite,
        } => match File::open(file) {
            Ok(input) => handler.import_schema(input, domain_id, *overwrite).await,
            Err(e) => Err(e.into()),
        },
        Command::Remove { domain_id } => handler.remove_domain(domain_id).await,
    };

    match result {
        Ok(()) => {
            match &config.command {
                Command::Import { domain_id, .. } => {
                    tracing::info!("✅ Imported schema as domain '{}'", domain_id);
                    println!("✅ Imported schema as domain '{}'", domain_id);
                }
                Command::Remove { domain_id } => {
                    tracing::info!("✅ Removed domain '{}'", domain_id);
                    println!("✅ Removed domain '{}'", domain_id);
                }
            };
        }
        Err(e) => {
            tracing::error!("Operation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
