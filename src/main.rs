use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::{error, warn};

use takeout::config::{Config, LookupCredentials};
use takeout::contacts::{self, profile_api::ProfileApiClient};
use takeout::logging;
use takeout::notes::{self, RunOptions};

#[derive(Parser)]
#[command(name = "takeout")]
#[command(about = "Personal data takeout pipelines: contact scraping and note conversion")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up LinkedIn profiles and write a contacts JSON report
    Contacts {
        /// JSON file holding the profile URL list
        #[arg(long)]
        input: Option<String>,
        /// Directory for the timestamped report
        #[arg(long)]
        output_dir: Option<String>,
    },
    /// Convert exported notes to Markdown files sorted by status
    Notes {
        /// Directory holding the exported *.json note files
        #[arg(long)]
        input_dir: Option<String>,
        /// Root directory for the timestamped output
        #[arg(long)]
        output_root: Option<String>,
        /// Compute everything but write and delete nothing
        #[arg(long)]
        dry_run: bool,
        /// Stop after the first discovered note
        #[arg(long)]
        single_note: bool,
        /// Delete each source file after its note converts
        #[arg(long)]
        delete_originals: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let mut config = Config::load_from(Path::new(&cli.config))?;

    match cli.command {
        Commands::Contacts { input, output_dir } => {
            if let Some(input) = input {
                config.contacts.input_file = input.into();
            }
            if let Some(output_dir) = output_dir {
                config.contacts.output_dir = output_dir.into();
            }

            let credentials = LookupCredentials::from_env()?;
            let client = ProfileApiClient::new(&config.contacts, credentials)?;

            match contacts::run(&config.contacts, &client).await {
                Ok(summary) => {
                    println!("\n📊 Contacts Results:");
                    println!("   Total URLs: {}", summary.total_urls);
                    println!("   Scraped: {}", summary.scraped);
                    println!("   Skipped: {}", summary.skipped);
                    println!("   Errors: {}", summary.errors.len());
                    println!("   Output file: {}", summary.output_file);

                    if !summary.errors.is_empty() {
                        warn!(
                            "{} errors encountered during contacts run",
                            summary.errors.len()
                        );
                        println!("\n⚠️  Errors encountered:");
                        for error in &summary.errors {
                            println!("   - {}", error);
                        }
                    }
                }
                Err(e) => {
                    error!("Contacts run failed: {}", e);
                    println!("❌ Contacts run failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Notes {
            input_dir,
            output_root,
            dry_run,
            single_note,
            delete_originals,
        } => {
            if let Some(input_dir) = input_dir {
                config.notes.input_dir = input_dir.into();
            }
            if let Some(output_root) = output_root {
                config.notes.output_root = output_root.into();
            }
            let options = RunOptions {
                dry_run,
                single_note,
                delete_originals,
            };

            match notes::run(&config.notes, &options) {
                Ok(summary) => {
                    println!("\n📊 Notes Results:");
                    println!("   Total notes: {}", summary.total_notes);
                    println!("   Unsorted: {}", summary.unsorted);
                    println!("   Archived: {}", summary.archived);
                    println!("   Trashed: {}", summary.trashed);
                    if options.delete_originals {
                        println!("   Deleted originals: {}", summary.deleted_originals);
                    }
                    println!("   Output root: {}", summary.output_root);
                    if options.dry_run {
                        println!("   (dry run: nothing was written)");
                    }
                }
                Err(e) => {
                    error!("Notes run failed: {}", e);
                    println!("❌ Notes run failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
