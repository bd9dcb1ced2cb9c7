use crate::catalog::load_column_metadata;
use crate::cli::args::{Cli, Commands};
use crate::config::LoaderConfig;
use crate::processors::TownshipProcessor;
use crate::utils::progress::ProgressReporter;
use anyhow::{bail, Context, Result};
use arrow::util::pretty::pretty_format_batches;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `RUST_LOG` wins unless `--verbose` is set
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Load {
            data_dir,
            join,
            coordinates,
            sample,
        } => {
            let mut config = LoaderConfig::load(cli.config.as_deref())
                .context("failed to load loader configuration")?;
            if let Some(dir) = data_dir {
                config = config.with_data_dir(dir);
            }
            if let Some(policy) = join {
                config = config.with_join_policy(policy);
            }
            if coordinates {
                config = config.with_coordinates(true);
            }

            let processor = TownshipProcessor::new(config);
            println!(
                "Loading township sources from {} ({} join)",
                processor.config().data_dir.display(),
                processor.config().join_policy
            );

            let progress = ProgressReporter::new_spinner("Reading sources...", false);
            let (table, report) = processor
                .load_with_report(Some(&progress))
                .context("failed to load township data")?;
            progress.finish_with_message(&format!("Loaded {} townships", table.len()));

            println!("\n{}", report.summary());

            if sample > 0 && !table.is_empty() {
                let batch = table.to_record_batch()?;
                let rows = sample.min(batch.num_rows());
                println!("Sample rows (showing {} of {}):", rows, batch.num_rows());
                println!("{}", pretty_format_batches(&[batch.slice(0, rows)])?);
            }
        }

        Commands::Metadata { column, json } => {
            let catalog = load_column_metadata();

            if let Some(name) = column {
                let Some(entry) = catalog.get(&name) else {
                    bail!("no metadata for column '{}'", name);
                };
                if json {
                    println!("{}", serde_json::to_string_pretty(entry)?);
                } else {
                    println!("{} [{}]", entry.column, entry.datatype_category);
                    println!("  {}", entry.description);
                    println!("  source: {}", entry.source_url);
                }
            } else if json {
                println!("{}", serde_json::to_string_pretty(catalog.entries())?);
            } else {
                println!("{}", pretty_format_batches(&[catalog.to_record_batch()?])?);
            }
        }
    }

    Ok(())
}
