#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use qa_analytics::config::{AnalyticsConfig, load_config};
use qa_analytics::core::{ExportMetadata, load_snapshot};
use qa_analytics::export::{
    DirectorySink, ExportOptions, export_all_delimited, export_delimited, export_workbook,
};
use qa_analytics::paging::{PageControls, total_pages};
use qa_analytics::render::{render_controls, render_page};
use qa_analytics::{AnalyticsError, AnalyticsResult};

#[derive(Parser, Debug)]
#[command(name = "qa-analytics")]
#[command(about = "Page through and export QA analytics report snapshots", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set QA_ANALYTICS_LOG)
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML or YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    Xlsx,
    Csv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List categories with record and page counts
    Summary {
        /// Path to snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Print one page of a category as a table
    View {
        /// Path to snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,
        /// Category id (e.g., unmappedTestCases)
        #[arg(long)]
        category: String,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Print the page-number strip for a position
    Pages {
        #[arg(long)]
        current: usize,
        #[arg(long)]
        total: usize,
    },

    /// Export a snapshot as one workbook or as CSV files
    Export {
        /// Path to snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long)]
        project: String,
        #[arg(long)]
        release: String,
        #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
        format: ExportFormat,
        /// Export a single category (CSV only)
        #[arg(long)]
        category: Option<String>,
        /// Output directory (defaults to the config's output_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("QA_ANALYTICS_LOG").unwrap_or_else(|_| {
        if verbose {
            "qa_analytics=debug".to_string()
        } else {
            "qa_analytics=info".to_string()
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|cfg| run(cli.command, &cfg));

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, cfg: &AnalyticsConfig) -> AnalyticsResult<()> {
    match command {
        Commands::Summary { snapshot } => {
            let snapshot = load_snapshot(&snapshot)?;
            if let Some(ts) = &snapshot.last_refreshed {
                println!("Last refreshed: {ts}");
            }
            for category in &cfg.categories {
                let count = snapshot.records(&category.id).len();
                println!(
                    "{:<40} {:>6} records {:>4} pages",
                    category.label,
                    count,
                    total_pages(count, cfg.page_size)
                );
            }
            Ok(())
        }
        Commands::View {
            snapshot,
            category,
            page,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            let records = snapshot.records(&category);
            let total = total_pages(records.len(), cfg.page_size);
            if total > 0 && (page == 0 || page > total) {
                return Err(AnalyticsError::Message(format!(
                    "page {page} out of range (1..={total})"
                )));
            }
            print!("{}", render_page(records, page, cfg.page_size, cfg.columns));
            Ok(())
        }
        Commands::Pages { current, total } => {
            let controls = PageControls::new(current, total);
            if controls.visible {
                println!("{}", render_controls(&controls));
            }
            Ok(())
        }
        Commands::Export {
            snapshot,
            project,
            release,
            format,
            category,
            out,
        } => {
            let snapshot = load_snapshot(&snapshot)?;
            let meta =
                ExportMetadata::new(project, release).with_categories(cfg.categories.clone());
            let sink = DirectorySink::new(out.unwrap_or_else(|| cfg.output_dir.clone()));
            let options = ExportOptions::now(cfg.columns);

            match (format, category) {
                (ExportFormat::Xlsx, Some(_)) => Err(AnalyticsError::Message(
                    "--category is only supported with --format csv".to_string(),
                )),
                (ExportFormat::Xlsx, None) => {
                    match export_workbook(&snapshot, &meta, &sink, options)? {
                        Some(path) => println!("{}", path.display()),
                        None => info!("nothing to export"),
                    }
                    Ok(())
                }
                (ExportFormat::Csv, Some(id)) => {
                    if let Some(path) =
                        export_delimited(snapshot.records(&id), &meta, &id, &sink, options)?
                    {
                        println!("{}", path.display());
                    }
                    Ok(())
                }
                (ExportFormat::Csv, None) => {
                    for path in export_all_delimited(&snapshot, &meta, &sink, options)? {
                        println!("{}", path.display());
                    }
                    Ok(())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_flags_precede_subcommand() {
        let cli = Cli::try_parse_from([
            "qa-analytics", "--verbose", "--config", "qa.toml", "pages", "--current", "2",
            "--total", "9",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("qa.toml")));

        for flag in [&["--verbose"][..], &["--config", "qa.toml"][..]] {
            let mut args = vec!["qa-analytics", "pages", "--current", "2", "--total", "9"];
            args.extend_from_slice(flag);
            assert!(Cli::try_parse_from(args).is_err());
        }
    }
}
