//! CLI definitions and entry point for the demo driver

use clap::Parser;

use masthead::catalog::Catalog;
use masthead::output::{AuthorReport, MagazineReport, OutputMode};

/// masthead - demo of the author/magazine/article relationship model
#[derive(Parser, Debug, Clone, Copy)]
#[command(
    name = "masthead",
    version,
    about = "Demo of the author/magazine/article relationship model",
    long_about = "Builds a small catalog (one author, one magazine, one article)\n\
                  and prints the relationship summaries derived from it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Run the demo driver
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut catalog = Catalog::new();
    let joe = catalog.add_author("Joe")?;
    let info_daily = catalog.add_magazine("Info Daily", "Technology")?;
    catalog.add_article(joe, info_daily, "Tech is the Best")?;

    let author_report = AuthorReport::collect(&catalog, joe)
        .ok_or_else(|| anyhow::anyhow!("author missing from catalog"))?;
    let magazine_report = MagazineReport::collect(&catalog, info_daily)
        .ok_or_else(|| anyhow::anyhow!("magazine missing from catalog"))?;

    match output_mode {
        OutputMode::Human => {
            author_report.render(output_mode);
            magazine_report.render(output_mode);
        },
        OutputMode::Json => {
            // Single document so the output stays machine-parseable
            let combined = serde_json::json!({
                "author": author_report,
                "magazine": magazine_report,
            });
            println!("{}", serde_json::to_string_pretty(&combined)?);
        },
    }
    Ok(())
}
