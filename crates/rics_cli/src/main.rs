//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load a catalog data directory (or JSON config file) through `rics_core`.
//! - Print per-category counts and, optionally, one category's search hits.

use clap::Parser;
use rics_core::{
    init_logging, CatalogConfig, CatalogStore, Category, CategoryLoad, DirectorySource, Record,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rics_cli")]
#[command(about = "Load a RICS catalog and browse one category")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the category documents (overrides the config file)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Category to list: items, events, weather, traits or races
    #[arg(value_parser = parse_category)]
    category: Option<Category>,

    /// Search term applied to the listed category
    #[arg(requires = "category")]
    term: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("rics_cli: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&config.logging) {
        eprintln!("rics_cli: logging disabled: {err}");
    }

    println!("rics_core version={}", rics_core::core_version());
    let source = DirectorySource::new(&config);
    let mut store = CatalogStore::load(&source, |category: Category, records: &[Record]| {
        println!("{category}: {} records", records.len());
    });

    for (category, load) in store.load_report().entries() {
        if let CategoryLoad::FallbackApplied { policy, reason, .. } = load {
            println!("{category}: fallback={policy:?} reason={reason}");
        }
    }

    let Some(category) = cli.category else {
        return ExitCode::SUCCESS;
    };
    let term = cli.term.as_deref().unwrap_or_default();
    for record in store.search(category, term) {
        println!("  {}  ({})", record.display_name(), record.def_name());
    }
    ExitCode::SUCCESS
}

fn load_config(cli: &Cli) -> Result<CatalogConfig, String> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::from_path(path).map_err(|err| err.to_string())?,
        None => CatalogConfig::default(),
    };
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    Ok(config)
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::parse(value).ok_or_else(|| {
        let known: Vec<_> = Category::ALL.iter().map(|category| category.as_str()).collect();
        format!("unknown category `{value}` (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::{CommandFactory, Parser};
    use rics_core::Category;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positionals_and_options_parse() {
        let cli = Cli::try_parse_from(["rics_cli", "--data-dir", "data", "traits", "tough"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("data")));
        assert_eq!(cli.config, None);
        assert_eq!(cli.category, Some(Category::Traits));
        assert_eq!(cli.term.as_deref(), Some("tough"));
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["rics_cli", "vehicles"]).is_err());
    }
}
