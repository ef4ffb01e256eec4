//! Command-line interface for fakeforge
//!
//! # Usage Examples
//!
//! ## Generating Values
//! ```bash
//! # One full name from the default locale
//! fakeforge generate name.full_name
//!
//! # Five German street addresses
//! fakeforge generate address.street_address \
//!   --locale de \
//!   --count 5
//!
//! # Reproducible output via a fixed seed
//! fakeforge generate internet.email --seed 42
//! ```
//!
//! ## Inspecting the Generator
//! ```bash
//! # Every category and operation the registry knows
//! fakeforge categories
//!
//! # The raw dataset subtree behind an operation
//! fakeforge dataset name.first_name --locale de
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use fakeforge::{locales, providers, Faker, LocaleData, BUILTIN_LOCALES, DEFAULT_LOCALE};

#[derive(Parser)]
#[command(name = "fakeforge")]
#[command(about = "A tool for generating realistic fake data from locale datasets")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fake values for a `category.operation` target
    Generate {
        /// Target operation, e.g. `name.full_name` or `address.city`
        target: String,

        /// Locale dataset to draw from
        #[arg(long, default_value = DEFAULT_LOCALE, env = "FAKEFORGE_LOCALE")]
        locale: String,

        /// Number of values to generate
        #[arg(long, default_value = "1")]
        count: u32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List every category and operation in the registry
    Categories,

    /// Print a raw dataset subtree as YAML
    Dataset {
        /// Dot-separated key below the faker root, e.g. `name.first_name`
        key: String,

        /// Locale dataset to read
        #[arg(long, default_value = DEFAULT_LOCALE, env = "FAKEFORGE_LOCALE")]
        locale: String,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            target,
            locale,
            count,
            seed,
        } => run_generate(&target, &locale, count, seed),
        Commands::Categories => run_categories(),
        Commands::Dataset { key, locale } => run_dataset(&key, &locale),
    }
}

/// Run generate command to print fake values for one operation
fn run_generate(target: &str, locale: &str, count: u32, seed: Option<u64>) -> anyhow::Result<()> {
    let (category, operation) = target
        .split_once('.')
        .with_context(|| format!("Invalid target '{target}', expected category.operation"))?;

    let mut faker = Faker::with_locale(locale)
        .with_context(|| format!("Failed to load locale '{locale}'"))?;
    if let Some(seed) = seed {
        faker = faker.with_seed(seed);
    }

    tracing::info!(
        "Generating {} value(s) for {}.{} (locale={})",
        count,
        category,
        operation,
        locale
    );

    for _ in 0..count {
        let value = faker
            .call(category, operation)
            .with_context(|| format!("Failed to generate {category}.{operation}"))?;
        println!("{value}");
    }

    Ok(())
}

/// Run categories command to list the registry contents
fn run_categories() -> anyhow::Result<()> {
    let registry = providers::registry();

    let mut categories = registry.category_names();
    categories.sort_unstable();

    for category in categories {
        let mut operations = registry.operation_names(category);
        operations.sort_unstable();
        println!("{category}: {}", operations.join(", "));
    }

    Ok(())
}

/// Run dataset command to dump a dataset subtree as YAML
fn run_dataset(key: &str, locale: &str) -> anyhow::Result<()> {
    let yaml = locales::builtin(locale).with_context(|| {
        format!("No builtin dataset for locale '{locale}' (available: {BUILTIN_LOCALES:?})")
    })?;
    let data = LocaleData::from_yaml_str(locale, yaml)?;

    let subtree = data
        .get(key)
        .with_context(|| format!("Failed to read '{key}' from locale '{locale}'"))?;
    print!("{}", serde_yaml::to_string(subtree)?);

    Ok(())
}
