//! pantry-tools: Nutrition-aware product recommendation and catalog query tool

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use pantry_tools::{
    browse::{CatalogFilter, SortKey},
    cli,
    config::{self, OutputConfig},
    model::{ActivityLevel, AgeBand, DietaryRestriction, Goal, MealTime, PreferenceProfile},
    parsers::parse_profile,
    reports::ReportFormat,
    Validatable,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring rules info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nCatalog Formats:",
        "\n  JSON product array, or {\"products\": [...]} storefront export",
        "\n\nOutput Formats:",
        "\n  table, json, csv",
        "\n\nFeatures:",
        "\n  Profile-based recommendation scoring, catalog browse, side-by-side compare"
    )
}

#[derive(Parser)]
#[command(name = "pantry-tools")]
#[command(author = "Pantry Labs")]
#[command(version, long_version = build_long_version())]
#[command(about = "Nutrition-aware product recommendation and catalog query tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Results produced
    1  No recommendation / no browse match, or an error occurred

EXAMPLES:
    # Top picks for a weight-loss profile
    pantry-tools recommend catalog.json --goal weight-loss --restrict vegan

    # Use a wizard-exported profile and show the score breakdown
    pantry-tools recommend catalog.json --profile profile.json --explain

    # Cheapest gluten-free snacks first
    pantry-tools browse catalog.json --category sweet-treats --gluten-free --sort price-low

    # Side-by-side comparison
    pantry-tools compare catalog.json oats-01 granola-02 bar-07")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs (extracted for readability)
// ============================================================================

/// Arguments for the `recommend` subcommand
#[derive(Parser)]
struct RecommendArgs {
    /// Path to the catalog JSON file
    catalog: PathBuf,

    /// Nutrition goal
    #[arg(long, value_enum)]
    goal: Option<Goal>,

    /// Age band
    #[arg(long, value_enum)]
    age: Option<AgeBand>,

    /// Activity level
    #[arg(long, value_enum)]
    activity: Option<ActivityLevel>,

    /// Dietary restriction (repeatable)
    #[arg(long = "restrict", value_enum)]
    restrictions: Vec<DietaryRestriction>,

    /// Preferred meal time (repeatable)
    #[arg(long = "meal", value_enum)]
    meals: Vec<MealTime>,

    /// Load the profile from a wizard-exported JSON file instead of flags
    #[arg(long, conflicts_with_all = ["goal", "age", "activity", "restrictions", "meals"])]
    profile: Option<PathBuf>,

    /// Output format (auto detects TTY: table if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Maximum number of recommendations to return
    #[arg(long)]
    limit: Option<usize>,

    /// Minimum raw score a product must exceed
    #[arg(long)]
    min_score: Option<i32>,

    /// Show the per-factor score breakdown for each recommendation
    #[arg(long)]
    explain: bool,
}

/// Arguments for the `browse` subcommand
#[derive(Parser)]
struct BrowseArgs {
    /// Path to the catalog JSON file
    catalog: PathBuf,

    /// Free-text query matched against product name and description
    #[arg(long)]
    query: Option<String>,

    /// Category id ("all" for every category)
    #[arg(long)]
    category: Option<String>,

    /// Only vegan products
    #[arg(long)]
    vegan: bool,

    /// Only gluten-free products
    #[arg(long)]
    gluten_free: bool,

    /// Only organic products
    #[arg(long)]
    organic: bool,

    /// Only featured products
    #[arg(long)]
    featured: bool,

    /// Sort key (name, price-low, price-high, featured)
    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Output format (auto detects TTY: table if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the catalog JSON file
    catalog: PathBuf,

    /// Product ids to compare (at most 4; surplus ids are skipped)
    #[arg(required = true)]
    ids: Vec<String>,

    /// Output format (auto detects TTY: table if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend products for a preference profile
    Recommend(RecommendArgs),

    /// Browse the catalog with filters and sorting
    Browse(BrowseArgs),

    /// Compare up to four products side by side
    Compare(CompareArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .pantry-tools.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (file_config, loaded_from) = config::load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded configuration from {}", path.display());
    }
    let config_errors = file_config.validate();
    if !config_errors.is_empty() {
        for error in &config_errors {
            tracing::error!("config: {error}");
        }
        anyhow::bail!("invalid configuration ({} error(s))", config_errors.len());
    }

    match cli.command {
        Commands::Recommend(args) => {
            let profile = build_profile(&args)?;

            let mut limits = file_config.scoring;
            if let Some(limit) = args.limit {
                limits.max_results = limit;
            }
            if let Some(min_score) = args.min_score {
                limits.inclusion_threshold = min_score;
            }

            let output = OutputConfig {
                format: resolve_format(args.output, &file_config),
                file: args.output_file,
                quiet: cli.quiet,
            };

            let exit_code =
                cli::run_recommend(&args.catalog, &profile, limits, &output, args.explain)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Browse(args) => {
            let filter = CatalogFilter {
                query: args.query,
                category: args.category,
                vegan_only: args.vegan,
                gluten_free_only: args.gluten_free,
                organic_only: args.organic,
                featured_only: args.featured,
            };
            let sort = args.sort.unwrap_or(file_config.browse.default_sort);

            let output = OutputConfig {
                format: resolve_format(args.output, &file_config),
                file: args.output_file,
                quiet: cli.quiet,
            };

            let exit_code = cli::run_browse(&args.catalog, &filter, sort, &output)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Compare(args) => {
            let output = OutputConfig {
                format: resolve_format(args.output, &file_config),
                file: args.output_file,
                quiet: cli.quiet,
            };

            let exit_code = cli::run_compare(&args.catalog, &args.ids, &output)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pantry-tools", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml::to_string(&file_config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("pantry-tools").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".pantry-tools.yaml",
                    ".pantry-tools.yml",
                    "pantry-tools.yaml",
                    "pantry-tools.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".pantry-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

/// Build the preference profile from a wizard export file or from flags.
fn build_profile(args: &RecommendArgs) -> Result<PreferenceProfile> {
    if let Some(path) = &args.profile {
        return parse_profile(path)
            .with_context(|| format!("loading profile from {}", path.display()));
    }

    let mut profile = PreferenceProfile::new();
    profile.goal = args.goal;
    profile.age = args.age;
    profile.activity_level = args.activity;
    for restriction in &args.restrictions {
        profile = profile.with_restriction(*restriction);
    }
    for meal in &args.meals {
        profile = profile.with_meal_time(*meal);
    }
    Ok(profile)
}

/// CLI format flag wins unless left at auto with a file-configured format.
fn resolve_format(flag: ReportFormat, file_config: &pantry_tools::AppConfig) -> ReportFormat {
    if flag == ReportFormat::Auto && file_config.output.format != ReportFormat::Auto {
        file_config.output.format
    } else {
        flag
    }
}
