//! mar-suitability: MAR site-suitability scoring from the command line.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use mar_suitability::{
    cli::{self, EvaluateOptions, SensitivityOptions},
    config::{self, AppConfig},
    model::{CriterionId, ScenarioSelection},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with engine info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring rules: engine version 1.0",
        "\n\nOutput Formats:",
        "\n  summary, json",
        "\n\nFeatures:",
        "\n  Scenario gating, AHP weights, WLC ranking, completeness index, weight sensitivity"
    )
}

#[derive(Parser)]
#[command(name = "mar-suitability")]
#[command(version, long_version = build_long_version())]
#[command(about = "Site-suitability scoring for Managed Aquifer Recharge", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  --min-suitability or --require-consistent not met
    3  Error occurred

EXAMPLES:
    # Evaluate a site, summary on a terminal
    mar-suitability evaluate site.json

    # JSON report with a sensitivity sweep on C2
    mar-suitability evaluate site.json -o json --criterion C2 --range 20 --step 5

    # Check a judgments file
    mar-suitability ahp judgments.json --invert-hierarchy

    # Rank several candidate sites in parallel
    mar-suitability batch sites/*.json -o summary")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "MAR_SUITABILITY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Output flags shared by every reporting subcommand
#[derive(Parser)]
struct OutputArgs {
    /// Output format (auto: summary on a terminal, JSON otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `evaluate` subcommand
#[derive(Parser)]
struct EvaluateArgs {
    /// Path to the case JSON document
    case: PathBuf,

    #[command(flatten)]
    output: OutputArgs,

    /// Scenario tier to apply (auto, 0, 1, 2, 3)
    #[arg(long)]
    scenario: Option<ScenarioSelection>,

    /// Criterion to sweep (C1-C5)
    #[arg(long)]
    criterion: Option<CriterionId>,

    /// Sweep range in percent (requires --criterion)
    #[arg(long, requires = "criterion")]
    range: Option<f64>,

    /// Sweep step in percent (requires --criterion)
    #[arg(long, requires = "criterion")]
    step: Option<f64>,

    /// Use the mirror-permuted AHP weights
    #[arg(long)]
    invert_hierarchy: bool,

    /// Exit with code 1 if the leading group scores below this value (0-4)
    #[arg(long)]
    min_suitability: Option<f64>,

    /// Exit with code 1 if the AHP judgments are inconsistent
    #[arg(long)]
    require_consistent: bool,
}

/// Arguments for the `ahp` subcommand
#[derive(Parser)]
struct AhpArgs {
    /// Path to a JSON array of pairwise judgments
    judgments: PathBuf,

    #[command(flatten)]
    output: OutputArgs,

    /// Also report the mirror-permuted hierarchy
    #[arg(long)]
    invert_hierarchy: bool,

    /// Exit with code 1 if the judgments are inconsistent
    #[arg(long)]
    require_consistent: bool,
}

/// Arguments for the `sensitivity` subcommand
#[derive(Parser)]
struct SensitivityArgs {
    /// Path to the case JSON document
    case: PathBuf,

    /// Criterion to sweep (C1-C5)
    #[arg(long)]
    criterion: CriterionId,

    /// Sweep range in percent (default from config, max 50)
    #[arg(long)]
    range: Option<f64>,

    /// Sweep step in percent (default from config)
    #[arg(long)]
    step: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `batch` subcommand
#[derive(Parser)]
struct BatchArgs {
    /// Case JSON documents to evaluate
    #[arg(required = true)]
    cases: Vec<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,

    /// Exit with code 1 if any case's leading group scores below this value
    #[arg(long)]
    min_suitability: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one case document
    Evaluate(EvaluateArgs),

    /// Solve pairwise judgments into criterion weights
    Ahp(AhpArgs),

    /// Sweep one criterion's weight and report ranking robustness
    Sensitivity(SensitivityArgs),

    /// Evaluate several case documents in parallel
    Batch(BatchArgs),

    /// Print the variable catalog
    Catalog {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a commented example config file
    Example,
    /// Print current effective configuration (merged from defaults + file)
    Show,
}

/// Layer file config under the flags given on the command line.
fn effective_config(
    cli: &Cli,
    output: &OutputArgs,
    min_suitability: Option<f64>,
    require_consistent: bool,
) -> Result<AppConfig> {
    let overrides = AppConfig::builder()
        .output_format(output.output)
        .output_file(output.output_file.clone())
        .no_color(cli.no_color)
        .quiet(cli.quiet)
        .min_suitability(min_suitability)
        .require_consistent(require_consistent)
        .build();
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    Ok(config.validated()?)
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Evaluate(args) => {
            let config = effective_config(
                cli,
                &args.output,
                args.min_suitability,
                args.require_consistent,
            )?;
            let options = EvaluateOptions {
                case_path: args.case.clone(),
                scenario: args.scenario,
                criterion: args.criterion,
                range_percent: args.range,
                step_percent: args.step,
                invert_hierarchy: args.invert_hierarchy,
            };
            cli::run_evaluate(options, &config)
        }

        Commands::Ahp(args) => {
            let config = effective_config(cli, &args.output, None, args.require_consistent)?;
            cli::run_ahp(&args.judgments, args.invert_hierarchy, &config)
        }

        Commands::Sensitivity(args) => {
            let config = effective_config(cli, &args.output, None, false)?;
            let options = SensitivityOptions {
                case_path: args.case.clone(),
                criterion: args.criterion,
                range_percent: args.range,
                step_percent: args.step,
            };
            cli::run_sensitivity(options, &config)
        }

        Commands::Batch(args) => {
            let config = effective_config(cli, &args.output, args.min_suitability, false)?;
            cli::run_batch(&args.cases, &config)
        }

        Commands::Catalog { output } => {
            let config = effective_config(cli, output, None, false)?;
            cli::run_catalog(&config)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "mar-suitability", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Schema { output } => {
                    let schema = config::generate_json_schema();
                    match output {
                        Some(path) => {
                            std::fs::write(path, &schema)
                                .with_context(|| format!("failed to write {}", path.display()))?;
                            eprintln!("Schema written to {}", path.display());
                        }
                        None => println!("{schema}"),
                    }
                }
                ConfigAction::Example => print!("{}", config::generate_full_example_config()),
                ConfigAction::Show => {
                    let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                    match &loaded_from {
                        Some(path) => eprintln!("# Loaded from: {}", path.display()),
                        None => eprintln!("# No config file found; showing defaults"),
                    }
                    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging; stdout carries the report
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}
