//! Syllogism - command-line validity checker
//!
//! Lists the valid categorical syllogisms under either interpretation,
//! compares the two, or explains the verdict for a single syllogism.

use clap::{Parser, Subcommand};
use syllogism_logic::interpretation::{current_interpretation, set_interpretation};
use syllogism_logic::{
    compare_interpretations, Config, Explanation, Interpretation, OutputFormat, Result,
    RuleChecker, Syllogism, ValidityReport,
};

/// Categorical syllogism validity checker
#[derive(Parser, Debug)]
#[command(name = "syllogism")]
#[command(version)]
#[command(about = "Validate categorical syllogisms under Aristotelian or Boolean semantics", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the syllogisms valid under the Aristotelian interpretation
    Aristotelian,
    /// List the syllogisms valid under the Boolean interpretation
    Boolean,
    /// Show which syllogisms only one interpretation accepts
    Compare,
    /// Show every rule's outcome for one syllogism, e.g. AAI-1
    Explain {
        /// Canonical mood-figure name
        name: Syllogism,

        /// Interpretation to judge under (defaults to the configured one)
        #[arg(short, long)]
        interpretation: Option<Interpretation>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = Config::from_env()?;
    if let Some(format) = args.format {
        config.format = format;
    }
    set_interpretation(config.interpretation);
    log::info!(
        "Default interpretation: {}, output format: {:?}",
        config.interpretation,
        config.format
    );

    let checker = RuleChecker::standard();

    let output = match args.command {
        Command::Aristotelian => {
            set_interpretation(Interpretation::Aristotelian);
            render_report(&checker, config.format)?
        }
        Command::Boolean => {
            set_interpretation(Interpretation::Boolean);
            render_report(&checker, config.format)?
        }
        Command::Compare => {
            let comparison = compare_interpretations(&checker);
            match config.format {
                OutputFormat::Text => comparison.to_text(),
                OutputFormat::Json => comparison.to_json()?,
            }
        }
        Command::Explain {
            name,
            interpretation,
        } => {
            if let Some(interpretation) = interpretation {
                set_interpretation(interpretation);
            }
            let explanation = Explanation::new(&checker, &name, current_interpretation());
            match config.format {
                OutputFormat::Text => explanation.to_text(&name),
                OutputFormat::Json => explanation.to_json()?,
            }
        }
    };

    println!("{}", output);

    let stats = checker.stats();
    log::debug!(
        "Evaluated {} syllogisms ({} rule checks, {} violations)",
        stats.evaluations,
        stats.rules_evaluated,
        stats.violations
    );

    Ok(())
}

/// Reports the valid syllogisms under the current interpretation.
fn render_report(checker: &RuleChecker, format: OutputFormat) -> Result<String> {
    let report = ValidityReport::generate(checker, current_interpretation());
    log::info!(
        "{} valid syllogisms under the {}",
        report.valid.len(),
        report.interpretation.display_name()
    );
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => report.to_json(),
    }
}
