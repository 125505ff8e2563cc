use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use step_report::report::{self, console::ConsoleWriter, json, ReportSummary, StepStatus};
use step_report::utils::config::Config;

#[derive(Parser)]
#[command(name = "step-report")]
#[command(version)]
#[command(about = "Normalize and inspect step execution reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collapse single-iteration loop steps and print the report as JSON
    Clean {
        /// Path to the report (JSON or YAML), `-` for stdin
        path: PathBuf,

        /// Print compact JSON
        #[arg(long, default_value = "false")]
        compact: bool,
    },

    /// Print the report as a tree
    Show {
        /// Path to the report (JSON or YAML), `-` for stdin
        path: PathBuf,

        /// Keep single-iteration loop steps
        #[arg(long, default_value = "false")]
        raw: bool,

        /// Print nothing when the scenario succeeded
        #[arg(long, default_value = "false")]
        only_failed: bool,

        /// Disable colors
        #[arg(long, default_value = "false")]
        no_color: bool,
    },

    /// Print step counts and statuses
    Summary {
        /// Path to the report (JSON or YAML), `-` for stdin
        path: PathBuf,

        /// Count single-iteration loop steps too
        #[arg(long, default_value = "false")]
        raw: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Clean { path, compact } => {
            let report = report::load(&path, false)?;
            let pretty = config.pretty && !compact;
            println!("{}", json::to_json_string(&report, pretty)?);
        }

        Commands::Show {
            path,
            raw,
            only_failed,
            no_color,
        } => {
            let report = report::load(&path, raw)?;
            let color = config.color && !no_color;
            if report::console::should_print(&report, config.only_failed || only_failed) {
                print!("{}", ConsoleWriter::new(color).render_report(&report));
            }
        }

        Commands::Summary { path, raw } => {
            let report = report::load(&path, raw)?;
            let summary = ReportSummary::of(&report);

            let verdict = if summary.is_success() {
                "PASSED".green().bold()
            } else {
                "FAILED".red().bold()
            };
            println!("{} {}", verdict, report.display_name().cyan());
            println!("  Steps: {}", summary.total_steps);
            println!("  Leaf steps: {}", summary.leaf_steps);
            println!("  Max depth: {}", summary.max_depth);
            println!("  Errors: {}", summary.errors);
            for (status, count) in &summary.statuses {
                let label = match status {
                    StepStatus::Success => status.as_str().green(),
                    StepStatus::Failure => status.as_str().red(),
                    _ => status.as_str().yellow(),
                };
                println!("  {}: {}", label, count);
            }
        }
    }

    Ok(())
}
