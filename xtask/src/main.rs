mod reference;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for hypotest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check t and F tail probabilities against textbook critical values
    Reference {
        /// TOML table of critical values
        #[arg(long, default_value = "reference/critical_values.toml")]
        table: PathBuf,

        /// Largest accepted absolute p-value deviation
        #[arg(long, default_value_t = reference::DEFAULT_TOLERANCE)]
        tolerance: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Reference { table, tolerance } => {
            let results = match reference::check(&table, tolerance) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            reference::print_results(&results);

            let failed = results.iter().filter(|r| r.verdict.is_fail()).count();
            if failed > 0 {
                eprintln!("\n{failed} of {} reference values out of tolerance", results.len());
                std::process::exit(1);
            }
            eprintln!("\nAll {} reference values within {tolerance:e}", results.len());
        }
    }
}
