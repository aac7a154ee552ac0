use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use hypotest::batch::{self, Evaluated};
use hypotest::request::{self, Analysis, AnalysisKind};
use hypotest::report;

#[derive(Parser)]
#[command(
    name = "hypotest",
    version,
    about = "Descriptive statistics and classical hypothesis tests over numeric samples"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every analysis in a JSON request file
    Run {
        /// Request file with an "analyses" array
        #[arg(value_name = "REQUEST")]
        file: PathBuf,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize numbers given on the command line
    Describe {
        /// Sample values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file, json } => {
            let start = Instant::now();

            let req = request::load_request(&file)
                .and_then(|req| req.validate().map(|()| req))
                .unwrap_or_else(|e| {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                });

            let results = batch::run_all(&req.analyses);
            print(&results, json);

            eprintln!(
                "\nEvaluated {} analyses in {:.1}ms",
                results.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
        Commands::Describe { values, json } => {
            let analysis = Analysis {
                label: "values".to_string(),
                kind: AnalysisKind::Describe { values },
            };
            if let Err(e) = analysis.validate() {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
            print(&batch::run_all(std::slice::from_ref(&analysis)), json);
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "hypotest", &mut io::stdout());
        }
    }
}

fn print(results: &[Evaluated], json: bool) {
    if json {
        if let Err(e) = report::print_results_json(results) {
            eprintln!("error: failed to serialize results: {e}");
            std::process::exit(1);
        }
    } else {
        report::print_results(results);
    }
}
