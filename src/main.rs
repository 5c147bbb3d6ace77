mod app;
mod data;
mod error;
mod interrupt;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;

use app::{SortJob, Summary};

const DEFAULT_INPUT: &str = "kaggle_zinc_filtered.csv";
const DEFAULT_OUTPUT: &str = "kaggle_zinc_filtered_sorted.csv";
const DEFAULT_QED_FIELD: &str = "qed";

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(
    name = "qed-sort",
    version,
    about = "Sort a CSV by the QED column in descending order"
)]
struct Cli {
    /// Path to the input CSV
    #[arg(long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Path to write the sorted CSV
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Column name for QED (case-insensitive)
    #[arg(long = "qed-field", value_name = "NAME", default_value = DEFAULT_QED_FIELD)]
    qed_field: String,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    interrupt::install();

    let job = SortJob {
        input: cli.input,
        output: cli.output,
        qed_field: cli.qed_field,
    };

    let (code, message) = exit_status(app::run(&job));
    if code == EXIT_SUCCESS {
        println!("{message}");
    } else {
        eprintln!("{message}");
        process::exit(code);
    }
}

/// Exit code and the line to print for the outcome of a run.  Success goes
/// to stdout, anything else to stderr.
fn exit_status(result: anyhow::Result<Summary>) -> (i32, String) {
    match result {
        Ok(summary) => (EXIT_SUCCESS, summary.to_string()),
        Err(e) => (EXIT_FAILURE, format!("qed-sort: {e:#}")),
    }
}
