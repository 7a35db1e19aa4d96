use clap::Parser;
use linescan::kmp::KmpPattern;
use linescan::pattern::Pattern;
use linescan::search::{search_kmp, search_regex, SearchReport};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Search a text file for lines containing a pattern.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The pattern to search for.
    pattern: String,

    /// The file to search.
    file: PathBuf,

    /// Treat `pattern` as a regular expression instead of a literal string.
    #[arg(long)]
    regex: bool,

    /// Emit the compiled pattern's DOT representation to stderr before
    /// searching (regex mode only).
    #[arg(long)]
    dot: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Search(#[from] linescan::SearchError),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<SearchReport, CliError> {
    let file = File::open(&args.file).map_err(|source| CliError::Open {
        path: args.file.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    if args.regex {
        let pattern = Pattern::compile(&args.pattern)?;
        if args.dot {
            eprintln!("{}", linescan::dot::dfa_to_dot(pattern.dfa()));
        }
        Ok(search_regex(reader, &pattern)?)
    } else {
        let pattern = KmpPattern::compile(&args.pattern)?;
        Ok(search_kmp(reader, &pattern)?)
    }
}

fn print_report(report: &SearchReport) {
    if !report.any_matched {
        println!("no matching lines");
        return;
    }
    println!("{} matching line(s), showing up to 10:", report.count);
    for (line_no, line) in report.first(10) {
        println!("{line_no}: {line}");
    }
}
