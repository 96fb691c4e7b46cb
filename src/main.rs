use anyhow::{Context, Result};
use clap::Parser;
use lastline::{run_scan, ScanConfig, ScanSummary, DEFAULT_OUTPUT, DEFAULT_ROOT};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "lastline",
    version,
    about = "Collects the last lines of log files in a folder and its subdirs"
)]
struct Args {
    /// Path to the folder to search for files
    #[arg(short = 'p', long = "folder-path", default_value = DEFAULT_ROOT)]
    folder_path: PathBuf,

    /// Path to the output file to store the sorted last lines
    #[arg(short = 'o', long = "output-file", default_value = DEFAULT_OUTPUT)]
    output_file: PathBuf,

    /// Maximum length for the truncated last lines
    #[arg(
        short = 'm',
        long = "max-length",
        default_value_t = 80,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_length: u64,

    /// Host name written into the output header (defaults to the system hostname)
    #[arg(long)]
    host: Option<String>,

    /// Record the collection time in the output header
    #[arg(long)]
    timestamp: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lastline: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let host = args.host.or_else(system_hostname);

    let mut config = ScanConfig::new(&args.folder_path)
        .output(args.output_file)
        .max_length(args.max_length as usize)
        .timestamp(args.timestamp);
    if let Some(host) = host {
        config = config.host(host);
    }

    let summary = run_scan(&config)
        .with_context(|| format!("collecting last lines under {}", args.folder_path.display()))?;

    print_summary(&config, &summary);
    Ok(())
}

fn print_summary(config: &ScanConfig, summary: &ScanSummary) {
    println!(
        "Collected {} of {} files into {}",
        summary.records_written,
        summary.files_seen,
        config.output.display()
    );
    println!(
        "Skipped: {} binary, {} empty, {} unreadable",
        summary.skipped_binary, summary.skipped_empty, summary.skipped_unreadable
    );
}

fn system_hostname() -> Option<String> {
    hostname::get().ok().and_then(|name| name.into_string().ok())
}
