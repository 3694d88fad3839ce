//! bitcmp - check that two rendered images are bit-for-bit identical.
//!
//! ```text
//! bitcmp Image.raw other/Image.raw
//! ```
//!
//! Prints one line describing the outcome. Exits 0 on a match, 1 on any
//! mismatch or read error, 2 on bad arguments (with a usage message).

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use frameprep::compare::{Comparison, compare};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "bitcmp")]
#[command(about = "Check that two rendered images are bit-for-bit identical")]
#[command(version)]
struct Cli {
    /// First image, compared as raw bytes
    image_a: PathBuf,

    /// Second image, compared as raw bytes
    image_b: PathBuf,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logging setup failed: {0}")]
    Logging(String),
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_log(level: LevelFilter) -> Result<(), CliError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} {t} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| CliError::Logging(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| CliError::Logging(e.to_string()))?;
    Ok(())
}

fn open(path: &Path) -> Result<File, CliError> {
    File::open(path).map_err(|source| CliError::Open {
        path: path.to_owned(),
        source,
    })
}

fn read_all(mut file: File, path: &Path) -> Result<Vec<u8>, CliError> {
    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    Ok(buf)
}

/// Open both images before reading either, then compare.
fn run(cli: &Cli) -> Result<Comparison, CliError> {
    let a = open(&cli.image_a)?;
    let b = open(&cli.image_b)?;
    let a = read_all(a, &cli.image_a)?;
    let b = read_all(b, &cli.image_b)?;
    log::debug!(
        "comparing {} ({} bytes) with {} ({} bytes)",
        cli.image_a.display(),
        a.len(),
        cli.image_b.display(),
        b.len()
    );
    Ok(compare(&a, &b))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_log(level_for(cli.verbose)) {
        eprintln!("{e}");
    }
    match run(&cli) {
        Ok(result) => {
            println!("{result}");
            if result.is_match() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
