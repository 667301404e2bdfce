// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: build, verify and emit the stitch-cell tables.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{error, info, LevelFilter};

use amr_stitch_tables::emit::render;
use amr_stitch_tables::{CaseTables, GeneratorResult, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "stitchgen",
    version,
    about = "Generate and verify the AMR stitch-cell case tables"
)]
struct Cli {
    /// Write the tables here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Language of the emitted tables
    #[arg(short, long, value_enum, default_value_t = OutputFormat::C)]
    format: OutputFormat,

    /// Build and verify the tables without emitting them
    #[arg(long)]
    validate_only: bool,

    /// Print the record and tessellations of one case
    #[arg(long, value_name = "N")]
    show_case: Option<usize>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(cli: &Cli) -> GeneratorResult<()> {
    let tables = CaseTables::build()?;
    info!("statistics:\n{}", tables.statistics);

    if let Some(case) = cli.show_case {
        print!("{}", tables.describe_case(case)?);
        return Ok(());
    }
    if cli.validate_only {
        println!(
            "{} tessellations validated",
            tables.tessellations.total()
        );
        return Ok(());
    }

    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            render(&tables.output, cli.format, &mut out)?;
            out.flush()?;
            info!("wrote {} tables to {}", cli.format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render(&tables.output, cli.format, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_option() {
        let cli = Cli::try_parse_from(["stitchgen"]).unwrap();
        assert_eq!(cli.format, OutputFormat::C);
        let cli = Cli::try_parse_from(["stitchgen", "-f", "rust"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Rust);
        assert!(Cli::try_parse_from(["stitchgen", "--format", "fortran"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["stitchgen", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        assert!(Cli::try_parse_from(["stitchgen", "-q", "-v"]).is_err());
    }
}
