//! Dirhash CLI Binary
//!
//! Command-line wrapper around the library: parses flags, computes the
//! digest, prints it to stdout. Any error goes to stderr with a non-zero
//! exit code.

use clap::Parser;
use dirhash::cli::{map_error, Cli};
use dirhash::config::DirhashConfig;
use dirhash::logging::{init_logging, LoggingConfig};
use dirhash::{dirhash, Options};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Load config file first so CLI flags can override it
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let options = match build_options(&cli, &config) {
        Ok(options) => options,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    info!(path = %cli.path.display(), "hashing directory tree");
    match dirhash(&cli.path, &options) {
        Ok(digest) => {
            info!("digest computed");
            println!("{}", digest);
        }
        Err(e) => {
            error!("Hashing failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<DirhashConfig, dirhash::HashError> {
    match &cli.config {
        Some(path) => DirhashConfig::load_from_file(path),
        None => Ok(DirhashConfig::default()),
    }
}

/// Digest options: CLI flags override the config file, which overrides defaults.
fn build_options(cli: &Cli, config: &DirhashConfig) -> Result<Options, dirhash::HashError> {
    let mut options = config.options();

    if let Some(ref name) = cli.algorithm {
        options.algorithm = name.parse()?;
    }
    if let Some(ref name) = cli.mode {
        options.digest_mode = name.parse()?;
    }
    if cli.ignore_hidden {
        options.ignore_hidden = true;
    }
    if cli.follow_symlinks {
        options.follow_symlinks = true;
    }
    options.excluded_files.extend(cli.exclude_files.iter().cloned());
    options
        .excluded_extensions
        .extend(cli.exclude_extensions.iter().cloned());

    Ok(options)
}

/// Logging config: off unless --verbose, then CLI flags over config file.
fn build_logging_config(cli: &Cli, config: &DirhashConfig) -> LoggingConfig {
    if !cli.verbose {
        let mut logging = LoggingConfig::default();
        logging.level = "off".to_string();
        return logging;
    }

    let mut logging = config.logging.clone();
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    logging
}
