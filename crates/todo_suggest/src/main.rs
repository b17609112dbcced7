use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use suggestion_generator::config::{DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use suggestion_generator::{ApiConfig, OpenAiClient};
use todo_marker::DEFAULT_BEFORE_LINES;
use todo_suggest::{run, ScanConfig};

fn main() -> Result<()> {
    let matches = Command::new("todo_suggest")
        .version("0.1.0")
        .about("Scans project files for TODOs and asks a language model for code suggestions")
        .arg(
            Arg::new("project_directory")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to the project directory"),
        )
        .arg(
            Arg::new("before_lines")
                .long("before_lines")
                .value_parser(value_parser!(usize))
                .help("Number of lines before TODO to include in the context (default 2)"),
        )
        .arg(
            Arg::new("dotenv_path")
                .long("dotenv_path")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the .env file holding OPENAI_API_KEY"),
        )
        .arg(
            Arg::new("extensions")
                .long("extensions")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("File extensions to scan (default: py,cpp,h,java)"),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .default_value(DEFAULT_MODEL)
                .help("Model used for completions"),
        )
        .arg(
            Arg::new("api_base")
                .long("api_base")
                .default_value(DEFAULT_API_BASE)
                .help("Base URL of the OpenAI compatible API"),
        )
        .arg(
            Arg::new("timeout_secs")
                .long("timeout_secs")
                .value_parser(value_parser!(u64))
                .help("Timeout for each completion request, in seconds (default 60)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    let root = matches
        .get_one::<PathBuf>("project_directory")
        .cloned()
        .context("project_directory is required")?;
    let before_lines = matches
        .get_one::<usize>("before_lines")
        .copied()
        .unwrap_or(DEFAULT_BEFORE_LINES);
    let extensions: Vec<String> = matches
        .get_many::<String>("extensions")
        .unwrap_or_default()
        .cloned()
        .collect();

    let scan_config = ScanConfig::new(root)
        .with_before_lines(before_lines)
        .with_extensions(&extensions);
    scan_config.validate()?;
    log::debug!("{:?}", scan_config);

    let model = matches
        .get_one::<String>("model")
        .map(String::as_str)
        .unwrap_or(DEFAULT_MODEL);
    let api_base = matches
        .get_one::<String>("api_base")
        .map(String::as_str)
        .unwrap_or(DEFAULT_API_BASE);
    let timeout = Duration::from_secs(
        matches
            .get_one::<u64>("timeout_secs")
            .copied()
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    );
    let dotenv_path = matches.get_one::<PathBuf>("dotenv_path");

    let api_config = ApiConfig::from_env(dotenv_path.map(PathBuf::as_path), model, api_base, timeout)
        .context("Failed to load API configuration")?;
    log::debug!("{:?}", api_config);
    let client = OpenAiClient::new(&api_config).context("Failed to build completion client")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&scan_config, &client, &mut out)?;

    Ok(())
}
