use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{self, ConfigError};
use crate::logging;
use crate::service::{NavService, ServiceError};
use crate::transport;

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Service(ServiceError),
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Service(error) => write!(f, "service error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ServiceError> for RuntimeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// JSON line protocol on stdin/stdout.
    Serve,
    /// Load the catalog, report counts, exit.
    Validate,
    /// One-shot ranked query printed to stdout.
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub mode: RunMode,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            data_dir: None,
            mode: RunMode::Serve,
        }
    }
}

pub fn parse_cli_args(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter.next().ok_or("--config requires a path")?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--data-dir" => {
                let value = iter.next().ok_or("--data-dir requires a path")?;
                options.data_dir = Some(PathBuf::from(value));
            }
            "serve" => options.mode = RunMode::Serve,
            "validate" => options.mode = RunMode::Validate,
            "search" => {
                let query = iter.next().ok_or("search requires a query")?;
                options.mode = RunMode::Search(query.clone());
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(options)
}

pub fn run_with_options(options: RunOptions) -> Result<(), RuntimeError> {
    let _ = logging::init();

    let mut config = config::load(options.config_path.as_deref())?;
    if let Some(data_dir) = options.data_dir {
        config.data_dir = data_dir;
    }

    if !config.config_path.exists() {
        config::save(&config)?;
        println!(
            "[navhub-core] wrote default config to {}",
            config.config_path.display()
        );
    }

    println!(
        "[navhub-core] startup config_path={} data_dir={} locales_dir={} max_results={}",
        config.config_path.display(),
        config.data_dir.display(),
        config.locales_dir.display(),
        config.max_results,
    );
    logging::info(&format!(
        "startup data_dir={} max_results={}",
        config.data_dir.display(),
        config.max_results
    ));

    let service = NavService::new(config)?;
    let site_count = service.catalog().sites().len();
    let category_count = service.catalog().flat_categories().len();
    println!("[navhub-core] catalog loaded sites={site_count} categories={category_count}");
    logging::info(&format!(
        "catalog loaded sites={site_count} categories={category_count}"
    ));

    match options.mode {
        RunMode::Validate => {
            println!(
                "[navhub-core] catalog ok featured={} tags={}",
                service.catalog().featured_sites().len(),
                service.catalog().all_tags().len()
            );
            Ok(())
        }
        RunMode::Search(query) => {
            let results = service.search(&query, 0);
            if results.is_empty() {
                println!("[navhub-core] no results for '{query}'");
                return Ok(());
            }
            for result in &results {
                println!(
                    "{:>4}  {:<11}  {}  {}",
                    result.score,
                    result.match_type.as_str(),
                    result.site.name.en_us,
                    result.site.url
                );
            }
            Ok(())
        }
        RunMode::Serve => serve_stdio(&service),
    }
}

/// One JSON request per line in, one JSON response per line out.
fn serve_stdio(service: &NavService) -> Result<(), RuntimeError> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let response = transport::handle_json(service, trimmed);
        writeln!(out, "{response}")?;
    }

    Ok(())
}
