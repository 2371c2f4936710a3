//! HireStack API documentation shell.
//!
//! Serves a single page that mounts one OpenAPI viewer, pointed at either the
//! live API description or a bundled copy. Can also write the page out as a
//! static file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use hirestack_docs_source::{BundledSpec, SourceError};
use hirestack_docs_telemetry::{init_logging, log_startup, LogFormat, TelemetryConfig};

mod api;
mod config;
mod error;
mod server;
mod shell;
mod viewer;

use config::{SourceArgs, EMBEDDED_SPEC};

#[derive(Parser, Debug)]
#[command(
    name = "hirestack-docs",
    about = "HireStack API documentation shell",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the documentation page over HTTP.
    Serve {
        /// Listen address.
        #[arg(long, env = "HIRESTACK_DOCS_LISTEN", default_value = "127.0.0.1:8080")]
        listen: SocketAddr,

        #[command(flatten)]
        source: SourceArgs,

        /// Log level filter (overridden by RUST_LOG).
        #[arg(long, env = "HIRESTACK_DOCS_LOG_LEVEL", default_value = "info")]
        log_level: String,

        /// Log output format (json or pretty).
        #[arg(long, env = "HIRESTACK_DOCS_LOG_FORMAT", default_value = "json", value_parser = parse_log_format)]
        log_format: LogFormat,
    },

    /// Write the documentation page as a static HTML file.
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file. Writes to stdout when omitted.
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Check that a bundled spec file loads.
    Validate {
        /// Spec file to check. Checks the embedded document when omitted.
        #[arg(long)]
        spec_file: Option<PathBuf>,
    },
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    LogFormat::parse(s).ok_or_else(|| format!("unknown log format '{s}' (expected 'json' or 'pretty')"))
}

/// Logging for one-shot commands: pretty, on stderr so stdout stays clean.
fn cli_telemetry() -> TelemetryConfig {
    TelemetryConfig::new()
        .with_service_name(env!("CARGO_PKG_NAME"))
        .with_log_level("info")
        .with_log_format(LogFormat::Pretty)
        .with_stderr(true)
}

/// Exit code for a failed source resolution: 3 for I/O, 1 otherwise.
fn source_exit_code(err: &SourceError) -> u8 {
    match err {
        SourceError::Io(_) => 3,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            listen,
            source,
            log_level,
            log_format,
        } => {
            let telemetry = TelemetryConfig::new()
                .with_service_name(env!("CARGO_PKG_NAME"))
                .with_log_level(log_level)
                .with_log_format(log_format);
            if let Err(e) = init_logging(&telemetry) {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }

            log_startup!(
                service = %telemetry.service_name,
                version = env!("CARGO_PKG_VERSION"),
                source = source.source.as_str(),
                viewer = source.viewer.as_str()
            );

            let shell = match source.build_shell() {
                Ok(shell) => shell,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to resolve API description source");
                    return ExitCode::from(source_exit_code(&e));
                }
            };

            let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
            rt.block_on(async {
                match server::run(server::ServerConfig {
                    listen_addr: listen,
                    shell,
                })
                .await
                {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(e) => {
                        eprintln!("error: {}", e);
                        ExitCode::from(1)
                    }
                }
            })
        }

        Command::Render { source, output } => {
            if let Err(e) = init_logging(&cli_telemetry()) {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }

            let shell = match source.build_shell() {
                Ok(shell) => shell,
                Err(e) => {
                    eprintln!("error: {}", e);
                    return ExitCode::from(source_exit_code(&e));
                }
            };

            let html = shell.render();
            match output {
                Some(path) => match std::fs::write(&path, html) {
                    Ok(()) => {
                        eprintln!("Documentation page written to: {}", path.display());
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("error: {}: {}", path.display(), e);
                        ExitCode::from(3)
                    }
                },
                None => {
                    print!("{}", html);
                    ExitCode::SUCCESS
                }
            }
        }

        Command::Validate { spec_file } => {
            if let Err(e) = init_logging(&cli_telemetry()) {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }

            let result = match &spec_file {
                Some(path) => BundledSpec::from_file(path),
                None => BundledSpec::embedded(EMBEDDED_SPEC),
            };

            match result {
                Ok(spec) => {
                    println!(
                        "{} - OK ({} {}, title: {})",
                        spec.origin(),
                        spec.format().as_str(),
                        spec.version(),
                        spec.title().unwrap_or("<none>")
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    ExitCode::from(source_exit_code(&e))
                }
            }
        }
    }
}
