//! Command-line front end feeding request bodies through the section
//! controller.
//!
//! The binary stands in for an HTTP transport: it reads a body from a file or
//! stdin, tags it with the given content type, and prints the controller's
//! answer as JSON.

mod config;
mod errors;

use std::ffi::OsString;
use std::fs;
use std::io::{Read, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::bootstrap::bootstrap_with;
use crate::controller::{Request, SectionController};
use crate::service::InMemorySectionService;

use self::config::{ConfigLoader, OrthoConfigLoader, split_config_arguments};
use self::errors::AppError;

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    about = "Decode REST request bodies by content type",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Decode a body and print the typed input.
    Parse(BodyArgs),
    /// Create a section and print the resulting section list.
    CreateSection(BodyArgs),
}

#[derive(Debug, Args)]
struct BodyArgs {
    /// Content type of the body, e.g. `application/vnd.folio.SectionInput+json`.
    #[arg(long)]
    content_type: Option<String>,
    /// File holding the body. Reads stdin when omitted.
    file: Option<Utf8PathBuf>,
}

impl BodyArgs {
    fn into_request<R: Read>(self, stdin: &mut R) -> Result<Request, AppError> {
        let body = match self.file {
            Some(path) => fs::read(&path).map_err(|source| AppError::ReadFile { path, source })?,
            None => {
                let mut buffer = Vec::new();
                stdin
                    .read_to_end(&mut buffer)
                    .map_err(AppError::ReadStdin)?;
                buffer
            }
        };
        Ok(Request::new(self.content_type, body))
    }
}

/// Runs the CLI with the given arguments and IO handles.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdin, stdout, stderr, &OrthoConfigLoader)
}

fn run_with_loader<I, R, W, E, L>(
    args: I,
    stdin: &mut R,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&args);

    let result = Cli::try_parse_from(split.command_arguments)
        .map_err(AppError::CliUsage)
        .and_then(|cli| {
            loader
                .load(&split.config_arguments)
                .map(|config| (cli, config))
        })
        .and_then(|(cli, config)| {
            let controller = bootstrap_with(&config, InMemorySectionService::new())?;
            execute(cli.command, &controller, stdin, stdout)
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::CliUsage(error)) => {
            // Help and version requests are clap errors that belong on stdout.
            if error.use_stderr() {
                write!(stderr, "{error}").ok();
            } else {
                write!(stdout, "{error}").ok();
            }
            ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(2))
        }
        Err(error) => {
            writeln!(stderr, "{error}").ok();
            ExitCode::from(error.exit_status())
        }
    }
}

fn execute<R: Read, W: Write>(
    command: CliCommand,
    controller: &SectionController<InMemorySectionService>,
    stdin: &mut R,
    stdout: &mut W,
) -> Result<(), AppError> {
    match command {
        CliCommand::Parse(body) => {
            let input = controller.parse_input(body.into_request(stdin)?)?;
            emit_json(stdout, &input)
        }
        CliCommand::CreateSection(body) => {
            controller.create_section(body.into_request(stdin)?)?;
            emit_json(stdout, &controller.list_sections()?)
        }
    }
}

fn emit_json<W: Write, T: Serialize>(stdout: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *stdout, value).map_err(AppError::Serialise)?;
    writeln!(stdout).map_err(AppError::WriteOutput)
}
