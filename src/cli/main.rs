use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::AsyncBufRead;

use relnav::core::telemetry::init_logging;
use relnav::{Command, CommandOutcome, Config, NavigationContext, TerminalEditor};

/// Open sibling files that share the active file's extension.
#[derive(Debug, Parser)]
#[command(name = "relnav", version, about)]
struct Cli {
    /// JSON config file (falls back to $RELNAV_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print each command outcome as a JSON line.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Pick one of the other files from a list.
    #[command(alias = "showFilesInRelativePath")]
    Show { active: PathBuf },
    /// Open the next file, wrapping at the end.
    #[command(alias = "openNextFileInRelativePath")]
    Next { active: PathBuf },
    /// Open the previous file, wrapping at the start.
    #[command(alias = "openPreviousFileInRelativePath")]
    Prev { active: PathBuf },
    /// Read `show|next|prev [PATH]` lines from stdin, keeping state between them.
    Session { active: Option<PathBuf> },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref()).context("failed to load config")?;
    init_logging(&config.logging.filter);

    let context = NavigationContext::new(&config);
    let (command, active) = match cli.command {
        CliCommand::Show { active } => (Command::ShowFiles, active),
        CliCommand::Next { active } => (Command::OpenNext, active),
        CliCommand::Prev { active } => (Command::OpenPrevious, active),
        CliCommand::Session { active } => {
            let active = active.as_deref().map(absolutize).transpose()?;
            let editor = TerminalEditor::stdin(active, !cli.json);
            run_session(&context, &editor, cli.json).await?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let editor = TerminalEditor::stdin(Some(absolutize(&active)?), !cli.json);
    let outcome = context.execute(&editor, command).await;
    report(&outcome, cli.json)?;
    Ok(match outcome {
        CommandOutcome::Aborted { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

async fn run_session<R>(
    context: &NavigationContext,
    editor: &TerminalEditor<R>,
    json: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin + Send,
{
    loop {
        let line = tokio::select! {
            line = editor.read_line() => line.context("failed to read command")?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        };
        let Some(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (verb, path) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        if matches!(verb, "quit" | "exit") {
            break;
        }
        let command = match verb.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("[warning] {e}");
                continue;
            }
        };
        let path = path.trim();
        if !path.is_empty() {
            editor.set_active(Some(absolutize(Path::new(path))?));
        }

        let outcome = context.execute(editor, command).await;
        report(&outcome, json)?;
    }

    context.deactivate().await;
    Ok(())
}

fn report(outcome: &CommandOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(outcome)?);
    }
    Ok(())
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(path))
}
