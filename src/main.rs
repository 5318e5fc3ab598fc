use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use docdesk::input::{InputForm, Upload};
use docdesk::samples::SampleKind;
use docdesk::types::DocumentType;
use docdesk::{Console, ConsoleConfig, ConsoleError, SubmitOutcome, routes, state};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error("failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "docdesk", about = "Operator console for the document-triage backend")]
struct Cli {
    /// Backend base URL; overrides `DOCDESK_BACKEND_URL`.
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web console.
    Serve {
        /// Listen port; overrides `PORT`.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit one input and print the rendered result.
    Submit(SubmitArgs),
    /// Print the processing history.
    History,
    /// Print one trace's full record.
    Trace { trace_id: String },
    /// Print a sample payload.
    Sample {
        #[arg(value_enum)]
        kind: SampleKind,
    },
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
    #[arg(long)]
    text: Option<String>,
    /// Email, JSON or PDF; detected from the file extension when omitted.
    #[arg(long = "type")]
    input_type: Option<DocumentType>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ConsoleConfig::from_env();
    if let Some(url) = cli.backend_url.as_deref() {
        config = config.with_backend_url(url);
    }

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            run_serve(&config).await
        }
        Command::Submit(args) => run_submit(&config, args).await,
        Command::History => {
            let console = Console::new(&config)?;
            println!("{}", console.history().summary().await?);
            Ok(())
        }
        Command::Trace { trace_id } => {
            let console = Console::new(&config)?;
            println!("{}", console.history().detail(&trace_id).await?);
            Ok(())
        }
        Command::Sample { kind } => {
            let console = Console::new(&config)?;
            println!("{}", console.load_sample(kind).await.text());
            Ok(())
        }
    }
}

async fn run_serve(config: &ConsoleConfig) -> Result<(), CliError> {
    let state = state::AppState::from_config(config)?;
    let backend_url = state.console.backend_url().to_owned();
    let app = routes::app(state);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| CliError::Bind { port, source })?;

    tracing::info!(%port, %backend_url, "docdesk listening");
    axum::serve(listener, app).await.map_err(CliError::Serve)
}

async fn run_submit(config: &ConsoleConfig, args: SubmitArgs) -> Result<(), CliError> {
    let mut form = InputForm::new();
    if let Some(path) = args.file {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| CliError::ReadFile { path: path.clone(), source })?;
        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        form.select_file(Upload::new(file_name, bytes));
    }
    if let Some(text) = args.text {
        form.enter_text(text);
    }
    if args.input_type.is_some() {
        form.set_input_type(args.input_type);
    }

    let console = Console::new(config)?;
    match console.submit(&form).await? {
        SubmitOutcome::Completed { html, .. } => {
            println!("{html}");
            Ok(())
        }
        SubmitOutcome::Failed { error, html } => {
            println!("{html}");
            Err(error.into())
        }
    }
}
