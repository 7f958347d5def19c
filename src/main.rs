use std::sync::Arc;

use clap::Parser;
use edusolve::models::Bank;
use edusolve::sessions::SessionRegistry;
use edusolve::solver::SolverClient;
use edusolve::{llm, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// API key for the hosted inference endpoint.
    #[clap(env = "EDUBOT_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model id to run text generation against.
    #[arg(long, env, default_value = llm::DEFAULT_MODEL)]
    model: String,

    /// Symbolic evaluator endpoint for the calculator page.
    #[arg(long, env)]
    solver_url: Option<String>,

    /// Subjects catalogue file; defaults to the built-in one.
    #[arg(long, env)]
    subjects: Option<std::path::PathBuf>,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Mark session cookies Secure; enable when serving over HTTPS.
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=info,edusolve=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let bank = match &args.subjects {
        Some(path) => Bank::from_json(&std::fs::read_to_string(path)?)?,
        None => Bank::builtin()?,
    };
    tracing::info!("question bank loaded with {} subjects", bank.subjects().len());

    let state = AppState {
        bank: Arc::new(bank),
        sessions: SessionRegistry::default(),
        edubot: llm::EduBot::new(args.api_key, args.model),
        solver: SolverClient::new(args.solver_url),
        secure_cookies: args.secure_cookies,
    };

    let address = args.address.parse::<std::net::SocketAddr>()?;
    tracing::info!("listening on {address}");

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, edusolve::router(state)).await?;

    Ok(())
}
