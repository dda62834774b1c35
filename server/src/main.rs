use anyhow::Result;
use axum::Router;
use clap::Parser;
use engine::EngineConfig;
use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};
use server::build_app;
use tokio::net::TcpListener;

#[derive(Parser)]
struct Args {
    /// Corpus file: one `<id> <words...>` document per line
    #[arg(long, default_value = "./corpus.txt")]
    corpus: String,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Results returned when a request does not set `k`
    #[arg(long, default_value_t = engine::config::DEFAULT_MAX_RESULTS)]
    max_results: usize,
    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = engine::config::DEFAULT_K1)]
    k1: f64,
    /// BM25 length normalization
    #[arg(long, default_value_t = engine::config::DEFAULT_B)]
    b: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Args::parse();
    let config = EngineConfig { max_results: args.max_results, k1: args.k1, b: args.b };
    let app: Router = build_app(&args.corpus, config)?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
