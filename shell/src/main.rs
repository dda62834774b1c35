use anyhow::{Context, Result};
use clap::Parser;
use engine::{Engine, EngineConfig};
use shell::Session;
use std::io::{self, IsTerminal};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "shell")]
#[command(about = "Interactive BM25 search over a line-delimited corpus", long_about = None)]
struct Cli {
    /// Corpus file: one `<id> <words...>` document per line
    #[arg(short = 'i', long)]
    input: String,
    /// Maximum number of results per search
    #[arg(short = 'k', long, value_parser = clap::value_parser!(u32).range(1..))]
    max_results: u32,
    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = engine::config::DEFAULT_K1)]
    k1: f64,
    /// BM25 length normalization
    #[arg(long, default_value_t = engine::config::DEFAULT_B)]
    b: f64,
    /// Output width used to wrap results
    #[arg(long, env = "COLUMNS", default_value_t = 80)]
    width: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let config = EngineConfig { max_results: cli.max_results as usize, k1: cli.k1, b: cli.b };
    let engine = Engine::open(&cli.input, config).with_context(|| format!("failed to load corpus {}", cli.input))?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("\n~ {} documents indexed, type /search, /df, /tf or /exit ~", engine.total_documents());
    }

    let mut session = Session::new(&engine, io::stdout().lock(), io::stderr(), cli.width);
    if !interactive {
        session = session.quiet();
    }
    session.run(stdin.lock())
}
