use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use randqueue::permutation::{permutation, Backend};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use std::env;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Print K of the given tokens, chosen and ordered at random.
#[derive(clap::Parser, Debug)]
#[command(name = "permutation", version)]
struct Cli {
    /// Number of tokens to print.
    k: usize,
    /// Tokens to choose from. Read from standard input when omitted.
    tokens: Vec<String>,
    /// Load the tokens into a deque, each at a random end, instead of a
    /// randomized queue.
    #[arg(long)]
    deque: bool,
    /// Seed for the random source.
    #[arg(long)]
    seed: Option<u64>,
}

fn run(cli: Cli) -> randqueue::Result<()> {
    let tokens = if cli.tokens.is_empty() {
        let mut input = String::new();
        io::stdin().lock().read_to_string(&mut input)?;
        input.split_whitespace().map(String::from).collect()
    } else {
        cli.tokens
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let backend = if cli.deque {
        Backend::Deque
    } else {
        Backend::RandomizedQueue
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    permutation(cli.k, tokens, backend, rng, &mut out)
}

fn main() -> ExitCode {
    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(io::stderr().is_terminal())
        .compact();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(match env::var("RUST_LOG") {
            Ok(l) => match l.as_str() {
                "trace" => Level::TRACE,
                "debug" => Level::DEBUG,
                "info" => Level::INFO,
                "error" => Level::ERROR,
                _ => Level::WARN,
            },
            _ => Level::WARN,
        })
        .with_writer(io::stderr)
        .event_format(format)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("permutation: failed setting default subscriber: {}", e);
    }

    let cli = Cli::parse();
    info!(msg = "current cli", cli = ?cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
