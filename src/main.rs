use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tokengen::io_utils::{io_cli_error, simple_cli_error, tokengen_cli_error};
use tokengen::{
    Config, EntropySource, OsEntropy, ReaderEntropy, Stats, Tokengen, BASE62, BASE64, HEX,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum NamedCharset {
    Base62,
    Base64,
    Hex,
}

impl NamedCharset {
    fn symbols(self) -> &'static str {
        match self {
            NamedCharset::Base62 => BASE62,
            NamedCharset::Base64 => BASE64,
            NamedCharset::Hex => HEX,
        }
    }
}

/// Generate unbiased random tokens.
#[derive(Parser)]
#[command(name = "tokengen")]
struct Args {
    /// Predefined character set to draw from
    #[arg(long, value_enum, conflicts_with = "symbols")]
    charset: Option<NamedCharset>,
    /// Custom character set, every symbol distinct
    #[arg(long)]
    symbols: Option<String>,
    /// Symbols per token
    #[arg(short, long)]
    length: Option<usize>,
    /// Number of tokens to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
    /// Read entropy from this file instead of the operating system
    #[arg(long)]
    entropy_file: Option<PathBuf>,
    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print tokens as JSON
    #[arg(long)]
    json: bool,
    /// Report entropy usage on stderr
    #[arg(long)]
    stats: bool,
}

fn setup_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    setup_tracing();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path).map_err(|e| io_cli_error("reading config", path, e))?,
        None => Config::default(),
    };
    if let Some(named) = args.charset {
        config.charset = named.symbols().to_string();
    }
    if let Some(symbols) = &args.symbols {
        config.charset = symbols.clone();
    }
    if let Some(length) = args.length {
        config.length = length;
    }
    if args.count == 0 {
        return Err(simple_cli_error("count must be at least 1").into());
    }

    let tokengen = Tokengen::from_config(&config)
        .map_err(|e| tokengen_cli_error("invalid configuration", e.into()))?;

    let mut source: Box<dyn EntropySource> = match &args.entropy_file {
        Some(path) => {
            let file = File::open(path).map_err(|e| io_cli_error("opening entropy file", path, e))?;
            Box::new(ReaderEntropy::new(BufReader::new(file)))
        }
        None => Box::new(OsEntropy),
    };

    info!(
        symbols = tokengen.charset().len(),
        length = tokengen.length(),
        count = args.count,
        "generating tokens"
    );

    let mut stats = Stats::new();
    let mut tokens = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let token = tokengen
            .sampler()
            .sample_with_stats(&mut source, &mut stats)
            .map_err(|e| tokengen_cli_error("generating token", e))?;
        tokens.push(token);
    }

    if args.json {
        let mut out = serde_json::json!({
            "length": tokengen.length(),
            "charset": tokengen.charset().to_string(),
            "tokens": tokens,
        });
        if args.stats {
            out["stats"] = serde_json::to_value(stats)?;
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for token in &tokens {
            println!("{token}");
        }
    }

    if args.stats {
        eprintln!("{stats}");
    }

    Ok(())
}
