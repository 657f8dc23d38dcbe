use anyhow::{Context, Result};
use clap::Parser;
use radix_index::RadixTree;
use tracing::{info, Level};

const DEFAULT_WORDS: &[&str] = &[
    "romane",
    "romanus",
    "romulus",
    "rubens",
    "ruber",
    "rubicon",
    "rubicundus",
];

const DEFAULT_PREFIXES: &[&str] = &["r", "ro", "ru", "rubi", "xyz"];

#[derive(Parser)]
#[command(name = "radix_demo")]
#[command(about = "Build a radix tree from words and run prefix searches", long_about = None)]
struct Cli {
    /// Word to insert (repeatable). Defaults to a small Latin corpus.
    #[arg(short, long = "word")]
    words: Vec<String>,

    /// Prefix to search for (repeatable).
    #[arg(short, long = "prefix")]
    prefixes: Vec<String>,

    /// Dump the tree structure after inserting
    #[arg(long, default_value_t = false)]
    print: bool,

    /// Emit the tree structure as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let words: Vec<&str> = if cli.words.is_empty() {
        DEFAULT_WORDS.to_vec()
    } else {
        cli.words.iter().map(String::as_str).collect()
    };
    let prefixes: Vec<&str> = if cli.prefixes.is_empty() {
        DEFAULT_PREFIXES.to_vec()
    } else {
        cli.prefixes.iter().map(String::as_str).collect()
    };

    let mut tree = RadixTree::new();
    for word in &words {
        tree.insert(word)
            .with_context(|| format!("failed to insert {word:?}"))?;
    }
    info!(words = tree.len(), nodes = tree.node_count(), "tree built");

    if cli.print {
        print!("{tree}");
    }
    if cli.json {
        let json = serde_json::to_string_pretty(&tree.snapshot())
            .context("failed to serialize tree snapshot")?;
        println!("{json}");
    }

    for prefix in prefixes {
        let matches = tree.search(prefix);
        println!("{prefix:?} -> {matches:?}");
    }

    Ok(())
}
