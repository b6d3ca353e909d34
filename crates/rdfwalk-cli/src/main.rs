//! rdfwalk CLI
//!
//! - `walks`: load an RDF graph, extract canonical walks rooted at the given
//!   entities and print one walk per line on stdout (the training corpus).
//! - `stats`: print entity/relation counts of a loaded graph.
//!
//! Status lines and logs go to stderr so stdout can be redirected as-is.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use rdfwalk_graph::{load_rdf_file, KnowledgeGraph, RdfLoadOptions};
use rdfwalk_walkers::{CanonicalWalk, RandomWalker, Strategy, WalkJobConfig, WildcardWalker};

mod job;

#[derive(Parser)]
#[command(name = "rdfwalk")]
#[command(
    author,
    version,
    about = "rdfwalk: random walk corpora from RDF knowledge graphs"
)]
struct Cli {
    /// Log filter, e.g. `rdfwalk_walkers=debug` (defaults to RUST_LOG, then `warn`)
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract canonical walks rooted at the given entities.
    ///
    /// Settings come from `--config` (JSON) and are overridden by flags.
    Walks(WalksArgs),

    /// Print entity/relation counts for an RDF file.
    Stats {
        /// Input RDF file (.nt, .ttl, .nq, .trig, .rdf/.owl/.xml)
        input: PathBuf,
        /// Predicate IRI to drop while loading (repeatable)
        #[arg(long = "skip-predicate")]
        skip_predicates: Vec<String>,
    },
}

#[derive(Args)]
struct WalksArgs {
    /// Input RDF file (.nt, .ttl, .nq, .trig, .rdf/.owl/.xml)
    input: PathBuf,
    /// Root entity IRI (repeatable)
    #[arg(long = "root")]
    roots: Vec<String>,
    /// File with one root IRI per line (`#` starts a comment)
    #[arg(long)]
    roots_file: Option<PathBuf>,
    /// Walk job config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of expansion iterations
    #[arg(long)]
    depth: Option<usize>,
    /// Per-iteration cap on walks kept for each root
    #[arg(long)]
    walks_per_graph: Option<usize>,
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
    /// Mask cardinality for the wildcard strategy (repeatable)
    #[arg(long = "wildcard")]
    wildcards: Vec<usize>,
    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
    /// Output format. Plain output joins tokens with spaces, so literals
    /// containing whitespace cannot be split back apart; use `json` for those.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
    /// Predicate IRI to drop while loading (repeatable)
    #[arg(long = "skip-predicate")]
    skip_predicates: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Random,
    Wildcard,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Random => Strategy::Random,
            StrategyArg::Wildcard => Strategy::Wildcard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Space-separated tokens (ambiguous when a token contains whitespace)
    Plain,
    /// One JSON array per line
    Json,
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_options(skip_predicates: &[String]) -> RdfLoadOptions {
    RdfLoadOptions {
        skip_predicates: skip_predicates.iter().cloned().collect(),
    }
}

fn load_graph(input: &Path, skip_predicates: &[String]) -> Result<KnowledgeGraph> {
    eprintln!("{} {}", "Loading".green().bold(), input.display());
    let kg = load_rdf_file(input, &load_options(skip_predicates))
        .with_context(|| format!("failed to load {}", input.display()))?;
    eprintln!(
        "  {} {} entities, {} relations",
        "→".yellow(),
        kg.entity_count(),
        kg.relation_count()
    );
    Ok(kg)
}

fn read_roots(args: &WalksArgs) -> Result<Vec<String>> {
    let mut roots = args.roots.clone();
    if let Some(path) = &args.roots_file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read roots file {}", path.display()))?;
        roots.extend(job::parse_roots(&text));
    }
    if roots.is_empty() {
        return Err(anyhow!("no roots given (use --root or --roots-file)"));
    }
    Ok(roots)
}

fn write_walks(walks: &BTreeSet<CanonicalWalk>, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for walk in walks {
        match format {
            OutputFormat::Plain => writeln!(out, "{}", walk.join(" "))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(walk)?)?,
        }
    }
    out.flush()?;
    Ok(())
}

fn cmd_walks(args: &WalksArgs) -> Result<()> {
    let base = args
        .config
        .as_deref()
        .map(WalkJobConfig::from_path)
        .transpose()?;
    let overrides = job::JobOverrides {
        depth: args.depth,
        walks_per_graph: args.walks_per_graph,
        seed: args.seed,
        strategy: args.strategy.map(Strategy::from),
        wildcards: args.wildcards.clone(),
    };
    let job = job::resolve_job(base, &overrides)?;
    let roots = read_roots(args)?;
    let kg = load_graph(&args.input, &args.skip_predicates)?;

    tracing::info!(
        depth = job.walker.depth(),
        walks_per_graph = ?job.walker.walks_per_graph().limit(),
        strategy = ?job.strategy,
        roots = roots.len(),
        "extracting walks"
    );

    let walks = match job.strategy {
        Strategy::Random => RandomWalker::new(job.walker.clone()).extract(&kg, &roots)?,
        Strategy::Wildcard => {
            WildcardWalker::with_wildcards(job.walker.clone(), job.wildcards_or_default())
                .extract(&kg, &roots)?
        }
    };

    write_walks(&walks, args.format)?;
    eprintln!(
        "{} {} canonical walks from {} roots",
        "ok".green().bold(),
        walks.len(),
        roots.len()
    );
    Ok(())
}

fn cmd_stats(input: &Path, skip_predicates: &[String]) -> Result<()> {
    let kg = load_graph(input, skip_predicates)?;
    println!("entities\t{}", kg.entity_count());
    println!("relations\t{}", kg.relation_count());
    println!("triples\t{}", kg.triple_count());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    match &cli.command {
        Commands::Walks(args) => cmd_walks(args),
        Commands::Stats {
            input,
            skip_predicates,
        } => cmd_stats(input, skip_predicates),
    }
}
