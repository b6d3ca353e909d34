//! Merging the JSON job config with command-line overrides.

use anyhow::{anyhow, Result};
use rdfwalk_walkers::{Strategy, WalkJobConfig, WalkerConfig, Wildcards};

/// Flag values; `None`/empty means "keep what the config file says".
#[derive(Debug, Clone, Default)]
pub struct JobOverrides {
    pub depth: Option<usize>,
    pub walks_per_graph: Option<usize>,
    pub seed: Option<u64>,
    pub strategy: Option<Strategy>,
    pub wildcards: Vec<usize>,
}

pub fn resolve_job(base: Option<WalkJobConfig>, overrides: &JobOverrides) -> Result<WalkJobConfig> {
    let depth = overrides
        .depth
        .or_else(|| base.as_ref().map(|b| b.walker.depth()))
        .ok_or_else(|| anyhow!("no depth given (use --depth or a config file)"))?;
    let walks_per_graph = overrides
        .walks_per_graph
        .or_else(|| base.as_ref().and_then(|b| b.walker.walks_per_graph().limit()));
    let seed = overrides
        .seed
        .or_else(|| base.as_ref().and_then(|b| b.walker.seed()));

    let strategy = match (overrides.strategy, &base) {
        (Some(strategy), _) => strategy,
        // `--wildcard` alone implies the wildcard strategy.
        (None, _) if !overrides.wildcards.is_empty() => Strategy::Wildcard,
        (None, Some(b)) => b.strategy,
        (None, None) => Strategy::default(),
    };
    let wildcards = if !overrides.wildcards.is_empty() {
        // Rejected by `validate` below when combined with `--strategy random`.
        Some(Wildcards::new(overrides.wildcards.clone())?)
    } else if strategy == Strategy::Random {
        None
    } else {
        base.and_then(|b| b.wildcards)
    };

    let job = WalkJobConfig {
        walker: WalkerConfig::new(depth, walks_per_graph)?.with_seed_opt(seed),
        strategy,
        wildcards,
    };
    job.validate()?;
    Ok(job)
}

/// One root per non-empty line.
///
/// A `#` at the start of a line or after whitespace starts a comment; inside
/// a token it is kept, so fragment IRIs (`http://ex.org/onto#Alice`) survive.
pub fn parse_roots(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_comment(line).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_comment(line: &str) -> &str {
    let mut prev_is_space = true;
    for (i, ch) in line.char_indices() {
        if ch == '#' && prev_is_space {
            return &line[..i];
        }
        prev_is_space = ch.is_whitespace();
    }
    line
}
