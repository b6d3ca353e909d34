//! RDF loading into a [`KnowledgeGraph`].
//!
//! Parsing is done by Sophia. Terms are read back through their N-Triples
//! display form and reduced to vertex names:
//!
//! - IRIs become the bare IRI (`<http://x/a>` → `http://x/a`)
//! - blank nodes keep their `_:` prefix
//! - literals become their unescaped lexical form (datatype/language dropped)
//!
//! Named graphs (N-Quads, TriG) are flattened into a single graph.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{anyhow, Result};
use sophia::api::prelude::*;

use crate::error::{GraphError, RdfLoadError};
use crate::graph::KnowledgeGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    NTriples,
    Turtle,
    NQuads,
    TriG,
    RdfXml,
}

impl RdfFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, RdfLoadError> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "nt" | "ntriples" => Ok(Self::NTriples),
            "ttl" | "turtle" => Ok(Self::Turtle),
            "nq" | "nquads" => Ok(Self::NQuads),
            "trig" => Ok(Self::TriG),
            "rdf" | "owl" | "xml" => Ok(Self::RdfXml),
            other => Err(RdfLoadError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NTriples => "N-Triples",
            Self::Turtle => "Turtle",
            Self::NQuads => "N-Quads",
            Self::TriG => "TriG",
            Self::RdfXml => "RDF/XML",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RdfLoadOptions {
    /// Predicate IRIs dropped while loading, typically the label predicate
    /// of a downstream classification task.
    pub skip_predicates: BTreeSet<String>,
}

impl RdfLoadOptions {
    pub fn skip_predicate(mut self, iri: impl Into<String>) -> Self {
        self.skip_predicates.insert(iri.into());
        self
    }
}

/// Counters reported by [`extend_graph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub parsed: usize,
    pub added: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
struct Statement {
    subject: String,
    predicate: String,
    object: String,
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct TermSinkError {
    message: String,
}

impl From<anyhow::Error> for TermSinkError {
    fn from(value: anyhow::Error) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

fn unescape_rdf_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Reduce an N-Triples display term to a vertex name.
fn term_name(term: &str) -> Result<String> {
    let s = term.trim();

    if let Some(iri) = s.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return Ok(iri.to_string());
    }

    if s.starts_with("_:") {
        return Ok(s.to_string());
    }

    if s.starts_with('"') {
        let mut escaped = false;
        for (i, ch) in s.char_indices().skip(1) {
            if ch == '"' && !escaped {
                return Ok(unescape_rdf_string(&s[1..i]));
            }
            escaped = ch == '\\' && !escaped;
        }
        return Err(anyhow!("invalid literal term (missing closing quote): {s}"));
    }

    Err(anyhow!("unsupported RDF term form: {s}"))
}

fn push_statement(
    out: &mut Vec<Statement>,
    skipped: &mut usize,
    subject: &str,
    predicate: &str,
    object: &str,
) -> std::result::Result<(), TermSinkError> {
    let Some(predicate) = predicate
        .trim()
        .strip_prefix('<')
        .and_then(|t| t.strip_suffix('>'))
    else {
        tracing::warn!(predicate, "skipping statement with non-IRI predicate");
        *skipped += 1;
        return Ok(());
    };
    out.push(Statement {
        subject: term_name(subject)?,
        predicate: predicate.to_string(),
        object: term_name(object)?,
    });
    Ok(())
}

fn parse_error(format: RdfFormat, e: impl std::fmt::Display) -> RdfLoadError {
    RdfLoadError::Parse {
        format: format.label(),
        message: e.to_string(),
    }
}

fn parse_statements(
    bytes: &[u8],
    format: RdfFormat,
) -> std::result::Result<(Vec<Statement>, usize), RdfLoadError> {
    let reader = std::io::BufReader::new(std::io::Cursor::new(bytes));
    let mut out: Vec<Statement> = Vec::new();
    let mut skipped = 0usize;

    match format {
        RdfFormat::NTriples => {
            let mut parser = sophia::turtle::parser::nt::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| {
                    push_statement(
                        &mut out,
                        &mut skipped,
                        &t.s().to_string(),
                        &t.p().to_string(),
                        &t.o().to_string(),
                    )
                })
                .map_err(|e| parse_error(format, e))?;
        }
        RdfFormat::Turtle => {
            let mut parser = sophia::turtle::parser::turtle::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| {
                    push_statement(
                        &mut out,
                        &mut skipped,
                        &t.s().to_string(),
                        &t.p().to_string(),
                        &t.o().to_string(),
                    )
                })
                .map_err(|e| parse_error(format, e))?;
        }
        RdfFormat::NQuads => {
            let mut parser = sophia::turtle::parser::nq::parse_bufread(reader);
            parser
                .try_for_each_quad(|q| {
                    push_statement(
                        &mut out,
                        &mut skipped,
                        &q.s().to_string(),
                        &q.p().to_string(),
                        &q.o().to_string(),
                    )
                })
                .map_err(|e| parse_error(format, e))?;
        }
        RdfFormat::TriG => {
            let mut parser = sophia::turtle::parser::trig::parse_bufread(reader);
            parser
                .try_for_each_quad(|q| {
                    push_statement(
                        &mut out,
                        &mut skipped,
                        &q.s().to_string(),
                        &q.p().to_string(),
                        &q.o().to_string(),
                    )
                })
                .map_err(|e| parse_error(format, e))?;
        }
        RdfFormat::RdfXml => {
            let mut parser = sophia::xml::parser::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| {
                    push_statement(
                        &mut out,
                        &mut skipped,
                        &t.s().to_string(),
                        &t.p().to_string(),
                        &t.o().to_string(),
                    )
                })
                .map_err(|e| parse_error(format, e))?;
        }
    }

    Ok((out, skipped))
}

/// Parse `bytes` and add every statement to `kg`.
pub fn extend_graph(
    kg: &mut KnowledgeGraph,
    bytes: &[u8],
    format: RdfFormat,
    options: &RdfLoadOptions,
) -> std::result::Result<LoadStats, RdfLoadError> {
    let (statements, skipped) = parse_statements(bytes, format)?;
    let mut stats = LoadStats {
        parsed: statements.len() + skipped,
        skipped,
        ..LoadStats::default()
    };

    for st in statements {
        if options.skip_predicates.contains(&st.predicate) {
            stats.skipped += 1;
            continue;
        }
        match kg.add_triple(&st.subject, &st.predicate, &st.object) {
            Ok(true) => stats.added += 1,
            Ok(false) => stats.duplicates += 1,
            // Valid RDF whose term cannot be a vertex name (`""`, `"*"`).
            Err(err @ (GraphError::EmptyName | GraphError::ReservedName(_))) => {
                tracing::warn!(
                    subject = %st.subject,
                    predicate = %st.predicate,
                    error = %err,
                    "skipping statement with unusable term"
                );
                stats.skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::debug!(
        format = format.label(),
        parsed = stats.parsed,
        added = stats.added,
        duplicates = stats.duplicates,
        skipped = stats.skipped,
        "loaded RDF statements"
    );
    Ok(stats)
}

pub fn load_rdf_bytes(
    bytes: &[u8],
    format: RdfFormat,
    options: &RdfLoadOptions,
) -> std::result::Result<KnowledgeGraph, RdfLoadError> {
    let mut kg = KnowledgeGraph::new();
    extend_graph(&mut kg, bytes, format, options)?;
    Ok(kg)
}

/// Load a graph from disk, picking the format from the extension.
pub fn load_rdf_file(
    path: &Path,
    options: &RdfLoadOptions,
) -> std::result::Result<KnowledgeGraph, RdfLoadError> {
    let format = RdfFormat::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|source| RdfLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_rdf_bytes(&bytes, format, options)
}
