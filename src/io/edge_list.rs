use std::fmt::Write as _;

use crate::{edge::*, error::*};

/// A configurable reader for the edge-list text format.
///
/// Grammar, per non-empty line: `<from> <to> [weight]`, tokens
/// separated by arbitrary whitespace. Lines consisting only of
/// whitespace are skipped. A missing third token means the default
/// weight; a present one must parse as a finite real number.
///
/// # Examples
/// ```
/// use wgraphs::io::EdgeListParser;
///
/// let records = EdgeListParser::new()
///     .default_weight(2.0)
///     .parse("A B\nB C 0.5")
///     .unwrap();
///
/// assert_eq!(records[0].weight, 2.0);
/// assert_eq!(records[1].weight, 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListParser {
    /// Weight assigned to two-token lines
    default_weight: Weight,
}

impl Default for EdgeListParser {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

impl EdgeListParser {
    /// Creates a new (default) parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the weight assigned to lines without a weight token
    pub fn default_weight(mut self, weight: Weight) -> Self {
        self.default_weight = weight;
        self
    }

    /// Parses the given text into records, preserving line order.
    /// Fails with [`Error::Parse`] naming the offending (1-based) line.
    pub fn parse(&self, text: &str) -> Result<Vec<EdgeRecord>> {
        let mut records = Vec::new();

        for (number, line) in text.lines().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            if !(2..=3).contains(&tokens.len()) {
                return Err(Error::Parse {
                    line: number + 1,
                    reason: ParseReason::WrongTokenCount {
                        found: tokens.len(),
                    },
                });
            }

            let weight = match tokens.get(2) {
                None => self.default_weight,
                Some(token) => self.parse_weight(token, number + 1)?,
            };

            records.push(EdgeRecord::new(tokens[0], tokens[1], weight));
        }

        Ok(records)
    }

    fn parse_weight(&self, token: &str, line: usize) -> Result<Weight> {
        let value: Weight = token.parse().map_err(|_| Error::Parse {
            line,
            reason: ParseReason::UnparsableWeight {
                token: token.to_string(),
            },
        })?;

        // NaN/inf would poison every weight comparison downstream
        if !value.is_finite() {
            return Err(Error::Parse {
                line,
                reason: ParseReason::NonFiniteWeight { value },
            });
        }

        Ok(value)
    }
}

/// Parses edge-list text with default settings.
///
/// # Examples
/// ```
/// use wgraphs::io::parse_edge_list;
///
/// let records = parse_edge_list("A B 1\n\nB C").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].weight, 1.0);
/// ```
pub fn parse_edge_list(text: &str) -> Result<Vec<EdgeRecord>> {
    EdgeListParser::new().parse(text)
}

/// A writer for the edge-list text format.
///
/// Always emits the weight token, so the output reparses to the exact
/// same multiset no matter which weights were defaulted on the way in.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }

    /// Renders the records, one line per edge, in input order
    pub fn write(&self, records: &[EdgeRecord]) -> String {
        let mut out = String::new();
        for r in records {
            // infallible: writing to a String cannot error
            let _ = writeln!(out, "{} {} {}", r.from, r.to, r.weight);
        }
        out
    }
}

/// Renders records to edge-list text with default settings
pub fn write_edge_list(records: &[EdgeRecord]) -> String {
    EdgeListWriter::new().write(records)
}
