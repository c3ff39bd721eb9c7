use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Outcome of resolving user-entered text against the current block set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockTarget {
    /// The text names an existing block. Exact hits always win, even when
    /// the text would also match other names as a regular expression.
    Exact(String),
    /// The text is a filter; `blocks` holds every candidate it matched,
    /// in candidate order.
    Matches {
        pattern: String,
        blocks: Vec<String>,
    },
}

impl BlockTarget {
    /// The blocks this target stands for.
    pub fn blocks(&self) -> &[String] {
        match self {
            BlockTarget::Exact(name) => std::slice::from_ref(name),
            BlockTarget::Matches { blocks, .. } => blocks,
        }
    }

    /// The string handed to the scaffold tool: the exact name, or the raw
    /// pattern (the tool applies the same regex semantics itself).
    pub fn argument(&self) -> &str {
        match self {
            BlockTarget::Exact(name) => name,
            BlockTarget::Matches { pattern, .. } => pattern,
        }
    }

    /// Whether the target stands for no blocks at all. Callers decide
    /// whether that is an error or a no-op.
    pub fn is_empty(&self) -> bool {
        self.blocks().is_empty()
    }
}

/// Resolve `input` against `candidates`: an exact hit on an existing name
/// wins unconditionally; anything else is compiled as a regular
/// expression and tested unanchored against every candidate.
pub fn resolve(candidates: &[String], input: &str) -> Result<BlockTarget> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::EmptyBlockName);
    }
    if candidates.iter().any(|candidate| candidate == input) {
        return Ok(BlockTarget::Exact(input.to_string()));
    }
    let regex = Regex::new(input).map_err(|source| Error::InvalidPattern {
        pattern: input.to_string(),
        source,
    })?;
    Ok(BlockTarget::Matches {
        pattern: input.to_string(),
        blocks: candidates
            .iter()
            .filter(|candidate| regex.is_match(candidate))
            .cloned()
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        ["fir", "fft", "iir"].into_iter().map(String::from).collect()
    }

    #[test]
    fn test_exact_match_wins_over_regex() {
        // "fir" would also match as a pattern, but names an existing block.
        let target = resolve(&candidates(), "fir").unwrap();
        assert_eq!(target, BlockTarget::Exact("fir".to_string()));
        assert_eq!(target.blocks(), ["fir".to_string()]);
    }

    #[test]
    fn test_regex_partial_match() {
        let target = resolve(&candidates(), "fi.*").unwrap();
        assert_eq!(
            target,
            BlockTarget::Matches {
                pattern: "fi.*".to_string(),
                blocks: vec!["fir".to_string()],
            }
        );
    }

    #[test]
    fn test_regex_is_unanchored() {
        let target = resolve(&candidates(), "f").unwrap();
        assert_eq!(target.blocks(), ["fir".to_string(), "fft".to_string()]);
    }

    #[test]
    fn test_candidate_order_preserved() {
        let target = resolve(&candidates(), "i").unwrap();
        assert_eq!(target.blocks(), ["fir".to_string(), "iir".to_string()]);
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let target = resolve(&candidates(), "agc").unwrap();
        assert!(target.is_empty());
    }

    #[test]
    fn test_invalid_regex() {
        let err = resolve(&candidates(), "fir(").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            resolve(&candidates(), "   "),
            Err(Error::EmptyBlockName)
        ));
    }
}
