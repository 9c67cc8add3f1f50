// src/weights.rs
//! Token weighting.
//!
//! Every passive costs a handful of tokens (Distilled Emotions). Each known
//! token is worth a power of three by severity, so a passive's weight is a
//! base-3 number whose digits count its tokens per kind. Only used to order
//! the output.
//!
//! Unknown tokens weigh 0: a token added to the site before the table here is
//! updated sinks toward the top of the file instead of failing the run.

use std::collections::HashMap;

use crate::config::consts::TOKEN_SEVERITY;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenWeights {
    table: HashMap<String, u64>,
}

impl TokenWeights {
    /// Build from tokens ordered least to most severe: 1, 3, 9, 27, ...
    pub fn from_severity<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let powers = std::iter::successors(Some(1u64), |w| w.checked_mul(3));
        let table = tokens
            .into_iter()
            .zip(powers)
            .map(|(token, weight)| (token.into(), weight))
            .collect();
        Self { table }
    }

    /// Weight of one token, 0 when unknown.
    pub fn get(&self, token: &str) -> u64 {
        self.table.get(token).copied().unwrap_or(0)
    }

    pub fn total<S: AsRef<str>>(&self, tokens: &[S]) -> u64 {
        tokens.iter().map(|t| self.get(t.as_ref())).sum()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for TokenWeights {
    fn default() -> Self {
        Self::from_severity(TOKEN_SEVERITY)
    }
}
