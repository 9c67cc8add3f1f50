// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::weights::TokenWeights;

/// Everything one run needs. The binary always uses `default()`;
/// tests swap the output path (and occasionally the weights).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub out_path: PathBuf,
    pub weights: TokenWeights,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            weights: TokenWeights::default(),
        }
    }
}

impl RunOptions {
    pub fn with_out_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_path = path.into();
        self
    }
}
