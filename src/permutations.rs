use std::path::Path;

use crate::error::{HunterError, Result};

pub const DEFAULT_WORDLIST: &str = "perm.txt";

/// Ordered name fragments loaded once from a wordlist and shared by every phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermutationSource {
    fragments: Vec<String>,
}

impl PermutationSource {
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| HunterError::Wordlist {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::parse(&contents);
        tracing::debug!(path = %path.display(), fragments = source.len(), "loaded wordlist");
        Ok(source)
    }

    pub fn parse(contents: &str) -> Self {
        let fragments = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { fragments }
    }

    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { fragments: fragments.into_iter().map(Into::into).collect() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
