//! Snippet registry - the fixed, ordered catalog of example programs
//!
//! Built once at startup and shared by reference. Nothing mutates it
//! afterwards; order is the order entries were seeded in, which is also
//! the order the sidebar lists them.

pub mod builtins;
pub mod language;
pub mod snippet;

pub use language::SourceLanguage;
pub use snippet::Snippet;

use std::collections::HashMap;

use thiserror::Error;

/// Registry error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry needs at least one snippet")]
    Empty,

    #[error("snippet `{0}` is registered more than once")]
    Duplicate(String),

    #[error("snippet `{0}` is not registered")]
    Unknown(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Immutable id -> snippet catalog
#[derive(Debug, Clone)]
pub struct SnippetRegistry {
    snippets: Vec<Snippet>,
    index: HashMap<String, usize>,
}

impl SnippetRegistry {
    /// Build a registry from seed entries, keeping their order.
    pub fn new(snippets: Vec<Snippet>) -> RegistryResult<Self> {
        if snippets.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut index = HashMap::with_capacity(snippets.len());
        for (position, snippet) in snippets.iter().enumerate() {
            if index.insert(snippet.id.clone(), position).is_some() {
                return Err(RegistryError::Duplicate(snippet.id.clone()));
            }
        }
        Ok(Self { snippets, index })
    }

    /// Create a registry seeded with the built-in counter examples
    pub fn with_builtins() -> RegistryResult<Self> {
        Self::new(builtins::builtin_snippets())
    }

    pub fn get(&self, id: &str) -> RegistryResult<&Snippet> {
        self.index
            .get(id)
            .map(|&position| &self.snippets[position])
            .ok_or_else(|| RegistryError::Unknown(id.to_string()))
    }

    /// The default entry. Always present: construction rejects empty seeds.
    pub fn first(&self) -> &Snippet {
        &self.snippets[0]
    }

    /// Ids in display order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.snippets.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }
}
