//! Query name → catalog row resolution.
//!
//! Exact, case-sensitive lookup first. Otherwise a case-insensitive substring
//! scan over the name index, with one match picked by [`FuzzyMatchPolicy`].
//! The index iterates keys in sorted order, so both policies are deterministic.

use anirec_core::config::FuzzyMatchPolicy;
use anirec_core::errors::{AnirecError, AnirecResult};
use anirec_core::models::{NameEntry, NameIndex};

/// Outcome of resolving a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub index: usize,
    /// Catalog name the query resolved to.
    pub name: String,
    /// True when the exact lookup missed and a substring match was used.
    pub fuzzy: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NameResolver {
    policy: FuzzyMatchPolicy,
}

impl NameResolver {
    pub fn new(policy: FuzzyMatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FuzzyMatchPolicy {
        self.policy
    }

    /// Resolve `query` to a single row.
    pub fn resolve(&self, names: &NameIndex, query: &str) -> AnirecResult<ResolvedName> {
        ensure_not_blank(query)?;

        if let Some(index) = names.get(query) {
            return Ok(ResolvedName {
                index,
                name: query.to_string(),
                fuzzy: false,
            });
        }

        let needle = query.to_lowercase();
        let mut candidates = names.iter().filter(|e| e.folded.contains(&needle));
        let picked = match self.policy {
            FuzzyMatchPolicy::Lexicographic => candidates.next(),
            // min_by_key keeps the first minimum, i.e. the lexicographically
            // smallest among equally short names.
            FuzzyMatchPolicy::Shortest => candidates.min_by_key(|e| e.name.chars().count()),
        };

        picked
            .map(|e| ResolvedName {
                index: e.index,
                name: e.name.to_string(),
                fuzzy: true,
            })
            .ok_or_else(|| AnirecError::NotFound {
                name: query.to_string(),
            })
    }

    /// Every name containing `query` case-insensitively, best candidate first.
    ///
    /// An exact key match, if any, leads; the rest follow policy order.
    pub fn matches<'a>(
        &self,
        names: &'a NameIndex,
        query: &str,
    ) -> AnirecResult<Vec<NameEntry<'a>>> {
        ensure_not_blank(query)?;

        let needle = query.to_lowercase();
        let mut found: Vec<NameEntry<'a>> = names
            .iter()
            .filter(|e| e.folded.contains(&needle))
            .collect();
        if self.policy == FuzzyMatchPolicy::Shortest {
            // Stable sort keeps lexicographic order among equal lengths.
            found.sort_by_key(|e| e.name.chars().count());
        }
        if let Some(pos) = found.iter().position(|e| e.name == query) {
            let exact = found.remove(pos);
            found.insert(0, exact);
        }
        Ok(found)
    }
}

fn ensure_not_blank(query: &str) -> AnirecResult<()> {
    if query.trim().is_empty() {
        return Err(AnirecError::invalid_argument("anime name must not be blank"));
    }
    Ok(())
}
