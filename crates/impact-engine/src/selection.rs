//! The set of lifestyle changes a user has chosen.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, LifestyleChange};
use crate::error::ImpactError;

/// A set of catalog identifiers chosen at calculation time.
///
/// Selections carry no catalog reference; identifiers are checked when the
/// selection is resolved.
///
/// # Example
///
/// ```
/// use impact_engine::{Catalog, Selection};
///
/// let catalog = Catalog::standard();
/// let mut selection = Selection::new();
/// selection.select("reduce_meat");
/// selection.select("flight_syd_lon");
///
/// let resolved = selection.resolve(&catalog).expect("known ids");
/// // Resolution follows catalog order, not insertion order.
/// assert_eq!(resolved[0].id(), "flight_syd_lon");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Creates a selection holding every given identifier once.
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a selection holding every entry of the catalog.
    #[must_use]
    pub fn all(catalog: &Catalog) -> Self {
        Self::from_ids(catalog.list_all().iter().map(LifestyleChange::id))
    }

    /// Adds an identifier. Returns `true` if it was not already selected.
    pub fn select(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Removes an identifier. Returns `true` if it was selected.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flips an identifier and returns its new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        }
    }

    /// Sets an identifier to the given state.
    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.ids.insert(id.to_owned());
        } else {
            self.ids.remove(id);
        }
    }

    /// Returns `true` if the identifier is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns the number of selected identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the selected identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Resolves the selection to catalog records in catalog display order.
    ///
    /// # Errors
    ///
    /// Returns [`ImpactError::EmptySelection`] if nothing is selected, or
    /// [`ImpactError::Catalog`] if an identifier is not in the catalog.
    pub fn resolve<'c>(
        &self,
        catalog: &'c Catalog,
    ) -> Result<Vec<&'c LifestyleChange>, ImpactError> {
        if self.is_empty() {
            return Err(ImpactError::EmptySelection);
        }
        self.resolve_allowing_empty(catalog)
    }

    /// Resolves the selection without rejecting an empty set.
    pub(crate) fn resolve_allowing_empty<'c>(
        &self,
        catalog: &'c Catalog,
    ) -> Result<Vec<&'c LifestyleChange>, ImpactError> {
        let mut resolved = self
            .ids
            .iter()
            .map(|id| catalog.find(id))
            .collect::<Result<Vec<_>, _>>()?;
        resolved.sort_by_key(|change| catalog.position(change.id()));
        Ok(resolved)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}
