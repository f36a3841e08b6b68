//! Lifestyle-change records and the read-only catalog that holds them.
//!
//! A catalog is constructed once, validated, and never mutated afterwards.
//! It preserves insertion order for display and keeps a hash index for
//! constant-time lookup by identifier.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::error::CatalogError;
use crate::standard_catalog::STANDARD_CHANGES;

/// A single lifestyle change a user can commit to.
///
/// # Example
///
/// ```
/// use impact_engine::LifestyleChange;
///
/// let change = LifestyleChange::new(
///     "cycle_commute",
///     "Cycle instead of drive for daily commute",
///     500,
///     "Replacing one car trip per day with cycling.",
///     "European Cyclists' Federation, ITF",
/// );
///
/// assert_eq!(change.id(), "cycle_commute");
/// assert_eq!(change.annual_kg(), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleChange {
    id: String,
    name: String,
    annual_kg: u32,
    description: String,
    source: String,
}

impl LifestyleChange {
    /// Creates a lifestyle change record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        annual_kg: u32,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            annual_kg,
            description: description.into(),
            source: source.into(),
        }
    }

    /// Returns the unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns kilograms of CO2e avoided per year.
    #[must_use]
    pub const fn annual_kg(&self) -> u32 {
        self.annual_kg
    }

    /// Returns the descriptive text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the citation text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// An immutable, ordered collection of lifestyle changes.
///
/// # Example
///
/// ```
/// use impact_engine::Catalog;
///
/// let catalog = Catalog::standard();
/// let flight = catalog.find("flight_syd_lon").expect("known id");
///
/// assert_eq!(catalog.len(), 10);
/// assert_eq!(flight.annual_kg(), 4500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<LifestyleChange>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from entries, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if:
    /// - `entries` is empty
    /// - any identifier is empty
    /// - two entries share an identifier
    pub fn new(entries: Vec<LifestyleChange>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(entries.len());
        for (position, change) in entries.iter().enumerate() {
            if change.id.is_empty() {
                return Err(CatalogError::EmptyIdentifier { index: position });
            }
            match index.entry(change.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateIdentifier {
                        id: change.id.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        Ok(Self { entries, index })
    }

    /// Returns the built-in catalog of ten lifestyle changes.
    #[must_use]
    pub fn standard() -> Self {
        let entries: Vec<LifestyleChange> = STANDARD_CHANGES
            .iter()
            .map(|row| {
                LifestyleChange::new(row.id, row.name, row.annual_kg, row.description, row.source)
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, change)| (change.id.clone(), position))
            .collect();
        Self { entries, index }
    }

    /// Returns every lifestyle change in display order.
    #[must_use]
    pub fn list_all(&self) -> &[LifestyleChange] {
        &self.entries
    }

    /// Finds a lifestyle change by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownIdentifier`] if no entry has the given
    /// identifier.
    pub fn find(&self, id: &str) -> Result<&LifestyleChange, CatalogError> {
        self.index
            .get(id)
            .and_then(|&position| self.entries.get(position))
            .ok_or_else(|| CatalogError::UnknownIdentifier { id: id.to_owned() })
    }

    /// Returns `true` if the catalog holds the identifier.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the display position of an identifier, if present.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns the number of lifestyle changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog is empty. Validated catalogs never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
