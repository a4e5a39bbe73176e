//! The destination catalog.
//!
//! The catalog is reference data: it is read once from a JSON document and
//! then shared read-only by every ranking and planning call. A default
//! catalog ships with the crate and can be replaced by any file with the
//! same shape:
//!
//! ```json
//! {
//!   "destinations": [
//!     {
//!       "name": "Kyoto",
//!       "country": "Japan",
//!       "region": "East Asia",
//!       "location": {"lat": 35.0116, "lon": 135.7681},
//!       "concepts": ["culture-history", "romantic", "foodie"],
//!       "best_months": [3, 4, 11, 12],
//!       "budget": "high"
//!     }
//!   ]
//! }
//! ```

use std::collections::{BTreeSet, HashSet};
use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use roamwise_fs::open_utf8_file;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Destination;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");
const BUNDLED_ORIGIN: &str = "bundled catalog";

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("failed to open catalog at {path}: {source}")]
    Open {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The catalog document was not valid.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// Where the document came from.
        origin: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    destinations: Vec<Destination>,
}

/// An immutable, ordered collection of destinations.
///
/// Catalog order is significant: the ranker keeps it for candidates whose
/// scores tie exactly.
///
/// # Examples
/// ```
/// use roamwise_core::Catalog;
///
/// # fn main() -> Result<(), roamwise_core::CatalogError> {
/// let catalog = Catalog::bundled()?;
/// assert!(!catalog.is_empty());
/// assert!(catalog.get("Interlaken").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Wrap destinations supplied by the caller.
    #[must_use]
    pub fn new(destinations: Vec<Destination>) -> Self {
        let catalog = Self { destinations };
        catalog.report_anomalies();
        catalog
    }

    /// Load the catalog shipped with the crate.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] if the bundled document is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::parse_str(BUNDLED_CATALOG, BUNDLED_ORIGIN)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    /// Returns [`CatalogError::Open`] when the file cannot be opened and
    /// [`CatalogError::Parse`] when its contents are not a valid catalog.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let file = open_utf8_file(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(BufReader::new(file), path.as_str())
    }

    /// Load a catalog from any reader producing JSON.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the input is not a valid catalog.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        Self::read(reader, "catalog stream")
    }

    /// Load a catalog from a JSON string.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] when the input is not a valid catalog.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Self::parse_str(json, "catalog string")
    }

    fn read(reader: impl Read, origin: &str) -> Result<Self, CatalogError> {
        Self::from_document(serde_json::from_reader(reader), origin)
    }

    fn parse_str(json: &str, origin: &str) -> Result<Self, CatalogError> {
        Self::from_document(serde_json::from_str(json), origin)
    }

    fn from_document(
        parsed: serde_json::Result<CatalogDocument>,
        origin: &str,
    ) -> Result<Self, CatalogError> {
        let document = parsed.map_err(|source| CatalogError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
        debug!(
            "loaded {} destinations from {origin}",
            document.destinations.len()
        );
        Ok(Self::new(document.destinations))
    }

    fn report_anomalies(&self) {
        let mut seen = HashSet::new();
        for destination in &self.destinations {
            if destination.concepts.is_empty() {
                warn!(
                    "destination '{}' has no concepts and can never be recommended",
                    destination.name
                );
            }
            if !seen.insert(destination.name.as_str()) {
                warn!("destination name '{}' appears more than once", destination.name);
            }
        }
    }

    /// Return the destinations in catalog order.
    #[must_use]
    pub const fn destinations(&self) -> &[Destination] {
        self.destinations.as_slice()
    }

    /// Iterate over the destinations in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.destinations.iter()
    }

    /// Find a destination by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|destination| destination.name == name)
    }

    /// Return the distinct regions, sorted.
    #[must_use]
    pub fn regions(&self) -> Vec<&str> {
        self.destinations
            .iter()
            .map(|destination| destination.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Return the distinct countries, sorted.
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        self.destinations
            .iter()
            .map(|destination| destination.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Return the number of destinations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Report whether the catalog holds no destinations.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl From<Vec<Destination>> for Catalog {
    fn from(destinations: Vec<Destination>) -> Self {
        Self::new(destinations)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
