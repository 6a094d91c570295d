use std::{fs::File, io::Read, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::{Concept, DriftCatalogError, builtin};

/// An immutable, ordered set of concepts keyed by id.
///
/// Iteration order is declaration order, and is the order concepts are
/// offered for selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    pub(crate) concepts: IndexMap<String, Concept>,
}

/// On-disk shape of a catalog: `{ "concepts": [ ... ] }`
#[derive(Deserialize)]
struct CatalogDocument {
    concepts: Vec<Concept>,
}

#[derive(Serialize)]
struct CatalogDocumentRef<'a> {
    concepts: Vec<&'a Concept>,
}

impl Catalog {
    /// Builds a catalog, validating identifiers.
    ///
    /// Concept ids must be non-empty and unique, and every service name must be
    /// non-empty. Ids are kept verbatim, surrounding whitespace included.
    pub fn new<I>(concepts: I) -> Result<Self, DriftCatalogError>
    where
        I: IntoIterator<Item = Concept>,
    {
        let mut indexed = IndexMap::new();

        for (position, concept) in concepts.into_iter().enumerate() {
            if concept.id.trim().is_empty() {
                return Err(DriftCatalogError::EmptyConceptId(position));
            }

            if concept.services.keys().any(|name| name.trim().is_empty()) {
                return Err(DriftCatalogError::EmptyServiceName(concept.id));
            }

            if indexed.contains_key(&concept.id) {
                return Err(DriftCatalogError::DuplicateConcept(concept.id));
            }

            indexed.insert(concept.id.clone(), concept);
        }

        Ok(Self { concepts: indexed })
    }

    /// The catalog that ships with the crate.
    pub fn builtin() -> &'static Catalog {
        &builtin::BUILTIN_CATALOG
    }

    /// Parses a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, DriftCatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.concepts)
    }

    /// Reads a catalog document from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DriftCatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.concepts)
    }

    /// Reads a catalog document from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DriftCatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DriftCatalogError::Io {
            path: path.to_owned(),
            source,
        })?;

        let catalog = Self::from_reader(std::io::BufReader::new(file))?;

        tracing::info!(
            path = %path.display(),
            concepts = catalog.len(),
            "Loaded catalog document"
        );

        Ok(catalog)
    }

    /// Renders this catalog as a pretty-printed catalog document.
    pub fn to_json_pretty(&self) -> Result<String, DriftCatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Looks up a concept by id.
    pub fn get(&self, id: &str) -> Option<&Concept> {
        self.concepts.get(id)
    }

    /// The concept at `index` in catalog order.
    pub fn get_index(&self, index: usize) -> Option<&Concept> {
        self.concepts.get_index(index).map(|(_, concept)| concept)
    }

    /// Position of the concept with the given id in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.concepts.get_index_of(id)
    }

    /// The first concept in catalog order, if any.
    pub fn first(&self) -> Option<&Concept> {
        self.get_index(0)
    }

    /// Concepts in catalog order.
    pub fn concepts(&self) -> impl ExactSizeIterator<Item = &Concept> {
        self.concepts.values()
    }

    /// Number of concepts.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the catalog has no concepts.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CatalogDocumentRef {
            concepts: self.concepts.values().collect(),
        }
        .serialize(serializer)
    }
}
