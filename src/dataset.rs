//! Dataset index over the curated complex table.
//!
//! The dataset is a CSV file with a header row; every row describes one
//! protein-ligand complex keyed by its `pdbid` column. Identifiers are
//! not guaranteed unique in the file, so the index keeps both the raw
//! record sequence (file order) and a de-duplicated identifier list
//! (first-seen order) for the host's selector.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::PlasviewError;

/// Dataset column naming the structure identifier.
pub const PDB_ID_FIELD: &str = "pdbid";

/// Relative path of the dataset asset, fixed per deployment.
pub const DATASET_ASSET: &str = "5000_final.csv";

/// One dataset row: field name to value, in file column order.
///
/// Only `pdbid` carries meaning here; every other field is opaque
/// domain metadata (binding affinity, energy terms) passed through
/// verbatim for the host's details panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetRecord {
    fields: Vec<(String, String)>,
}

impl DatasetRecord {
    /// Value of the named field, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// The record's structure identifier, if the column exists.
    #[must_use]
    pub fn pdb_id(&self) -> Option<&str> {
        self.get(PDB_ID_FIELD)
    }

    /// Whether the record carries no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field name/value pairs in file column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Parsed dataset: records in file order plus the derived identifier
/// list. Built once per view mount and immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct DatasetIndex {
    records: Vec<DatasetRecord>,
    identifiers: Vec<String>,
}

impl DatasetIndex {
    /// Parse dataset text into an index.
    ///
    /// The header row is required; rows with a field count differing
    /// from the header are malformed and fail the whole parse.
    pub fn from_csv(text: &str) -> Result<Self, PlasviewError> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers: Vec<String> =
            reader.headers()?.iter().map(str::to_owned).collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let fields = headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.clone(), value.to_owned()))
                .collect();
            records.push(DatasetRecord { fields });
        }

        let identifiers = derive_identifiers(&records);
        log::debug!(
            "dataset index built: {} records, {} unique identifiers",
            records.len(),
            identifiers.len()
        );

        Ok(Self {
            records,
            identifiers,
        })
    }

    /// Read and parse the dataset asset at `path`.
    pub fn load(path: &Path) -> Result<Self, PlasviewError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_csv(&text)
    }

    /// First record whose `pdbid` equals `identifier`, or an empty
    /// record when none match.
    ///
    /// A missing record is a display contract, not a failure: the host
    /// renders an empty details panel.
    #[must_use]
    pub fn lookup(&self, identifier: &str) -> DatasetRecord {
        self.records
            .iter()
            .find(|record| record.pdb_id() == Some(identifier))
            .cloned()
            .unwrap_or_default()
    }

    /// Selectable identifiers, de-duplicated in first-seen order.
    #[must_use]
    pub fn unique_identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// All records in file order.
    #[must_use]
    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    /// Number of records in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// De-duplicate the `pdbid` column preserving first occurrence order.
/// Rows without an identifier contribute nothing to the selector.
fn derive_identifiers(records: &[DatasetRecord]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut identifiers = Vec::new();
    for record in records {
        if let Some(id) = record.pdb_id() {
            if !id.is_empty() && seen.insert(id.to_owned()) {
                identifiers.push(id.to_owned());
            }
        }
    }
    identifiers
}
