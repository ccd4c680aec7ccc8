use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::annotation::GtfAttributes;

/// One extracted gene annotation: an Ensembl gene identifier paired with
/// its display name. Only produced when both attributes were present on the
/// same feature line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneAnnotationRecord {
    #[serde(rename = "Ensembl_ID")]
    pub ensembl_id: String,
    #[serde(rename = "Gene_Name")]
    pub gene_name:  String,
}

impl GeneAnnotationRecord {
    pub fn new<S1, S2>(
        ensembl_id: S1,
        gene_name: S2,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>, {
        Self {
            ensembl_id: ensembl_id.into(),
            gene_name:  gene_name.into(),
        }
    }

    /// Promotes a parsed attribute set to a record iff both `gene_id` and
    /// `gene_name` were found. A line with either attribute missing is
    /// dropped, never emitted as a partial record.
    pub fn from_attributes(attributes: &GtfAttributes) -> Option<Self> {
        match (&attributes.gene_id, &attributes.gene_name) {
            (Some(id), Some(name)) => Some(Self::new(id, name)),
            _ => None,
        }
    }
}

/// Ordered collection of [`GeneAnnotationRecord`]s, in order of first
/// occurrence in the source file. Not deduplicated: annotation sources have
/// one `gene` line per gene, and that is not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotationTable {
    records: Vec<GeneAnnotationRecord>,
}

impl AnnotationTable {
    pub fn new() -> Self { Self::default() }

    pub fn push(
        &mut self,
        record: GeneAnnotationRecord,
    ) {
        self.records.push(record)
    }

    pub fn records(&self) -> &[GeneAnnotationRecord] { &self.records }

    pub fn iter(&self) -> impl Iterator<Item = &GeneAnnotationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl FromIterator<GeneAnnotationRecord> for AnnotationTable {
    fn from_iter<I: IntoIterator<Item = GeneAnnotationRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
