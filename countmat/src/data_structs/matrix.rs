use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;

use crate::data_structs::count_table::SampleCountTable;
use crate::error::{
    CountMatError,
    Result,
};

/// A gene-by-sample count matrix: the full outer join of any number of
/// [`SampleCountTable`]s on the gene identifier key.
///
/// The row set is the union of all input tables' gene sets. A gene absent
/// from a sample's quantification output means zero observed reads, so the
/// corresponding cell is integer zero, never a missing-value marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedCountMatrix {
    key_column: String,
    samples:    Vec<String>,
    rows:       IndexMap<String, Vec<u64>>,
}

impl MergedCountMatrix {
    /// Merges sample tables into one matrix.
    ///
    /// Columns keep the order in which the tables were supplied. Rows are
    /// ordered by first occurrence of each gene across the tables, again in
    /// supply order, which makes the result deterministic for identical
    /// inputs. The merge is two passes: the union of gene keys is computed
    /// first, then every row is built by looking each sample up with a zero
    /// default.
    ///
    /// Fails with [`CountMatError::EmptyInput`] when `tables` is empty. The
    /// gene-key column name is taken from the first table.
    pub fn merge(tables: &[SampleCountTable]) -> Result<Self> {
        if tables.is_empty() {
            return Err(CountMatError::EmptyInput);
        }

        let key_column = tables[0].key_column().to_string();
        let samples = tables
            .iter()
            .map(|table| table.sample().to_string())
            .collect_vec();

        let gene_union = tables
            .iter()
            .flat_map(SampleCountTable::genes)
            .unique()
            .collect_vec();

        debug!(
            "Merging {} sample tables, {} genes in union",
            tables.len(),
            gene_union.len()
        );

        let rows = gene_union
            .into_iter()
            .map(|gene| {
                let cells = tables
                    .iter()
                    .map(|table| table.get(gene).unwrap_or(0))
                    .collect_vec();
                (gene.to_string(), cells)
            })
            .collect::<IndexMap<_, _>>();

        Ok(Self {
            key_column,
            samples,
            rows,
        })
    }

    pub fn key_column(&self) -> &str { &self.key_column }

    /// Sample names in column order.
    pub fn samples(&self) -> &[String] { &self.samples }

    pub fn n_samples(&self) -> usize { self.samples.len() }

    pub fn n_genes(&self) -> usize { self.rows.len() }

    /// The counts row for a gene, one cell per sample column.
    pub fn get(
        &self,
        gene: &str,
    ) -> Option<&[u64]> {
        self.rows.get(gene).map(Vec::as_slice)
    }

    /// Rows in matrix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.rows
            .iter()
            .map(|(gene, cells)| (gene.as_str(), cells.as_slice()))
    }
}
