//! # countmat
//!
//! `countmat` is a Rust library and command-line tool for assembling a
//! gene-by-sample count matrix from per-sample RNA-seq quantification
//! outputs (VERSE-style `*_quant.tsv` files) and for deriving a gene-ID to
//! gene-name lookup table from a GTF genome annotation.
//!
//! The crate provides two independent pipelines:
//!
//! * **Count matrix assembly**: each sample file is loaded into a
//!   [`SampleCountTable`] keyed by gene identifier, and any number of tables
//!   are combined with [`MergedCountMatrix::merge`] — a full outer join on
//!   the gene key where a gene absent from a sample's quantification output
//!   is counted as zero observed reads, not as missing data.
//! * **Annotation extraction**: a GTF file is streamed line by line,
//!   filtered to `gene` feature records, and the `gene_id`/`gene_name`
//!   attribute pair of each is collected into an ordered
//!   [`AnnotationTable`].
//!
//! Both output writers produce tab-delimited text and write atomically, so
//! a failed run never leaves a half-written file behind.
//!
//! ## Structure
//!
//! * [`data_structs`]: core types — [`SampleCountTable`],
//!   [`MergedCountMatrix`], and the annotation types ([`GtfAttributes`],
//!   [`GeneAnnotationRecord`], [`AnnotationTable`]).
//! * [`io`]: readers and writers for count tables, merged matrices, and
//!   annotation tables.
//! * [`error`]: the [`CountMatError`] type shared by all fallible
//!   operations.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use countmat::prelude::*;
//!
//! fn main() -> countmat::Result<()> {
//!     let tables = vec![
//!         SampleCountTable::from_path(Path::new("sample1_quant.tsv"))?,
//!         SampleCountTable::from_path(Path::new("sample2_quant.tsv"))?,
//!     ];
//!     let matrix = MergedCountMatrix::merge(&tables)?;
//!     write_matrix(&matrix, Path::new("counts_matrix.tsv"))?;
//!
//!     let annotation = AnnotationTable::from_path(Path::new("genome.gtf"))?;
//!     write_annotation_table(&annotation, Path::new("gene_names.tsv"))?;
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;

pub use error::{
    CountMatError,
    Result,
};

#[allow(unused_imports)]
use prelude::*;
