//! Core data structures for count matrix assembly and annotation
//! extraction.
//!
//! * [`count_table`]: [`SampleCountTable`], one sample's gene → count
//!   mapping tagged with the sample name derived from its source file.
//! * [`matrix`]: [`MergedCountMatrix`], the full outer join of any number
//!   of sample tables with zero fill for absent genes.
//! * [`annotation`]: GTF attribute parsing and the extracted
//!   gene-ID/gene-name records.

pub mod annotation;
mod count_table;
mod matrix;


pub use count_table::SampleCountTable;
pub use matrix::MergedCountMatrix;
