mod gtf_entry;
mod table;

pub use gtf_entry::{
    GtfAttributes,
    GtfFeatureLine,
};
pub use table::{
    AnnotationTable,
    GeneAnnotationRecord,
};

#[cfg(test)]
mod tests;
