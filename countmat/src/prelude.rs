pub use crate::data_structs::annotation::{
    AnnotationTable,
    GeneAnnotationRecord,
    GtfAttributes,
    GtfFeatureLine,
};
pub use crate::data_structs::{
    MergedCountMatrix,
    SampleCountTable,
};
pub use crate::error::{
    CountMatError,
    Result,
};
pub use crate::io::annotation::write_annotation_table;
pub use crate::io::counts::{
    is_summary_file,
    sample_name_from_path,
    write_matrix,
};
