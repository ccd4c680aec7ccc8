mod read;
mod write;

pub use write::write_annotation_table;
