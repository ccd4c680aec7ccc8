mod read;
mod write;

pub use read::{
    is_summary_file,
    sample_name_from_path,
};
pub use write::write_matrix;
