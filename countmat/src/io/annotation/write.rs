use std::path::Path;

use log::info;

use crate::data_structs::annotation::AnnotationTable;
use crate::error::Result;
use crate::io::write_atomic;

const HEADER: [&str; 2] = ["Ensembl_ID", "Gene_Name"];

/// Serializes an annotation table as tab-delimited text with the
/// `Ensembl_ID`/`Gene_Name` header, one row per record in source order. The
/// header is written even when the table is empty.
pub fn write_annotation_table(
    table: &AnnotationTable,
    path: &Path,
) -> Result<()> {
    write_atomic(path, |tmp| {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(tmp);

        writer.write_record(HEADER)?;
        for record in table.iter() {
            writer.serialize(record)?;
        }

        writer.flush()?;
        Ok(())
    })?;

    info!("Wrote {} gene records to {}", table.len(), path.display());
    Ok(())
}
