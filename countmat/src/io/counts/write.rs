use std::iter::once;
use std::path::Path;

use log::info;

use crate::data_structs::MergedCountMatrix;
use crate::error::Result;
use crate::io::write_atomic;

/// Serializes a merged matrix as tab-delimited text: one header row with
/// the gene-key column name followed by the sample names in column order,
/// then one row per gene. Counts are written as plain integers.
pub fn write_matrix(
    matrix: &MergedCountMatrix,
    path: &Path,
) -> Result<()> {
    write_atomic(path, |tmp| {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(tmp);

        writer.write_record(
            once(matrix.key_column()).chain(matrix.samples().iter().map(String::as_str)),
        )?;

        for (gene, cells) in matrix.iter() {
            writer.write_record(
                once(gene.to_string()).chain(cells.iter().map(u64::to_string)),
            )?;
        }

        writer.flush()?;
        Ok(())
    })?;

    info!(
        "Wrote {} genes x {} samples to {}",
        matrix.n_genes(),
        matrix.n_samples(),
        path.display()
    );
    Ok(())
}
