use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
};
use std::path::Path;

use log::{
    debug,
    warn,
};

use crate::data_structs::annotation::{
    AnnotationTable,
    GeneAnnotationRecord,
    GtfAttributes,
    GtfFeatureLine,
};
use crate::error::{
    CountMatError,
    Result,
};

impl AnnotationTable {
    /// Streams a GTF file and collects one record per `gene` feature line
    /// that carries both `gene_id` and `gene_name` attributes.
    ///
    /// Fails with [`CountMatError::NotFound`] when the path is missing.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CountMatError::NotFound(path.to_path_buf()));
        }

        let handle = File::open(path)?;
        let table = Self::from_reader(BufReader::new(handle))?;
        debug!(
            "Extracted {} gene records from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Runs the line state machine over any buffered source:
    ///
    /// 1. skip comment lines (leading `#`) and blank lines;
    /// 2. split into the nine positional GTF fields — lines with fewer
    ///    fields are skipped with a diagnostic, never a hard failure;
    /// 3. skip lines whose feature type is not exactly `gene`;
    /// 4. parse the attributes field and emit a record iff both `gene_id`
    ///    and `gene_name` were present. Lines with either missing are
    ///    dropped silently; that is a data-quality policy, not an error.
    pub fn from_reader<R: BufRead>(handle: R) -> Result<Self> {
        let mut table = AnnotationTable::new();

        for (idx, line) in handle.lines().enumerate() {
            let line = line?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            let feature = match GtfFeatureLine::parse(&line) {
                Some(feature) => feature,
                None => {
                    warn!(
                        "Skipping malformed feature line {}: fewer than 9 fields",
                        idx + 1
                    );
                    continue;
                },
            };
            if !feature.is_gene() {
                continue;
            }

            let attributes: GtfAttributes = feature
                .attributes
                .parse()
                .unwrap_or_default();
            if let Some(record) = GeneAnnotationRecord::from_attributes(&attributes)
            {
                table.push(record);
            }
        }

        Ok(table)
    }
}
