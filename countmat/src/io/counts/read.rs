use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::data_structs::SampleCountTable;
use crate::error::{
    CountMatError,
    Result,
};

/// Suffix markers appended to sample names by upstream quantifiers.
const QUANT_SUFFIXES: &[&str] = &["_quant", ".exon"];

/// Files whose name contains this marker are quantifier run summaries, not
/// per-gene counts. Callers skip them before reading.
const SUMMARY_MARKER: &str = "summary";

/// Derives the sample name from a count file path: the base file name with
/// the quantifier suffix stripped.
pub fn sample_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    for suffix in QUANT_SUFFIXES {
        if let Some(stripped) = stem.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    stem
}

/// Whether a file is a quantifier summary rather than a count table.
pub fn is_summary_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .contains(SUMMARY_MARKER)
        })
        .unwrap_or(false)
}

impl SampleCountTable {
    /// Reads one sample's count file: tab-delimited with a header row,
    /// first column the gene identifier, second column the integer count.
    ///
    /// Fails with [`CountMatError::NotFound`] when the path does not exist
    /// and [`CountMatError::MissingGeneColumn`] when the header has no
    /// column to promote to the gene key.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CountMatError::NotFound(path.to_path_buf()));
        }

        let sample = sample_name_from_path(path);
        debug!("Reading counts for sample '{}' from {}", sample, path.display());

        let handle = File::open(path)?;
        Self::from_reader(handle, sample)
    }

    /// Reads a count table from any byte source, tagging it with `sample`.
    pub fn from_reader<R, S>(
        handle: R,
        sample: S,
    ) -> Result<Self>
    where
        R: Read,
        S: Into<String>, {
        let sample = sample.into();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(handle);

        let headers = reader.headers()?.clone();
        if headers.len() < 2 {
            return Err(CountMatError::MissingGeneColumn(sample));
        }
        let key_column = headers[0].to_string();

        let mut table = SampleCountTable::new(sample, key_column);
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            let gene = &record[0];
            let value = &record[1];
            // header occupies line 1
            let count = value.parse::<u64>().map_err(|_| {
                CountMatError::InvalidCount {
                    source_name: table.sample().to_string(),
                    line:        idx + 2,
                    value:       value.to_string(),
                }
            })?;
            table.insert(gene, count);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("sample1_quant.tsv", "sample1")]
    #[case("data/run2/sampleA_quant.tsv", "sampleA")]
    #[case("sampleB.exon.txt", "sampleB")]
    #[case("plain.tsv", "plain")]
    fn test_sample_name_from_path(
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(sample_name_from_path(Path::new(path)), expected);
    }

    #[rstest]
    #[case("sample1_quant.summary.tsv", true)]
    #[case("summary_quant.tsv", true)]
    #[case("sample1_quant.tsv", false)]
    fn test_is_summary_file(
        #[case] path: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_summary_file(Path::new(path)), expected);
    }

    #[test]
    fn test_read_count_table() {
        let data = "gene\tcount\ng1\t5\ng2\t3\n";
        let table =
            SampleCountTable::from_reader(Cursor::new(data), "sample1").unwrap();

        assert_eq!(table.sample(), "sample1");
        assert_eq!(table.key_column(), "gene");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("g1"), Some(5));
        assert_eq!(table.get("g2"), Some(3));
        assert_eq!(table.get("g3"), None);
    }

    #[test]
    fn test_duplicate_gene_last_write_wins() {
        let data = "gene\tcount\ng1\t5\ng1\t9\n";
        let table =
            SampleCountTable::from_reader(Cursor::new(data), "sample1").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("g1"), Some(9));
    }

    #[test]
    fn test_missing_gene_column() {
        let data = "gene\ng1\ng2\n";
        let err = SampleCountTable::from_reader(Cursor::new(data), "sample1")
            .unwrap_err();

        assert!(matches!(err, CountMatError::MissingGeneColumn(_)));
    }

    #[test]
    fn test_invalid_count_reports_line() {
        let data = "gene\tcount\ng1\t5\ng2\tNA\n";
        let err = SampleCountTable::from_reader(Cursor::new(data), "sample1")
            .unwrap_err();

        match err {
            CountMatError::InvalidCount { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "NA");
            },
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_path() {
        let path = PathBuf::from("does/not/exist_quant.tsv");
        let err = SampleCountTable::from_path(&path).unwrap_err();
        assert!(matches!(err, CountMatError::NotFound(_)));
    }
}
