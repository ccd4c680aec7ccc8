use std::fs;
use std::path::Path;

use countmat::prelude::*;
use tempfile::tempdir;

fn write_sample(
    dir: &Path,
    name: &str,
    body: &str,
) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn concat_two_samples_end_to_end() {
    let dir = tempdir().unwrap();

    let a = write_sample(dir.path(), "A_quant.tsv", "gene\tcount\ng1\t5\ng2\t3\n");
    let b = write_sample(dir.path(), "B_quant.tsv", "gene\tcount\ng2\t7\ng3\t1\n");

    let tables = vec![
        SampleCountTable::from_path(&a).unwrap(),
        SampleCountTable::from_path(&b).unwrap(),
    ];
    assert_eq!(tables[0].sample(), "A");
    assert_eq!(tables[1].sample(), "B");

    let matrix = MergedCountMatrix::merge(&tables).unwrap();

    let out = dir.path().join("counts_matrix.tsv");
    write_matrix(&matrix, &out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written, "gene\tA\tB\ng1\t5\t0\ng2\t3\t7\ng3\t0\t1\n");
}

#[test]
fn merge_of_no_tables_reports_empty_input() {
    let err = MergedCountMatrix::merge(&[]).unwrap_err();
    assert!(matches!(err, CountMatError::EmptyInput));
}

#[test]
fn genemap_end_to_end() {
    let dir = tempdir().unwrap();

    let gtf = "\
#!genome-build GRCh38
chr1\thavana\tgene\t11869\t14409\t.\t+\t.\tgene_id \"ENSG00000223972\"; gene_name \"DDX11L1\";
chr1\thavana\ttranscript\t11869\t14409\t.\t+\t.\tgene_id \"ENSG00000223972\"; gene_name \"DDX11L1\";
chrX\thavana\tgene\t100627108\t100639991\t.\t-\t.\tgene_id \"ENSG00000000003\"; gene_version \"15\";
chrX\thavana\tgene\t100584936\t100599885\t.\t+\t.\tgene_id \"ENSG00000000005\"; gene_name \"TNMD\";
";
    let input = write_sample(dir.path(), "genome.gtf", gtf);

    let table = AnnotationTable::from_path(&input).unwrap();
    assert_eq!(table.len(), 2);

    let out = dir.path().join("gene_names.tsv");
    write_annotation_table(&table, &out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        "Ensembl_ID\tGene_Name\n\
         ENSG00000223972\tDDX11L1\n\
         ENSG00000000005\tTNMD\n"
    );

    let reread = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(&out)
        .unwrap()
        .deserialize::<GeneAnnotationRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(reread, table.records());
}
