use std::str::FromStr;

use rstest::rstest;

use super::*;

#[test]
fn test_attributes_quoted_values() {
    let attrs = GtfAttributes::from_str(
        "gene_id \"ENSG00000223972\"; gene_name \"DDX11L1\";",
    )
    .unwrap();

    assert_eq!(attrs.gene_id.as_deref(), Some("ENSG00000223972"));
    assert_eq!(attrs.gene_name.as_deref(), Some("DDX11L1"));
}

#[rstest]
#[case("gene_id ENSG1; gene_name Abc", Some("ENSG1"), Some("Abc"))]
#[case("gene_id \"ENSG1\";gene_name \"Abc\"", Some("ENSG1"), Some("Abc"))]
#[case("  gene_id  \"ENSG1\" ;  gene_name \"Abc\" ; ", Some("ENSG1"), Some("Abc"))]
#[case("gene_id \"ENSG1\"; gene_version \"5\";", Some("ENSG1"), None)]
#[case("gene_name \"Abc\";", None, Some("Abc"))]
#[case("", None, None)]
#[case(";;;", None, None)]
#[case("gene_id", None, None)]
fn test_attributes_parsing(
    #[case] input: &str,
    #[case] gene_id: Option<&str>,
    #[case] gene_name: Option<&str>,
) {
    let attrs = GtfAttributes::from_str(input).unwrap();
    assert_eq!(attrs.gene_id.as_deref(), gene_id);
    assert_eq!(attrs.gene_name.as_deref(), gene_name);
}

#[test]
fn test_attributes_other_keys_collected() {
    let attrs = GtfAttributes::from_str(
        "gene_id \"ENSG1\"; gene_biotype \"protein_coding\"; level 2;",
    )
    .unwrap();

    assert_eq!(
        attrs.other.get("gene_biotype").map(String::as_str),
        Some("protein_coding")
    );
    assert_eq!(attrs.other.get("level").map(String::as_str), Some("2"));
}

#[test]
fn test_feature_line_parse() {
    let line = "chr1\thavana\tgene\t11869\t14409\t.\t+\t.\tgene_id \"ENSG1\";";
    let feature = GtfFeatureLine::parse(line).unwrap();

    assert_eq!(feature.seqname, "chr1");
    assert_eq!(feature.feature_type, "gene");
    assert_eq!(feature.attributes, "gene_id \"ENSG1\";");
    assert!(feature.is_gene());
}

#[rstest]
#[case("chr1\thavana\tgene")]
#[case("chr1\thavana\tgene\t1\t2\t.\t+\t.")]
#[case("")]
fn test_feature_line_too_few_fields(#[case] line: &str) {
    assert!(GtfFeatureLine::parse(line).is_none());
}

#[test]
fn test_feature_line_not_gene() {
    let line = "chr1\thavana\texon\t11869\t12227\t.\t+\t.\tgene_id \"ENSG1\";";
    let feature = GtfFeatureLine::parse(line).unwrap();
    assert!(!feature.is_gene());
}

#[test]
fn test_record_requires_both_fields() {
    let both = GtfAttributes {
        gene_id:   Some("ENSG1".to_string()),
        gene_name: Some("Abc".to_string()),
        ..Default::default()
    };
    assert_eq!(
        GeneAnnotationRecord::from_attributes(&both),
        Some(GeneAnnotationRecord::new("ENSG1", "Abc"))
    );

    let id_only = GtfAttributes {
        gene_id: Some("ENSG1".to_string()),
        ..Default::default()
    };
    assert_eq!(GeneAnnotationRecord::from_attributes(&id_only), None);

    let name_only = GtfAttributes {
        gene_name: Some("Abc".to_string()),
        ..Default::default()
    };
    assert_eq!(GeneAnnotationRecord::from_attributes(&name_only), None);
}
