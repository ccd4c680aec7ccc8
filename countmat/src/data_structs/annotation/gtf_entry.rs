use std::str::FromStr;

use hashbrown::HashMap;

const GENE_FEATURE_TYPE: &str = "gene";

/// Parsed form of the free-text attributes column of a GTF feature line: a
/// semicolon-delimited sequence of `key "value"` pairs, each value
/// optionally quote-wrapped.
///
/// The keys of interest are promoted to typed fields; everything else lands
/// in `other`. Parsing is best effort — a pair without a value is ignored
/// rather than reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GtfAttributes {
    pub gene_id:   Option<String>,
    pub gene_name: Option<String>,
    pub other:     HashMap<String, String>,
}

impl FromStr for GtfAttributes {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut attributes = GtfAttributes::default();
        for pair in s.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }

            let mut parts = pair.splitn(2, char::is_whitespace);
            let key = match parts.next() {
                Some(key) if !key.is_empty() => key,
                _ => continue,
            };
            let value = match parts.next() {
                Some(value) => value.trim().trim_matches('"'),
                None => continue,
            };

            match key {
                "gene_id" => {
                    attributes.gene_id = Some(value.to_string());
                },
                "gene_name" => {
                    attributes.gene_name = Some(value.to_string());
                },
                _ => {
                    attributes
                        .other
                        .insert(key.to_string(), value.to_string());
                },
            }
        }

        Ok(attributes)
    }
}

/// One tab-delimited GTF feature line, borrowed from the input buffer.
///
/// Only the fields this crate consumes are kept; the positional
/// coordinate fields are validated for presence and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GtfFeatureLine<'a> {
    pub seqname:      &'a str,
    pub feature_type: &'a str,
    pub attributes:   &'a str,
}

impl<'a> GtfFeatureLine<'a> {
    /// Splits a feature line into its nine positional fields. Returns
    /// `None` when fewer than nine are present.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split('\t');

        let seqname = fields.next()?;
        let _source = fields.next()?;
        let feature_type = fields.next()?;
        // start, end, score, strand and frame precede the attributes
        let attributes = fields.nth(5)?;

        Some(Self {
            seqname,
            feature_type,
            attributes,
        })
    }

    /// Whether this is a gene-level feature record.
    pub fn is_gene(&self) -> bool { self.feature_type == GENE_FEATURE_TYPE }
}
