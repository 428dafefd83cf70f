//! VCF data-line parsing
//!
//! Decodes one tab-separated data line into an owned [`Variant`],
//! including per-sample genotype codes and quality scores.

use crate::core::{GenotypeCode, RecordParseError, RecordResult};
use memchr::memchr;
use std::collections::HashMap;

/// Value of one INFO key: a bare flag or a string value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoValue {
    /// Key present without `=`
    Flag,
    Value(String),
}

impl InfoValue {
    /// The string value, if this is not a flag
    pub fn as_str(&self) -> Option<&str> {
        match self {
            InfoValue::Flag => None,
            InfoValue::Value(v) => Some(v),
        }
    }
}

/// One decoded VCF record
#[derive(Debug, Clone)]
pub struct Variant {
    pub chrom: String,
    /// Position (1-based)
    pub pos: u64,
    pub reference: String,
    /// Alternate alleles; multi-allelic sites decode to more than one
    pub alt: Vec<String>,
    pub info: HashMap<String, InfoValue>,
    /// Length heuristic: ref and first alt have equal character length.
    /// Misclassifies multi-base substitutions as SNPs; kept for
    /// compatibility with existing consumers.
    pub is_snp: bool,
    /// Genotype code per sample, in header sample order
    pub genotypes: Vec<GenotypeCode>,
    /// GQ per sample, 0 when absent or unparsable
    pub qualities: Vec<i32>,
}

impl Variant {
    /// Parse one data line
    pub fn parse(line: &str, line_number: usize) -> RecordResult<Variant> {
        if line.is_empty() {
            return Err(RecordParseError::EmptyLine { line: line_number });
        }

        let fields = split_fields(line);

        // CHROM, POS, ID, REF, ALT, QUAL, FILTER, INFO are mandatory
        if fields.len() < 8 {
            return Err(RecordParseError::TooFewFields {
                line: line_number,
                expected: 8,
                found: fields.len(),
            });
        }

        let chrom = fields[0].to_string();
        let pos: u64 = fields[1]
            .parse()
            .map_err(|_| RecordParseError::InvalidNumber {
                line: line_number,
                field: "POS",
                value: fields[1].to_string(),
            })?;
        let reference = fields[3].to_string();
        let alt: Vec<String> = fields[4].split(',').map(|s| s.to_string()).collect();

        let info = parse_info(fields[7]);

        // Equal ref/alt length marks a SNP candidate
        let alt_len = alt.first().map(|a| a.len()).unwrap_or(0);
        let is_snp = reference.len() == alt_len;

        let mut genotypes = Vec::new();
        let mut qualities = Vec::new();
        if fields.len() > 9 {
            let format: Vec<&str> = fields[8].split(':').collect();
            let gt_idx = format.iter().position(|k| *k == "GT");
            let gq_idx = format.iter().position(|k| *k == "GQ");

            for sample in &fields[9..] {
                let parts: Vec<&str> = sample.split(':').collect();
                let gt = gt_idx
                    .and_then(|i| parts.get(i).copied())
                    .unwrap_or("");
                genotypes.push(GenotypeCode::decode(gt));
                // Absent or unparsable GQ falls back to 0, never an error
                let gq = gq_idx
                    .and_then(|i| parts.get(i))
                    .and_then(|v| v.parse::<i32>().ok())
                    .unwrap_or(0);
                qualities.push(gq);
            }
        }

        Ok(Variant {
            chrom,
            pos,
            reference,
            alt,
            info,
            is_snp,
            genotypes,
            qualities,
        })
    }

    /// True when the record carries more than one alternate allele
    pub fn is_multi_allelic(&self) -> bool {
        self.alt.len() > 1
    }
}

/// Split a line on tabs using memchr
fn split_fields(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut fields = Vec::with_capacity(12);
    let mut start = 0;

    while start <= bytes.len() {
        match memchr(b'\t', &bytes[start..]) {
            Some(offset) => {
                fields.push(&line[start..start + offset]);
                start += offset + 1;
            }
            None => {
                fields.push(&line[start..]);
                break;
            }
        }
    }

    fields
}

/// Parse the INFO column into a key map; `.` yields an empty map
fn parse_info(info: &str) -> HashMap<String, InfoValue> {
    let mut map = HashMap::new();
    if info == "." {
        return map;
    }
    for item in info.split(';') {
        match item.find('=') {
            Some(eq) => {
                map.insert(
                    item[..eq].to_string(),
                    InfoValue::Value(item[eq + 1..].to_string()),
                );
            }
            None => {
                map.insert(item.to_string(), InfoValue::Flag);
            }
        }
    }
    map
}
