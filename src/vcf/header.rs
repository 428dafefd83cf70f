//! VCF header model
//!
//! Parses `##INFO` meta-lines against their fixed grammar and the single
//! `#CHROM` column header, and answers INFO-id and CSQ field-order
//! queries for the rest of the pipeline.
//!
//! # INFO meta-line grammar
//!
//! ```text
//! ##INFO=<ID=<id>,Number=<num>,Type=<type>,Description="<text>">
//! ```
//!
//! - `ID` is any non-empty run of non-comma characters
//! - `Number` is an integer or one of `.`, `A`, `G`, `R`
//! - `Type` is Integer, Float, Flag, Character or String
//! - `Description` is double-quoted with no embedded quotes

use crate::core::{HeaderParseError, HeaderResult, Result, UpdError};
use std::collections::HashMap;

/// Value type of an INFO field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    Integer,
    Float,
    Flag,
    Character,
    String,
}

impl InfoType {
    fn parse(token: &str) -> Option<InfoType> {
        match token {
            "Integer" => Some(InfoType::Integer),
            "Float" => Some(InfoType::Float),
            "Flag" => Some(InfoType::Flag),
            "Character" => Some(InfoType::Character),
            "String" => Some(InfoType::String),
            _ => None,
        }
    }
}

/// One parsed ##INFO meta-line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRecord {
    pub id: String,
    /// Cardinality: an integer, `.`, `A`, `G`, or `R`
    pub number: String,
    pub value_type: InfoType,
    /// Description text, quotes stripped
    pub description: String,
}

impl InfoRecord {
    /// Parse one `##INFO=<...>` meta-line
    pub fn parse_meta_line(line: &str, line_number: usize) -> HeaderResult<InfoRecord> {
        let malformed = |message: &str| HeaderParseError::MalformedInfo {
            line: line_number,
            message: message.to_string(),
        };

        let body = line
            .strip_prefix("##INFO=<")
            .ok_or_else(|| malformed("expected '##INFO=<' prefix"))?;
        let body = body
            .strip_suffix('>')
            .ok_or_else(|| malformed("missing closing '>'"))?;

        let (id, rest) = take_field(body, "ID=").ok_or_else(|| malformed("missing ID= field"))?;
        if id.is_empty() {
            return Err(malformed("empty ID"));
        }

        let (number, rest) =
            take_field(rest, "Number=").ok_or_else(|| malformed("missing Number= field"))?;
        let number_ok = matches!(number, "." | "A" | "G" | "R") || number.parse::<i64>().is_ok();
        if !number_ok {
            return Err(malformed(&format!("invalid Number '{}'", number)));
        }

        let (type_token, rest) =
            take_field(rest, "Type=").ok_or_else(|| malformed("missing Type= field"))?;
        let value_type = InfoType::parse(type_token)
            .ok_or_else(|| malformed(&format!("invalid Type '{}'", type_token)))?;

        let rest = rest
            .strip_prefix("Description=\"")
            .ok_or_else(|| malformed("missing Description= field"))?;
        let quote = rest
            .find('"')
            .ok_or_else(|| malformed("unterminated Description string"))?;
        let description = &rest[..quote];
        // Anything after the closing quote (e.g. Source=, Version=) is
        // tolerated but not retained
        let tail = &rest[quote + 1..];
        if !tail.is_empty() && !tail.starts_with(',') {
            return Err(malformed("unexpected content after Description"));
        }

        Ok(InfoRecord {
            id: id.to_string(),
            number: number.to_string(),
            value_type,
            description: description.to_string(),
        })
    }
}

/// Split off a `key=`-prefixed field terminated by the next comma
fn take_field<'a>(input: &'a str, key: &str) -> Option<(&'a str, &'a str)> {
    let rest = input.strip_prefix(key)?;
    let comma = rest.find(',')?;
    Some((&rest[..comma], &rest[comma + 1..]))
}

/// Parsed VCF header: INFO records plus the sample list
#[derive(Debug, Clone, Default)]
pub struct VcfHeader {
    info: HashMap<String, InfoRecord>,
    samples: Vec<String>,
}

impl VcfHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one `##` meta-line; only `##INFO=` lines produce records
    pub fn add_meta_line(&mut self, line: &str, line_number: usize) -> HeaderResult<()> {
        if line.starts_with("##INFO=") {
            let record = InfoRecord::parse_meta_line(line, line_number)?;
            self.info.insert(record.id.clone(), record);
        }
        Ok(())
    }

    /// Consume the single `#CHROM` column header line
    ///
    /// Requires the eight fixed columns, FORMAT, and at least one sample.
    pub fn set_sample_line(&mut self, line: &str, line_number: usize) -> HeaderResult<()> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() <= 9 {
            return Err(HeaderParseError::NoIndividuals {
                line: line_number,
                found: columns.len(),
            });
        }
        self.samples = columns[9..].iter().map(|s| s.to_string()).collect();
        Ok(())
    }

    /// Does the header declare an INFO field with this id?
    pub fn contains(&self, id: &str) -> bool {
        self.info.contains_key(id)
    }

    /// Look up an INFO record by id
    pub fn info(&self, id: &str) -> Option<&InfoRecord> {
        self.info.get(id)
    }

    /// Sample identifiers in column order
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Column index of a sample id within the sample list
    pub fn sample_index(&self, id: &str) -> Option<usize> {
        self.samples.iter().position(|s| s == id)
    }

    /// Derive the VEP CSQ sub-field order from the CSQ INFO description
    ///
    /// The description declares the order after the literal `Format: `
    /// token, pipe-separated.
    pub fn csq_fields(&self) -> Result<Vec<String>> {
        let record = self.info("CSQ").ok_or(UpdError::MissingCsqHeader)?;
        let format = record
            .description
            .split("Format: ")
            .nth(1)
            .ok_or(UpdError::MissingCsqHeader)?;
        let format = format.trim_end_matches('"');
        Ok(format.split('|').map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSQ_LINE: &str = "##INFO=<ID=CSQ,Number=.,Type=String,Description=\"Consequence annotations from Ensembl VEP. Format: Allele|Consequence|SYMBOL|MAX_AF\">";

    #[test]
    fn test_parse_info_record() {
        let line = "##INFO=<ID=DP,Number=1,Type=Integer,Description=\"Total Depth\">";
        let rec = InfoRecord::parse_meta_line(line, 3).unwrap();
        assert_eq!(rec.id, "DP");
        assert_eq!(rec.number, "1");
        assert_eq!(rec.value_type, InfoType::Integer);
        assert_eq!(rec.description, "Total Depth");
    }

    #[test]
    fn test_parse_info_record_special_numbers() {
        for num in [".", "A", "G", "R", "0", "2"] {
            let line = format!(
                "##INFO=<ID=X,Number={},Type=Float,Description=\"x\">",
                num
            );
            let rec = InfoRecord::parse_meta_line(&line, 1).unwrap();
            assert_eq!(rec.number, num);
        }
    }

    #[test]
    fn test_parse_info_record_missing_type() {
        let line = "##INFO=<ID=DP,Number=1,Description=\"Total Depth\">";
        let err = InfoRecord::parse_meta_line(line, 7).unwrap_err();
        assert!(matches!(
            err,
            HeaderParseError::MalformedInfo { line: 7, .. }
        ));
    }

    #[test]
    fn test_parse_info_record_bad_number() {
        let line = "##INFO=<ID=DP,Number=Q,Type=Integer,Description=\"d\">";
        assert!(InfoRecord::parse_meta_line(line, 1).is_err());
    }

    #[test]
    fn test_parse_info_record_bad_type() {
        let line = "##INFO=<ID=DP,Number=1,Type=Double,Description=\"d\">";
        assert!(InfoRecord::parse_meta_line(line, 1).is_err());
    }

    #[test]
    fn test_parse_info_record_unterminated_description() {
        let line = "##INFO=<ID=DP,Number=1,Type=Integer,Description=\"oops>";
        assert!(InfoRecord::parse_meta_line(line, 1).is_err());
    }

    #[test]
    fn test_sample_line() {
        let mut header = VcfHeader::new();
        header
            .set_sample_line(
                "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tkid\tmom\tdad",
                20,
            )
            .unwrap();
        assert_eq!(header.samples(), &["kid", "mom", "dad"]);
        assert_eq!(header.sample_index("mom"), Some(1));
        assert_eq!(header.sample_index("nobody"), None);
    }

    #[test]
    fn test_sample_line_no_individuals() {
        let mut header = VcfHeader::new();
        let err = header
            .set_sample_line(
                "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT",
                20,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            HeaderParseError::NoIndividuals { found: 9, .. }
        ));
    }

    #[test]
    fn test_csq_fields() {
        let mut header = VcfHeader::new();
        header.add_meta_line(CSQ_LINE, 5).unwrap();
        let fields = header.csq_fields().unwrap();
        assert_eq!(fields, vec!["Allele", "Consequence", "SYMBOL", "MAX_AF"]);
    }

    #[test]
    fn test_csq_fields_missing() {
        let header = VcfHeader::new();
        assert!(matches!(
            header.csq_fields(),
            Err(UpdError::MissingCsqHeader)
        ));
    }

    #[test]
    fn test_non_info_meta_lines_ignored() {
        let mut header = VcfHeader::new();
        header.add_meta_line("##fileformat=VCFv4.2", 1).unwrap();
        header
            .add_meta_line("##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">", 2)
            .unwrap();
        assert!(!header.contains("GT"));
    }
}
