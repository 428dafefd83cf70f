//! Population-frequency extraction
//!
//! Reads an allele-frequency value either from a VEP CSQ annotation
//! block or directly from the INFO map. Frequency is a soft filter:
//! anything missing or unparsable resolves to 0.0, never an error.

use crate::vcf::record::Variant;

/// Extract the population frequency for `af_tag` from a variant
///
/// With `csq_fields` supplied, the CSQ INFO value is consulted: only the
/// first allele's annotation block is read, at the index `af_tag` holds
/// in the declared field order. Without it, `af_tag` is read directly
/// from the INFO map.
pub fn population_frequency(
    variant: &Variant,
    csq_fields: Option<&[String]>,
    af_tag: &str,
) -> f64 {
    match csq_fields {
        Some(fields) => {
            let Some(csq) = variant.info.get("CSQ").and_then(|v| v.as_str()) else {
                return 0.0;
            };
            // First allele's annotation block only
            let first_block = csq.split(',').next().unwrap_or("");
            let values: Vec<&str> = first_block.split('|').collect();

            match fields.iter().position(|f| f == af_tag) {
                Some(idx) => values
                    .get(idx)
                    .and_then(|v| v.parse::<f64>().ok())
                    .unwrap_or(0.0),
                None => 0.0,
            }
        }
        None => variant
            .info
            .get(af_tag)
            .and_then(|v| v.as_str())
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0),
    }
}
