//! Informative-site pipeline
//!
//! Composes the VCF reader, the population-frequency extractor and the
//! site classifier into a lazy, filtered stream of classified sites.

use crate::core::{classify_site, GenotypeCode, Result, SiteRecord, UpdError};
use crate::vcf::{population_frequency, VcfHeader, VcfReader};
use std::io::BufRead;

/// Sample column indices of the trio, resolved once from the header
#[derive(Debug, Clone, Copy)]
pub struct TrioIndices {
    pub proband: usize,
    pub mother: usize,
    pub father: usize,
}

impl TrioIndices {
    /// Resolve the trio's sample IDs against the header sample list
    ///
    /// Fails on the first missing sample.
    pub fn resolve(
        header: &VcfHeader,
        proband: &str,
        mother: &str,
        father: &str,
    ) -> Result<TrioIndices> {
        let index = |id: &str| {
            header
                .sample_index(id)
                .ok_or_else(|| UpdError::MissingSample {
                    sample: id.to_string(),
                })
        };
        Ok(TrioIndices {
            proband: index(proband)?,
            mother: index(mother)?,
            father: index(father)?,
        })
    }
}

/// Site-level filter thresholds
#[derive(Debug, Clone)]
pub struct SiteOptions {
    /// AF field name to read (VEP CSQ sub-field or INFO id)
    pub af_tag: String,
    /// Minimum population frequency to keep a SNP
    pub min_af: f64,
    /// Minimum GQ across all samples to keep a site
    pub min_gq: i32,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            af_tag: "MAX_AF".to_string(),
            min_af: 0.05,
            min_gq: 30,
        }
    }
}

/// Check that the configured AF tag is actually declared
///
/// With CSQ fields it must be one of the declared sub-fields; otherwise
/// it must exist as an INFO id.
pub fn validate_af_tag(
    header: &VcfHeader,
    csq_fields: Option<&[String]>,
    af_tag: &str,
) -> Result<()> {
    match csq_fields {
        Some(fields) => {
            if !fields.iter().any(|f| f == af_tag) {
                return Err(UpdError::MissingAfTag {
                    tag: af_tag.to_string(),
                    looked_in: "VEP annotations",
                });
            }
        }
        None => {
            if !header.contains(af_tag) {
                return Err(UpdError::MissingAfTag {
                    tag: af_tag.to_string(),
                    looked_in: "VCF INFO header",
                });
            }
        }
    }
    Ok(())
}

/// Lazy stream of classified informative sites
///
/// Multi-allelic input is a hard error (variants must be pre-split);
/// non-SNPs, low-frequency and low-quality sites are skipped silently.
pub struct InformativeSites<R: BufRead> {
    vcf: VcfReader<R>,
    csq_fields: Option<Vec<String>>,
    trio: TrioIndices,
    opts: SiteOptions,
}

impl<R: BufRead> InformativeSites<R> {
    pub fn new(
        vcf: VcfReader<R>,
        csq_fields: Option<Vec<String>>,
        trio: TrioIndices,
        opts: SiteOptions,
    ) -> Self {
        Self {
            vcf,
            csq_fields,
            trio,
            opts,
        }
    }
}

impl<R: BufRead> Iterator for InformativeSites<R> {
    type Item = Result<SiteRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let variant = match self.vcf.next_variant()? {
                Ok(v) => v,
                Err(e) => return Some(Err(e)),
            };

            if variant.is_multi_allelic() {
                return Some(Err(UpdError::MultiAllelic {
                    chrom: variant.chrom,
                    pos: variant.pos,
                }));
            }

            if !variant.is_snp {
                continue;
            }

            let freq =
                population_frequency(&variant, self.csq_fields.as_deref(), &self.opts.af_tag);
            if self.opts.min_af > freq {
                continue;
            }

            // Every sample in the VCF must clear the GQ threshold
            if variant.qualities.iter().any(|gq| *gq < self.opts.min_gq) {
                continue;
            }

            let code = |idx: usize| {
                variant
                    .genotypes
                    .get(idx)
                    .copied()
                    .unwrap_or(GenotypeCode::Other)
            };
            let call = classify_site(
                code(self.trio.proband),
                code(self.trio.mother),
                code(self.trio.father),
            );

            return Some(Ok(SiteRecord {
                chrom: variant.chrom,
                pos: variant.pos,
                call,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SiteCall;
    use std::io::BufReader;

    const HEADER: &str = "\
##fileformat=VCFv4.2
##INFO=<ID=MAX_AF,Number=A,Type=Float,Description=\"Max AF\">
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tkid\tmom\tdad
";

    fn pipeline(data: &str) -> InformativeSites<BufReader<&'static [u8]>> {
        // Leak the assembled text so the reader can borrow it 'static
        let text: &'static str = Box::leak(format!("{}{}", HEADER, data).into_boxed_str());
        let vcf = VcfReader::new(BufReader::new(text.as_bytes())).unwrap();
        let trio = TrioIndices::resolve(vcf.header(), "kid", "mom", "dad").unwrap();
        InformativeSites::new(vcf, None, trio, SiteOptions::default())
    }

    #[test]
    fn test_classified_site_emitted() {
        let mut sites = pipeline(
            "1\t100\t.\tA\tG\t.\t.\tMAX_AF=0.5\tGT:GQ\t0/0:60\t0/0:60\t1/1:60\n",
        );
        let site = sites.next().unwrap().unwrap();
        assert_eq!(site.chrom, "1");
        assert_eq!(site.pos, 100);
        assert_eq!(site.call, SiteCall::UpdMaternalOrigin);
        assert!(sites.next().is_none());
    }

    #[test]
    fn test_non_snp_skipped() {
        let mut sites = pipeline(
            "1\t100\t.\tA\tAG\t.\t.\tMAX_AF=0.5\tGT:GQ\t0/1:60\t0/0:60\t1/1:60\n",
        );
        assert!(sites.next().is_none());
    }

    #[test]
    fn test_low_frequency_skipped() {
        let mut sites = pipeline(
            "1\t100\t.\tA\tG\t.\t.\tMAX_AF=0.01\tGT:GQ\t0/1:60\t0/0:60\t1/1:60\n",
        );
        assert!(sites.next().is_none());
    }

    #[test]
    fn test_frequency_at_threshold_kept() {
        let mut sites = pipeline(
            "1\t100\t.\tA\tG\t.\t.\tMAX_AF=0.05\tGT:GQ\t0/1:60\t0/0:60\t1/1:60\n",
        );
        assert!(sites.next().is_some());
    }

    #[test]
    fn test_low_gq_anywhere_skips_site() {
        let mut sites = pipeline(
            "1\t100\t.\tA\tG\t.\t.\tMAX_AF=0.5\tGT:GQ\t0/1:60\t0/0:29\t1/1:60\n",
        );
        assert!(sites.next().is_none());
    }

    #[test]
    fn test_multi_allelic_is_fatal() {
        let mut sites = pipeline(
            "1\t100\t.\tA\tG,T\t.\t.\tMAX_AF=0.5\tGT:GQ\t0/1:60\t0/0:60\t1/1:60\n",
        );
        let err = sites.next().unwrap().unwrap_err();
        assert!(matches!(err, UpdError::MultiAllelic { pos: 100, .. }));
    }

    #[test]
    fn test_missing_sample_error() {
        let vcf =
            VcfReader::new(BufReader::new(HEADER.as_bytes())).unwrap();
        let err = TrioIndices::resolve(vcf.header(), "kid", "mom", "stranger").unwrap_err();
        assert!(matches!(err, UpdError::MissingSample { .. }));
    }

    #[test]
    fn test_validate_af_tag() {
        let vcf = VcfReader::new(BufReader::new(HEADER.as_bytes())).unwrap();
        assert!(validate_af_tag(vcf.header(), None, "MAX_AF").is_ok());
        assert!(validate_af_tag(vcf.header(), None, "GNOMAD_AF").is_err());

        let csq = vec!["Allele".to_string(), "MAX_AF".to_string()];
        assert!(validate_af_tag(vcf.header(), Some(&csq), "MAX_AF").is_ok());
        assert!(validate_af_tag(vcf.header(), Some(&csq), "AF").is_err());
    }
}
