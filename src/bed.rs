//! BED output
//!
//! Filters closed regions by evidence and size thresholds, classifies
//! them as heterodisomy or homodisomy/deletion, and renders the
//! annotated BED lines for regions and sites.

use crate::core::{PutativeRegion, SiteRecord};

/// Het/hom ratio below which a region is called homodisomy or deletion
pub const ISO_HET_PCT: f64 = 0.01;

/// Region-level filter thresholds
#[derive(Debug, Clone, Copy)]
pub struct RegionFilter {
    /// Regions need strictly more supporting sites than this
    pub min_sites: u64,
    /// Minimum high-confidence span (end_lo - start_hi) in bp
    pub min_size: u64,
}

impl Default for RegionFilter {
    fn default() -> Self {
        Self {
            min_sites: 3,
            min_size: 1000,
        }
    }
}

impl RegionFilter {
    /// Does this region clear both thresholds?
    pub fn keep(&self, region: &PutativeRegion) -> bool {
        region.run_len > self.min_sites && low_size(region) >= self.min_size
    }
}

/// Rough disomy-type call for a surviving region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdType {
    Heterodisomy,
    HomodisomyOrDeletion,
}

impl UpdType {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdType::Heterodisomy => "HETERODISOMY",
            UpdType::HomodisomyOrDeletion => "HOMODISOMY/DELETION",
        }
    }
}

/// Classify a region by its het/hom site ratio
///
/// `hom_sites` is seeded to 1 when a region opens, so the denominator
/// cannot be zero in valid executions; an all-zero region still gets a
/// defined answer.
pub fn upd_type(region: &PutativeRegion) -> UpdType {
    let denom = region.het_sites + region.hom_sites;
    if denom == 0 {
        return UpdType::HomodisomyOrDeletion;
    }
    let het_pct = region.het_sites as f64 / denom as f64;
    if het_pct < ISO_HET_PCT {
        UpdType::HomodisomyOrDeletion
    } else {
        UpdType::Heterodisomy
    }
}

/// High-confidence span of a region
pub fn low_size(region: &PutativeRegion) -> u64 {
    region.end_lo.saturating_sub(region.start_hi)
}

/// Low-confidence (outer) span of a region
pub fn high_size(region: &PutativeRegion) -> u64 {
    region.end_hi.saturating_sub(region.start_lo)
}

/// Render one region as an annotated BED line
///
/// Coordinates are BED-style 0-based half-open over the
/// high-confidence interval; the outer bounds ride along in the
/// annotation column.
pub fn format_region(region: &PutativeRegion) -> String {
    format!(
        "{}\t{}\t{}\tORIGIN={};TYPE={};LOW_SIZE={};INF_SITES={};SNPS={};HET_HOM={}/{};OPP_SITES={};START_LOW={};END_HIGH={};HIGH_SIZE={}",
        region.chrom,
        region.start_hi - 1,
        region.end_lo,
        region.origin.as_str(),
        upd_type(region).as_str(),
        low_size(region),
        region.run_len,
        region.tot,
        region.het_sites,
        region.hom_sites,
        region.opposites,
        region.start_lo,
        region.end_hi,
        high_size(region),
    )
}

/// Render one classified site as a BED line
pub fn format_site(site: &SiteRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        site.chrom,
        site.pos - 1,
        site.pos,
        site.call.as_str()
    )
}
