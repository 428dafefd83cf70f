//! Region aggregation
//!
//! Single-pass streaming reducer that merges an ordered sequence of
//! classified sites into putative UPD regions. Sites must arrive grouped
//! by chromosome and position-sorted within each chromosome; the caller
//! state never crosses a chromosome boundary.

use crate::core::classify::SiteCall;

/// One classified site in genome order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRecord {
    pub chrom: String,
    /// 1-based position
    pub pos: u64,
    pub call: SiteCall,
}

/// Parental origin of a putative region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionOrigin {
    Maternal,
    Paternal,
}

impl RegionOrigin {
    /// Origin implied by a site call, if the call opens/extends regions
    pub fn from_call(call: SiteCall) -> Option<RegionOrigin> {
        match call {
            SiteCall::UpdMaternalOrigin => Some(RegionOrigin::Maternal),
            SiteCall::UpdPaternalOrigin => Some(RegionOrigin::Paternal),
            _ => None,
        }
    }

    /// The site call carrying this origin
    pub fn call(self) -> SiteCall {
        match self {
            RegionOrigin::Maternal => SiteCall::UpdMaternalOrigin,
            RegionOrigin::Paternal => SiteCall::UpdPaternalOrigin,
        }
    }

    /// The opposite parental origin
    pub fn opposite(self) -> RegionOrigin {
        match self {
            RegionOrigin::Maternal => RegionOrigin::Paternal,
            RegionOrigin::Paternal => RegionOrigin::Maternal,
        }
    }

    /// BED-output name of this origin
    pub fn as_str(self) -> &'static str {
        match self {
            RegionOrigin::Maternal => "MATERNAL",
            RegionOrigin::Paternal => "PATERNAL",
        }
    }
}

/// A merged candidate UPD region
///
/// While open, `end_lo` tracks the last same-call site absorbed and
/// `end_hi` keeps its opening value; closing sets `end_hi`, after which
/// `start_lo <= start_hi <= end_lo <= end_hi` holds. `run_len` counts
/// sites matching the region's own call, `tot` every site absorbed while
/// the region was open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutativeRegion {
    pub origin: RegionOrigin,
    pub chrom: String,
    /// Last position known to be outside the region (low-confidence start)
    pub start_lo: u64,
    /// First supporting site (high-confidence start)
    pub start_hi: u64,
    /// Last supporting site (high-confidence end)
    pub end_lo: u64,
    /// Last position possibly inside the region (low-confidence end)
    pub end_hi: u64,
    pub run_len: u64,
    pub opposites: u64,
    pub hom_sites: u64,
    pub het_sites: u64,
    pub tot: u64,
}

/// Anchor for the low-confidence start of the next region: the last site
/// known not to belong to any UPD run
#[derive(Debug, Clone)]
struct Anchor {
    chrom: String,
    pos: u64,
}

/// Streaming region caller
///
/// Feed classified sites in genome order with [`RegionCaller::push`];
/// each call returns a region when one closes. Call
/// [`RegionCaller::finish`] once the site stream is exhausted to flush a
/// trailing open region.
#[derive(Debug)]
pub struct RegionCaller {
    current: Option<PutativeRegion>,
    prev: Option<(String, u64)>,
    anchor: Anchor,
}

impl Default for RegionCaller {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionCaller {
    pub fn new() -> Self {
        Self {
            current: None,
            prev: None,
            // Synthetic anchor before the first real site
            anchor: Anchor {
                chrom: "0".to_string(),
                pos: 0,
            },
        }
    }

    /// Process one classified site, returning a region if one closed
    pub fn push(&mut self, site: &SiteRecord) -> Option<PutativeRegion> {
        let mut closed = None;

        match self.current.take() {
            None => {
                // Open a new region on a parental-origin call
                if let Some(origin) = RegionOrigin::from_call(site.call) {
                    self.current = Some(PutativeRegion {
                        origin,
                        chrom: site.chrom.clone(),
                        start_lo: self.anchor.pos,
                        start_hi: site.pos,
                        end_lo: site.pos,
                        end_hi: site.pos,
                        run_len: 1,
                        opposites: 0,
                        // Opening always seeds one homozygous site
                        hom_sites: 1,
                        het_sites: 0,
                        tot: 1,
                    });
                }

                // Track the last site known to be outside any region
                let new_chrom = self
                    .prev
                    .as_ref()
                    .map_or(true, |(chrom, _)| *chrom != site.chrom);
                if site.call == SiteCall::AntiUpd || new_chrom {
                    self.anchor = Anchor {
                        chrom: site.chrom.clone(),
                        pos: site.pos,
                    };
                }
            }
            Some(mut region) => {
                if site.call == SiteCall::AntiUpd || site.chrom != region.chrom {
                    // Anti-UPD site or chromosome boundary closes the region
                    if site.call == SiteCall::AntiUpd {
                        region.end_hi = site.pos - 1;
                    } else if let Some((_, prev_pos)) = self.prev.as_ref() {
                        region.end_hi = *prev_pos;
                    }
                    closed = Some(region);
                    self.anchor = Anchor {
                        chrom: site.chrom.clone(),
                        pos: site.pos,
                    };
                } else {
                    if site.call == region.origin.call() {
                        region.end_lo = site.pos;
                        region.run_len += 1;
                    }
                    if site.call == SiteCall::PbHomozygous {
                        region.hom_sites += 1;
                    }
                    if site.call == SiteCall::PbHeterozygous {
                        region.het_sites += 1;
                    }
                    // Opposite parental origin inside an open region;
                    // counted but does not close or extend
                    if site.call == region.origin.opposite().call() {
                        region.opposites += 1;
                    }
                    region.tot += 1;
                    self.current = Some(region);
                }
            }
        }

        self.prev = Some((site.chrom.clone(), site.pos));
        closed
    }

    /// Flush a trailing open region after the site stream ends
    pub fn finish(mut self) -> Option<PutativeRegion> {
        self.current.take()
    }
}

/// Collect all regions from an ordered site sequence
pub fn call_regions<I>(sites: I) -> Vec<PutativeRegion>
where
    I: IntoIterator<Item = SiteRecord>,
{
    let mut caller = RegionCaller::new();
    let mut regions = Vec::new();
    for site in sites {
        if let Some(region) = caller.push(&site) {
            regions.push(region);
        }
    }
    if let Some(region) = caller.finish() {
        regions.push(region);
    }
    regions
}
