//! FastUpd - High-performance UPD region calling
//!
//! A Rust reimplementation of the `upd` trio caller: identifies
//! candidate uniparental-disomy regions from a germline exome/WGS trio
//! VCF, without depending on an external variant-parsing library.
//!
//! # Features
//!
//! - Self-contained streaming VCF parser (plain, gzip or bzip2 input)
//! - Single-pass region aggregation over classified sites
//! - VEP CSQ or direct INFO population-frequency filtering
//!
//! # Example
//!
//! ```ignore
//! use fast_upd::pipeline::{InformativeSites, SiteOptions, TrioIndices};
//! use fast_upd::vcf::VcfReader;
//! use fast_upd::core::RegionCaller;
//!
//! let vcf = VcfReader::open("trio.vcf.gz".as_ref())?;
//! let trio = TrioIndices::resolve(vcf.header(), "kid", "mom", "dad")?;
//! let sites = InformativeSites::new(vcf, None, trio, SiteOptions::default());
//!
//! let mut caller = RegionCaller::new();
//! for site in sites {
//!     if let Some(region) = caller.push(&site?) {
//!         println!("{}", fast_upd::bed::format_region(&region));
//!     }
//! }
//! ```

pub mod bed;
pub mod core;
pub mod pipeline;
pub mod vcf;

// Re-export commonly used types
pub use crate::core::{
    call_regions, classify_site, GenotypeCode, PutativeRegion, RegionCaller, RegionOrigin,
    Result, SiteCall, SiteRecord, UpdError,
};
pub use pipeline::{InformativeSites, SiteOptions, TrioIndices};
pub use vcf::{VcfHeader, VcfReader};
