//! Core UPD calling functionality
//!
//! This module contains the genotype codec, the per-site classifier,
//! the streaming region aggregator, and the shared error and I/O layers.

pub mod classify;
mod error;
mod genotype;
pub mod io;
mod regions;

pub use classify::{classify_site, SiteCall};
pub use error::{
    HeaderParseError, HeaderResult, RecordParseError, RecordResult, Result, UpdError,
};
pub use genotype::GenotypeCode;
pub use io::{detect_compression, open_input, CompressionFormat, LineIterator, DEFAULT_BUFFER_SIZE};
pub use regions::{call_regions, PutativeRegion, RegionCaller, RegionOrigin, SiteRecord};
