//! Self-contained VCF parsing
//!
//! Header grammar, per-record field decoding, per-sample genotype and
//! quality extraction, and population-frequency annotation lookup. No
//! external variant-parsing library is used.

pub mod freq;
pub mod header;
pub mod record;
pub mod reader;

pub use freq::population_frequency;
pub use header::{InfoRecord, InfoType, VcfHeader};
pub use reader::VcfReader;
pub use record::{InfoValue, Variant};
