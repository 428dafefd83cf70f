//! Genotype codec
//!
//! Maps raw per-sample GT strings onto the four-way genotype code used by
//! the site classifier.

/// Ternary genotype code for one individual at one site
///
/// `Other` covers missing calls (`./.`) and any genotype outside the
/// plain biallelic set, including calls implying a third allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenotypeCode {
    HomRef,
    Het,
    HomAlt,
    Other,
}

impl GenotypeCode {
    /// Decode a raw GT string
    ///
    /// Only the three unphased biallelic forms are recognized; everything
    /// else is `Other`.
    pub fn decode(gt: &str) -> Self {
        match gt {
            "0/0" => GenotypeCode::HomRef,
            "0/1" => GenotypeCode::Het,
            "1/1" => GenotypeCode::HomAlt,
            _ => GenotypeCode::Other,
        }
    }

    /// The opposite homozygous code, if this code is homozygous
    pub fn opposite(self) -> Option<GenotypeCode> {
        match self {
            GenotypeCode::HomRef => Some(GenotypeCode::HomAlt),
            GenotypeCode::HomAlt => Some(GenotypeCode::HomRef),
            _ => None,
        }
    }

    /// True for either homozygous code
    pub fn is_homozygous(self) -> bool {
        matches!(self, GenotypeCode::HomRef | GenotypeCode::HomAlt)
    }
}
