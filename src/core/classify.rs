//! Per-site inheritance classification
//!
//! Pure function from a trio of genotype codes to one of six
//! inheritance-pattern labels.

use crate::core::genotype::GenotypeCode;

/// Inheritance-pattern label for one classified site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteCall {
    Uninformative,
    UpdMaternalOrigin,
    UpdPaternalOrigin,
    AntiUpd,
    PbHomozygous,
    PbHeterozygous,
}

impl SiteCall {
    /// BED-output name of this call
    pub fn as_str(self) -> &'static str {
        match self {
            SiteCall::Uninformative => "UNINFORMATIVE",
            SiteCall::UpdMaternalOrigin => "UPD_MATERNAL_ORIGIN",
            SiteCall::UpdPaternalOrigin => "UPD_PATERNAL_ORIGIN",
            SiteCall::AntiUpd => "ANTI_UPD",
            SiteCall::PbHomozygous => "PB_HOMOZYGOUS",
            SiteCall::PbHeterozygous => "PB_HETEROZYGOUS",
        }
    }
}

impl std::fmt::Display for SiteCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify one site from the trio's genotype codes
///
/// An `Other` code anywhere makes the site uninformative. A homozygous
/// proband with exactly one parent carrying the opposite homozygous
/// genotype points at the other parent as the double contributor. A
/// heterozygous proband with opposite-homozygous parents confirms
/// biparental inheritance (anti-UPD).
pub fn classify_site(
    proband: GenotypeCode,
    mother: GenotypeCode,
    father: GenotypeCode,
) -> SiteCall {
    use GenotypeCode::*;

    if proband == Other || mother == Other || father == Other {
        return SiteCall::Uninformative;
    }

    match proband {
        HomRef | HomAlt => {
            // opposite() is always Some for homozygous codes
            let opp = match proband {
                HomRef => HomAlt,
                _ => HomRef,
            };
            if mother == opp && father == opp {
                // Mendelian-inconsistent, carries no UPD signal
                SiteCall::Uninformative
            } else if mother == opp {
                SiteCall::UpdPaternalOrigin
            } else if father == opp {
                SiteCall::UpdMaternalOrigin
            } else {
                SiteCall::PbHomozygous
            }
        }
        Het => {
            if mother != Het && father != Het && father.opposite() == Some(mother) {
                SiteCall::AntiUpd
            } else {
                SiteCall::PbHeterozygous
            }
        }
        Other => SiteCall::Uninformative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GenotypeCode::*;

    #[test]
    fn test_other_always_uninformative() {
        for a in [HomRef, Het, HomAlt, Other] {
            for b in [HomRef, Het, HomAlt, Other] {
                assert_eq!(classify_site(Other, a, b), SiteCall::Uninformative);
                assert_eq!(classify_site(a, Other, b), SiteCall::Uninformative);
                assert_eq!(classify_site(a, b, Other), SiteCall::Uninformative);
            }
        }
    }

    #[test]
    fn test_homozygous_proband() {
        // Both parents opposite: mendelian-inconsistent
        assert_eq!(
            classify_site(HomRef, HomAlt, HomAlt),
            SiteCall::Uninformative
        );
        assert_eq!(
            classify_site(HomAlt, HomRef, HomRef),
            SiteCall::Uninformative
        );
        // Only mother opposite: paternal origin
        assert_eq!(
            classify_site(HomRef, HomAlt, Het),
            SiteCall::UpdPaternalOrigin
        );
        assert_eq!(
            classify_site(HomAlt, HomRef, HomAlt),
            SiteCall::UpdPaternalOrigin
        );
        // Only father opposite: maternal origin
        assert_eq!(
            classify_site(HomRef, Het, HomAlt),
            SiteCall::UpdMaternalOrigin
        );
        assert_eq!(
            classify_site(HomAlt, HomAlt, HomRef),
            SiteCall::UpdMaternalOrigin
        );
        // Neither parent opposite
        assert_eq!(classify_site(HomRef, HomRef, Het), SiteCall::PbHomozygous);
        assert_eq!(classify_site(HomAlt, Het, Het), SiteCall::PbHomozygous);
    }

    #[test]
    fn test_heterozygous_proband() {
        assert_eq!(classify_site(Het, HomRef, HomAlt), SiteCall::AntiUpd);
        assert_eq!(classify_site(Het, HomAlt, HomRef), SiteCall::AntiUpd);
        // Same homozygous genotype in both parents is not anti-UPD
        assert_eq!(classify_site(Het, HomRef, HomRef), SiteCall::PbHeterozygous);
        assert_eq!(classify_site(Het, Het, HomAlt), SiteCall::PbHeterozygous);
        assert_eq!(classify_site(Het, HomRef, Het), SiteCall::PbHeterozygous);
        assert_eq!(classify_site(Het, Het, Het), SiteCall::PbHeterozygous);
    }
}
