use thiserror::Error;

use crate::fiscal_identity::domain::model::enums::nif_verdict::NifVerdict;

/// User-facing rejection reasons. A disallowed leading digit is reported
/// as a checksum failure; only [`NifVerdict`] keeps the two apart.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TaxIdentificationNumberError {
    #[error("must be 9 digits")]
    InvalidFormat,

    #[error("invalid identifier checksum")]
    InvalidChecksum,
}

impl TaxIdentificationNumberError {
    pub fn from_verdict(verdict: NifVerdict) -> Option<Self> {
        match verdict {
            NifVerdict::Valid => None,
            NifVerdict::BadFormat => Some(Self::InvalidFormat),
            NifVerdict::BadLeadingDigit | NifVerdict::BadChecksum => Some(Self::InvalidChecksum),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "nif_format",
            Self::InvalidChecksum => "nif_checksum",
        }
    }
}
