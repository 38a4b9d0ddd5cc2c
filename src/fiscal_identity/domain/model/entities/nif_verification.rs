use crate::fiscal_identity::domain::model::enums::{
    nif_verdict::NifVerdict, tax_identification_number_error::TaxIdentificationNumberError,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NifVerification {
    candidate: String,
    verdict: NifVerdict,
}

impl NifVerification {
    pub fn new(candidate: String, verdict: NifVerdict) -> Self {
        Self { candidate, verdict }
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn verdict(&self) -> NifVerdict {
        self.verdict
    }

    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    /// The message a form shows next to the field, if any.
    pub fn rejection(&self) -> Option<TaxIdentificationNumberError> {
        TaxIdentificationNumberError::from_verdict(self.verdict)
    }
}
