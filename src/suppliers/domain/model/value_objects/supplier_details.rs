use std::str::FromStr;

use crate::{
    fiscal_identity::domain::model::value_objects::tax_identification_number::TaxIdentificationNumber,
    suppliers::domain::model::{
        enums::{supplier_category::SupplierCategory, supplier_domain_error::SupplierDomainError},
        value_objects::{
            email_address::EmailAddress, phone_number::PhoneNumber, supplier_name::SupplierName,
        },
    },
};

pub const MAX_ADDRESS_LENGTH: usize = 255;
pub const MAX_NOTES_LENGTH: usize = 2000;

#[derive(Clone, Debug)]
pub struct SupplierDetailsParts {
    pub name: String,
    pub nif: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: String,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// Editable fields of a supplier, validated as a whole.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplierDetails {
    name: SupplierName,
    nif: TaxIdentificationNumber,
    email: Option<EmailAddress>,
    phone: Option<PhoneNumber>,
    category: SupplierCategory,
    address: Option<String>,
    notes: Option<String>,
}

impl SupplierDetails {
    pub fn new(parts: SupplierDetailsParts) -> Result<Self, SupplierDomainError> {
        let address = non_blank(parts.address);
        if address
            .as_ref()
            .is_some_and(|value| value.chars().count() > MAX_ADDRESS_LENGTH)
        {
            return Err(SupplierDomainError::InvalidSupplierAddress);
        }

        let notes = non_blank(parts.notes);
        if notes
            .as_ref()
            .is_some_and(|value| value.chars().count() > MAX_NOTES_LENGTH)
        {
            return Err(SupplierDomainError::InvalidSupplierNotes);
        }

        Ok(Self {
            name: SupplierName::new(parts.name)?,
            nif: TaxIdentificationNumber::new(parts.nif)?,
            email: non_blank(parts.email).map(EmailAddress::new).transpose()?,
            phone: non_blank(parts.phone).map(PhoneNumber::new).transpose()?,
            category: SupplierCategory::from_str(&parts.category)
                .map_err(|_| SupplierDomainError::InvalidSupplierCategory)?,
            address,
            notes,
        })
    }

    pub fn name(&self) -> &SupplierName {
        &self.name
    }

    pub fn nif(&self) -> &TaxIdentificationNumber {
        &self.nif
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn category(&self) -> SupplierCategory {
        self.category
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
