use std::str::FromStr;

use crate::{
    shared::domain::model::value_objects::page_window::PageWindow,
    suppliers::domain::model::enums::{
        supplier_category::SupplierCategory, supplier_domain_error::SupplierDomainError,
    },
};

/// `search` matches the name case-insensitively or any part of the NIF.
#[derive(Clone, Debug, Default)]
pub struct ListSuppliersQuery {
    search: Option<String>,
    category: Option<SupplierCategory>,
    page: PageWindow,
}

impl ListSuppliersQuery {
    pub fn new(
        search: Option<String>,
        category: Option<String>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Self, SupplierDomainError> {
        let category = category
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                SupplierCategory::from_str(&value)
                    .map_err(|_| SupplierDomainError::InvalidSupplierCategory)
            })
            .transpose()?;

        Ok(Self {
            search: search
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            category,
            page: PageWindow::new(limit, offset),
        })
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn category(&self) -> Option<SupplierCategory> {
        self.category
    }

    pub fn page(&self) -> PageWindow {
        self.page
    }
}
