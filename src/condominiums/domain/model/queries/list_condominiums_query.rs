use crate::shared::domain::model::value_objects::page_window::PageWindow;

/// `search` matches name or city case-insensitively, or any part of the NIF.
#[derive(Clone, Debug, Default)]
pub struct ListCondominiumsQuery {
    search: Option<String>,
    page: PageWindow,
}

impl ListCondominiumsQuery {
    pub fn new(search: Option<String>, limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            search: search
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
            page: PageWindow::new(limit, offset),
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn page(&self) -> PageWindow {
        self.page
    }
}
