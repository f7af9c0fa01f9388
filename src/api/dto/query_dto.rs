use serde::Deserialize;

use crate::core::persistence::selection::PageDescriptor;

/// Raw event-listing parameters. `page`/`per_page` stay strings so that
/// non-numeric input falls back to the documented defaults instead of
/// failing query extraction.
#[derive(Debug, Default, Deserialize)]
pub struct EventListQuery {
    #[serde(default)]
    pub event: String,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl EventListQuery {
    pub fn page(&self) -> PageDescriptor {
        PageDescriptor::from_raw(self.page.as_deref(), self.per_page.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ControllerListQuery {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub controller_type: String,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ControllerListQuery {
    pub fn page(&self) -> PageDescriptor {
        PageDescriptor::from_raw(self.page.as_deref(), self.per_page.as_deref())
    }
}
