//! Library filter criteria.

use super::{Module, ModuleCategory};

/// Filter applied to the module library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    /// Only modules of this category (all categories when unset)
    pub category: Option<ModuleCategory>,

    /// Case-insensitive term matched against module and lesson titles
    pub search: Option<String>,
}

impl LibraryFilter {
    /// Whether a module passes the filter.
    pub fn matches(&self, module: &Module) -> bool {
        let category_ok = self.category.map_or(true, |c| module.category == c);
        let search_ok = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map_or(true, |term| module.matches_term(term));
        category_ok && search_ok
    }
}
