//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{LessonRef, Module};

/// Newtype wrapper for displaying the filtered module library.
///
/// # Examples
///
/// ```rust
/// use prosperitas_core::{display::ModuleList, seed};
///
/// let catalog = seed::default_catalog();
/// let list = ModuleList(catalog.modules().iter().collect());
/// assert!(list.to_string().contains("## Império Próprio"));
/// ```
pub struct ModuleList<'a>(pub Vec<&'a Module>);

impl fmt::Display for ModuleList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No modules match your search.");
        }
        for (i, module) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{module}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying lessons together with their module.
pub struct LessonRefs(pub Vec<LessonRef>);

impl fmt::Display for LessonRefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No favorite lessons yet.");
        }
        for item in &self.0 {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for LessonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** `{}` · {} ({})",
            self.lesson.title,
            self.lesson.id,
            self.module_title,
            self.lesson.state()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::LibraryFilter, seed};

    #[test]
    fn test_empty_module_list() {
        assert_eq!(ModuleList(vec![]).to_string(), "No modules match your search.\n");
    }

    #[test]
    fn test_empty_favorites() {
        assert!(LessonRefs(vec![]).to_string().contains("No favorite lessons yet."));
    }

    #[test]
    fn test_filtered_list_shows_only_matches() {
        let catalog = seed::default_catalog();
        let filter = LibraryFilter {
            category: None,
            search: Some("bolsa".to_string()),
        };
        let list = ModuleList(catalog.modules().iter().filter(|m| filter.matches(m)).collect());

        assert_eq!(list.0.len(), 1);
        let output = list.to_string();
        assert!(output.contains("O Jogo dos Grandes"));
        assert!(!output.contains("Império Próprio"));
    }
}
