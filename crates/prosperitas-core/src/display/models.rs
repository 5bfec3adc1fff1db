//! Display implementations for domain models.
//!
//! All output is markdown so the terminal renderer can style it; plain mode
//! prints it as is.

use std::fmt;

use crate::models::{Lesson, LessonState, Module, ModuleCategory};

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for LessonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.with_icon())
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** `{}` ({}, {} min)",
            self.title,
            self.id,
            self.state(),
            self.estimated_minutes
        )?;
        writeln!(f, "  {}", self.description)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Level {} • {}", self.level, self.category)?;
        writeln!(
            f,
            "- Progress: {}/{} lessons",
            self.completed_count(),
            self.lessons.len()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        for lesson in &self.lessons {
            write!(f, "{lesson}")?;
        }
        Ok(())
    }
}
