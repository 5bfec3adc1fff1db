//! Dashboard and lesson page formatting.

use std::fmt;

use crate::models::{DashboardSummary, Lesson, Module};

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Progress: {}% ({}/{} lessons)",
            self.completion_percentage, self.completed_lessons, self.total_lessons
        )?;
        writeln!(f, "- Points: {}", self.total_points)?;
        writeln!(f, "- Level: {}", self.level)?;

        writeln!(f, "\n## Continue")?;
        writeln!(f)?;
        match &self.next_lesson {
            Some(next) => {
                writeln!(f, "**{}** · {}", next.lesson.title, next.module_title)?;
                writeln!(
                    f,
                    "{} ({} min) `{}`",
                    next.lesson.description, next.lesson.estimated_minutes, next.lesson.id
                )?;
            }
            None => writeln!(f, "All available lessons are completed.")?,
        }

        if self.recommended.len() > 1 {
            writeln!(f, "\n## Recommended")?;
            writeln!(f)?;
            for item in &self.recommended {
                write!(f, "{item}")?;
            }
        }
        Ok(())
    }
}

/// A lesson opened for reading, with generated content.
pub struct LessonPage<'a> {
    pub module: &'a Module,
    pub lesson: &'a Lesson,
    pub content: String,
    pub is_favorite: bool,
    pub next: Option<&'a Lesson>,
}

impl fmt::Display for LessonPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.lesson.title)?;
        writeln!(f)?;
        writeln!(f, "- Module: {}", self.module.title)?;
        writeln!(f, "- Status: {}", self.lesson.state())?;
        writeln!(f, "- Reading time: {} min", self.lesson.estimated_minutes)?;
        if self.is_favorite {
            writeln!(f, "- ★ Favorite")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.content.trim_end())?;
        writeln!(f)?;
        writeln!(
            f,
            "Module progress: {:.0}% ({}/{})",
            self.module.completion_ratio() * 100.0,
            self.module.completed_count(),
            self.module.lessons.len()
        )?;
        match self.next {
            Some(next) => writeln!(f, "Next lesson: {} `{}`", next.title, next.id),
            None => writeln!(f, "Last lesson of this module."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{DashboardSummary, Progress},
        seed,
    };

    #[test]
    fn test_fresh_dashboard() {
        let catalog = seed::default_catalog();
        let output = DashboardSummary::build(&catalog, &Progress::default()).to_string();

        assert!(output.contains("- Progress: 0% (0/14 lessons)"));
        assert!(output.contains("- Points: 0"));
        assert!(output.contains("- Level: 1"));
        assert!(output.contains("**Psicologia do Investidor** · O Despertar da Riqueza"));
        assert!(output.contains("## Recommended"));
    }

    #[test]
    fn test_lesson_page() {
        let catalog = seed::default_catalog();
        let (module, lesson) = catalog.lesson_with_module("m1-l1").expect("seed lesson");
        let page = LessonPage {
            module,
            lesson,
            content: "Body text\n".to_string(),
            is_favorite: true,
            next: catalog.next_in_module("m1-l1"),
        };
        let output = page.to_string();

        assert!(output.starts_with("# Psicologia do Investidor"));
        assert!(output.contains("★ Favorite"));
        assert!(output.contains("Body text"));
        assert!(output.contains("Module progress: 0% (0/3)"));
        assert!(output.contains("Next lesson: Hábitos de 1% `m1-l2`"));
    }
}
