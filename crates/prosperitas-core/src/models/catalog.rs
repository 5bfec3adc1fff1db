//! Ordered module catalog with an id index and the unlock-progression rule.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::{Lesson, Module};
use crate::error::{Result, TrackerError};

/// Address of a lesson inside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LessonPosition {
    pub module: usize,
    pub lesson: usize,
}

/// Catalog-side effect of completing a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEffect {
    /// Where the completed lesson lives
    pub position: LessonPosition,

    /// Lesson newly unlocked by the progression rule, if any
    pub unlocked: Option<String>,
}

/// Ordered sequence of modules.
///
/// Module order chains unlocking across modules; lesson order chains it
/// within a module. Lessons are addressed by `(module, lesson)` index pairs
/// resolved through an id index built once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Module>", into = "Vec<Module>")]
pub struct Catalog {
    modules: Vec<Module>,
    index: HashMap<String, LessonPosition>,
}

impl Catalog {
    /// Builds a catalog, validating its structural invariants.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` when the catalog is empty, a
    /// module has no lessons, an id is duplicated, or a lesson is completed
    /// without being unlocked.
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        if modules.is_empty() {
            return Err(TrackerError::invalid_input("modules", "catalog is empty"));
        }

        let mut module_ids = BTreeSet::new();
        let mut index = HashMap::new();
        for (m, module) in modules.iter().enumerate() {
            if !module_ids.insert(module.id.as_str()) {
                return Err(TrackerError::invalid_input(
                    "modules",
                    format!("duplicate module id '{}'", module.id),
                ));
            }
            if module.lessons.is_empty() {
                return Err(TrackerError::invalid_input(
                    "lessons",
                    format!("module '{}' has no lessons", module.id),
                ));
            }
            for (l, lesson) in module.lessons.iter().enumerate() {
                if lesson.is_completed && !lesson.is_unlocked {
                    return Err(TrackerError::invalid_input(
                        "lessons",
                        format!("lesson '{}' is completed but locked", lesson.id),
                    ));
                }
                let position = LessonPosition { module: m, lesson: l };
                if index.insert(lesson.id.clone(), position).is_some() {
                    return Err(TrackerError::invalid_input(
                        "lessons",
                        format!("duplicate lesson id '{}'", lesson.id),
                    ));
                }
            }
        }

        Ok(Self { modules, index })
    }

    /// Modules in catalog order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Resolves a lesson id to its position.
    pub fn locate(&self, lesson_id: &str) -> Option<LessonPosition> {
        self.index.get(lesson_id).copied()
    }

    /// Looks up a lesson by id.
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.locate(lesson_id).map(|p| self.at(p))
    }

    /// Looks up a lesson together with its owning module.
    pub fn lesson_with_module(&self, lesson_id: &str) -> Option<(&Module, &Lesson)> {
        self.locate(lesson_id).map(|p| (&self.modules[p.module], self.at(p)))
    }

    /// All lessons in unlock order, paired with their module.
    pub fn lessons(&self) -> impl Iterator<Item = (&Module, &Lesson)> + '_ {
        self.modules
            .iter()
            .flat_map(|m| m.lessons.iter().map(move |l| (m, l)))
    }

    /// Total number of lessons across all modules.
    pub fn total_lessons(&self) -> usize {
        self.index.len()
    }

    /// Ids of every unlocked lesson.
    pub fn unlocked_ids(&self) -> BTreeSet<String> {
        self.lessons()
            .filter(|(_, l)| l.is_unlocked)
            .map(|(_, l)| l.id.clone())
            .collect()
    }

    /// Next lesson of the same module, if the given lesson is not its last.
    pub fn next_in_module(&self, lesson_id: &str) -> Option<&Lesson> {
        let p = self.locate(lesson_id)?;
        self.modules[p.module].lessons.get(p.lesson + 1)
    }

    /// The lesson unlocked by completing the lesson at `position`.
    ///
    /// Within a module this is the following lesson; after a module's last
    /// lesson it is the first lesson of the next module; after the last
    /// lesson of the last module there is none.
    pub fn successor(&self, position: LessonPosition) -> Option<LessonPosition> {
        let module = self.modules.get(position.module)?;
        if position.lesson + 1 < module.lessons.len() {
            Some(LessonPosition {
                module: position.module,
                lesson: position.lesson + 1,
            })
        } else if position.module + 1 < self.modules.len() {
            Some(LessonPosition {
                module: position.module + 1,
                lesson: 0,
            })
        } else {
            None
        }
    }

    /// Marks a lesson completed and applies the unlock-progression rule.
    ///
    /// Returns `None` when the id is not in the catalog; nothing changes in
    /// that case.
    pub(crate) fn complete(&mut self, lesson_id: &str) -> Option<CompletionEffect> {
        let position = self.locate(lesson_id)?;
        self.at_mut(position).complete();

        let unlocked = self.successor(position).and_then(|next| {
            let lesson = self.at_mut(next);
            lesson.unlock().then(|| lesson.id.clone())
        });

        Some(CompletionEffect { position, unlocked })
    }

    fn at(&self, p: LessonPosition) -> &Lesson {
        &self.modules[p.module].lessons[p.lesson]
    }

    fn at_mut(&mut self, p: LessonPosition) -> &mut Lesson {
        &mut self.modules[p.module].lessons[p.lesson]
    }
}

impl TryFrom<Vec<Module>> for Catalog {
    type Error = TrackerError;

    fn try_from(modules: Vec<Module>) -> Result<Self> {
        Self::new(modules)
    }
}

impl From<Catalog> for Vec<Module> {
    fn from(catalog: Catalog) -> Self {
        catalog.modules
    }
}
