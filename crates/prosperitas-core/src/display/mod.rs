//! Display formatting functions and result types.
//!
//! Domain models implement `Display` directly; collections and operation
//! results get newtype wrappers so the same data can be formatted per
//! context. Everything renders as markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (Module, Lesson)│───▶│ (ModuleList,    │───▶│    Output       │
//! │                 │    │  GrowthTable)   │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: library and favorites lists
//! - [`dashboard`]: dashboard summary and lesson page
//! - [`simulation`]: growth table, summary and currency formatting
//! - [`results`]: completion and favorite outcomes
//! - [`datetime`]: timestamp formatting
//! - [`models`]: `Display` for domain models

pub mod collections;
pub mod dashboard;
pub mod datetime;
pub mod models;
pub mod results;
pub mod simulation;

pub use collections::{LessonRefs, ModuleList};
pub use dashboard::LessonPage;
pub use datetime::LocalDateTime;
pub use results::{CompletionResult, FavoriteResult};
pub use simulation::{Currency, GrowthTable};
