//! Command-line argument wrappers and command handlers
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types, so the core stays free of CLI framework concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → ProgressStore / simulator
//! ```
//!
//! [`Cli`] owns the store, the content provider and the renderer, and turns
//! each command into rendered markdown.

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use prosperitas_core::{
    content::ContentProvider,
    display::{
        CompletionResult, Currency, FavoriteResult, GrowthTable, LessonPage, LessonRefs,
        LocalDateTime, ModuleList,
    },
    params::{LessonId, ListLibrary, ResetProgress, SimulateGrowth},
    GrowthSummary, LibraryFilter, ModuleCategory, ProgressStore,
};

use crate::renderer::TerminalRenderer;

/// Browse the module library
///
/// Lists every module with its level, category and lesson states. Narrow the
/// list by category, by a search term matched against module and lesson
/// titles, or both.
#[derive(Args)]
pub struct ListLibraryArgs {
    #[arg(short, long, help = "Only show modules of this category")]
    pub category: Option<CategoryArg>,
    #[arg(
        short,
        long,
        help = "Case-insensitive text matched against module and lesson titles"
    )]
    pub search: Option<String>,
}

impl From<ListLibraryArgs> for ListLibrary {
    fn from(val: ListLibraryArgs) -> Self {
        ListLibrary {
            category: val.category.map(Into::into),
            search: val.search,
        }
    }
}

/// Address a lesson by id
#[derive(Args)]
pub struct LessonIdArgs {
    #[arg(help = "Lesson identifier, e.g. m1-l1")]
    pub id: String,
}

impl From<LessonIdArgs> for LessonId {
    fn from(val: LessonIdArgs) -> Self {
        LessonId { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum LessonCommands {
    /// Open an unlocked lesson and read its content
    #[command(alias = "s")]
    Show(LessonIdArgs),
    /// Mark a lesson as completed, unlocking the next one
    #[command(alias = "c")]
    Complete(LessonIdArgs),
    /// Add a lesson to favorites, or remove it
    #[command(alias = "f")]
    Favorite(LessonIdArgs),
}

/// Project compound growth of savings
///
/// Contributions are added at the start of every month and interest is
/// compounded monthly at one twelfth of the annual rate. Negative amounts are
/// treated as zero and the horizon is limited to 1 to 50 years.
#[derive(Args)]
pub struct SimulateArgs {
    #[arg(
        long,
        default_value_t = SimulateGrowth::default().initial_deposit,
        allow_hyphen_values = true,
        help = "Amount invested at the start"
    )]
    pub initial: f64,
    #[arg(
        long,
        default_value_t = SimulateGrowth::default().monthly_contribution,
        allow_hyphen_values = true,
        help = "Amount added every month"
    )]
    pub monthly: f64,
    #[arg(
        long,
        default_value_t = SimulateGrowth::default().annual_rate_percent,
        allow_hyphen_values = true,
        help = "Annual interest rate in percent"
    )]
    pub rate: f64,
    #[arg(
        long,
        default_value_t = SimulateGrowth::default().years,
        help = "Number of years to project"
    )]
    pub years: u32,
}

impl From<SimulateArgs> for SimulateGrowth {
    fn from(val: SimulateArgs) -> Self {
        SimulateGrowth {
            initial_deposit: val.initial,
            monthly_contribution: val.monthly,
            annual_rate_percent: val.rate,
            years: val.years,
        }
    }
}

/// Wipe all progress and start over
///
/// Restores the starting catalog, clearing completed lessons, favorites and
/// points. Nothing happens unless --confirm is given.
#[derive(Args)]
pub struct ResetArgs {
    #[arg(long, help = "Confirm that all progress should be erased")]
    pub confirm: bool,
}

impl From<ResetArgs> for ResetProgress {
    fn from(val: ResetArgs) -> Self {
        ResetProgress {
            confirmed: val.confirm,
        }
    }
}

/// Command-line representation of module categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Mindset,
    Finance,
    Economy,
    Investment,
    Business,
    Math,
}

impl From<CategoryArg> for ModuleCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::Mindset => ModuleCategory::Mindset,
            CategoryArg::Finance => ModuleCategory::Finance,
            CategoryArg::Economy => ModuleCategory::Economy,
            CategoryArg::Investment => ModuleCategory::Investment,
            CategoryArg::Business => ModuleCategory::Business,
            CategoryArg::Math => ModuleCategory::Math,
        }
    }
}

/// Command handlers over a loaded store.
pub struct Cli {
    store: ProgressStore,
    content: Box<dyn ContentProvider>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        store: ProgressStore,
        content: Box<dyn ContentProvider>,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            store,
            content,
            renderer,
        }
    }

    pub async fn dashboard(&self) -> Result<()> {
        let quote = self.content.daily_quote().await;

        let mut output = self.store.dashboard().to_string();
        output.push_str(&format!("\n> {}\n", quote.trim()));
        if let Some(saved) = self.store.last_saved() {
            output.push_str(&format!("\nLast saved: {}\n", LocalDateTime(&saved)));
        }
        self.renderer.render(&output)
    }

    pub fn library(&self, params: &ListLibrary) -> Result<()> {
        let filter = LibraryFilter::from(params);
        let modules = self.store.library(&filter);
        debug!("Library filter matched {} modules", modules.len());
        self.renderer.render(&ModuleList(modules).to_string())
    }

    pub async fn handle_lesson_command(&mut self, command: LessonCommands) -> Result<()> {
        match command {
            LessonCommands::Show(args) => self.show_lesson(&args.into()).await,
            LessonCommands::Complete(args) => self.complete_lesson(&args.into()),
            LessonCommands::Favorite(args) => self.toggle_favorite(&args.into()),
        }
    }

    async fn show_lesson(&self, params: &LessonId) -> Result<()> {
        let Some((module, lesson)) = self.store.lesson(&params.id) else {
            bail!("Lesson {} not found", params.id);
        };
        if !lesson.is_unlocked {
            bail!(
                "Lesson {} is locked. Complete the previous lesson to unlock it.",
                params.id
            );
        }

        let content = self
            .content
            .lesson_content(&lesson.title, &module.title)
            .await;
        let page = LessonPage {
            module,
            lesson,
            content,
            is_favorite: self.store.progress().is_favorite(&lesson.id),
            next: self.store.catalog().next_in_module(&lesson.id),
        };
        self.renderer.render(&page.to_string())
    }

    fn complete_lesson(&mut self, params: &LessonId) -> Result<()> {
        match self.store.lesson(&params.id) {
            None => bail!("Lesson {} not found", params.id),
            Some((_, lesson)) if !lesson.is_unlocked => bail!(
                "Lesson {} is locked. Complete the previous lesson to unlock it.",
                params.id
            ),
            Some(_) => {}
        }

        let outcome = self.store.complete_lesson(&params.id);
        let result = CompletionResult {
            lesson_id: &params.id,
            outcome,
            total_points: self.store.progress().total_points,
        };
        self.renderer.render(&result.to_string())
    }

    fn toggle_favorite(&mut self, params: &LessonId) -> Result<()> {
        if self.store.lesson(&params.id).is_none() {
            bail!("Lesson {} not found", params.id);
        }

        let is_favorite = self.store.toggle_favorite(&params.id);
        let result = FavoriteResult {
            lesson_id: &params.id,
            is_favorite,
        };
        self.renderer.render(&result.to_string())
    }

    pub fn favorites(&self) -> Result<()> {
        let favorites = LessonRefs(self.store.favorites());
        self.renderer.render(&favorites.to_string())
    }

    pub fn simulate(&self, params: SimulateGrowth) -> Result<()> {
        let input = params.clamped();
        let series = input.run();

        let mut output = String::from("# Growth simulation\n\n");
        output.push_str(&format!(
            "- Initial deposit: {}\n- Monthly contribution: {}\n- Annual rate: {}%\n\n",
            Currency(input.initial_deposit.round() as i64),
            Currency(input.monthly_contribution.round() as i64),
            input.annual_rate_percent
        ));
        output.push_str(&GrowthTable(&series).to_string());
        if let Some(summary) = GrowthSummary::from_series(&series) {
            output.push('\n');
            output.push_str(&summary.to_string());
        }
        self.renderer.render(&output)
    }

    pub async fn quote(&self) -> Result<()> {
        let quote = self.content.daily_quote().await;
        self.renderer.render(&format!("> {}\n", quote.trim()))
    }

    pub fn reset(&mut self, params: &ResetProgress) -> Result<()> {
        if !params.confirmed {
            bail!("Refusing to erase progress without --confirm");
        }
        self.store.reset();
        self.renderer
            .render("Progress erased. The library is back to its starting state.\n")
    }
}
