//! Generation run orchestration.
//!
//! One run moves a schema through every phase in order:
//!
//! ```text
//! validate config
//!      │
//!      ▼
//! Driver::assemble() ──► merge constraints ──► aliases ──► replacements ──► relationships
//!                                                                               │
//!                                                                               ▼
//!                                                         RenderInput ──► Renderer::render()
//! ```
//!
//! Each phase runs to completion before the next starts. The first failure
//! aborts the run and nothing reaches the renderer. There are no retries.
//!
//! # Example
//!
//! ```ignore
//! use schemagen::config::GeneratorConfig;
//! use schemagen::driver::SnapshotDriver;
//! use schemagen::pipeline::Pipeline;
//! use schemagen::render::JsonRenderer;
//!
//! let driver = SnapshotDriver::from_path("schema.json".as_ref())?;
//! let config = GeneratorConfig::from_file("schemagen.toml")?;
//! let mut renderer = JsonRenderer::new(std::io::stdout());
//! Pipeline::new(config).run(&driver, &mut renderer)?;
//! ```

use tracing::{debug, info};

use crate::alias::AliasResolver;
use crate::casing::NameCasing;
use crate::config::GeneratorConfig;
use crate::constraint::merge_constraints;
use crate::driver::{check_columns, Driver};
use crate::error::{GenError, GenResult, Phase};
use crate::hash;
use crate::relationship::{RelationshipResolver, RelationshipStats};
use crate::render::{RenderContext, RenderError, RenderInput, Renderer, TemplateSource};
use crate::replace::{replace_types, ReplaceStats};

// ============================================================================
// Summary
// ============================================================================

/// What a run did, phase by phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tables: usize,
    pub columns: usize,
    /// Constraints added from configuration.
    pub constraints: usize,
    pub replacements: ReplaceStats,
    pub relationships: RelationshipStats,
    /// SHA-256 of the resolved model and aliases.
    pub fingerprint: String,
}

// ============================================================================
// Pipeline
// ============================================================================

/// Drives a generation run for one configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: GeneratorConfig,
    templates: Vec<TemplateSource>,
}

impl Pipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            templates: Vec::new(),
        }
    }

    /// Templates passed through to the renderer, in order.
    pub fn with_templates(mut self, templates: Vec<TemplateSource>) -> Self {
        self.templates = templates;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every resolver phase and return the renderer's input.
    pub fn resolve<D: Driver + ?Sized>(&self, driver: &D) -> GenResult<RenderInput> {
        self.resolve_with_summary(driver).map(|(input, _)| input)
    }

    /// Resolve the schema and hand it to `renderer`.
    pub fn run<D, R>(&self, driver: &D, renderer: &mut R) -> GenResult<RunSummary>
    where
        D: Driver + ?Sized,
        R: Renderer + ?Sized,
    {
        let (input, summary) = self.resolve_with_summary(driver)?;

        info!(renderer = renderer.name(), templates = input.templates.len(), "rendering");
        renderer.render(input)?;
        Ok(summary)
    }

    fn resolve_with_summary<D: Driver + ?Sized>(
        &self,
        driver: &D,
    ) -> GenResult<(RenderInput, RunSummary)> {
        let config = &self.config;
        let mut summary = RunSummary::default();

        config
            .validate()
            .map_err(|e| GenError::config(Phase::Validate, e))?;
        let inflector = config
            .inflector()
            .map_err(|e| GenError::config(Phase::Validate, e))?;
        let casing = NameCasing::with_initialisms(&config.initialisms);

        info!(driver = driver.name(), "assembling schema");
        let mut model = driver.assemble()?;
        check_columns(&model)?;
        summary.tables = model.tables.len();
        summary.columns = model.column_count();
        info!(tables = summary.tables, columns = summary.columns, "schema assembled");

        summary.constraints = merge_constraints(&mut model, &config.constraints)
            .map_err(|e| GenError::config(Phase::Constraints, e))?;
        debug!(added = summary.constraints, "constraints merged");

        let aliases = AliasResolver::new(&config.aliases, &inflector, &casing)
            .resolve(&model)
            .map_err(|e| GenError::config(Phase::Aliases, e))?;
        info!(tables = aliases.tables.len(), "aliases resolved");

        summary.replacements = replace_types(&mut model, &config.replacements)
            .map_err(|e| GenError::config(Phase::Replacements, e))?;
        info!(
            rules = config.replacements.len(),
            matches = summary.replacements.matches,
            changed = summary.replacements.columns_changed,
            "type replacements applied"
        );

        summary.relationships = RelationshipResolver::new(&config.relationships)
            .with_back_references(!config.no_back_referencing)
            .resolve(&mut model)
            .map_err(|e| GenError::resolution(Phase::Relationships, e))?;
        aliases
            .check_relationships(&model)
            .map_err(|e| GenError::config(Phase::Relationships, e))?;
        info!(
            derived = summary.relationships.derived,
            explicit = summary.relationships.explicit,
            synthesized = summary.relationships.synthesized,
            "relationships resolved"
        );

        let input = RenderInput {
            model,
            aliases,
            templates: self.templates.clone(),
            context: RenderContext::from_config(config),
        };
        summary.fingerprint = hash::fingerprint(&input).map_err(RenderError::from)?;
        info!(fingerprint = %summary.fingerprint, "model finalized");

        Ok((input, summary))
    }
}
