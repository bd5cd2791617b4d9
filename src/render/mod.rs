//! Rendering collaborator port.
//!
//! The pipeline hands a finalized [`RenderInput`] to a [`Renderer`] by
//! value; the model is never touched by the pipeline again. Template
//! engines live behind this trait. The crate ships [`JsonRenderer`], which
//! writes the resolved model as JSON.

mod json;
mod tags;

pub use json::JsonRenderer;
pub use tags::{column_tag, relationship_tags, struct_tags, StructTag, DEFAULT_TAG};

use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::alias::ResolvedAliases;
use crate::casing::TagCasing;
use crate::config::GeneratorConfig;
use crate::schema::SchemaModel;

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("renderer '{renderer}' failed: {message}")]
    Failed { renderer: String, message: String },
}

/// An opaque template handed through to the renderer, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSource {
    Path(PathBuf),
    Inline { name: String, body: String },
}

/// Generator options the renderer needs but the resolver phases ignore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub tags: Vec<String>,
    pub tag_casing: TagCasing,
    pub relation_tag: String,
    pub tag_ignore: Vec<String>,
    pub generator: String,
    pub no_factory: bool,
    pub no_tests: bool,
    pub wipe: bool,
}

impl RenderContext {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            tags: config.tags.clone(),
            tag_casing: config.struct_tag_casing,
            relation_tag: config.relation_tag.clone(),
            tag_ignore: config.tag_ignore.clone(),
            generator: config.generator.clone(),
            no_factory: config.no_factory,
            no_tests: config.no_tests,
            wipe: config.wipe,
        }
    }

    pub fn is_ignored(&self, column: &str) -> bool {
        self.tag_ignore.iter().any(|c| c == column)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

/// Everything a renderer receives.
#[derive(Debug, Clone, Serialize)]
pub struct RenderInput {
    pub model: SchemaModel,
    pub aliases: ResolvedAliases,
    pub templates: Vec<TemplateSource>,
    pub context: RenderContext,
}

/// A template engine or other output backend.
pub trait Renderer {
    fn name(&self) -> &str;

    /// Consume the finalized model.
    fn render(&mut self, input: RenderInput) -> RenderResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&mut self, input: RenderInput) -> RenderResult<()> {
        (**self).render(input)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&mut self, input: RenderInput) -> RenderResult<()> {
        (**self).render(input)
    }
}
