//! # Schemagen
//!
//! Schema-driven code generation core: reads a relational schema through a
//! driver, resolves names, column types and relationships according to a
//! generator configuration, and hands the finalized model to a renderer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Driver (storage engine catalog)             │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [assemble + configured constraints]
//! ┌─────────────────────────────────────────────────────────┐
//! │                     SchemaModel                          │
//! │          (tables, columns, constraints)                  │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [aliases: inflection + casing]
//!                          ▼ [type replacements: ordered rule fold]
//!                          ▼ [relationships: FKs, explicit, back-refs]
//! ┌─────────────────────────────────────────────────────────┐
//! │           RenderInput (model + aliases + templates)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [renderer]
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Generated output                        │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod alias;
pub mod casing;
pub mod config;
pub mod constraint;
pub mod driver;
pub mod error;
pub mod hash;
pub mod inflection;
pub mod pipeline;
pub mod relationship;
pub mod render;
pub mod replace;
pub mod schema;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::alias::{AliasResolver, Aliases, ResolvedAliases, TableAlias};
    pub use crate::casing::{NameCasing, TagCasing};
    pub use crate::config::{ConfigError, GeneratorConfig};
    pub use crate::driver::{ColumnFilter, Driver, DriverError, SnapshotDriver};
    pub use crate::error::{GenError, GenResult, Phase, ResolutionError};
    pub use crate::inflection::{InflectionTables, Inflector};
    pub use crate::pipeline::{Pipeline, RunSummary};
    pub use crate::relationship::{RelationshipDecl, RelationshipResolver};
    pub use crate::render::{JsonRenderer, RenderInput, Renderer, TemplateSource};
    pub use crate::replace::{ColumnPattern, ReplaceRule};
    pub use crate::schema::{Cardinality, Column, Relationship, SchemaModel, Table};
}

// Also export at crate root for convenience
pub use config::GeneratorConfig;
pub use error::{GenError, GenResult, Phase};
pub use pipeline::Pipeline;
