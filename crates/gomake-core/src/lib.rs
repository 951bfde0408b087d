//! gomake Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gomake
//! Go project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            gomake-cli (CLI)             │
//! │   builds GenerationConfig, reports      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ ProjectGenerator → Structure / ArchFiles│
//! │              / Auxiliary                │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Filesystem, TemplateStore, VersionCtrl  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gomake-adapters (Infrastructure)    │
//! │ TeraTemplateStore, LocalFilesystem, Git │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gomake_core::prelude::*;
//!
//! let config = GenerationConfig::builder("shopcart")
//!     .architecture("hexagonal")
//!     .target_dir("./out")
//!     .build()?;
//!
//! let generator = ProjectGenerator::new(config, store, filesystem, vcs)?;
//! let report = generator.generate()?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationPhase, GenerationReport, ProjectGenerator,
        ports::{Filesystem, TemplateStore, VersionControl},
    };
    pub use crate::domain::{
        ArchData, Architecture, ArchitectureDescriptor, DomainValidator, GenerationConfig,
        License, RenderContext,
    };
    pub use crate::error::{ErrorCategory, GomakeError, GomakeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
