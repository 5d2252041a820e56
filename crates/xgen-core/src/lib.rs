//! Xgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for generating
//! Xcode playgrounds and workspaces, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             xgen-cli (CLI)              │
//! │   (Builds entities, calls generate())   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Entities           │
//! │  (Playground, Workspace, Template)      │
//! │      Implement `Generatable`            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, Decoder)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     xgen-adapters (Infrastructure)      │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  PlistDecoder)                          │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Platform, manifests, path rules)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use xgen_core::prelude::*;
//!
//! // 1. Describe the workspace
//! let mut workspace = Workspace::new("Demo");
//! workspace.add_project("App.xcodeproj");
//! let playground = workspace.add_new_playground("Scratch");
//! playground.borrow_mut().set_platform(Platform::MacOs);
//!
//! // 2. Generate through injected adapters
//! let ctx = GenerationContext::new(Box::new(filesystem), Box::new(decoder));
//! workspace.generate(&ctx)?;
//! ```

// Domain layer (pure, no I/O)
pub mod domain;

// Application layer (entities and ports)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Generatable, GenerationContext, Playground, PlaygroundOptions, SELF_REFERENCE, Source,
        Template, Workspace,
        ports::{DescriptorDecoder, Filesystem},
    };
    pub use crate::domain::{Platform, TemplateDescriptor};
    pub use crate::error::{GenerationError, XgenError, XgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
