// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Protein-ligand complex browsing core.
//!
//! Plasview is the orchestration layer of a complex browser: it indexes
//! a curated dataset of protein-ligand complexes, owns the lifecycle of
//! a persistent rendering surface, and drives structure loads, ligand
//! representations, and ligand-centered camera framing for whichever
//! complex the user selects. Rendering itself is delegated to an
//! external engine behind the [`stage`] trait boundary.
//!
//! # Key entry points
//!
//! - [`browser::ComplexBrowser`] - the mounted-view facade a host UI
//!   drives with discrete events
//! - [`dataset::DatasetIndex`] - parsed dataset records and the derived
//!   identifier list
//! - [`pipeline::LoadPipeline`] - the load state machine behind every
//!   structure (re)load
//! - [`options::ViewerOptions`] - runtime configuration with TOML
//!   preset support
//!
//! # Architecture
//!
//! All work is event-driven on the host's single dispatch context. A
//! selection event flows through the [`selection`] state machine, which
//! hands the [`pipeline`] an identifier to load; the pipeline consults
//! the [`dataset`] index for metadata and mutates the one
//! [`session::ViewportSession`] in place (create once, clear before
//! every reload), finishing with the [`camera`] framing pass. Stale
//! runs superseded by a newer selection are discarded on completion
//! rather than published.

pub mod browser;
pub mod camera;
pub mod dataset;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod selection;
pub mod session;
pub mod source;
pub mod stage;
