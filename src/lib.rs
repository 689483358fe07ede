// -- Lint policy ---------------------------------------------------------
// Broad groups and per-lint overrides live in the Cargo.toml [lints]
// tables; the crate root pins the non-negotiables.

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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Cluster layout and transition engine for multi-part 3D models.
//!
//! Assort classifies the parts of a loaded model by color and by shape,
//! lays each family of groups out as non-overlapping clusters, and
//! animates parts between the authored arrangement and the clustered
//! ones with frame-rate independent transitions.
//!
//! # Key entry points
//!
//! - [`engine::AssortEngine`] - the top-level facade
//! - [`scene::Scene`] - flat part storage for the loaded model
//! - [`layout::Layout`] - precomputed per-part target tables
//! - [`animation::TransitionDriver`] - the per-tick state machine
//! - [`options::Options`] - runtime tuning (layout spacing, transition
//!   timing, visibility thresholds)
//!
//! # Architecture
//!
//! Loading a model runs classification and layout synchronously: every
//! part gets a target pose and visibility flag for each of the three
//! arrangements before the first frame ticks. The transition driver
//! then only interpolates toward those precomputed targets, so a tick
//! is a single pass over the part list with no per-frame allocation.

pub mod animation;
pub mod classify;
pub mod engine;
pub mod error;
pub mod layout;
pub mod options;
pub mod scene;
pub mod util;
