//! # smpl-tools
//!
//! Offline build-time tools for the smpl interpreter project:
//!
//! - the **example extractor** ([`extract`]) scans the annotated lesson
//!   corpus and writes every `@code` region to a numbered fixture file, and
//! - the **prototype collector** ([`prototypes`]) gathers `//G ` declaration
//!   lines from the interpreter modules into one generated source bundle.
//!
//! Both tools are single linear passes over their inputs; the cores are pure
//! and consume documents through the [`corpus`] abstractions so they can be
//! tested without touching the filesystem.

pub mod corpus;
pub mod extract;
pub mod prototypes;
