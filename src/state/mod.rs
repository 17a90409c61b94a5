//! State management module
//!
//! This module contains the core data structures for the application:
//! - ProjectDraft: the in-progress project assembled by the creation dialog
//! - Milestone: a dated step owned by a draft
//! - ProjectStatus / ProjectPriority: fixed single-choice enumerations

mod draft;

pub use draft::*;
