//! EdgeWizard - photo to line-art renderer.
//!
//! Wraps the `edge-ink` pipeline with decoding, PNG encoding, configuration
//! and batch processing. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
