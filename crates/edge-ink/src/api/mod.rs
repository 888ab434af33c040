//! Public API: [`EdgeStylizer`], [`StylizeOptions`] and [`StylizeError`].

mod builder;
mod error;
mod options;

pub use builder::EdgeStylizer;
pub use error::StylizeError;
pub use options::StylizeOptions;
