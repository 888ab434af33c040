//! Output types.

mod stylized;

pub use stylized::StylizedImage;
