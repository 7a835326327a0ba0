pub mod errors;
pub mod options;
pub mod parsing;
pub mod strategy;
mod transformer;

pub use errors::TransformError;
pub use options::{TransformMode, TransformerOptions};
pub use transformer::TermTransformer;
