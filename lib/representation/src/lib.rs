pub mod constants;
pub mod datatypes;
pub mod errors;
pub mod expression_term;
pub mod rdf_term;
pub mod subtypes;
mod xsd_datetime;

pub use datatypes::{LiteralCategory, NumericType};
pub use expression_term::{is_non_lexical_literal, ExpressionTerm, ExpressionTermType};
pub use rdf_term::{RdfLiteral, RdfTerm};
pub use subtypes::{CachedSupertypeProvider, SupertypeProvider, XsdSupertypeProvider};
pub use xsd_datetime::*;
