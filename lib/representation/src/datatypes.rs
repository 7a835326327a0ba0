use crate::constants::{XSD_ENTITY, XSD_ID, XSD_IDREF};
use oxrdf::vocab::xsd;
use oxrdf::NamedNodeRef;
use std::fmt::{Display, Formatter};

/// The semantic category a literal is evaluated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralCategory {
    String,
    LangString,
    Boolean,
    Integer,
    Decimal,
    Float,
    Double,
    DateTime,
    Other,
}

impl LiteralCategory {
    pub fn numeric_type(&self) -> Option<NumericType> {
        match self {
            LiteralCategory::Integer => Some(NumericType::Integer),
            LiteralCategory::Decimal => Some(NumericType::Decimal),
            LiteralCategory::Float => Some(NumericType::Float),
            LiteralCategory::Double => Some(NumericType::Double),
            _ => None,
        }
    }
}

impl Display for LiteralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LiteralCategory::String => "string",
            LiteralCategory::LangString => "langString",
            LiteralCategory::Boolean => "boolean",
            LiteralCategory::Integer => "integer",
            LiteralCategory::Decimal => "decimal",
            LiteralCategory::Float => "float",
            LiteralCategory::Double => "double",
            LiteralCategory::DateTime => "dateTime",
            LiteralCategory::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// Numeric categories in promotion order: integer < decimal < float < double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericType {
    Integer,
    Decimal,
    Float,
    Double,
}

impl NumericType {
    /// The common type two numeric operands are promoted to.
    pub fn promote(self, other: NumericType) -> NumericType {
        std::cmp::max(self, other)
    }

    pub fn datatype(&self) -> NamedNodeRef<'static> {
        match self {
            NumericType::Integer => xsd::INTEGER,
            NumericType::Decimal => xsd::DECIMAL,
            NumericType::Float => xsd::FLOAT,
            NumericType::Double => xsd::DOUBLE,
        }
    }
}

/// Classifies a literal from its raw datatype IRI and language tag.
///
/// A non-empty language tag wins over any datatype. An absent or empty datatype
/// IRI means a simple literal.
pub fn classify_literal(datatype: Option<&str>, language: Option<&str>) -> LiteralCategory {
    if language.is_some_and(|x| !x.is_empty()) {
        return LiteralCategory::LangString;
    }
    match datatype {
        None => LiteralCategory::String,
        Some("") => LiteralCategory::String,
        Some(dt) => classify_datatype(NamedNodeRef::new_unchecked(dt)),
    }
}

pub fn classify_datatype(datatype: NamedNodeRef) -> LiteralCategory {
    match datatype {
        xsd::STRING => LiteralCategory::String,
        xsd::BOOLEAN => LiteralCategory::Boolean,
        xsd::INTEGER
        | xsd::NON_POSITIVE_INTEGER
        | xsd::NEGATIVE_INTEGER
        | xsd::LONG
        | xsd::INT
        | xsd::SHORT
        | xsd::BYTE
        | xsd::NON_NEGATIVE_INTEGER
        | xsd::POSITIVE_INTEGER
        | xsd::UNSIGNED_LONG
        | xsd::UNSIGNED_INT
        | xsd::UNSIGNED_SHORT
        | xsd::UNSIGNED_BYTE => LiteralCategory::Integer,
        xsd::DECIMAL => LiteralCategory::Decimal,
        xsd::FLOAT => LiteralCategory::Float,
        xsd::DOUBLE => LiteralCategory::Double,
        xsd::DATE_TIME | xsd::DATE_TIME_STAMP => LiteralCategory::DateTime,
        _ => LiteralCategory::Other,
    }
}

/// Datatypes older consumers read as plain strings tagged with the alias IRI.
pub fn is_legacy_string_alias(datatype: NamedNodeRef) -> bool {
    matches!(
        datatype,
        xsd::STRING
            | xsd::ANY_URI
            | xsd::NORMALIZED_STRING
            | xsd::TOKEN
            | xsd::LANGUAGE
            | xsd::NMTOKEN
            | xsd::NAME
    ) || datatype == XSD_ENTITY
        || datatype == XSD_ID
        || datatype == XSD_IDREF
}
