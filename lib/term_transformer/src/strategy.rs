use crate::options::TransformMode;
use crate::parsing::{
    parse_boolean, parse_date_time, parse_decimal, parse_double, parse_float, parse_integer,
};
use log::debug;
use num_bigint::BigInt;
use oxrdf::vocab::xsd;
use oxrdf::{NamedNode, NamedNodeRef};
use representation::datatypes::{classify_datatype, classify_literal, is_legacy_string_alias};
use representation::subtypes::supertypes;
use representation::{ExpressionTerm, LiteralCategory, RdfLiteral, SupertypeProvider};
use std::sync::Arc;

/// Turns a literal into an expression term under one set of datatype rules.
pub trait LiteralStrategy: Send + Sync {
    fn mode(&self) -> TransformMode;

    fn classify_and_parse(&self, literal: &RdfLiteral) -> ExpressionTerm;
}

/// The fixed datatype table, with the string aliases older consumers expect.
///
/// Subtypes are never resolved and no facets are checked, so every integer
/// derived datatype reads as an integer of any size.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyLiteralStrategy;

impl LiteralStrategy for LegacyLiteralStrategy {
    fn mode(&self) -> TransformMode {
        TransformMode::Legacy
    }

    fn classify_and_parse(&self, literal: &RdfLiteral) -> ExpressionTerm {
        let mut category = classify_literal(literal.datatype(), literal.language());
        if category == LiteralCategory::Other
            && literal
                .datatype()
                .is_some_and(|dt| is_legacy_string_alias(NamedNodeRef::new_unchecked(dt)))
        {
            category = LiteralCategory::String;
        }
        build_literal(category, literal)
    }
}

/// Resolves datatypes outside the fixed table through their declared supertypes
/// and enforces the range and timezone facets of the XSD derived datatypes.
pub struct ExtendedLiteralStrategy {
    supertypes: Arc<dyn SupertypeProvider>,
}

impl ExtendedLiteralStrategy {
    pub fn new(supertypes: Arc<dyn SupertypeProvider>) -> Self {
        ExtendedLiteralStrategy { supertypes }
    }

    fn category_of(&self, literal: &RdfLiteral) -> LiteralCategory {
        let category = classify_literal(literal.datatype(), literal.language());
        if category != LiteralCategory::Other {
            return category;
        }
        let Some(datatype) = literal.datatype() else {
            return category;
        };
        supertypes(self.supertypes.as_ref(), &NamedNode::new_unchecked(datatype))
            .map(|x| classify_datatype(x.as_ref()))
            .find(|x| *x != LiteralCategory::Other)
            .unwrap_or(LiteralCategory::Other)
    }

    /// The datatype followed by all its ancestors.
    fn lineage<'a>(&'a self, datatype: &NamedNode) -> impl Iterator<Item = NamedNode> + 'a {
        std::iter::once(datatype.clone()).chain(supertypes(self.supertypes.as_ref(), datatype))
    }

    fn satisfies_facets(&self, term: &ExpressionTerm) -> bool {
        match term {
            ExpressionTerm::IntegerLiteral {
                value, datatype, ..
            } => self
                .lineage(datatype)
                .all(|dt| integer_in_range(dt.as_ref(), value)),
            ExpressionTerm::DateTimeLiteral {
                value, datatype, ..
            } => {
                value.has_timezone()
                    || !self
                        .lineage(datatype)
                        .any(|dt| dt.as_ref() == xsd::DATE_TIME_STAMP)
            }
            _ => true,
        }
    }
}

impl LiteralStrategy for ExtendedLiteralStrategy {
    fn mode(&self) -> TransformMode {
        TransformMode::Extended
    }

    fn classify_and_parse(&self, literal: &RdfLiteral) -> ExpressionTerm {
        let term = build_literal(self.category_of(literal), literal);
        if self.satisfies_facets(&term) {
            term
        } else {
            non_lexical(literal)
        }
    }
}

fn integer_bounds(datatype: NamedNodeRef) -> (Option<i128>, Option<i128>) {
    match datatype {
        xsd::LONG => (Some(i64::MIN.into()), Some(i64::MAX.into())),
        xsd::INT => (Some(i32::MIN.into()), Some(i32::MAX.into())),
        xsd::SHORT => (Some(i16::MIN.into()), Some(i16::MAX.into())),
        xsd::BYTE => (Some(i8::MIN.into()), Some(i8::MAX.into())),
        xsd::NON_NEGATIVE_INTEGER => (Some(0), None),
        xsd::UNSIGNED_LONG => (Some(0), Some(u64::MAX.into())),
        xsd::UNSIGNED_INT => (Some(0), Some(u32::MAX.into())),
        xsd::UNSIGNED_SHORT => (Some(0), Some(u16::MAX.into())),
        xsd::UNSIGNED_BYTE => (Some(0), Some(u8::MAX.into())),
        xsd::POSITIVE_INTEGER => (Some(1), None),
        xsd::NON_POSITIVE_INTEGER => (None, Some(0)),
        xsd::NEGATIVE_INTEGER => (None, Some(-1)),
        _ => (None, None),
    }
}

fn integer_in_range(datatype: NamedNodeRef, value: &BigInt) -> bool {
    let (min, max) = integer_bounds(datatype);
    min.map_or(true, |min| *value >= BigInt::from(min))
        && max.map_or(true, |max| *value <= BigInt::from(max))
}

fn declared_datatype(literal: &RdfLiteral) -> NamedNode {
    literal
        .datatype()
        .map(NamedNode::new_unchecked)
        .unwrap_or_else(|| xsd::STRING.into_owned())
}

fn non_lexical(literal: &RdfLiteral) -> ExpressionTerm {
    let datatype = declared_datatype(literal);
    debug!(
        "Literal {:?} is not a valid lexical form of {}",
        literal.value(),
        datatype
    );
    ExpressionTerm::NonLexicalLiteral {
        lexical: literal.value().to_string(),
        datatype,
    }
}

/// Builds the expression term of a classified literal, parsing its lexical form
/// when the category has a typed value.
pub(crate) fn build_literal(category: LiteralCategory, literal: &RdfLiteral) -> ExpressionTerm {
    let lexical = literal.value();
    let typed = match category {
        LiteralCategory::String => Some(ExpressionTerm::StringLiteral {
            value: lexical.to_string(),
            datatype: declared_datatype(literal),
        }),
        LiteralCategory::LangString => Some(ExpressionTerm::LangStringLiteral {
            value: lexical.to_string(),
            language: literal.language().unwrap_or_default().to_string(),
        }),
        LiteralCategory::Other => Some(ExpressionTerm::OtherLiteral {
            value: lexical.to_string(),
            datatype: declared_datatype(literal),
        }),
        LiteralCategory::Boolean => {
            parse_boolean(lexical).map(|value| ExpressionTerm::BooleanLiteral {
                value,
                lexical: lexical.to_string(),
            })
        }
        LiteralCategory::Integer => {
            parse_integer(lexical).map(|value| ExpressionTerm::IntegerLiteral {
                value,
                datatype: declared_datatype(literal),
                lexical: lexical.to_string(),
            })
        }
        LiteralCategory::Decimal => {
            parse_decimal(lexical).map(|value| ExpressionTerm::DecimalLiteral {
                value,
                datatype: declared_datatype(literal),
                lexical: lexical.to_string(),
            })
        }
        LiteralCategory::Float => parse_float(lexical).map(|value| ExpressionTerm::FloatLiteral {
            value,
            datatype: declared_datatype(literal),
            lexical: lexical.to_string(),
        }),
        LiteralCategory::Double => {
            parse_double(lexical).map(|value| ExpressionTerm::DoubleLiteral {
                value,
                datatype: declared_datatype(literal),
                lexical: lexical.to_string(),
            })
        }
        LiteralCategory::DateTime => {
            parse_date_time(lexical).map(|value| ExpressionTerm::DateTimeLiteral {
                value,
                datatype: declared_datatype(literal),
                lexical: lexical.to_string(),
            })
        }
    };
    typed.unwrap_or_else(|| non_lexical(literal))
}
