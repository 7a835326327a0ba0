use crate::datatypes::{LiteralCategory, NumericType};
use crate::errors::RepresentationError;
use crate::xsd_datetime::XsdDateTime;
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{BlankNode, Literal, NamedNode, NamedNodeRef, Term, Variable};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use oxsdatatypes::{Double, Float};
use std::fmt::{Display, Formatter};

/// A term as the expression evaluator sees it.
///
/// Every literal variant keeps its lexical form as it was received. Numeric and
/// temporal variants keep the exact datatype IRI, so a value typed
/// `xsd:unsignedByte` is still known as such after parsing.
///
/// Integer and decimal values are arbitrary precision. Float and double values
/// compare by identity, so a `NaN` literal equals itself.
#[derive(Debug, Clone)]
pub enum ExpressionTerm {
    Variable(Variable),
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    StringLiteral {
        value: String,
        datatype: NamedNode,
    },
    LangStringLiteral {
        value: String,
        language: String,
    },
    BooleanLiteral {
        value: bool,
        lexical: String,
    },
    IntegerLiteral {
        value: BigInt,
        datatype: NamedNode,
        lexical: String,
    },
    DecimalLiteral {
        value: BigDecimal,
        datatype: NamedNode,
        lexical: String,
    },
    FloatLiteral {
        value: Float,
        datatype: NamedNode,
        lexical: String,
    },
    DoubleLiteral {
        value: Double,
        datatype: NamedNode,
        lexical: String,
    },
    DateTimeLiteral {
        value: XsdDateTime,
        datatype: NamedNode,
        lexical: String,
    },
    OtherLiteral {
        value: String,
        datatype: NamedNode,
    },
    /// A literal whose lexical form is not valid for its datatype.
    NonLexicalLiteral {
        lexical: String,
        datatype: NamedNode,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionTermType {
    Variable,
    NamedNode,
    BlankNode,
    Literal,
}

pub fn is_non_lexical_literal(term: &ExpressionTerm) -> bool {
    matches!(term, ExpressionTerm::NonLexicalLiteral { .. })
}

impl ExpressionTerm {
    pub fn new_string_literal(value: impl Into<String>) -> Self {
        ExpressionTerm::StringLiteral {
            value: value.into(),
            datatype: xsd::STRING.into_owned(),
        }
    }

    pub fn new_lang_string_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        ExpressionTerm::LangStringLiteral {
            value: value.into(),
            language: language.into(),
        }
    }

    pub fn is_non_lexical(&self) -> bool {
        is_non_lexical_literal(self)
    }

    pub fn term_type(&self) -> ExpressionTermType {
        match self {
            ExpressionTerm::Variable(_) => ExpressionTermType::Variable,
            ExpressionTerm::NamedNode(_) => ExpressionTermType::NamedNode,
            ExpressionTerm::BlankNode(_) => ExpressionTermType::BlankNode,
            _ => ExpressionTermType::Literal,
        }
    }

    /// The lexical form of a literal, the IRI of a named node, the label of a
    /// blank node or the name of a variable.
    pub fn as_str(&self) -> &str {
        match self {
            ExpressionTerm::Variable(v) => v.as_str(),
            ExpressionTerm::NamedNode(nn) => nn.as_str(),
            ExpressionTerm::BlankNode(bl) => bl.as_str(),
            ExpressionTerm::StringLiteral { value, .. }
            | ExpressionTerm::LangStringLiteral { value, .. }
            | ExpressionTerm::OtherLiteral { value, .. } => value,
            ExpressionTerm::BooleanLiteral { lexical, .. }
            | ExpressionTerm::IntegerLiteral { lexical, .. }
            | ExpressionTerm::DecimalLiteral { lexical, .. }
            | ExpressionTerm::FloatLiteral { lexical, .. }
            | ExpressionTerm::DoubleLiteral { lexical, .. }
            | ExpressionTerm::DateTimeLiteral { lexical, .. }
            | ExpressionTerm::NonLexicalLiteral { lexical, .. } => lexical,
        }
    }

    pub fn datatype(&self) -> Option<NamedNodeRef<'_>> {
        match self {
            ExpressionTerm::Variable(_)
            | ExpressionTerm::NamedNode(_)
            | ExpressionTerm::BlankNode(_) => None,
            ExpressionTerm::LangStringLiteral { .. } => Some(rdf::LANG_STRING),
            ExpressionTerm::BooleanLiteral { .. } => Some(xsd::BOOLEAN),
            ExpressionTerm::StringLiteral { datatype, .. }
            | ExpressionTerm::IntegerLiteral { datatype, .. }
            | ExpressionTerm::DecimalLiteral { datatype, .. }
            | ExpressionTerm::FloatLiteral { datatype, .. }
            | ExpressionTerm::DoubleLiteral { datatype, .. }
            | ExpressionTerm::DateTimeLiteral { datatype, .. }
            | ExpressionTerm::OtherLiteral { datatype, .. }
            | ExpressionTerm::NonLexicalLiteral { datatype, .. } => Some(datatype.as_ref()),
        }
    }

    pub fn language(&self) -> Option<&str> {
        if let ExpressionTerm::LangStringLiteral { language, .. } = self {
            Some(language)
        } else {
            None
        }
    }

    /// The category a literal was evaluated as. Non-lexical literals have none.
    pub fn category(&self) -> Option<LiteralCategory> {
        match self {
            ExpressionTerm::Variable(_)
            | ExpressionTerm::NamedNode(_)
            | ExpressionTerm::BlankNode(_)
            | ExpressionTerm::NonLexicalLiteral { .. } => None,
            ExpressionTerm::StringLiteral { .. } => Some(LiteralCategory::String),
            ExpressionTerm::LangStringLiteral { .. } => Some(LiteralCategory::LangString),
            ExpressionTerm::BooleanLiteral { .. } => Some(LiteralCategory::Boolean),
            ExpressionTerm::IntegerLiteral { .. } => Some(LiteralCategory::Integer),
            ExpressionTerm::DecimalLiteral { .. } => Some(LiteralCategory::Decimal),
            ExpressionTerm::FloatLiteral { .. } => Some(LiteralCategory::Float),
            ExpressionTerm::DoubleLiteral { .. } => Some(LiteralCategory::Double),
            ExpressionTerm::DateTimeLiteral { .. } => Some(LiteralCategory::DateTime),
            ExpressionTerm::OtherLiteral { .. } => Some(LiteralCategory::Other),
        }
    }

    pub fn numeric_type(&self) -> Option<NumericType> {
        self.category().and_then(|x| x.numeric_type())
    }

    /// Converts back into the RDF term the value was read from.
    pub fn to_term(&self) -> Result<Term, RepresentationError> {
        let term = match self {
            ExpressionTerm::Variable(v) => {
                return Err(RepresentationError::NotAnRdfTerm(v.to_string()));
            }
            ExpressionTerm::NamedNode(nn) => Term::NamedNode(nn.clone()),
            ExpressionTerm::BlankNode(bl) => Term::BlankNode(bl.clone()),
            ExpressionTerm::LangStringLiteral { value, language } => Term::Literal(
                Literal::new_language_tagged_literal_unchecked(value, language),
            ),
            _ => {
                // Only literal variants remain, and all of them have a datatype
                let datatype = self
                    .datatype()
                    .ok_or_else(|| RepresentationError::NotAnRdfTerm(self.to_string()))?;
                Term::Literal(Literal::new_typed_literal(self.as_str(), datatype))
            }
        };
        Ok(term)
    }
}

impl PartialEq for ExpressionTerm {
    fn eq(&self, other: &Self) -> bool {
        use ExpressionTerm as E;
        match (self, other) {
            (E::Variable(a), E::Variable(b)) => a == b,
            (E::NamedNode(a), E::NamedNode(b)) => a == b,
            (E::BlankNode(a), E::BlankNode(b)) => a == b,
            (
                E::StringLiteral { value, datatype },
                E::StringLiteral {
                    value: v,
                    datatype: d,
                },
            )
            | (
                E::OtherLiteral { value, datatype },
                E::OtherLiteral {
                    value: v,
                    datatype: d,
                },
            ) => value == v && datatype == d,
            (
                E::LangStringLiteral { value, language },
                E::LangStringLiteral {
                    value: v,
                    language: l,
                },
            ) => value == v && language == l,
            (
                E::BooleanLiteral { value, lexical },
                E::BooleanLiteral {
                    value: v,
                    lexical: l,
                },
            ) => value == v && lexical == l,
            (
                E::IntegerLiteral {
                    value,
                    datatype,
                    lexical,
                },
                E::IntegerLiteral {
                    value: v,
                    datatype: d,
                    lexical: l,
                },
            ) => value == v && datatype == d && lexical == l,
            (
                E::DecimalLiteral {
                    value,
                    datatype,
                    lexical,
                },
                E::DecimalLiteral {
                    value: v,
                    datatype: d,
                    lexical: l,
                },
            ) => value == v && datatype == d && lexical == l,
            (
                E::FloatLiteral {
                    value,
                    datatype,
                    lexical,
                },
                E::FloatLiteral {
                    value: v,
                    datatype: d,
                    lexical: l,
                },
            ) => value.is_identical_with(*v) && datatype == d && lexical == l,
            (
                E::DoubleLiteral {
                    value,
                    datatype,
                    lexical,
                },
                E::DoubleLiteral {
                    value: v,
                    datatype: d,
                    lexical: l,
                },
            ) => value.is_identical_with(*v) && datatype == d && lexical == l,
            (
                E::DateTimeLiteral {
                    value,
                    datatype,
                    lexical,
                },
                E::DateTimeLiteral {
                    value: v,
                    datatype: d,
                    lexical: l,
                },
            ) => value == v && datatype == d && lexical == l,
            (
                E::NonLexicalLiteral { lexical, datatype },
                E::NonLexicalLiteral {
                    lexical: l,
                    datatype: d,
                },
            ) => lexical == l && datatype == d,
            _ => false,
        }
    }
}

impl Eq for ExpressionTerm {}

impl Display for ExpressionTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpressionTerm::Variable(v) => write!(f, "{v}"),
            ExpressionTerm::NamedNode(nn) => write!(f, "{nn}"),
            ExpressionTerm::BlankNode(bl) => write!(f, "{bl}"),
            ExpressionTerm::LangStringLiteral { value, language } => {
                write!(f, "{value:?}@{language}")
            }
            ExpressionTerm::NonLexicalLiteral { lexical, datatype } => {
                write!(f, "{lexical:?}^^{datatype} (non-lexical)")
            }
            _ => match self.datatype() {
                Some(datatype) => write!(f, "{:?}^^{}", self.as_str(), datatype),
                None => write!(f, "{:?}", self.as_str()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_lexical_predicate() {
        let nl = ExpressionTerm::NonLexicalLiteral {
            lexical: "apple".to_string(),
            datatype: xsd::FLOAT.into_owned(),
        };
        assert!(is_non_lexical_literal(&nl));
        assert_eq!(nl.numeric_type(), None);
        assert!(!is_non_lexical_literal(&ExpressionTerm::new_string_literal(
            "apple"
        )));
    }

    #[test]
    fn test_lang_string_datatype() {
        let t = ExpressionTerm::new_lang_string_literal("ab", "en");
        assert_eq!(t.datatype(), Some(rdf::LANG_STRING));
        assert_eq!(t.language(), Some("en"));
        assert_eq!(t.term_type(), ExpressionTermType::Literal);
    }

    #[test]
    fn test_variable_is_not_a_term() {
        let v = ExpressionTerm::Variable(Variable::new_unchecked("foo"));
        assert_eq!(v.as_str(), "foo");
        assert!(matches!(
            v.to_term(),
            Err(RepresentationError::NotAnRdfTerm(_))
        ));
    }

    #[test]
    fn test_typed_literal_back_to_term() {
        let t = ExpressionTerm::IntegerLiteral {
            value: BigInt::from(1),
            datatype: xsd::UNSIGNED_BYTE.into_owned(),
            lexical: "01".to_string(),
        };
        assert_eq!(
            t.to_term(),
            Ok(Term::Literal(Literal::new_typed_literal(
                "01",
                xsd::UNSIGNED_BYTE
            )))
        );
    }

    #[test]
    fn test_nan_equals_itself() {
        let nan = ExpressionTerm::DoubleLiteral {
            value: Double::from(f64::NAN),
            datatype: xsd::DOUBLE.into_owned(),
            lexical: "NaN".to_string(),
        };
        assert_eq!(nan, nan.clone());
        let float_nan = ExpressionTerm::FloatLiteral {
            value: Float::from(f32::NAN),
            datatype: xsd::FLOAT.into_owned(),
            lexical: "NaN".to_string(),
        };
        assert_eq!(float_nan, float_nan.clone());
        let zero = |lexical: &str, value: f64| ExpressionTerm::DoubleLiteral {
            value: Double::from(value),
            datatype: xsd::DOUBLE.into_owned(),
            lexical: lexical.to_string(),
        };
        assert_ne!(zero("0", 0.0), zero("0", -0.0));
        assert_ne!(nan, zero("0", 0.0));
    }
}
