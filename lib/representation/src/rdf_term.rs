use oxrdf::{BlankNode, GraphName, Literal, NamedNode, NamedNodeRef, Term, Variable};
use std::fmt::{Display, Formatter};

/// An RDF term as handed over by a triple source.
///
/// Unlike [`oxrdf::Term`] this also covers variables and the default graph,
/// and its literals tolerate the malformed shapes upstream sources produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfTerm {
    Variable(Variable),
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(RdfLiteral),
    DefaultGraph,
}

/// A literal whose datatype and language tag are both optional.
///
/// A missing value is the empty string. Nothing here is validated: a literal may
/// carry a language tag and a datatype at the same time, or a datatype IRI that
/// is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RdfLiteral {
    pub value: String,
    pub datatype: Option<String>,
    pub language: Option<String>,
}

impl RdfLiteral {
    pub fn new(
        value: impl Into<String>,
        datatype: Option<impl Into<String>>,
        language: Option<impl Into<String>>,
    ) -> Self {
        RdfLiteral {
            value: value.into(),
            datatype: datatype.map(|x| x.into()),
            language: language.map(|x| x.into()),
        }
    }

    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        RdfLiteral {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNodeRef) -> Self {
        RdfLiteral {
            value: value.into(),
            datatype: Some(datatype.as_str().to_string()),
            language: None,
        }
    }

    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        RdfLiteral {
            value: value.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The declared datatype, with an empty IRI read as no datatype.
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref().filter(|x| !x.is_empty())
    }

    /// The language tag, with an empty tag read as no tag.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|x| !x.is_empty())
    }
}

impl From<Literal> for RdfLiteral {
    fn from(l: Literal) -> Self {
        let (value, datatype, language) = l.destruct();
        RdfLiteral {
            value,
            // Simple and language tagged literals have no explicit datatype
            datatype: datatype.map(|x| x.into_string()),
            language,
        }
    }
}

impl From<&Literal> for RdfLiteral {
    fn from(l: &Literal) -> Self {
        l.clone().into()
    }
}

impl From<Term> for RdfTerm {
    fn from(term: Term) -> Self {
        match term {
            Term::NamedNode(nn) => RdfTerm::NamedNode(nn),
            Term::BlankNode(bl) => RdfTerm::BlankNode(bl),
            Term::Literal(l) => RdfTerm::Literal(l.into()),
        }
    }
}

impl From<GraphName> for RdfTerm {
    fn from(g: GraphName) -> Self {
        match g {
            GraphName::NamedNode(nn) => RdfTerm::NamedNode(nn),
            GraphName::BlankNode(bl) => RdfTerm::BlankNode(bl),
            GraphName::DefaultGraph => RdfTerm::DefaultGraph,
        }
    }
}

impl From<NamedNode> for RdfTerm {
    fn from(nn: NamedNode) -> Self {
        RdfTerm::NamedNode(nn)
    }
}

impl From<BlankNode> for RdfTerm {
    fn from(bl: BlankNode) -> Self {
        RdfTerm::BlankNode(bl)
    }
}

impl From<Variable> for RdfTerm {
    fn from(v: Variable) -> Self {
        RdfTerm::Variable(v)
    }
}

impl From<Literal> for RdfTerm {
    fn from(l: Literal) -> Self {
        RdfTerm::Literal(l.into())
    }
}

impl From<RdfLiteral> for RdfTerm {
    fn from(l: RdfLiteral) -> Self {
        RdfTerm::Literal(l)
    }
}

impl Display for RdfLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.value)?;
        if let Some(language) = self.language() {
            write!(f, "@{language}")?;
        }
        if let Some(datatype) = self.datatype() {
            write!(f, "^^<{datatype}>")?;
        }
        Ok(())
    }
}

impl Display for RdfTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RdfTerm::Variable(v) => write!(f, "{v}"),
            RdfTerm::NamedNode(nn) => write!(f, "{nn}"),
            RdfTerm::BlankNode(bl) => write!(f, "{bl}"),
            RdfTerm::Literal(l) => write!(f, "{l}"),
            RdfTerm::DefaultGraph => write!(f, "DEFAULT"),
        }
    }
}
