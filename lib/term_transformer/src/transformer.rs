use crate::errors::TransformError;
use crate::options::{TransformMode, TransformerOptions};
use crate::strategy::{ExtendedLiteralStrategy, LegacyLiteralStrategy, LiteralStrategy};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use representation::{ExpressionTerm, RdfLiteral, RdfTerm, SupertypeProvider};
use std::sync::Arc;

/// Converts RDF terms into the typed terms the expression evaluator works on.
///
/// Literals that do not match their datatype become
/// [`ExpressionTerm::NonLexicalLiteral`] instead of an error; only inputs that
/// have no expression value at all are rejected.
pub struct TermTransformer {
    strategy: Box<dyn LiteralStrategy>,
}

impl TermTransformer {
    pub fn new(supertypes: Arc<dyn SupertypeProvider>, options: &TransformerOptions) -> Self {
        let strategy: Box<dyn LiteralStrategy> = match options.mode {
            TransformMode::Legacy => Box::new(LegacyLiteralStrategy),
            TransformMode::Extended => Box::new(ExtendedLiteralStrategy::new(supertypes)),
        };
        TermTransformer { strategy }
    }

    pub fn extended(supertypes: Arc<dyn SupertypeProvider>) -> Self {
        TermTransformer::new(supertypes, &TransformerOptions::extended())
    }

    pub fn legacy() -> Self {
        TermTransformer {
            strategy: Box::new(LegacyLiteralStrategy),
        }
    }

    pub fn mode(&self) -> TransformMode {
        self.strategy.mode()
    }

    pub fn transform_literal(&self, literal: &RdfLiteral) -> ExpressionTerm {
        self.strategy.classify_and_parse(literal)
    }

    pub fn transform_rdf_term_unsafe(
        &self,
        term: Option<&RdfTerm>,
    ) -> Result<ExpressionTerm, TransformError> {
        let term = term.ok_or_else(|| {
            TransformError::InvalidExpression("no term to transform".to_string())
        })?;
        self.transform_rdf_term(term)
    }

    pub fn transform_rdf_term(&self, term: &RdfTerm) -> Result<ExpressionTerm, TransformError> {
        let expression_term = match term {
            RdfTerm::Variable(v) => ExpressionTerm::Variable(v.clone()),
            RdfTerm::NamedNode(nn) => ExpressionTerm::NamedNode(nn.clone()),
            RdfTerm::BlankNode(bl) => ExpressionTerm::BlankNode(bl.clone()),
            RdfTerm::Literal(l) => self.transform_literal(l),
            RdfTerm::DefaultGraph => {
                return Err(TransformError::InvalidTermType(term.to_string()));
            }
        };
        Ok(expression_term)
    }

    /// Transforms a batch of terms in parallel, keeping their order.
    pub fn transform_terms(
        &self,
        terms: &[RdfTerm],
    ) -> Vec<Result<ExpressionTerm, TransformError>> {
        terms
            .par_iter()
            .map(|term| self.transform_rdf_term(term))
            .collect()
    }
}
