use serde::Deserialize;

/// Which datatype rules literals are read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    /// Fixed datatype table, string aliases, no facet checks.
    Legacy,
    /// Subtype aware: resolves user and derived datatypes through the supertype provider.
    #[default]
    Extended,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransformerOptions {
    pub mode: TransformMode,
}

impl TransformerOptions {
    pub fn legacy() -> Self {
        TransformerOptions {
            mode: TransformMode::Legacy,
        }
    }

    pub fn extended() -> Self {
        TransformerOptions {
            mode: TransformMode::Extended,
        }
    }
}
