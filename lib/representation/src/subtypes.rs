use crate::constants::{MAX_SUPERTYPE_DEPTH, XSD_ENTITY, XSD_ID, XSD_IDREF};
use log::trace;
use oxrdf::vocab::xsd;
use oxrdf::{NamedNode, NamedNodeRef};
use std::collections::HashMap;
use std::sync::RwLock;

/// Lookup of the declared supertype of a datatype.
pub trait SupertypeProvider: Send + Sync {
    fn supertype_of(&self, datatype: &NamedNode) -> Option<NamedNode>;
}

/// The XSD 1.1 built-in derivation hierarchy, extensible with user datatypes.
#[derive(Debug, Clone, Default)]
pub struct XsdSupertypeProvider {
    declared: HashMap<NamedNode, NamedNode>,
}

impl XsdSupertypeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `datatype` as derived from `supertype`.
    /// A declaration for a built-in datatype overrides the built-in parent.
    pub fn with_datatype(mut self, datatype: NamedNode, supertype: NamedNode) -> Self {
        self.declared.insert(datatype, supertype);
        self
    }
}

impl SupertypeProvider for XsdSupertypeProvider {
    fn supertype_of(&self, datatype: &NamedNode) -> Option<NamedNode> {
        if let Some(supertype) = self.declared.get(datatype) {
            return Some(supertype.clone());
        }
        xsd_supertype(datatype.as_ref()).map(|x| x.into_owned())
    }
}

fn xsd_supertype(s: NamedNodeRef) -> Option<NamedNodeRef<'static>> {
    let t = match s {
        xsd::INTEGER => xsd::DECIMAL,
        xsd::NON_POSITIVE_INTEGER => xsd::INTEGER,
        xsd::NEGATIVE_INTEGER => xsd::NON_POSITIVE_INTEGER,
        xsd::LONG => xsd::INTEGER,
        xsd::INT => xsd::LONG,
        xsd::SHORT => xsd::INT,
        xsd::BYTE => xsd::SHORT,
        xsd::NON_NEGATIVE_INTEGER => xsd::INTEGER,
        xsd::POSITIVE_INTEGER => xsd::NON_NEGATIVE_INTEGER,
        xsd::UNSIGNED_LONG => xsd::NON_NEGATIVE_INTEGER,
        xsd::UNSIGNED_INT => xsd::UNSIGNED_LONG,
        xsd::UNSIGNED_SHORT => xsd::UNSIGNED_INT,
        xsd::UNSIGNED_BYTE => xsd::UNSIGNED_SHORT,
        xsd::NORMALIZED_STRING => xsd::STRING,
        xsd::TOKEN => xsd::NORMALIZED_STRING,
        xsd::LANGUAGE => xsd::TOKEN,
        xsd::NMTOKEN => xsd::TOKEN,
        xsd::NAME => xsd::TOKEN,
        xsd::NC_NAME => xsd::NAME,
        xsd::DATE_TIME_STAMP => xsd::DATE_TIME,
        xsd::YEAR_MONTH_DURATION | xsd::DAY_TIME_DURATION => xsd::DURATION,
        _ => {
            if s == XSD_ENTITY || s == XSD_ID || s == XSD_IDREF {
                xsd::NC_NAME
            } else {
                return None;
            }
        }
    };
    Some(t)
}

/// Memoizes the lookups of another provider.
///
/// Entries are only ever added, and a racing insert writes an equal value, so
/// readers never need more than a shared lock.
#[derive(Debug, Default)]
pub struct CachedSupertypeProvider<P> {
    inner: P,
    cache: RwLock<HashMap<NamedNode, Option<NamedNode>>>,
}

impl<P: SupertypeProvider> CachedSupertypeProvider<P> {
    pub fn new(inner: P) -> Self {
        CachedSupertypeProvider {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.read().map(|x| x.len()).unwrap_or(0)
    }
}

impl<P: SupertypeProvider> SupertypeProvider for CachedSupertypeProvider<P> {
    fn supertype_of(&self, datatype: &NamedNode) -> Option<NamedNode> {
        if let Ok(cache) = self.cache.read() {
            if let Some(cached) = cache.get(datatype) {
                return cached.clone();
            }
        }
        let supertype = self.inner.supertype_of(datatype);
        trace!("Caching supertype of {datatype}: {supertype:?}");
        // A poisoned cache only costs us the memoization
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(datatype.clone(), supertype.clone());
        }
        supertype
    }
}

/// Iterates the strict ancestors of `datatype`, nearest first.
///
/// The walk stops after a fixed depth so a cyclic hierarchy cannot hang it.
pub fn supertypes<'a>(
    provider: &'a dyn SupertypeProvider,
    datatype: &NamedNode,
) -> impl Iterator<Item = NamedNode> + 'a {
    let mut current = Some(datatype.clone());
    std::iter::from_fn(move || {
        let next = provider.supertype_of(current.as_ref()?);
        current = next.clone();
        next
    })
    .take(MAX_SUPERTYPE_DEPTH)
}

// s subtype of t, reflexive
pub fn is_subtype_of(provider: &dyn SupertypeProvider, s: &NamedNode, t: &NamedNode) -> bool {
    s == t || supertypes(provider, s).any(|x| &x == t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_integer_family_reaches_decimal() {
        let provider = XsdSupertypeProvider::new();
        let chain: Vec<_> =
            supertypes(&provider, &xsd::UNSIGNED_BYTE.into_owned()).collect();
        let expected: Vec<NamedNode> = [
            xsd::UNSIGNED_SHORT,
            xsd::UNSIGNED_INT,
            xsd::UNSIGNED_LONG,
            xsd::NON_NEGATIVE_INTEGER,
            xsd::INTEGER,
            xsd::DECIMAL,
        ]
        .into_iter()
        .map(|x| x.into_owned())
        .collect();
        assert_eq!(chain, expected);
    }

    #[test]
    fn test_declared_datatype() {
        let age = NamedNode::new_unchecked("http://example.org/age");
        let provider =
            XsdSupertypeProvider::new().with_datatype(age.clone(), xsd::INTEGER.into_owned());
        assert!(is_subtype_of(&provider, &age, &xsd::DECIMAL.into_owned()));
        assert!(!is_subtype_of(&provider, &age, &xsd::DOUBLE.into_owned()));
        assert!(is_subtype_of(&provider, &age, &age));
    }

    #[test]
    fn test_cyclic_hierarchy_terminates() {
        let a = NamedNode::new_unchecked("http://example.org/a");
        let b = NamedNode::new_unchecked("http://example.org/b");
        let provider = XsdSupertypeProvider::new()
            .with_datatype(a.clone(), b.clone())
            .with_datatype(b.clone(), a.clone());
        assert_eq!(supertypes(&provider, &a).count(), MAX_SUPERTYPE_DEPTH);
        assert!(!is_subtype_of(&provider, &a, &xsd::STRING.into_owned()));
    }

    #[test]
    fn test_cache_agrees_with_inner_under_concurrency() {
        let cached = Arc::new(CachedSupertypeProvider::new(XsdSupertypeProvider::new()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cached = cached.clone();
                thread::spawn(move || {
                    for dt in [xsd::BYTE, xsd::TOKEN, xsd::DATE_TIME_STAMP, xsd::FLOAT] {
                        let dt = dt.into_owned();
                        assert_eq!(
                            cached.supertype_of(&dt),
                            XsdSupertypeProvider::new().supertype_of(&dt)
                        );
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(cached.cached_len(), 4);
    }
}
