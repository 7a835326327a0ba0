use oxrdf::NamedNodeRef;

// Not part of the oxrdf xsd vocabulary
pub const XSD_ENTITY: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#ENTITY");
pub const XSD_ID: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#ID");
pub const XSD_IDREF: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#IDREF");

/// Upper bound on supertype chain walks, guards against cyclic hierarchies.
pub const MAX_SUPERTYPE_DEPTH: usize = 32;
