//! The closed registry of element types and their subtype lattice.
//!
//! Every concrete element type is identified by an interned [`TypeTag`]. A tag declares, at
//! registration time, the tags it derives from; a tag may declare several supertypes, so the
//! lattice supports diamond shapes (a type can be both a domain marker and a structural role at
//! once). The registry also records which tag serves as each type's *algebra root*, the marker
//! used by the specialization search in [`resolve`](crate::resolve).
//!
//! The registry is populated at startup and only ever grows. Registering a type invalidates the
//! specialization memo cache, so late registrations stay consistent with earlier lookups.

use crate::resolve;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

/// An interned identifier for a registered element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag(u32);

/// The top of the lattice; matches any operand, element or scalar.
pub const ANY: TypeTag = TypeTag(0);

/// The base element type, and the default algebra root.
pub const ELEMENT: TypeTag = TypeTag(1);

/// The tag carried by bare scale values when they participate in dispatch.
pub const SCALAR: TypeTag = TypeTag(2);

/// The additive neutral element.
pub const ZERO: TypeTag = TypeTag(3);

/// The multiplicative neutral element.
pub const ONE: TypeTag = TypeTag(4);

/// An element wrapping exactly one child.
pub const WRAPPED: TypeTag = TypeTag(5);

/// A wrapped element that additionally carries a scale.
pub const SCALED: TypeTag = TypeTag(6);

/// An element joining exactly two children.
pub const JOIN: TypeTag = TypeTag(7);

/// The join specialization for addition.
pub const SUM: TypeTag = TypeTag(8);

/// The join specialization for multiplication.
pub const PRODUCT: TypeTag = TypeTag(9);

struct Entry {
    name: String,
    parents: Vec<TypeTag>,
    algebra: Option<TypeTag>,
}

pub(crate) struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    fn new() -> Self {
        let mut registry = Self { entries: Vec::new() };

        // The built-in tags must be interned in the order of the constants above.
        let builtin = [
            ("Any", vec![]),
            ("Element", vec![ANY]),
            ("Scalar", vec![ANY]),
            ("Zero", vec![ELEMENT]),
            ("One", vec![ELEMENT]),
            ("Wrapped", vec![ELEMENT]),
            ("Scaled", vec![WRAPPED]),
            ("Join", vec![ELEMENT]),
            ("Sum", vec![JOIN]),
            ("Product", vec![JOIN]),
        ];
        for (name, parents) in builtin {
            registry.entries.push(Entry {
                name: name.to_string(),
                parents,
                algebra: None,
            });
        }
        registry
    }

    fn register(&mut self, name: &str, parents: &[TypeTag]) -> TypeTag {
        let parents = if parents.is_empty() {
            vec![ELEMENT]
        } else {
            parents.to_vec()
        };
        self.entries.push(Entry {
            name: name.to_string(),
            parents,
            algebra: None,
        });
        TypeTag(self.entries.len() as u32 - 1)
    }

    fn is_subtype(&self, sub: TypeTag, sup: TypeTag) -> bool {
        if sub == sup || sup == ANY {
            return true;
        }
        self.entries[sub.0 as usize]
            .parents
            .iter()
            .any(|&parent| self.is_subtype(parent, sup))
    }

    fn subtypes(&self, tag: TypeTag) -> HashSet<TypeTag> {
        (0..self.entries.len() as u32)
            .map(TypeTag)
            .filter(|&t| t != tag && self.is_subtype(t, tag))
            .collect()
    }

    /// Finds the nearest explicitly registered algebra root, searching breadth-first up the
    /// supertype lattice so that the most specific registration wins.
    fn algebra_of(&self, tag: TypeTag) -> TypeTag {
        let mut frontier = vec![tag];
        let mut seen = HashSet::new();
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for t in frontier {
                if !seen.insert(t) {
                    continue;
                }
                if let Some(root) = self.entries[t.0 as usize].algebra {
                    return root;
                }
                next.extend(self.entries[t.0 as usize].parents.iter().copied());
            }
            frontier = next;
        }
        ELEMENT
    }
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::new()));

/// Registers a new element type deriving from the given parent tags.
///
/// An empty parent list is shorthand for deriving from [`ELEMENT`] directly. Returns the interned
/// tag for the new type. Registration invalidates the specialization memo cache.
pub fn register_type(name: &str, parents: &[TypeTag]) -> TypeTag {
    let tag = REGISTRY.write().unwrap().register(name, parents);
    resolve::clear_cache();
    tag
}

/// Declares `root` as the algebra root for `tag` and every type derived from it that does not
/// declare a root of its own.
pub fn register_algebra(tag: TypeTag, root: TypeTag) {
    REGISTRY.write().unwrap().entries[tag.0 as usize].algebra = Some(root);
    resolve::clear_cache();
}

/// Returns the registered name of a tag.
pub fn type_name(tag: TypeTag) -> String {
    REGISTRY.read().unwrap().entries[tag.0 as usize].name.clone()
}

/// Returns true if `sub` is `sup` or transitively derives from it.
pub fn is_subtype(sub: TypeTag, sup: TypeTag) -> bool {
    REGISTRY.read().unwrap().is_subtype(sub, sup)
}

/// Returns every type transitively derived from `tag`, excluding `tag` itself.
pub fn subtypes(tag: TypeTag) -> HashSet<TypeTag> {
    REGISTRY.read().unwrap().subtypes(tag)
}

/// Returns the algebra root for `tag`, defaulting to [`ELEMENT`] when neither the type nor any
/// of its supertypes registered one.
pub fn algebra_of(tag: TypeTag) -> TypeTag {
    REGISTRY.read().unwrap().algebra_of(tag)
}
