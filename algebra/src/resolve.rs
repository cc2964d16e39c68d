//! Type specialization: picking the right concrete type for a structural role within an algebra.
//!
//! When a rewrite rule needs to build, say, a sum over kernel-domain operands, it must not build
//! a plain base-algebra `Sum`; it must build the kernel domain's sum type so that later dispatch
//! and printing see the domain. [`specialize`] performs that search over the registry's subtype
//! lattice and memoizes the answer per `(runtime tag, role)` pair, so a memo hit skips the
//! algebra-root walk as well as the search. The cache is process-scoped and is cleared whenever
//! the registry grows, so a domain registered late is picked up by subsequent lookups.

use crate::element::{Elem, One, Product, Scaled, Sum, Zero};
use crate::error::Error;
use crate::registry::{self, TypeTag};
use crate::scalar::Scalar;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

static CACHE: Lazy<Mutex<HashMap<(TypeTag, TypeTag), TypeTag>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

pub(crate) fn clear_cache() {
    CACHE.lock().unwrap().clear();
}

/// Returns the algebra root governing the given element.
pub fn get_algebra(e: &Elem) -> TypeTag {
    registry::algebra_of(e.tag())
}

/// Finds the concrete type that plays the structural `role` within `sample`'s algebra.
///
/// The candidates are the strict subtypes of the algebra root that also lie in `role`'s subtree
/// (`role` itself included). Candidates that are strict supertypes of another candidate are
/// discarded; exactly one type must remain, anything else is an
/// [`Error::AmbiguousSpecialization`].
pub fn specialize(sample: &Elem, role: TypeTag) -> Result<TypeTag, Error> {
    let key = (sample.tag(), role);
    if let Some(&tag) = CACHE.lock().unwrap().get(&key) {
        return Ok(tag);
    }

    let algebra = get_algebra(sample);
    let role_types = {
        let mut set = registry::subtypes(role);
        set.insert(role);
        set
    };
    let candidates: Vec<TypeTag> = registry::subtypes(algebra)
        .into_iter()
        .filter(|t| role_types.contains(t))
        .collect();

    // Keep only the most specific candidates.
    let specific: Vec<TypeTag> = candidates
        .iter()
        .copied()
        .filter(|&c| {
            !candidates
                .iter()
                .any(|&other| other != c && registry::is_subtype(other, c))
        })
        .collect();

    match specific[..] {
        [tag] => {
            CACHE.lock().unwrap().insert(key, tag);
            Ok(tag)
        },
        _ => Err(Error::AmbiguousSpecialization {
            role: registry::type_name(role),
            algebra: registry::type_name(algebra),
        }),
    }
}

/// Builds the additive neutral element of `sample`'s algebra.
pub fn new_zero(sample: &Elem) -> Result<Elem, Error> {
    Ok(Zero::with_tag(specialize(sample, registry::ZERO)?))
}

/// Builds the multiplicative neutral element of `sample`'s algebra.
pub fn new_one(sample: &Elem) -> Result<Elem, Error> {
    Ok(One::with_tag(specialize(sample, registry::ONE)?))
}

/// Builds a scaled element of `sample`'s algebra.
pub fn new_scaled(sample: &Elem, e: Elem, scale: Scalar) -> Result<Elem, Error> {
    Ok(Scaled::with_tag(specialize(sample, registry::SCALED)?, e, scale))
}

/// Builds a sum of `sample`'s algebra.
pub fn new_sum(sample: &Elem, e1: Elem, e2: Elem) -> Result<Elem, Error> {
    Ok(Sum::with_tag(specialize(sample, registry::SUM)?, e1, e2))
}

/// Builds a product of `sample`'s algebra.
pub fn new_product(sample: &Elem, e1: Elem, e2: Elem) -> Result<Elem, Error> {
    Ok(Product::with_tag(specialize(sample, registry::PRODUCT)?, e1, e2))
}
