//! Differentiating a function.

use crate::function::{expect_function, tags};
use algebra::pretty::Formatter;
use algebra::{new_zero, registry, specialize, Elem, Element, Error, TypeTag, Wrapped};
use std::any::Any;

/// The derivative of a function.
///
/// Each input carries the index of the feature dimension to differentiate with respect to, or
/// `None` to skip that input.
#[derive(Debug)]
pub struct Derivative {
    tag: TypeTag,
    e: Elem,
    derivs: Vec<Option<i64>>,
}

impl Derivative {
    /// The per-input derivative dimensions.
    pub fn derivs(&self) -> &[Option<i64>] {
        &self.derivs
    }
}

impl Element for Derivative {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.downcast_ref::<Derivative>() {
            Some(o) => self.e == o.e && self.derivs == o.derivs,
            None => false,
        }
    }

    fn as_wrapped(&self) -> Option<&dyn Wrapped> {
        Some(self)
    }
}

impl Wrapped for Derivative {
    fn child(&self) -> &Elem {
        &self.e
    }

    fn render_wrap(&self, child: String, _formatter: &dyn Formatter) -> String {
        let derivs: Vec<String> = self
            .derivs
            .iter()
            .map(|d| d.map(|d| d.to_string()).unwrap_or_else(|| "None".to_string()))
            .collect();
        format!("d({}) {}", derivs.join(", "), child)
    }
}

/// Differentiates a function.
///
/// The derivative of the zero function is itself; the derivative of the constant one is the
/// algebra's zero.
pub fn diff(a: &Elem, derivs: &[Option<i64>]) -> Result<Elem, Error> {
    expect_function(a, "differentiation")?;
    if registry::is_subtype(a.tag(), registry::ZERO) {
        return Ok(a.clone());
    }
    if registry::is_subtype(a.tag(), registry::ONE) {
        return new_zero(a);
    }
    let tag = specialize(a, tags().derivative)?;
    Ok(Elem::new(Derivative { tag, e: a.clone(), derivs: derivs.to_vec() }))
}
