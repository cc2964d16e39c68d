//! Stretching a function's inputs.

use crate::function::{expect_function, is_neutral, tags};
use crate::util::{broadcast, identical_scalars, squeeze};
use algebra::pretty::Formatter;
use algebra::{specialize, Elem, Element, Error, Scalar, TypeTag, Wrapped};
use std::any::Any;

/// A function with its inputs stretched, one extent per input.
#[derive(Debug)]
pub struct Stretched {
    tag: TypeTag,
    e: Elem,
    stretches: Vec<Scalar>,
}

impl Stretched {
    /// The per-input stretch extents.
    pub fn stretches(&self) -> &[Scalar] {
        &self.stretches
    }
}

impl Element for Stretched {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.downcast_ref::<Stretched>() {
            Some(o) => self.e == o.e && identical_scalars(&self.stretches, &o.stretches),
            None => false,
        }
    }

    fn as_wrapped(&self) -> Option<&dyn Wrapped> {
        Some(self)
    }
}

impl Wrapped for Stretched {
    fn child(&self) -> &Elem {
        &self.e
    }

    fn render_wrap(&self, child: String, formatter: &dyn Formatter) -> String {
        let stretches: Vec<String> = self.stretches.iter().map(|s| formatter.scalar(s)).collect();
        format!("{} > {}", child, squeeze(&stretches))
    }
}

/// Stretches a function's inputs.
///
/// Stretching a stretched function multiplies the extents, broadcasting a single extent across
/// the other list. Neutral elements are fixed points.
pub fn stretch(a: &Elem, stretches: &[Scalar]) -> Result<Elem, Error> {
    expect_function(a, "stretching")?;
    if is_neutral(a) {
        return Ok(a.clone());
    }
    if let Some(prev) = a.downcast_ref::<Stretched>() {
        let merged = broadcast(|x, y| x * y, prev.stretches(), stretches)?;
        return stretch(prev.child(), &merged);
    }
    let tag = specialize(a, tags().stretched)?;
    Ok(Elem::new(Stretched { tag, e: a.clone(), stretches: stretches.to_vec() }))
}
