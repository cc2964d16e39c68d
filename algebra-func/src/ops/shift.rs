//! Shifting a function's inputs.

use crate::function::{expect_function, is_neutral, tags};
use crate::util::{broadcast, identical_scalars, squeeze};
use algebra::pretty::Formatter;
use algebra::{specialize, Elem, Element, Error, Scalar, TypeTag, Wrapped};
use std::any::Any;

/// A function with its inputs shifted, one amount per input.
#[derive(Debug)]
pub struct Shifted {
    tag: TypeTag,
    e: Elem,
    shifts: Vec<Scalar>,
}

impl Shifted {
    /// The per-input shift amounts.
    pub fn shifts(&self) -> &[Scalar] {
        &self.shifts
    }
}

impl Element for Shifted {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.downcast_ref::<Shifted>() {
            Some(o) => self.e == o.e && identical_scalars(&self.shifts, &o.shifts),
            None => false,
        }
    }

    fn as_wrapped(&self) -> Option<&dyn Wrapped> {
        Some(self)
    }
}

impl Wrapped for Shifted {
    fn child(&self) -> &Elem {
        &self.e
    }

    fn render_wrap(&self, child: String, formatter: &dyn Formatter) -> String {
        let shifts: Vec<String> = self.shifts.iter().map(|s| formatter.scalar(s)).collect();
        format!("{} shift {}", child, squeeze(&shifts))
    }
}

/// Shifts a function's inputs.
///
/// Shifting a shifted function adds the amounts, broadcasting a single amount across the other
/// list. Neutral elements are fixed points.
pub fn shift(a: &Elem, shifts: &[Scalar]) -> Result<Elem, Error> {
    expect_function(a, "shifting")?;
    if is_neutral(a) {
        return Ok(a.clone());
    }
    if let Some(prev) = a.downcast_ref::<Shifted>() {
        let merged = broadcast(|x, y| x + y, prev.shifts(), shifts)?;
        return shift(prev.child(), &merged);
    }
    let tag = specialize(a, tags().shifted)?;
    Ok(Elem::new(Shifted { tag, e: a.clone(), shifts: shifts.to_vec() }))
}
