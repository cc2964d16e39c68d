//! Reversing a function's arguments.

use crate::function::{expect_function, is_neutral, tags};
use crate::ops::{
    diff, select, shift, stretch, transform, Derivative, InputTransformed, Selected, Shifted,
    Stretched, TensorProduct,
};
use algebra::pretty::Formatter;
use algebra::{registry, specialize, Elem, Element, Error, TypeTag, Wrapped};
use std::any::Any;

/// A function with its arguments reversed.
#[derive(Debug)]
pub struct Reversed {
    tag: TypeTag,
    e: Elem,
}

impl Element for Reversed {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.downcast_ref::<Reversed>() {
            Some(o) => self.e == o.e,
            None => false,
        }
    }

    fn as_wrapped(&self) -> Option<&dyn Wrapped> {
        Some(self)
    }
}

impl Wrapped for Reversed {
    fn child(&self) -> &Elem {
        &self.e
    }

    fn render_wrap(&self, child: String, _formatter: &dyn Formatter) -> String {
        format!("Reversed({})", child)
    }
}

/// Reverses a function's arguments.
///
/// Reversal distributes over sums, products, and scales, cancels against itself, commutes into
/// the input-wrapping kinds by reversing their per-input arguments, and fixes the neutral
/// elements. Only a bare function ends up wrapped in a [`Reversed`] node.
pub fn reverse(a: &Elem) -> Result<Elem, Error> {
    expect_function(a, "argument reversal")?;
    if is_neutral(a) {
        return Ok(a.clone());
    }
    if let Some(prev) = a.downcast_ref::<Reversed>() {
        return Ok(prev.child().clone());
    }
    if let Some(join) = a.as_join() {
        if registry::is_subtype(a.tag(), registry::SUM) {
            return algebra::add(reverse(join.left())?, reverse(join.right())?);
        }
        if registry::is_subtype(a.tag(), registry::PRODUCT) {
            return algebra::mul(reverse(join.left())?, reverse(join.right())?);
        }
    }
    if let Some(scaled) = a.as_scaled() {
        return algebra::mul(scaled.scale().clone(), reverse(scaled.child())?);
    }
    if let Some(prev) = a.downcast_ref::<Stretched>() {
        let mut stretches = prev.stretches().to_vec();
        stretches.reverse();
        return stretch(&reverse(prev.child())?, &stretches);
    }
    if let Some(prev) = a.downcast_ref::<Shifted>() {
        let mut shifts = prev.shifts().to_vec();
        shifts.reverse();
        return shift(&reverse(prev.child())?, &shifts);
    }
    if let Some(prev) = a.downcast_ref::<Selected>() {
        let mut dims = prev.dims().to_vec();
        dims.reverse();
        return select(&reverse(prev.child())?, &dims);
    }
    if let Some(prev) = a.downcast_ref::<InputTransformed>() {
        let names: Vec<Option<&str>> = prev.names().iter().rev().map(|n| n.as_deref()).collect();
        return transform(&reverse(prev.child())?, &names);
    }
    if let Some(prev) = a.downcast_ref::<Derivative>() {
        let mut derivs = prev.derivs().to_vec();
        derivs.reverse();
        return diff(&reverse(prev.child())?, &derivs);
    }
    if let Some(prev) = a.downcast_ref::<TensorProduct>() {
        let mut names = prev.names().to_vec();
        names.reverse();
        return Ok(TensorProduct::with_tag(a.tag(), names));
    }
    let tag = specialize(a, tags().reversed)?;
    Ok(Elem::new(Reversed { tag, e: a.clone() }))
}
