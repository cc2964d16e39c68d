//! Tensor products of per-input functions.

use crate::function::tags;
use algebra::pretty::Formatter;
use algebra::{Elem, Element, TypeTag};
use std::any::Any;

/// A function built as an outer product of one named function per input.
#[derive(Debug)]
pub struct TensorProduct {
    tag: TypeTag,
    names: Vec<String>,
}

impl TensorProduct {
    /// Creates a tensor product of the named functions.
    pub fn new<I, S>(names: I) -> Elem
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_tag(tags().tensor_product, names.into_iter().map(Into::into).collect())
    }

    pub(crate) fn with_tag(tag: TypeTag, names: Vec<String>) -> Elem {
        Elem::new(Self { tag, names })
    }

    /// The per-input function names.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Element for TensorProduct {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render(&self, _formatter: &dyn Formatter) -> String {
        if self.names.len() == 1 {
            self.names[0].clone()
        } else {
            self.names.join(" x ")
        }
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.downcast_ref::<TensorProduct>() {
            Some(o) => self.names == o.names,
            None => false,
        }
    }
}

/// A tensor product reads as one token when it has a single factor and needs parentheses in any
/// surrounding context otherwise.
pub(crate) fn needs_parens(el: &Elem, _parent: &Elem) -> bool {
    el.downcast_ref::<TensorProduct>()
        .map(|t| t.names().len() > 1)
        .unwrap_or(false)
}
