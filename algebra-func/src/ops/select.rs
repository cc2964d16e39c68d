//! Selecting dimensions of a function's input features.

use crate::function::{expect_function, is_neutral, tags};
use crate::util::squeeze;
use algebra::pretty::Formatter;
use algebra::{specialize, Elem, Element, Error, TypeTag, Wrapped};
use std::any::Any;

/// A function with particular dimensions of its input features selected.
///
/// Each input carries either a list of dimension indices or `None` to select all of them.
#[derive(Debug)]
pub struct Selected {
    tag: TypeTag,
    e: Elem,
    dims: Vec<Option<Vec<i64>>>,
}

impl Selected {
    /// The per-input selected dimensions.
    pub fn dims(&self) -> &[Option<Vec<i64>>] {
        &self.dims
    }
}

fn dims_str(dims: &Option<Vec<i64>>) -> String {
    match dims {
        None => "None".to_string(),
        Some(ds) => format!(
            "[{}]",
            ds.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", ")
        ),
    }
}

impl Element for Selected {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.downcast_ref::<Selected>() {
            Some(o) => self.e == o.e && self.dims == o.dims,
            None => false,
        }
    }

    fn as_wrapped(&self) -> Option<&dyn Wrapped> {
        Some(self)
    }
}

impl Wrapped for Selected {
    fn child(&self) -> &Elem {
        &self.e
    }

    fn render_wrap(&self, child: String, _formatter: &dyn Formatter) -> String {
        let dims: Vec<String> = self.dims.iter().map(dims_str).collect();
        format!("{} : {}", child, squeeze(&dims))
    }
}

/// Selects dimensions of a function's input features. Neutral elements are fixed points.
pub fn select(a: &Elem, dims: &[Option<Vec<i64>>]) -> Result<Elem, Error> {
    expect_function(a, "selection")?;
    if is_neutral(a) {
        return Ok(a.clone());
    }
    let tag = specialize(a, tags().selected)?;
    Ok(Elem::new(Selected { tag, e: a.clone(), dims: dims.to_vec() }))
}
