//! Transforming a function's inputs.

use crate::function::{expect_function, is_neutral, tags};
use crate::util::squeeze;
use algebra::pretty::Formatter;
use algebra::{specialize, Elem, Element, Error, TypeTag, Wrapped};
use std::any::Any;

/// A function with its inputs transformed.
///
/// Transformations are identified by name; `None` leaves that input untouched.
#[derive(Debug)]
pub struct InputTransformed {
    tag: TypeTag,
    e: Elem,
    names: Vec<Option<String>>,
}

impl InputTransformed {
    /// The per-input transformation names.
    pub fn names(&self) -> &[Option<String>] {
        &self.names
    }
}

impl Element for InputTransformed {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.downcast_ref::<InputTransformed>() {
            Some(o) => self.e == o.e && self.names == o.names,
            None => false,
        }
    }

    fn as_wrapped(&self) -> Option<&dyn Wrapped> {
        Some(self)
    }
}

impl Wrapped for InputTransformed {
    fn child(&self) -> &Elem {
        &self.e
    }

    fn render_wrap(&self, child: String, _formatter: &dyn Formatter) -> String {
        let names: Vec<String> = self
            .names
            .iter()
            .map(|name| name.clone().unwrap_or_else(|| "None".to_string()))
            .collect();
        format!("{} transform {}", child, squeeze(&names))
    }
}

/// Transforms a function's inputs. Neutral elements are fixed points.
pub fn transform(a: &Elem, names: &[Option<&str>]) -> Result<Elem, Error> {
    expect_function(a, "input transformation")?;
    if is_neutral(a) {
        return Ok(a.clone());
    }
    let tag = specialize(a, tags().input_transformed)?;
    Ok(Elem::new(InputTransformed {
        tag,
        e: a.clone(),
        names: names.iter().map(|name| name.map(String::from)).collect(),
    }))
}
