#![allow(dead_code)]

use algebra::pretty::Formatter;
use algebra::{register_type, Elem, Element, TypeTag};
use once_cell::sync::Lazy;
use std::any::Any;

/// An atomic test element. Two symbols are equal exactly when they share a type tag, so every
/// `a()` equals every other `a()` but never a `b()`.
#[derive(Debug)]
pub struct Sym {
    tag: TypeTag,
    name: &'static str,
}

impl Element for Sym {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render(&self, _formatter: &dyn Formatter) -> String {
        self.name.to_string()
    }

    fn equals(&self, other: &Elem) -> bool {
        other
            .downcast_ref::<Sym>()
            .map(|sym| sym.tag == self.tag)
            .unwrap_or(false)
    }
}

static A_TAG: Lazy<TypeTag> = Lazy::new(|| register_type("A", &[]));
static B_TAG: Lazy<TypeTag> = Lazy::new(|| register_type("B", &[]));
static C_TAG: Lazy<TypeTag> = Lazy::new(|| register_type("C", &[]));

pub fn a() -> Elem {
    Elem::new(Sym { tag: *A_TAG, name: "a" })
}

pub fn b() -> Elem {
    Elem::new(Sym { tag: *B_TAG, name: "b" })
}

pub fn c() -> Elem {
    Elem::new(Sym { tag: *C_TAG, name: "c" })
}
