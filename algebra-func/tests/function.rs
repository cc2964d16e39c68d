//! Behavior of the function operations: rendering, grouping, cancellation, and equality.

use algebra::pretty::Formatter;
use algebra::{new_one, new_zero, register_type, Elem, Element, Error, Scalar, TypeTag};
use algebra_func::{diff, reverse, select, shift, stretch, transform};
use algebra_func::{tags, FunctionExt, TensorProduct};
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use std::any::Any;

/// An atomic test function. Two instances are equal exactly when they share a type tag.
#[derive(Debug)]
struct Fun {
    tag: TypeTag,
    name: &'static str,
}

impl Element for Fun {
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
            .downcast_ref::<Fun>()
            .map(|fun| fun.tag == self.tag)
            .unwrap_or(false)
    }
}

static F_TAG: Lazy<TypeTag> = Lazy::new(|| register_type("F", &[tags().function]));
static G_TAG: Lazy<TypeTag> = Lazy::new(|| register_type("G", &[tags().function]));

fn f() -> Elem {
    Elem::new(Fun { tag: *F_TAG, name: "f" })
}

fn g() -> Elem {
    Elem::new(Fun { tag: *G_TAG, name: "g" })
}

fn s(n: i64) -> Scalar {
    Scalar::from(n)
}

fn one() -> Elem {
    new_one(&f()).unwrap()
}

fn zero() -> Elem {
    new_zero(&f()).unwrap()
}

#[test]
fn stretch_rendering_and_grouping() {
    assert!(matches!(
        stretch(&algebra::One::new(), &[s(1)]),
        Err(Error::UnsupportedOperation(_))
    ));

    assert_eq!(f().stretch(&[s(5)]).unwrap().to_string(), "f > 5");
    assert_eq!(f().stretch(&[s(5), s(6)]).unwrap().to_string(), "f > (5, 6)");

    // Stretching a stretched function multiplies the extents, broadcasting as needed.
    let e = f().stretch(&[s(2)]).unwrap().stretch(&[s(3)]).unwrap();
    assert_eq!(e.to_string(), "f > 6");
    let e = f().stretch(&[s(2), s(3)]).unwrap().stretch(&[s(4)]).unwrap();
    assert_eq!(e.to_string(), "f > (8, 12)");
    let e = f().stretch(&[s(4)]).unwrap().stretch(&[s(2), s(3)]).unwrap();
    assert_eq!(e.to_string(), "f > (8, 12)");

    assert_eq!(one().stretch(&[s(5)]).unwrap().to_string(), "1");
    assert_eq!(zero().stretch(&[s(5)]).unwrap().to_string(), "0");
}

#[test]
fn stretch_equality() {
    assert_eq!(f().stretch(&[s(4)]).unwrap(), f().stretch(&[s(4)]).unwrap());
    assert_ne!(f().stretch(&[s(4)]).unwrap(), f().stretch(&[s(4), s(4)]).unwrap());
    assert_ne!(f().stretch(&[s(4)]).unwrap(), f().stretch(&[s(4), s(5)]).unwrap());
    assert_ne!(f().stretch(&[s(4)]).unwrap(), g().stretch(&[s(4)]).unwrap());
    assert_ne!(f().stretch(&[s(4)]).unwrap(), f().shift(&[s(4)]).unwrap());
}

#[test]
fn shift_rendering_and_grouping() {
    assert!(matches!(
        shift(&algebra::One::new(), &[s(1)]),
        Err(Error::UnsupportedOperation(_))
    ));

    assert_eq!(f().shift(&[s(5)]).unwrap().to_string(), "f shift 5");
    assert_eq!(f().shift(&[s(5), s(6)]).unwrap().to_string(), "f shift (5, 6)");

    // Shifting a shifted function adds the amounts.
    let e = f().shift(&[s(2)]).unwrap().shift(&[s(3)]).unwrap();
    assert_eq!(e.to_string(), "f shift 5");
    let e = f().shift(&[s(2), s(3)]).unwrap().shift(&[s(4)]).unwrap();
    assert_eq!(e.to_string(), "f shift (6, 7)");
    let e = f().shift(&[s(4)]).unwrap().shift(&[s(2), s(3)]).unwrap();
    assert_eq!(e.to_string(), "f shift (6, 7)");

    assert_eq!(one().shift(&[s(5)]).unwrap().to_string(), "1");
    assert_eq!(zero().shift(&[s(5)]).unwrap().to_string(), "0");
}

#[test]
fn select_rendering() {
    assert!(matches!(
        select(&algebra::One::new(), &[Some(vec![1])]),
        Err(Error::UnsupportedOperation(_))
    ));

    assert_eq!(f().select(&[Some(vec![1])]).unwrap().to_string(), "f : [1]");
    assert_eq!(
        f().select(&[Some(vec![1]), Some(vec![2]), Some(vec![3, 4, 5])])
            .unwrap()
            .to_string(),
        "f : ([1], [2], [3, 4, 5])"
    );
    assert_eq!(
        f().select(&[None, Some(vec![2])]).unwrap().to_string(),
        "f : (None, [2])"
    );

    assert_eq!(one().select(&[Some(vec![5])]).unwrap().to_string(), "1");
    assert_eq!(zero().select(&[Some(vec![5])]).unwrap().to_string(), "0");
}

#[test]
fn select_equality() {
    let d4 = || Some(vec![4]);
    let d5 = || Some(vec![5]);
    assert_eq!(f().select(&[d4()]).unwrap(), f().select(&[d4()]).unwrap());
    assert_ne!(f().select(&[d4()]).unwrap(), f().select(&[d4(), d4()]).unwrap());
    assert_ne!(f().select(&[d4()]).unwrap(), f().select(&[d4(), d5()]).unwrap());
    assert_ne!(f().select(&[d4()]).unwrap(), g().select(&[d4()]).unwrap());
}

#[test]
fn transform_rendering() {
    assert!(matches!(
        transform(&algebra::One::new(), &[Some("f1")]),
        Err(Error::UnsupportedOperation(_))
    ));

    assert_eq!(
        f().transform(&[Some("f1")]).unwrap().to_string(),
        "f transform f1"
    );
    assert_eq!(
        f().transform(&[None, Some("f2")]).unwrap().to_string(),
        "f transform (None, f2)"
    );
    assert_eq!(
        f().transform(&[Some("f1"), Some("f2")]).unwrap().to_string(),
        "f transform (f1, f2)"
    );

    assert_eq!(one().transform(&[Some("f1")]).unwrap().to_string(), "1");
    assert_eq!(zero().transform(&[Some("f1")]).unwrap().to_string(), "0");
}

#[test]
fn diff_rendering_and_cancellation() {
    assert!(matches!(
        diff(&algebra::One::new(), &[Some(0)]),
        Err(Error::UnsupportedOperation(_))
    ));

    assert_eq!(f().diff(&[Some(0)]).unwrap().to_string(), "d(0) f");
    assert_eq!(f().diff(&[Some(0), Some(1)]).unwrap().to_string(), "d(0, 1) f");
    assert_eq!(f().diff(&[None, Some(1)]).unwrap().to_string(), "d(None, 1) f");

    // The zero function is its own derivative; the constant one differentiates to zero.
    assert_eq!(one().diff(&[Some(0)]).unwrap().to_string(), "0");
    assert_eq!(zero().diff(&[Some(0)]).unwrap().to_string(), "0");
}

#[test]
fn tensor_product_rendering() {
    assert_eq!(TensorProduct::new(["f1"]).to_string(), "f1");
    assert_eq!(TensorProduct::new(["f1", "f2"]).to_string(), "f1 x f2");

    // A multi-factor tensor product is parenthesized in any surrounding context.
    assert_eq!((2 * TensorProduct::new(["f1", "f2"])).to_string(), "2 * (f1 x f2)");
    assert_eq!((1 + TensorProduct::new(["f1", "f2"])).to_string(), "1 + (f1 x f2)");
    assert_eq!((2 * TensorProduct::new(["f1"])).to_string(), "2 * f1");
    assert_eq!((1 + TensorProduct::new(["f1"])).to_string(), "1 + f1");
}

#[test]
fn tensor_product_equality() {
    assert_eq!(TensorProduct::new(["f1"]), TensorProduct::new(["f1"]));
    assert_ne!(TensorProduct::new(["f1"]), TensorProduct::new(["f2"]));
    assert_ne!(TensorProduct::new(["f1"]), TensorProduct::new(["f1", "f1"]));
    assert_ne!(TensorProduct::new(["f1"]), TensorProduct::new(["f1", "f2"]));
    assert_eq!(TensorProduct::new(["f1", "f2"]), TensorProduct::new(["f1", "f2"]));
}

#[test]
fn function_sums_and_products_stay_in_the_algebra() {
    let e = f() + g();
    assert_eq!(e.tag(), tags().sum);
    assert_eq!(e.to_string(), "f + g");

    let e = f() * g();
    assert_eq!(e.tag(), tags().product);

    let e = 2 * f();
    assert_eq!(e.tag(), tags().scaled);

    // Cancellation rules see through the domain tags.
    assert_eq!((f() + zero()).to_string(), "f");
    assert_eq!((one() * f()).to_string(), "f");
    assert_eq!((zero() * f()).to_string(), "0");
}

#[test]
fn reverse_wraps_bare_functions() {
    assert!(matches!(
        reverse(&algebra::One::new()),
        Err(Error::UnsupportedOperation(_))
    ));

    assert_eq!(f().reverse().unwrap().to_string(), "Reversed(f)");
    assert_eq!(f().reverse().unwrap().reverse().unwrap().to_string(), "f");
    assert_eq!(one().reverse().unwrap().to_string(), "1");
    assert_eq!(zero().reverse().unwrap().to_string(), "0");

    assert_eq!(f().reverse().unwrap(), f().reverse().unwrap());
    assert_ne!(f().reverse().unwrap(), g().reverse().unwrap());
}

#[test]
fn reverse_distributes() {
    let e = (f() + g()).reverse().unwrap();
    assert_eq!(e.to_string(), "Reversed(f) + Reversed(g)");

    let e = (f() * g()).reverse().unwrap();
    assert_eq!(e.to_string(), "Reversed(f) * Reversed(g)");

    let e = (2 * f()).reverse().unwrap();
    assert_eq!(e.to_string(), "2 * Reversed(f)");
}

#[test]
fn reverse_commutes_into_wrappers() {
    let e = f().stretch(&[s(2), s(3)]).unwrap().reverse().unwrap();
    assert_eq!(e.to_string(), "Reversed(f) > (3, 2)");

    let e = f().shift(&[s(2), s(3)]).unwrap().reverse().unwrap();
    assert_eq!(e.to_string(), "Reversed(f) shift (3, 2)");

    let e = f().transform(&[Some("f1"), None]).unwrap().reverse().unwrap();
    assert_eq!(e.to_string(), "Reversed(f) transform (None, f1)");

    let e = f().diff(&[Some(0), Some(1)]).unwrap().reverse().unwrap();
    assert_eq!(e.to_string(), "d(1, 0) Reversed(f)");

    let e = reverse(&TensorProduct::new(["f1", "f2"])).unwrap();
    assert_eq!(e.to_string(), "f2 x f1");
}
