//! The element model: the closed set of structural node kinds and the handle type that ties an
//! expression tree together.
//!
//! An expression is an immutable, acyclic tree of nodes behind cheaply clonable [`Elem`] handles.
//! Operations never mutate a node; they build new ones, so subtrees may be freely shared between
//! expressions and across threads.
//!
//! # Structural kinds
//!
//! The engine knows a closed set of structural shapes: the neutral elements [`Zero`] and [`One`],
//! the single-child [`Wrapped`] kind with its scale-carrying specialization [`Scaled`], and the
//! two-child [`Join`] kind with its specializations [`Sum`] and [`Product`]. Leaf domains add
//! their own node types by implementing [`Element`] (and [`Wrapped`]/[`Join`] where the shape
//! fits) and registering a [`TypeTag`] for them. A composite node carries the tag chosen by the
//! specialization resolver, so a `Sum` built from two kernel-domain elements is tagged as the
//! kernel domain's sum type while reusing the same struct.
//!
//! # Equality
//!
//! [`Elem`] equality is *structural identity*, a deliberately conservative subset of mathematical
//! equality: reference identity by default, any-two-equal for the neutral elements, child
//! equality plus exact scale identity for [`Scaled`], and unordered child equality for [`Sum`]
//! and [`Product`] (both operations commute, so `a + b` and `b + a` must compare equal even
//! though their printed forms differ). Structural identity never reports a false positive, which
//! is what makes it safe to use for merge decisions during simplification.

use crate::error::Error;
use crate::ops;
use crate::pretty::{pretty_print, DefaultFormatter, Formatter};
use crate::registry::{self, TypeTag};
use crate::resolve;
use crate::scalar::{int, Scalar};
use rug::{Float, Integer};
use std::any::Any;
use std::fmt;
use std::ops::{Deref, Index};
use std::sync::Arc;

/// A node in an algebraic expression tree.
///
/// Implementors supply their interned [`TypeTag`], a base rendering, and optionally a structural
/// equality rule restricted to their own type. The `as_*` accessors are how the printer and the
/// rewrite rules see through the trait object to a node's structural shape; the defaults declare
/// a plain leaf.
pub trait Element: fmt::Debug + Send + Sync {
    /// The interned tag of this node's concrete type.
    fn tag(&self) -> TypeTag;

    /// Upcast for downcasting to the concrete node type.
    fn as_any(&self) -> &dyn Any;

    /// Renders the node itself, without any tree context.
    ///
    /// This is the lowest-level operation of pretty printing; composites never reach it because
    /// the printer walks through [`Wrapped`] and [`Join`] instead.
    fn render(&self, _formatter: &dyn Formatter) -> String {
        format!("{}()", registry::type_name(self.tag()))
    }

    /// Structural equality against another element.
    ///
    /// The default is `false`: two distinct leaf nodes are unrelated unless their type says
    /// otherwise. Reference identity is handled by [`Elem`]'s `PartialEq` before this is called.
    fn equals(&self, _other: &Elem) -> bool {
        false
    }

    /// The node as a single-child composite, if it is one.
    fn as_wrapped(&self) -> Option<&dyn Wrapped> {
        None
    }

    /// The node as a two-child composite, if it is one.
    fn as_join(&self) -> Option<&dyn Join> {
        None
    }

    /// The node as a scale-carrying composite, if it is one.
    fn as_scaled(&self) -> Option<&Scaled> {
        None
    }
}

/// An element owning exactly one child.
pub trait Wrapped: Element {
    /// The wrapped child.
    fn child(&self) -> &Elem;

    /// Renders the node around its already-rendered child.
    fn render_wrap(&self, child: String, formatter: &dyn Formatter) -> String;
}

/// An element owning exactly two children.
pub trait Join: Element {
    /// The first child.
    fn left(&self) -> &Elem;

    /// The second child.
    fn right(&self) -> &Elem;

    /// Renders the node around its already-rendered children.
    fn render_join(&self, left: String, right: String, formatter: &dyn Formatter) -> String;
}

/// A shared handle to an immutable expression node.
#[derive(Clone)]
pub struct Elem(Arc<dyn Element>);

impl Elem {
    /// Wraps a node into a shared handle.
    pub fn new(element: impl Element + 'static) -> Self {
        Self(Arc::new(element))
    }

    /// Attempts to downcast the node to a concrete type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Returns true if both handles point at the very same node.
    pub fn ptr_eq(&self, other: &Elem) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Renders the expression with the given scale formatter.
    pub fn display(&self, formatter: &dyn Formatter) -> String {
        pretty_print(self, formatter)
    }

    /// The number of terms in the flattened sum view of this expression.
    ///
    /// A non-sum element is its own single term; a sum's count is the sum of its children's
    /// counts, so a binary tree of sums exposes a flat list of summands.
    pub fn num_terms(&self) -> usize {
        match self.as_join() {
            Some(join) if registry::is_subtype(self.tag(), registry::SUM) => {
                join.left().num_terms() + join.right().num_terms()
            },
            _ => 1,
        }
    }

    /// Returns the `i`-th term of the flattened sum view.
    pub fn term(&self, i: usize) -> Result<Elem, Error> {
        if let Some(join) = self.as_join() {
            if registry::is_subtype(self.tag(), registry::SUM) {
                let len = self.num_terms();
                if i >= len {
                    return Err(Error::IndexOutOfRange { index: i, len, view: "terms" });
                }
                let left = join.left().num_terms();
                return if i < left {
                    join.left().term(i)
                } else {
                    join.right().term(i - left)
                };
            }
        }
        if i == 0 {
            Ok(self.clone())
        } else {
            Err(Error::IndexOutOfRange { index: i, len: 1, view: "terms" })
        }
    }

    /// The number of factors in the flattened product view of this expression.
    ///
    /// A scaled element contributes its scale as a factor in front of its child's factors.
    pub fn num_factors(&self) -> usize {
        if let Some(join) = self.as_join() {
            if registry::is_subtype(self.tag(), registry::PRODUCT) {
                return join.left().num_factors() + join.right().num_factors();
            }
        }
        if let Some(scaled) = self.as_scaled() {
            return scaled.child().num_factors() + 1;
        }
        1
    }

    /// Returns the `i`-th factor of the flattened product view.
    ///
    /// The factor of a [`Scaled`] node at index 0 is its scale, which is why this view yields
    /// [`Value`]s rather than elements.
    pub fn factor(&self, i: usize) -> Result<Value, Error> {
        if let Some(join) = self.as_join() {
            if registry::is_subtype(self.tag(), registry::PRODUCT) {
                let len = self.num_factors();
                if i >= len {
                    return Err(Error::IndexOutOfRange { index: i, len, view: "factors" });
                }
                let left = join.left().num_factors();
                return if i < left {
                    join.left().factor(i)
                } else {
                    join.right().factor(i - left)
                };
            }
        }
        if let Some(scaled) = self.as_scaled() {
            let len = self.num_factors();
            if i >= len {
                return Err(Error::IndexOutOfRange { index: i, len, view: "factors" });
            }
            return if i == 0 {
                Ok(Value::Scalar(scaled.scale().clone()))
            } else {
                scaled.child().factor(i - 1)
            };
        }
        if i == 0 {
            Ok(Value::Elem(self.clone()))
        } else {
            Err(Error::IndexOutOfRange { index: i, len: 1, view: "factors" })
        }
    }

    /// Raises the expression to a non-negative integer power by repeated multiplication.
    ///
    /// `e.pow(0)` is the algebra's One. Negative powers are an [`Error::InvalidExponent`];
    /// non-integer powers are an [`Error::UnsupportedOperation`].
    pub fn pow(&self, exp: impl Into<Scalar>) -> Result<Elem, Error> {
        let exp = exp.into();
        let Some(n) = exp.as_integer() else {
            return Err(Error::UnsupportedOperation(format!(
                "cannot raise an element to the non-integer power {}",
                exp
            )));
        };
        if *n < 0 {
            return Err(Error::InvalidExponent(n.clone()));
        }
        if *n == 0 {
            return resolve::new_one(self);
        }
        let mut result = self.clone();
        let mut remaining = n.clone() - 1;
        while remaining > 0 {
            result = ops::mul(result, self.clone())?;
            remaining -= 1;
        }
        Ok(result)
    }
}

impl Deref for Elem {
    type Target = dyn Element;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for Elem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Elem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", pretty_print(self, &DefaultFormatter))
    }
}

impl PartialEq for Elem {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.equals(other)
    }
}

/// Indexes directly into a composite's children: a [`Wrapped`] node has child 0, a [`Join`] node
/// has children 0 and 1.
///
/// Panics when the index is out of range or the element is a leaf; this mirrors slice indexing
/// and keeps expression-building code readable. Use [`Elem::term`]/[`Elem::factor`] for the
/// fallible flattened views.
impl Index<usize> for Elem {
    type Output = Elem;

    fn index(&self, i: usize) -> &Elem {
        if let Some(wrapped) = self.as_wrapped() {
            if i == 0 {
                return wrapped.child();
            }
            panic!("{}", Error::IndexOutOfRange { index: i, len: 1, view: "children" });
        }
        if let Some(join) = self.as_join() {
            return match i {
                0 => join.left(),
                1 => join.right(),
                _ => panic!("{}", Error::IndexOutOfRange { index: i, len: 2, view: "children" }),
            };
        }
        panic!(
            "element of type `{}` has no children to index",
            registry::type_name(self.tag())
        )
    }
}

/// An operand: either an element or a bare scale value.
///
/// Scalars participate in `add`/`mul` dispatch (tagged [`registry::SCALAR`]) so rewrite rules can
/// pull them into the scale slot of a [`Scaled`] node, and they appear in the factor view of
/// scaled elements.
#[derive(Debug, Clone)]
pub enum Value {
    /// An element operand.
    Elem(Elem),

    /// A bare scalar operand.
    Scalar(Scalar),
}

impl Value {
    /// The dispatch tag of the operand.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Elem(e) => e.tag(),
            Self::Scalar(_) => registry::SCALAR,
        }
    }

    /// The operand as an element, if it is one.
    pub fn as_elem(&self) -> Option<&Elem> {
        match self {
            Self::Elem(e) => Some(e),
            Self::Scalar(_) => None,
        }
    }

    /// The operand as a scalar, if it is one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Elem(_) => None,
            Self::Scalar(s) => Some(s),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Elem(a), Self::Elem(b)) => a == b,
            (Self::Scalar(a), Self::Scalar(b)) => a.identical(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elem(e) => write!(f, "{}", e),
            Self::Scalar(s) => write!(f, "{}", s),
        }
    }
}

impl From<Elem> for Value {
    fn from(e: Elem) -> Self {
        Self::Elem(e)
    }
}

impl From<&Elem> for Value {
    fn from(e: &Elem) -> Self {
        Self::Elem(e.clone())
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Scalar(x.into())
    }
}

impl From<Integer> for Value {
    fn from(n: Integer) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<Float> for Value {
    fn from(x: Float) -> Self {
        Self::Scalar(x.into())
    }
}

/// The additive neutral element. Any two `Zero`s compare equal.
#[derive(Debug)]
pub struct Zero {
    tag: TypeTag,
}

impl Zero {
    /// Creates a `Zero` of the base algebra.
    pub fn new() -> Elem {
        Self::with_tag(registry::ZERO)
    }

    pub(crate) fn with_tag(tag: TypeTag) -> Elem {
        Elem::new(Self { tag })
    }
}

impl Element for Zero {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render(&self, _formatter: &dyn Formatter) -> String {
        "0".to_string()
    }

    fn equals(&self, other: &Elem) -> bool {
        registry::is_subtype(other.tag(), registry::ZERO)
    }
}

/// The multiplicative neutral element. Any two `One`s compare equal.
#[derive(Debug)]
pub struct One {
    tag: TypeTag,
}

impl One {
    /// Creates a `One` of the base algebra.
    pub fn new() -> Elem {
        Self::with_tag(registry::ONE)
    }

    pub(crate) fn with_tag(tag: TypeTag) -> Elem {
        Elem::new(Self { tag })
    }
}

impl Element for One {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render(&self, _formatter: &dyn Formatter) -> String {
        "1".to_string()
    }

    fn equals(&self, other: &Elem) -> bool {
        registry::is_subtype(other.tag(), registry::ONE)
    }
}

/// A scaled element: a child together with a scale factor.
///
/// A fully simplified expression never nests a `Scaled` directly inside another, and never scales
/// a bare `Zero`; the rewrite rules collapse both shapes on construction.
#[derive(Debug)]
pub struct Scaled {
    tag: TypeTag,
    e: Elem,
    scale: Scalar,
}

impl Scaled {
    /// Creates a scaled element of the base algebra.
    pub fn new(e: Elem, scale: impl Into<Scalar>) -> Elem {
        Self::with_tag(registry::SCALED, e, scale.into())
    }

    pub(crate) fn with_tag(tag: TypeTag, e: Elem, scale: Scalar) -> Elem {
        Elem::new(Self { tag, e, scale })
    }

    /// The wrapped child.
    pub fn child(&self) -> &Elem {
        &self.e
    }

    /// The scale factor.
    pub fn scale(&self) -> &Scalar {
        &self.scale
    }
}

impl Element for Scaled {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.as_scaled() {
            Some(scaled) => self.e == *scaled.child() && self.scale.identical(scaled.scale()),
            None => false,
        }
    }

    fn as_wrapped(&self) -> Option<&dyn Wrapped> {
        Some(self)
    }

    fn as_scaled(&self) -> Option<&Scaled> {
        Some(self)
    }
}

impl Wrapped for Scaled {
    fn child(&self) -> &Elem {
        &self.e
    }

    fn render_wrap(&self, child: String, formatter: &dyn Formatter) -> String {
        format!("{} * {}", formatter.scalar(&self.scale), child)
    }
}

/// A sum of two elements. Equality is unordered; the printed order is preserved.
#[derive(Debug)]
pub struct Sum {
    tag: TypeTag,
    e1: Elem,
    e2: Elem,
}

impl Sum {
    /// Creates a sum of the base algebra.
    pub fn new(e1: Elem, e2: Elem) -> Elem {
        Self::with_tag(registry::SUM, e1, e2)
    }

    pub(crate) fn with_tag(tag: TypeTag, e1: Elem, e2: Elem) -> Elem {
        Elem::new(Self { tag, e1, e2 })
    }
}

impl Element for Sum {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.as_join() {
            Some(join) if registry::is_subtype(other.tag(), registry::SUM) => {
                (self.e1 == *join.left() && self.e2 == *join.right())
                    || (self.e1 == *join.right() && self.e2 == *join.left())
            },
            _ => false,
        }
    }

    fn as_join(&self) -> Option<&dyn Join> {
        Some(self)
    }
}

impl Join for Sum {
    fn left(&self) -> &Elem {
        &self.e1
    }

    fn right(&self) -> &Elem {
        &self.e2
    }

    fn render_join(&self, left: String, right: String, _formatter: &dyn Formatter) -> String {
        format!("{} + {}", left, right)
    }
}

/// A product of two elements. Equality is unordered; the printed order is preserved.
#[derive(Debug)]
pub struct Product {
    tag: TypeTag,
    e1: Elem,
    e2: Elem,
}

impl Product {
    /// Creates a product of the base algebra.
    pub fn new(e1: Elem, e2: Elem) -> Elem {
        Self::with_tag(registry::PRODUCT, e1, e2)
    }

    pub(crate) fn with_tag(tag: TypeTag, e1: Elem, e2: Elem) -> Elem {
        Elem::new(Self { tag, e1, e2 })
    }
}

impl Element for Product {
    fn tag(&self) -> TypeTag {
        self.tag
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &Elem) -> bool {
        match other.as_join() {
            Some(join) if registry::is_subtype(other.tag(), registry::PRODUCT) => {
                (self.e1 == *join.left() && self.e2 == *join.right())
                    || (self.e1 == *join.right() && self.e2 == *join.left())
            },
            _ => false,
        }
    }

    fn as_join(&self) -> Option<&dyn Join> {
        Some(self)
    }
}

impl Join for Product {
    fn left(&self) -> &Elem {
        &self.e1
    }

    fn right(&self) -> &Elem {
        &self.e2
    }

    fn render_join(&self, left: String, right: String, _formatter: &dyn Formatter) -> String {
        format!("{} * {}", left, right)
    }
}

fn do_add(a: Value, b: Value) -> Elem {
    ops::add(a, b).unwrap_or_else(|e| panic!("{}", e))
}

fn do_mul(a: Value, b: Value) -> Elem {
    ops::mul(a, b).unwrap_or_else(|e| panic!("{}", e))
}

fn do_sub(a: Value, b: Value) -> Elem {
    let negated = match b {
        Value::Scalar(s) => Value::Scalar(-s),
        Value::Elem(e) => Value::Elem(do_mul(Value::from(int(-1)), Value::Elem(e))),
    };
    do_add(a, negated)
}

/// The operator impls delegate to [`ops::add`]/[`ops::mul`] and panic on dispatch failure: a
/// missing or ambiguous rule is a registration error, not a runtime condition. Use the fallible
/// functions directly to handle it as an error instead.
macro_rules! forward_binary_op {
    ($op:ident, $method:ident, $helper:ident) => {
        impl<R: Into<Value>> std::ops::$op<R> for Elem {
            type Output = Elem;

            fn $method(self, rhs: R) -> Elem {
                $helper(self.into(), rhs.into())
            }
        }

        impl<R: Into<Value>> std::ops::$op<R> for &Elem {
            type Output = Elem;

            fn $method(self, rhs: R) -> Elem {
                $helper(self.into(), rhs.into())
            }
        }

        impl std::ops::$op<Elem> for i64 {
            type Output = Elem;

            fn $method(self, rhs: Elem) -> Elem {
                $helper(self.into(), rhs.into())
            }
        }

        impl std::ops::$op<&Elem> for i64 {
            type Output = Elem;

            fn $method(self, rhs: &Elem) -> Elem {
                $helper(self.into(), rhs.into())
            }
        }

        impl std::ops::$op<Elem> for f64 {
            type Output = Elem;

            fn $method(self, rhs: Elem) -> Elem {
                $helper(self.into(), rhs.into())
            }
        }

        impl std::ops::$op<&Elem> for f64 {
            type Output = Elem;

            fn $method(self, rhs: &Elem) -> Elem {
                $helper(self.into(), rhs.into())
            }
        }

        impl std::ops::$op<Elem> for Scalar {
            type Output = Elem;

            fn $method(self, rhs: Elem) -> Elem {
                $helper(self.into(), rhs.into())
            }
        }

        impl std::ops::$op<&Elem> for Scalar {
            type Output = Elem;

            fn $method(self, rhs: &Elem) -> Elem {
                $helper(self.into(), rhs.into())
            }
        }
    };
}

forward_binary_op!(Add, add, do_add);
forward_binary_op!(Mul, mul, do_mul);
forward_binary_op!(Sub, sub, do_sub);

impl std::ops::Neg for Elem {
    type Output = Elem;

    fn neg(self) -> Elem {
        do_mul(Value::from(int(-1)), self.into())
    }
}

impl std::ops::Neg for &Elem {
    type Output = Elem;

    fn neg(self) -> Elem {
        do_mul(Value::from(int(-1)), self.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::register_type;
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Var {
        tag: TypeTag,
        name: &'static str,
    }

    impl Element for Var {
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
            other.downcast_ref::<Var>().map(|v| v.name == self.name).unwrap_or(false)
        }
    }

    static VAR: Lazy<TypeTag> = Lazy::new(|| register_type("Var", &[registry::ELEMENT]));

    fn var(name: &'static str) -> Elem {
        Elem::new(Var { tag: *VAR, name })
    }

    #[test]
    fn equality_one_zero() {
        assert_eq!(One::new(), One::new());
        assert_ne!(One::new(), Zero::new());
        assert_eq!(Zero::new(), Zero::new());
    }

    #[test]
    fn equality_is_reference_identity_by_default() {
        #[derive(Debug)]
        struct Opaque {
            tag: TypeTag,
        }

        impl Element for Opaque {
            fn tag(&self) -> TypeTag {
                self.tag
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        let e1 = Elem::new(Opaque { tag: registry::ELEMENT });
        let e2 = Elem::new(Opaque { tag: registry::ELEMENT });
        assert_eq!(e1, e1.clone());
        assert_ne!(e1, e2);
    }

    #[test]
    fn equality_scaled() {
        let a = var("a");
        assert_eq!(Scaled::new(One::new(), 1), Scaled::new(One::new(), 1));
        assert_ne!(Scaled::new(One::new(), 2), Scaled::new(One::new(), 1));
        assert_ne!(Scaled::new(Zero::new(), 1), Scaled::new(One::new(), 1));
        // Scale identity is exact, never approximate.
        assert_ne!(Scaled::new(a.clone(), 2), Scaled::new(a, 2.5));
    }

    #[test]
    fn equality_join_is_unordered() {
        assert_eq!(
            Sum::new(One::new(), Zero::new()),
            Sum::new(One::new(), Zero::new()),
        );
        assert_eq!(
            Sum::new(One::new(), Zero::new()),
            Sum::new(Zero::new(), One::new()),
        );
        assert_ne!(
            Sum::new(One::new(), Zero::new()),
            Sum::new(One::new(), One::new()),
        );

        assert_eq!(
            Product::new(One::new(), Zero::new()),
            Product::new(Zero::new(), One::new()),
        );
        assert_ne!(
            Product::new(One::new(), Zero::new()),
            Product::new(One::new(), One::new()),
        );

        // A sum is never equal to a product, even over equal children.
        assert_ne!(
            Sum::new(One::new(), Zero::new()),
            Product::new(One::new(), Zero::new()),
        );
    }

    #[test]
    fn indexing_composites() {
        let a = var("a");
        let b = var("b");

        let sum = Sum::new(a.clone(), b.clone());
        assert_eq!(sum[0], a);
        assert_eq!(sum[1], b);

        let scaled = Scaled::new(a.clone(), 5);
        assert_eq!(scaled[0], a);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn indexing_join_out_of_range() {
        let sum = Sum::new(var("a"), var("b"));
        let _ = &sum[2];
    }

    #[test]
    #[should_panic(expected = "no children")]
    fn indexing_leaf_panics() {
        let a = var("a");
        let _ = &a[0];
    }

    #[test]
    fn term_view_flattens() {
        let a = var("a");
        let b = var("b");
        let c = var("c");
        let e = Sum::new(Sum::new(a.clone(), b.clone()), c.clone());

        assert_eq!(e.num_terms(), 3);
        assert_eq!(e.term(0).unwrap(), a);
        assert_eq!(e.term(1).unwrap(), b);
        assert_eq!(e.term(2).unwrap(), c);
        assert!(matches!(
            e.term(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3, .. })
        ));
        assert!(matches!(a.term(1), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn factor_view_includes_scale() {
        let a = var("a");
        let b = var("b");
        let e = Product::new(Scaled::new(a.clone(), 2), b.clone());

        assert_eq!(e.num_factors(), 3);
        assert_eq!(e.factor(0).unwrap().to_string(), "2");
        assert_eq!(e.factor(1).unwrap(), Value::Elem(a));
        assert_eq!(e.factor(2).unwrap(), Value::Elem(b));
        assert!(matches!(
            e.factor(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3, .. })
        ));
    }
}
