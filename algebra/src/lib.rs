//! A canonicalizing algebraic expression engine over abstract leaf elements.
//!
//! Expressions are immutable trees of [`Elem`] handles built from a closed set of structural
//! kinds (the neutral elements [`Zero`] and [`One`], scaled elements, sums, and products) plus
//! whatever leaf types a domain registers. Combining expressions with [`add`]/[`mul`] (or the
//! `+`/`*`/`-` operators) simplifies eagerly through a table of rewrite rules resolved by double
//! dispatch over the operands' registered types, so redundant zeros and ones never survive and
//! repeated terms merge into scaled elements:
//!
//! ```
//! use algebra::{One, Zero};
//!
//! let e = One::new() + Zero::new();
//! assert_eq!(e.to_string(), "1");
//!
//! let e = Zero::new() + 2;
//! assert_eq!(e.to_string(), "2 * 1");
//! ```
//!
//! Simplification is local: each combination step canonicalizes the node it builds, and the
//! result of every operation is already simplified, so no global rewrite pass exists or is
//! needed.
//!
//! # Extending the engine
//!
//! A domain introduces its own element types by implementing [`Element`] and registering a
//! [`TypeTag`] for each type with [`register_type`], mirroring the structural kinds it
//! specializes. Registering an algebra root with [`register_algebra`] makes the engine build the
//! domain's own sums, products, and neutral elements when it combines domain values; the search
//! that picks those concrete types is [`specialize`]. New rewrite and parenthesization rules are
//! added with [`register_add_rule`], [`register_mul_rule`], and [`register_paren_rule`], and a
//! rule registered at [`proven`] precedence overrides any structurally tied built-in.

pub mod dispatch;
pub mod element;
pub mod error;
pub mod ops;
pub mod pretty;
pub mod registry;
pub mod resolve;
pub mod scalar;

pub use dispatch::proven;
pub use element::{Elem, Element, Join, One, Product, Scaled, Sum, Value, Wrapped, Zero};
pub use error::Error;
pub use ops::{add, mul, register_add_rule, register_mul_rule, RuleFn};
pub use pretty::{
    pretty_print, register_paren_rule, DefaultFormatter, Formatter, ParenFn,
};
pub use registry::{register_algebra, register_type, TypeTag};
pub use resolve::{get_algebra, new_one, new_product, new_scaled, new_sum, new_zero, specialize};
pub use scalar::{float, int, Scalar, PRECISION};
