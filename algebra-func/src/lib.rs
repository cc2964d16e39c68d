//! Function-domain elements for the [`algebra`] engine.
//!
//! This crate registers a `Function` algebra root and the element kinds that operate on a
//! function's inputs: stretching, shifting, selecting feature dimensions, input transforms,
//! derivatives, argument reversal, and tensor products of per-input functions. Because the
//! domain registers its own algebra, combining functions with `+` and `*` builds function-tagged
//! sums, products, and scaled elements, and all of the engine's cancellation and grouping rules
//! apply unchanged:
//!
//! ```
//! use algebra::Scalar;
//! use algebra_func::{FunctionExt, TensorProduct};
//!
//! let f = TensorProduct::new(["f1"]);
//! let g = f.stretch(&[Scalar::from(2)]).unwrap().stretch(&[Scalar::from(3)]).unwrap();
//! assert_eq!(g.to_string(), "f1 > 6");
//! ```
//!
//! Each operation has a free function (fallible) and a method on [`FunctionExt`]. Operations on
//! elements outside the function algebra fail with
//! [`Error::UnsupportedOperation`](algebra::Error::UnsupportedOperation).

pub mod function;
pub mod ops;
mod util;

pub use function::{tags, FunctionExt, FunctionTags};
pub use ops::{
    diff, reverse, select, shift, stretch, transform, Derivative, InputTransformed, Reversed,
    Selected, Shifted, Stretched, TensorProduct,
};
