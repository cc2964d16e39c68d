//! The function operations and the element kinds they build.
//!
//! Each operation follows the same pattern: it refuses non-function operands, leaves neutral
//! elements untouched, merges with an existing wrapper of its own kind where an identity allows
//! it, and otherwise wraps the function in its element kind tagged for the function's algebra.

pub mod diff;
pub mod reverse;
pub mod select;
pub mod shift;
pub mod stretch;
pub mod tensor;
pub mod transform;

pub use diff::{diff, Derivative};
pub use reverse::{reverse, Reversed};
pub use select::{select, Selected};
pub use shift::{shift, Shifted};
pub use stretch::{stretch, Stretched};
pub use tensor::TensorProduct;
pub use transform::{transform, InputTransformed};
