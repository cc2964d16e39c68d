//! Registration of the function algebra and the per-element operation surface.
//!
//! The function domain registers its own algebra root, so the engine's rewrite rules build
//! function-tagged sums, products, scaled elements, and neutral elements whenever they combine
//! functions. The structural kinds reuse the engine's own node structs; only the tags differ.

use crate::ops;
use algebra::registry;
use algebra::{
    proven, register_algebra, register_paren_rule, register_type, Elem, Error, Scalar, TypeTag,
};
use once_cell::sync::Lazy;

/// The interned tags of the function domain.
pub struct FunctionTags {
    /// The algebra root; every function type derives from it.
    pub function: TypeTag,

    /// The zero function.
    pub zero: TypeTag,

    /// The constant function one.
    pub one: TypeTag,

    /// The single-child function kinds derive from this.
    pub wrapped: TypeTag,

    /// A scaled function.
    pub scaled: TypeTag,

    /// The two-child function kinds derive from this.
    pub join: TypeTag,

    /// A sum of functions.
    pub sum: TypeTag,

    /// A product of functions.
    pub product: TypeTag,

    /// A function with stretched inputs.
    pub stretched: TypeTag,

    /// A function with shifted inputs.
    pub shifted: TypeTag,

    /// A function with input dimensions selected.
    pub selected: TypeTag,

    /// A function with transformed inputs.
    pub input_transformed: TypeTag,

    /// A derivative of a function.
    pub derivative: TypeTag,

    /// A function with its arguments reversed.
    pub reversed: TypeTag,

    /// An outer product of per-input functions.
    pub tensor_product: TypeTag,
}

static TAGS: Lazy<FunctionTags> = Lazy::new(|| {
    let function = register_type("Function", &[registry::ELEMENT]);
    register_algebra(function, function);

    let zero = register_type("ZeroFunction", &[function, registry::ZERO]);
    let one = register_type("OneFunction", &[function, registry::ONE]);
    let wrapped = register_type("WrappedFunction", &[function, registry::WRAPPED]);
    let scaled = register_type("ScaledFunction", &[function, registry::SCALED]);
    let join = register_type("JoinFunction", &[function, registry::JOIN]);
    let sum = register_type("SumFunction", &[function, registry::SUM]);
    let product = register_type("ProductFunction", &[function, registry::PRODUCT]);

    let stretched = register_type("StretchedFunction", &[wrapped]);
    let shifted = register_type("ShiftedFunction", &[wrapped]);
    let selected = register_type("SelectedFunction", &[wrapped]);
    let input_transformed = register_type("InputTransformedFunction", &[wrapped]);
    let derivative = register_type("DerivativeFunction", &[wrapped]);
    let reversed = register_type("ReversedFunction", &[wrapped]);
    let tensor_product = register_type("TensorProductFunction", &[function]);

    // A tensor product needs parentheses exactly when it has more than one factor, and a
    // reversed function never introduces them in either direction.
    register_paren_rule(tensor_product, function, proven(), ops::tensor::needs_parens);
    register_paren_rule(function, reversed, proven(), never_parens);
    register_paren_rule(reversed, function, proven(), never_parens);

    FunctionTags {
        function,
        zero,
        one,
        wrapped,
        scaled,
        join,
        sum,
        product,
        stretched,
        shifted,
        selected,
        input_transformed,
        derivative,
        reversed,
        tensor_product,
    }
});

fn never_parens(_el: &Elem, _parent: &Elem) -> bool {
    false
}

/// Returns the function domain's tags, registering the domain on first use.
pub fn tags() -> &'static FunctionTags {
    &TAGS
}

/// Method-style access to the function operations.
///
/// Every method requires the receiver to belong to the function algebra and fails with
/// [`Error::UnsupportedOperation`] otherwise.
pub trait FunctionExt {
    /// Stretches the function's inputs, one extent per input.
    fn stretch(&self, stretches: &[Scalar]) -> Result<Elem, Error>;

    /// Shifts the function's inputs, one amount per input.
    fn shift(&self, shifts: &[Scalar]) -> Result<Elem, Error>;

    /// Selects dimensions of the input features; `None` selects all dimensions of that input.
    fn select(&self, dims: &[Option<Vec<i64>>]) -> Result<Elem, Error>;

    /// Transforms the function's inputs; `None` leaves that input untouched.
    fn transform(&self, names: &[Option<&str>]) -> Result<Elem, Error>;

    /// Differentiates with respect to a feature dimension per input; `None` skips that input.
    fn diff(&self, derivs: &[Option<i64>]) -> Result<Elem, Error>;

    /// Reverses the function's arguments.
    fn reverse(&self) -> Result<Elem, Error>;
}

impl FunctionExt for Elem {
    fn stretch(&self, stretches: &[Scalar]) -> Result<Elem, Error> {
        ops::stretch(self, stretches)
    }

    fn shift(&self, shifts: &[Scalar]) -> Result<Elem, Error> {
        ops::shift(self, shifts)
    }

    fn select(&self, dims: &[Option<Vec<i64>>]) -> Result<Elem, Error> {
        ops::select(self, dims)
    }

    fn transform(&self, names: &[Option<&str>]) -> Result<Elem, Error> {
        ops::transform(self, names)
    }

    fn diff(&self, derivs: &[Option<i64>]) -> Result<Elem, Error> {
        ops::diff(self, derivs)
    }

    fn reverse(&self) -> Result<Elem, Error> {
        ops::reverse(self)
    }
}

/// Fails unless the element belongs to the function algebra.
pub(crate) fn expect_function(a: &Elem, op: &str) -> Result<(), Error> {
    if algebra::registry::is_subtype(a.tag(), tags().function) {
        Ok(())
    } else {
        Err(Error::UnsupportedOperation(format!(
            "{} is not implemented for `{}`",
            op,
            algebra::registry::type_name(a.tag())
        )))
    }
}

/// True if the element is a neutral element of its algebra, which every input operation leaves
/// untouched.
pub(crate) fn is_neutral(a: &Elem) -> bool {
    registry::is_subtype(a.tag(), registry::ZERO) || registry::is_subtype(a.tag(), registry::ONE)
}
