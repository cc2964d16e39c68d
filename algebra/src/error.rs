//! Error types for the engine.
//!
//! All errors are immediate, local failures that surface to the caller synchronously. Ambiguity
//! in a rule set or a specialization search is a registration error to be fixed by the extender,
//! never a condition to paper over with a guessed result.

use rug::Integer;
use thiserror::Error;

/// Errors produced while combining, specializing, or inspecting elements.
#[derive(Error, Debug)]
pub enum Error {
    /// A binary dispatch found no rule matching the runtime types of both operands.
    #[error("no applicable `{op}` rule for operand types `{lhs}` and `{rhs}`")]
    NoApplicableRule {
        /// The operation that was dispatched, such as `add` or `mul`.
        op: &'static str,

        /// The registered name of the left operand's type.
        lhs: String,

        /// The registered name of the right operand's type.
        rhs: String,
    },

    /// The specialization search found zero, or more than one, concrete type that is both a
    /// subtype of the element's algebra root and a subtype of the requested structural role.
    #[error("could not determine a unique `{role}` specialization for algebra `{algebra}`")]
    AmbiguousSpecialization {
        /// The registered name of the requested structural role.
        role: String,

        /// The registered name of the algebra root the search was seeded from.
        algebra: String,
    },

    /// A term or factor view was indexed past the end.
    #[error("index {index} out of range for element with {len} {view}")]
    IndexOutOfRange {
        /// The requested zero-based index.
        index: usize,

        /// The number of entries the view actually has.
        len: usize,

        /// Which view was indexed, `"terms"` or `"factors"`.
        view: &'static str,
    },

    /// An element was raised to a negative integer power.
    #[error("cannot raise an element to the negative power {0}")]
    InvalidExponent(Integer),

    /// The requested operation is outside the engine's rule set altogether.
    #[error("{0}")]
    UnsupportedOperation(String),
}
