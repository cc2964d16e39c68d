//! Scale values and the exact-identity comparison used for merge decisions.
//!
//! Scalars are the numeric boundary of the engine: the rewrite rules only require addition,
//! multiplication, negation, and an *exact* identity test over them. Identity is deliberately not
//! approximate equality; merging `Scaled` nodes on numerically-close-but-distinct scales would
//! silently change the expression.

use rug::{Assign, Float, Integer};
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// The number of bits of precision used for floating-point scale values.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// A scale value attached to a [`Scaled`](crate::element::Scaled) node.
#[derive(Debug, Clone)]
pub enum Scalar {
    /// An integer scale, such as the `2` produced by `a + a`.
    Integer(Integer),

    /// A floating-point scale.
    Float(Float),
}

impl Scalar {
    /// Returns true if the scalar is numerically zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Float(f) => f.is_zero(),
        }
    }

    /// Returns true if the scalar is numerically one.
    pub fn is_one(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 1,
            Self::Float(f) => *f == 1,
        }
    }

    /// If the scalar is an integer, returns a reference to it.
    ///
    /// Floats are never treated as integers here, even when they hold an integral value; an
    /// operation that requires an integer (such as raising to a power) must be given one.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Float(_) => None,
        }
    }

    /// Checks if two scalars are identical for the purpose of algebraic simplification.
    ///
    /// Integers compare by value. Floats compare by total order, so `NaN` is identical to itself
    /// and never equal to anything else. Mixed integer/float pairs compare exactly through
    /// [`rug`]'s cross-type comparison; no rounding is involved.
    pub fn identical(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.as_ord() == b.as_ord(),
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => b == a,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x.to_f64()),
        }
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Integer(int(n))
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Integer(int(n))
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(float(x))
    }
}

impl From<Integer> for Scalar {
    fn from(n: Integer) -> Self {
        Self::Integer(n)
    }
}

impl From<Float> for Scalar {
    fn from(x: Float) -> Self {
        Self::Float(x)
    }
}

/// Adds two scalars, promoting to [`Float`] when the types are mixed.
impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a + b),
            (Self::Float(a), Self::Float(b)) => Self::Float(a + b),
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                Self::Float(b + a)
            },
        }
    }
}

/// Multiplies two scalars, promoting to [`Float`] when the types are mixed.
impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(a * b),
            (Self::Float(a), Self::Float(b)) => Self::Float(a * b),
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                Self::Float(b * a)
            },
        }
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Self::Integer(n) => Self::Integer(-n),
            Self::Float(x) => Self::Float(-x),
        }
    }
}
