//! The built-in addition rules.

use super::{add, elem, mul, scalar, scaled, RuleFn};
use crate::dispatch::{proven, Table};
use crate::element::{Elem, Value};
use crate::error::Error;
use crate::registry::{ANY, ELEMENT, SCALED, ZERO};
use crate::resolve::{new_one, new_sum};
use crate::scalar::Scalar;

pub(super) fn install(table: &mut Table<RuleFn>) {
    // Generic addition.
    table.register(ELEMENT, ANY, 0, add_elem_any);
    table.register(ANY, ELEMENT, 0, add_any_elem);
    table.register(ELEMENT, ELEMENT, 0, add_elem_elem);

    // Cancel redundant zeros.
    table.register(ZERO, ANY, proven(), add_zero_any);
    table.register(ANY, ZERO, proven(), add_any_zero);
    table.register(ZERO, ZERO, proven(), add_zero_zero);
    table.register(ELEMENT, ZERO, proven(), add_elem_zero);
    table.register(ZERO, ELEMENT, proven(), add_zero_elem);

    // Group terms if possible.
    table.register(SCALED, ELEMENT, 0, add_scaled_elem);
    table.register(ELEMENT, SCALED, 0, add_elem_scaled);
    table.register(SCALED, SCALED, 0, add_scaled_scaled);
}

/// An element plus a scalar folds the scalar into a scaled One.
fn add_elem_any(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = elem(a)?;
    let b = scalar(b)?;
    if b.is_zero() {
        Ok(a.clone())
    } else {
        add(a, mul(b.clone(), new_one(a)?)?)
    }
}

fn add_any_elem(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = scalar(a)?;
    let b = elem(b)?;
    if a.is_zero() {
        Ok(b.clone())
    } else {
        add(mul(a.clone(), new_one(b)?)?, b)
    }
}

fn add_elem_elem(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = elem(a)?;
    let b = elem(b)?;
    if a == b {
        mul(2, a)
    } else {
        new_sum(a, a.clone(), b.clone())
    }
}

fn add_zero_any(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = elem(a)?;
    let b = scalar(b)?;
    if b.is_zero() {
        Ok(a.clone())
    } else {
        mul(new_one(a)?, b.clone())
    }
}

fn add_any_zero(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = scalar(a)?;
    let b = elem(b)?;
    if a.is_zero() {
        Ok(b.clone())
    } else {
        mul(a.clone(), new_one(b)?)
    }
}

fn add_zero_zero(a: &Value, _b: &Value) -> Result<Elem, Error> {
    Ok(elem(a)?.clone())
}

fn add_elem_zero(a: &Value, _b: &Value) -> Result<Elem, Error> {
    Ok(elem(a)?.clone())
}

fn add_zero_elem(_a: &Value, b: &Value) -> Result<Elem, Error> {
    Ok(elem(b)?.clone())
}

/// `s * e + e` merges into `(s + 1) * e`.
fn add_scaled_elem(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a_scaled = scaled(a)?;
    let a = elem(a)?;
    let b = elem(b)?;
    if a_scaled.child() == b {
        mul(a_scaled.scale().clone() + Scalar::from(1), b)
    } else {
        new_sum(a, a.clone(), b.clone())
    }
}

fn add_elem_scaled(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = elem(a)?;
    let b_scaled = scaled(b)?;
    let b = elem(b)?;
    if a == b_scaled.child() {
        mul(b_scaled.scale().clone() + Scalar::from(1), a)
    } else {
        new_sum(a, a.clone(), b.clone())
    }
}

fn add_scaled_scaled(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a_scaled = scaled(a)?;
    let b_scaled = scaled(b)?;
    let a = elem(a)?;
    let b = elem(b)?;
    if a_scaled.child() == b_scaled.child() {
        mul(
            a_scaled.scale().clone() + b_scaled.scale().clone(),
            a_scaled.child(),
        )
    } else {
        new_sum(a, a.clone(), b.clone())
    }
}
