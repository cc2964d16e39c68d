//! The built-in multiplication rules.

use super::{elem, mul, scalar, scaled, RuleFn};
use crate::dispatch::{proven, Table};
use crate::element::{Elem, Value};
use crate::error::Error;
use crate::registry::{ANY, ELEMENT, ONE, SCALED, ZERO};
use crate::resolve::{new_product, new_scaled, new_zero};

pub(super) fn install(table: &mut Table<RuleFn>) {
    // Generic multiplication.
    table.register(ELEMENT, ANY, 0, mul_elem_any);
    table.register(ANY, ELEMENT, 0, mul_any_elem);
    table.register(ELEMENT, ELEMENT, 0, mul_elem_elem);

    // Cancel redundant zeros and ones.
    table.register(ZERO, ANY, proven(), mul_zero_any);
    table.register(ANY, ZERO, proven(), mul_any_zero);
    table.register(ZERO, ZERO, proven(), mul_zero_zero);
    table.register(ONE, ELEMENT, proven(), mul_one_elem);
    table.register(ELEMENT, ONE, proven(), mul_elem_one);
    table.register(ONE, ONE, proven(), mul_one_one);

    // Group factors if possible.
    table.register(ANY, SCALED, 0, mul_any_scaled);
    table.register(SCALED, ANY, 0, mul_scaled_any);
    table.register(SCALED, ELEMENT, 0, mul_scaled_elem);
    table.register(ELEMENT, SCALED, 0, mul_elem_scaled);
    table.register(SCALED, SCALED, 0, mul_scaled_scaled);
}

/// An element times a scalar becomes a scaled element, absorbing zero and one.
fn mul_elem_any(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = elem(a)?;
    let b = scalar(b)?;
    if b.is_zero() {
        new_zero(a)
    } else if b.is_one() {
        Ok(a.clone())
    } else {
        new_scaled(a, a.clone(), b.clone())
    }
}

/// Multiplication commutes; normalize to the element-first form.
fn mul_any_elem(a: &Value, b: &Value) -> Result<Elem, Error> {
    mul(b.clone(), a.clone())
}

fn mul_elem_elem(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = elem(a)?;
    let b = elem(b)?;
    new_product(a, a.clone(), b.clone())
}

fn mul_zero_any(a: &Value, _b: &Value) -> Result<Elem, Error> {
    Ok(elem(a)?.clone())
}

fn mul_any_zero(_a: &Value, b: &Value) -> Result<Elem, Error> {
    Ok(elem(b)?.clone())
}

fn mul_zero_zero(a: &Value, _b: &Value) -> Result<Elem, Error> {
    Ok(elem(a)?.clone())
}

fn mul_one_elem(_a: &Value, b: &Value) -> Result<Elem, Error> {
    Ok(elem(b)?.clone())
}

fn mul_elem_one(a: &Value, _b: &Value) -> Result<Elem, Error> {
    Ok(elem(a)?.clone())
}

fn mul_one_one(a: &Value, _b: &Value) -> Result<Elem, Error> {
    Ok(elem(a)?.clone())
}

/// A scalar times a scaled element folds into the scale.
fn mul_any_scaled(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = scalar(a)?;
    let b_scaled = scaled(b)?;
    mul(b_scaled.scale().clone() * a.clone(), b_scaled.child())
}

fn mul_scaled_any(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a_scaled = scaled(a)?;
    let b = scalar(b)?;
    mul(a_scaled.scale().clone() * b.clone(), a_scaled.child())
}

/// `(s * e1) * e2` pulls the scale out in front of the product.
fn mul_scaled_elem(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a_scaled = scaled(a)?;
    let b = elem(b)?;
    mul(a_scaled.scale().clone(), mul(a_scaled.child(), b)?)
}

fn mul_elem_scaled(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a = elem(a)?;
    let b_scaled = scaled(b)?;
    mul(b_scaled.scale().clone(), mul(a, b_scaled.child())?)
}

fn mul_scaled_scaled(a: &Value, b: &Value) -> Result<Elem, Error> {
    let a_scaled = scaled(a)?;
    let b_scaled = scaled(b)?;
    let a = elem(a)?;
    new_scaled(
        a,
        mul(a_scaled.child(), b_scaled.child())?,
        a_scaled.scale().clone() * b_scaled.scale().clone(),
    )
}
