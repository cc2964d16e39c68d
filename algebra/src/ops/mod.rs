//! The binary operations `add` and `mul` and their rewrite-rule tables.
//!
//! Both operations are driven entirely by double dispatch: a rule is a plain function from two
//! operands to a result, registered against a pair of pattern tags in a process-wide
//! [`Table`]. The built-in rules fall into three layers, registered in this order:
//!
//! 1. *Generic* rules that build the structural result (`Sum`, `Product`, `Scaled`) or pull a
//!    bare scalar into a scale slot.
//! 2. *Cancellation* rules for the neutral elements, registered at [`proven`] precedence so
//!    they win against any structurally tied rule.
//! 3. *Grouping* rules that merge scales, so `a + a` becomes `2 * a` and `2 * (3 * a)` becomes
//!    `6 * a`.
//!
//! Rules recurse through [`add`] and [`mul`] themselves, so the lookup copies the rule out of
//! the table before invoking it and never holds the table lock across a rule body. A domain may
//! extend either table through [`register_add_rule`]/[`register_mul_rule`].

mod add;
mod mul;

use crate::dispatch::Table;
use crate::element::{Elem, Scaled, Value};
use crate::error::Error;
use crate::registry::{self, TypeTag};
use crate::scalar::Scalar;
use once_cell::sync::Lazy;
use std::sync::RwLock;

/// A rewrite rule: combines two operands into an element, or fails.
pub type RuleFn = fn(&Value, &Value) -> Result<Elem, Error>;

static ADD_RULES: Lazy<RwLock<Table<RuleFn>>> = Lazy::new(|| {
    let mut table = Table::new("add");
    add::install(&mut table);
    RwLock::new(table)
});

static MUL_RULES: Lazy<RwLock<Table<RuleFn>>> = Lazy::new(|| {
    let mut table = Table::new("mul");
    mul::install(&mut table);
    RwLock::new(table)
});

fn dispatch(table: &RwLock<Table<RuleFn>>, a: Value, b: Value) -> Result<Elem, Error> {
    let rule = {
        let table = table.read().unwrap();
        table.lookup(a.tag(), b.tag()).ok_or_else(|| Error::NoApplicableRule {
            op: table.op(),
            lhs: registry::type_name(a.tag()),
            rhs: registry::type_name(b.tag()),
        })?
    };
    rule(&a, &b)
}

/// Adds two operands, simplifying through the registered `add` rules.
pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> Result<Elem, Error> {
    dispatch(&ADD_RULES, a.into(), b.into())
}

/// Multiplies two operands, simplifying through the registered `mul` rules.
pub fn mul(a: impl Into<Value>, b: impl Into<Value>) -> Result<Elem, Error> {
    dispatch(&MUL_RULES, a.into(), b.into())
}

/// Registers an `add` rule for the given pair of pattern tags.
pub fn register_add_rule(lhs: TypeTag, rhs: TypeTag, precedence: i32, rule: RuleFn) {
    ADD_RULES.write().unwrap().register(lhs, rhs, precedence, rule);
}

/// Registers a `mul` rule for the given pair of pattern tags.
pub fn register_mul_rule(lhs: TypeTag, rhs: TypeTag, precedence: i32, rule: RuleFn) {
    MUL_RULES.write().unwrap().register(lhs, rhs, precedence, rule);
}

/// Extracts the element a rule's pattern promised.
fn elem(v: &Value) -> Result<&Elem, Error> {
    v.as_elem().ok_or_else(|| {
        Error::UnsupportedOperation(format!("expected an element operand, found `{}`", v))
    })
}

/// Extracts the scalar a rule's pattern promised.
fn scalar(v: &Value) -> Result<&Scalar, Error> {
    v.as_scalar().ok_or_else(|| {
        Error::UnsupportedOperation(format!("expected a scalar operand, found `{}`", v))
    })
}

/// Extracts the scaled element a rule's pattern promised.
fn scaled(v: &Value) -> Result<&Scaled, Error> {
    elem(v)?.as_scaled().ok_or_else(|| {
        Error::UnsupportedOperation(format!("expected a scaled operand, found `{}`", v))
    })
}
