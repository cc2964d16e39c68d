//! Canonical rendering with context-sensitive parenthesization.
//!
//! Printing walks the tree top-down: a composite renders its children first and then wraps them
//! in its own notation. Whether a child is parenthesized depends on the pair (child type, parent
//! type), resolved through the same dispatch table mechanism as the rewrite rules, so a domain
//! can widen or narrow the built-in decisions by registering a more specific or higher-precedence
//! rule. An uncovered pair defaults to no parentheses.
//!
//! Scale values are rendered through a [`Formatter`], which lets a caller substitute scales at
//! print time without rebuilding the expression.

use crate::dispatch::Table;
use crate::element::Elem;
use crate::registry::{self, TypeTag};
use crate::scalar::Scalar;
use once_cell::sync::Lazy;
use std::sync::RwLock;

/// Renders the scale values of an expression.
pub trait Formatter {
    /// Renders a single scale value.
    fn scalar(&self, s: &Scalar) -> String;
}

/// Any closure from a scalar to a string is a formatter.
impl<F: Fn(&Scalar) -> String> Formatter for F {
    fn scalar(&self, s: &Scalar) -> String {
        self(s)
    }
}

/// The default formatter: scales render as themselves.
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {
    fn scalar(&self, s: &Scalar) -> String {
        s.to_string()
    }
}

/// A parenthesization rule: does `el` need parentheses when printed inside `parent`?
pub type ParenFn = fn(el: &Elem, parent: &Elem) -> bool;

fn parens(_el: &Elem, _parent: &Elem) -> bool {
    true
}

fn no_parens(_el: &Elem, _parent: &Elem) -> bool {
    false
}

static PAREN_RULES: Lazy<RwLock<Table<ParenFn>>> = Lazy::new(|| {
    let mut table = Table::new("need_parens");

    table.register(registry::ELEMENT, registry::SUM, 0, no_parens as ParenFn);
    table.register(registry::ELEMENT, registry::PRODUCT, 0, no_parens);
    table.register(registry::SUM, registry::PRODUCT, 0, parens);
    table.register(registry::WRAPPED, registry::PRODUCT, 0, parens);
    table.register(registry::SCALED, registry::PRODUCT, 0, no_parens);
    table.register(registry::ELEMENT, registry::WRAPPED, 0, no_parens);
    table.register(registry::WRAPPED, registry::WRAPPED, 0, parens);
    table.register(registry::JOIN, registry::WRAPPED, 0, parens);
    table.register(registry::PRODUCT, registry::SCALED, 0, no_parens);
    table.register(registry::SCALED, registry::SCALED, 0, no_parens);

    RwLock::new(table)
});

/// Registers a parenthesization rule for the pair (element type, parent type).
pub fn register_paren_rule(el: TypeTag, parent: TypeTag, precedence: i32, rule: ParenFn) {
    PAREN_RULES.write().unwrap().register(el, parent, precedence, rule);
}

/// Renders an expression, parenthesizing children where their context requires it.
pub fn pretty_print(el: &Elem, formatter: &dyn Formatter) -> String {
    if let Some(wrapped) = el.as_wrapped() {
        return wrapped.render_wrap(print_child(wrapped.child(), el, formatter), formatter);
    }
    if let Some(join) = el.as_join() {
        return join.render_join(
            print_child(join.left(), el, formatter),
            print_child(join.right(), el, formatter),
            formatter,
        );
    }
    el.render(formatter)
}

fn print_child(el: &Elem, parent: &Elem, formatter: &dyn Formatter) -> String {
    let rule = PAREN_RULES.read().unwrap().lookup(el.tag(), parent.tag());
    let rendered = pretty_print(el, formatter);
    if rule.map(|needs| needs(el, parent)).unwrap_or(false) {
        format!("({})", rendered)
    } else {
        rendered
    }
}
