//! Double dispatch over pairs of operand types.
//!
//! A [`Table`] holds entries keyed by a pair of pattern tags. Looking up a pair of runtime tags
//! selects from the entries whose patterns both cover the operands: more specific patterns beat
//! more general ones, and among incomparable survivors the entry with the highest
//! `(precedence, registration order)` wins. Precedence is how cancellation rules assert
//! themselves over the structural rules that would otherwise tie with them; each call to
//! [`proven`] hands out a strictly larger level, so later cancellations outrank earlier ones the
//! way a newly proved identity supersedes the rules it cuts across.

use crate::registry::{self, TypeTag};
use std::sync::atomic::{AtomicI32, Ordering};

static PROVEN_LEVEL: AtomicI32 = AtomicI32::new(10);

/// Returns a fresh precedence level, strictly greater than every level returned before.
///
/// Register a rule at this level to assert that it embodies a proven identity which must win
/// against any structurally tied rule registered earlier.
pub fn proven() -> i32 {
    PROVEN_LEVEL.fetch_add(1, Ordering::Relaxed) + 1
}

struct Entry<T> {
    lhs: TypeTag,
    rhs: TypeTag,
    precedence: i32,
    seq: u64,
    payload: T,
}

/// A dispatch table mapping pairs of operand types to payloads.
pub struct Table<T> {
    op: &'static str,
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T: Copy> Table<T> {
    /// Creates an empty table for the named operation.
    pub fn new(op: &'static str) -> Self {
        Self { op, entries: Vec::new(), next_seq: 0 }
    }

    /// The name of the operation this table dispatches.
    pub fn op(&self) -> &'static str {
        self.op
    }

    /// Registers a payload for the given pair of pattern tags.
    ///
    /// Re-registering the same pair does not replace the old entry; the new one simply wins any
    /// tie through its later registration order.
    pub fn register(&mut self, lhs: TypeTag, rhs: TypeTag, precedence: i32, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { lhs, rhs, precedence, seq, payload });
    }

    /// Selects the payload for a pair of runtime tags, or `None` if no pattern covers them.
    pub fn lookup(&self, lhs: TypeTag, rhs: TypeTag) -> Option<T> {
        let matching: Vec<&Entry<T>> = self
            .entries
            .iter()
            .filter(|e| registry::is_subtype(lhs, e.lhs) && registry::is_subtype(rhs, e.rhs))
            .collect();

        // Keep the maximally specific patterns; a pattern strictly narrower on both sides
        // shadows the wider one.
        let survivors: Vec<&&Entry<T>> = matching
            .iter()
            .filter(|e| {
                !matching.iter().any(|other| {
                    (other.lhs, other.rhs) != (e.lhs, e.rhs)
                        && registry::is_subtype(other.lhs, e.lhs)
                        && registry::is_subtype(other.rhs, e.rhs)
                })
            })
            .collect();

        survivors
            .into_iter()
            .max_by_key(|e| (e.precedence, e.seq))
            .map(|e| e.payload)
    }
}
