//! Signature imposition mapping
//!
//! Computes the physical write order for one signature so that the printed,
//! stacked, and once-folded sheets read in the correct order.
//!
//! ## Inside-out fold
//!
//! Two cursors walk the signature from both ends. Each iteration emits the
//! four faces of one physical sheet, outermost sheet first:
//!
//! ```text
//! Signature [A, B, C, D] (one sheet):
//!
//! Sheet front:          Sheet back:
//! ┌────────┬────────┐   ┌────────┬────────┐
//! │   B    │   C    │   │   D    │   A    │
//! └────────┴────────┘   └────────┴────────┘
//!
//! write order: B, C, D, A
//! ```
//!
//! The two outer emissions (the `end` and `start` entries) may need a 180°
//! turn depending on the duplexer; see [`RotatePolicy`].

use crate::constants::PAGES_PER_SHEET;
use crate::types::{ImposeError, PageRef, PhysicalEntry, Result, RotatePolicy};

/// Map one signature to its physical write order.
///
/// The output has exactly one entry per input page; each local index appears
/// exactly once. Signature length must be a positive multiple of 4, which
/// upstream construction guarantees; anything else is a contract violation.
pub fn impose(signature: &[PageRef], rotate_policy: RotatePolicy) -> Result<Vec<PhysicalEntry>> {
    if signature.is_empty() || signature.len() % PAGES_PER_SHEET != 0 {
        return Err(ImposeError::Invariant(format!(
            "Signature length must be a positive multiple of {}, got {}",
            PAGES_PER_SHEET,
            signature.len()
        )));
    }

    let rotate_outer = matches!(rotate_policy, RotatePolicy::RotateOuterPair);
    let mut entries = Vec::with_capacity(signature.len());

    let mut start = 0;
    let mut end = signature.len() - 1;

    // Cursors meet exactly after len/4 iterations, never crossing mid-sheet.
    while start < end {
        entries.push(PhysicalEntry::upright(signature[start + 1]));
        entries.push(PhysicalEntry::upright(signature[end - 1]));
        entries.push(PhysicalEntry {
            page: signature[end],
            rotated: rotate_outer,
        });
        entries.push(PhysicalEntry {
            page: signature[start],
            rotated: rotate_outer,
        });

        start += 2;
        end -= 2;
    }

    Ok(entries)
}
