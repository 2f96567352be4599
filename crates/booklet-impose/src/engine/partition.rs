//! Signature partitioning
//!
//! Slices the padded logical sequence into consecutive, equal-size
//! signatures. The length precondition is checked rather than silently
//! corrected: an unpadded sequence reaching this point means the padding
//! calculator was bypassed.

use crate::types::{ImposeError, PageRef, Result};

/// Split `sequence` into signatures of exactly `signature_size` pages.
///
/// Signature `k` covers indices `[k * signature_size, (k + 1) * signature_size)`.
/// The returned iterator is lazy and restartable; slices never overlap.
pub fn partition(
    sequence: &[PageRef],
    signature_size: usize,
) -> Result<impl Iterator<Item = &[PageRef]> + Clone> {
    if signature_size == 0 {
        return Err(ImposeError::Invariant(
            "Signature size must be positive".to_string(),
        ));
    }
    if sequence.len() % signature_size != 0 {
        return Err(ImposeError::Invariant(format!(
            "Sequence length {} is not a multiple of signature size {}",
            sequence.len(),
            signature_size
        )));
    }

    Ok(sequence.chunks_exact(signature_size))
}
