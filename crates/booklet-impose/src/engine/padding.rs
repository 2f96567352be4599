//! Padding calculation
//!
//! Determines how many blank pages to add around the source document so the
//! padded total lands exactly on a signature boundary: a symmetric block of
//! cover pages at the front and back, then trailing fillers up to the next
//! multiple of the signature size.

use crate::constants::PAGES_PER_SHEET;
use crate::types::{ImposeError, PaddingPlan, Result};

/// Compute the padding plan for a document.
///
/// `cover_pages` blanks go at the very front and the same number at the very
/// back. If the resulting count is not a multiple of `signature_size`, just
/// enough trailing fillers are added to reach the next boundary, so
/// `signature_fillers` is always in `0..signature_size`.
pub fn compute_padding(
    total_pages: usize,
    cover_pages: usize,
    signature_size: usize,
) -> Result<PaddingPlan> {
    if signature_size == 0 || signature_size % PAGES_PER_SHEET != 0 {
        return Err(ImposeError::Config(format!(
            "Signature size must be a positive multiple of {}, got {}",
            PAGES_PER_SHEET, signature_size
        )));
    }

    let after_cover = total_pages + 2 * cover_pages;
    let remainder = after_cover % signature_size;
    let signature_fillers = if remainder == 0 {
        0
    } else {
        signature_size - remainder
    };

    Ok(PaddingPlan {
        leading_fillers: cover_pages,
        trailing_cover_fillers: cover_pages,
        signature_fillers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_needs_no_fillers() {
        let plan = compute_padding(36, 2, 40).unwrap();
        assert_eq!(plan.leading_fillers, 2);
        assert_eq!(plan.trailing_cover_fillers, 2);
        assert_eq!(plan.signature_fillers, 0);
        assert_eq!(plan.padded_total(36), 40);
    }

    #[test]
    fn test_empty_document_with_covers() {
        // 0 + 2*2 = 4, one signature of 24 needs 20 more
        let plan = compute_padding(0, 2, 24).unwrap();
        assert_eq!(plan.leading_fillers, 2);
        assert_eq!(plan.trailing_cover_fillers, 2);
        assert_eq!(plan.signature_fillers, 20);
        assert_eq!(plan.padded_total(0) % 24, 0);
    }

    #[test]
    fn test_no_covers() {
        let plan = compute_padding(10, 0, 8).unwrap();
        assert_eq!(plan.leading_fillers, 0);
        assert_eq!(plan.trailing_cover_fillers, 0);
        assert_eq!(plan.signature_fillers, 6);
    }

    #[test]
    fn test_signature_size_not_multiple_of_four() {
        assert!(compute_padding(10, 2, 6).is_err());
        assert!(compute_padding(10, 2, 0).is_err());
    }

    #[test]
    fn test_padding_minimality() {
        for total in 0..100 {
            for cover in 0..4 {
                for papers in [1, 2, 8, 10, 12] {
                    let size = papers * 4;
                    let plan = compute_padding(total, cover, size).unwrap();
                    assert!(plan.signature_fillers < size);
                    assert_eq!((total + 2 * cover + plan.signature_fillers) % size, 0);
                }
            }
        }
    }
}
