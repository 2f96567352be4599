//! Booklet imposition engine
//!
//! Pure computation over page index sequences, no I/O:
//! 1. Pad the source page count to a signature boundary
//! 2. Partition the padded sequence into signatures
//! 3. Map each signature to its physical write order
//!
//! Signatures are independent; only the final concatenation order matters.

mod mapper;
mod padding;
mod partition;

pub use mapper::impose;
pub use padding::compute_padding;
pub use partition::partition;

use crate::options::BookletOptions;
use crate::types::{PaddingPlan, PageRef, PhysicalEntry, Result};

/// Build the physical write order for a whole document.
///
/// Composes padding, partitioning, and per-signature imposition into a
/// single ordered entry list. Deterministic: identical inputs produce
/// identical output.
pub fn build_imposition(
    total_pages: usize,
    options: &BookletOptions,
) -> Result<Vec<PhysicalEntry>> {
    options.validate()?;

    let signature_size = options.signature_size();
    let plan = compute_padding(total_pages, options.cover_pages, signature_size)?;
    let sequence = padded_sequence(total_pages, &plan);

    let mut entries = Vec::with_capacity(sequence.len());
    for signature in partition(&sequence, signature_size)? {
        entries.extend(impose(signature, options.rotate_policy)?);
    }

    Ok(entries)
}

/// Materialize the padded logical sequence described by a padding plan
fn padded_sequence(total_pages: usize, plan: &PaddingPlan) -> Vec<PageRef> {
    let mut sequence = Vec::with_capacity(plan.padded_total(total_pages));
    sequence.extend(std::iter::repeat_n(PageRef::Blank, plan.leading_fillers));
    sequence.extend((0..total_pages).map(PageRef::Source));
    sequence.extend(std::iter::repeat_n(
        PageRef::Blank,
        plan.trailing_cover_fillers + plan.signature_fillers,
    ));
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RotatePolicy, SignatureBounds};

    fn options(papers: usize, cover: usize) -> BookletOptions {
        BookletOptions {
            input_file: "test.pdf".into(),
            papers_per_signature: papers,
            signature_bounds: SignatureBounds::new(1, 16),
            cover_pages: cover,
            rotate_policy: RotatePolicy::None,
            ..Default::default()
        }
    }

    #[test]
    fn test_padded_sequence_layout() {
        let plan = PaddingPlan {
            leading_fillers: 2,
            trailing_cover_fillers: 2,
            signature_fillers: 3,
        };
        let seq = padded_sequence(5, &plan);

        assert_eq!(seq.len(), 12);
        assert_eq!(&seq[..2], &[PageRef::Blank, PageRef::Blank]);
        assert_eq!(seq[2], PageRef::Source(0));
        assert_eq!(seq[6], PageRef::Source(4));
        assert!(seq[7..].iter().all(|p| p.is_blank()));
    }

    #[test]
    fn test_build_imposition_length() {
        // 10 source + 4 cover = 14, padded to 16 (one signature of 4 papers)
        let entries = build_imposition(10, &options(4, 2)).unwrap();
        assert_eq!(entries.len(), 16);
    }

    #[test]
    fn test_build_imposition_is_deterministic() {
        let opts = options(2, 1);
        let first = build_imposition(13, &opts).unwrap();
        let second = build_imposition(13, &opts).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_imposition_covers_every_source_page() {
        let entries = build_imposition(30, &options(10, 2)).unwrap();

        let mut seen: Vec<usize> = entries
            .iter()
            .filter_map(|e| e.page.source_index())
            .collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..30).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_build_imposition_rejects_out_of_bounds_papers() {
        let mut opts = options(4, 2);
        opts.signature_bounds = SignatureBounds::new(8, 12);
        assert!(build_imposition(10, &opts).is_err());
    }

    #[test]
    fn test_signature_order_preserved() {
        // Two signatures of one paper each, no covers: pages 0..8
        let entries = build_imposition(8, &options(1, 0)).unwrap();

        let order: Vec<usize> = entries
            .iter()
            .filter_map(|e| e.page.source_index())
            .collect();
        // First signature holds pages 0..4, second 4..8
        assert_eq!(order, vec![1, 2, 3, 0, 5, 6, 7, 4]);
    }
}
