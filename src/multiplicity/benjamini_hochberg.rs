use itertools::Itertools;

use crate::error::PowercomputeErr;
use crate::multiplicity::error::MultiplicityErr;

/// Benjamini-Hochberg FDR filter. Ranks the p-values ascending, compares
/// each against its stepped threshold alpha * rank / m, and marks every
/// p-value at or below the largest passing rank as significant. The mask
/// comes back in the input order, not rank order.
pub fn benjamini_hochberg(pvalues: &Vec<f64>, alpha: f64) -> Result<Vec<bool>, PowercomputeErr> {
    //----------------------------------------
    // Check arguments
    if alpha < 0.0 || alpha > 1.0 {
        return Err(MultiplicityErr::BadAlpha(alpha).into());
    }
    for &pv in pvalues {
        if pv.is_nan() || pv < 0.0 || pv > 1.0 {
            return Err(MultiplicityErr::BadPValue(pv).into());
        }
    }
    if pvalues.is_empty() {
        return Ok(vec![]);
    }

    //----------------------------------------
    // Rank and compare against the stepped thresholds
    let m = pvalues.len();
    let order = (0..m)
        .sorted_by(|&i, &j| f64::total_cmp(&pvalues[i], &pvalues[j]))
        .collect::<Vec<usize>>();

    // Largest rank whose p-value sits at or below its own threshold
    // (boundary inclusive); every rank up to it is significant, whether
    // or not that rank passed its own threshold
    let maybe_max_passing_rank = order
        .iter()
        .enumerate()
        .filter(|&(rank, &idx)| pvalues[idx] <= alpha * ((rank + 1) as f64) / (m as f64))
        .map(|(rank, _)| rank)
        .last();

    // Writing through the sort order puts the mask back in input order
    let mut mask = vec![false; m];
    if let Some(max_rank) = maybe_max_passing_rank {
        for &idx in &order[..=max_rank] {
            mask[idx] = true;
        }
    }
    Ok(mask)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn single_small_pvalue_qualifies() {
        // Thresholds for m = 4 at alpha 0.05 are 0.0125, 0.025, 0.0375, 0.05
        let mask = benjamini_hochberg(&vec![0.001, 0.2, 0.3, 0.4], 0.05)
            .expect("failed to filter p-values");
        assert_eq!(mask, vec![true, false, false, false]);
    }

    #[test]
    fn mask_in_input_order() {
        // Same p-values as above, shuffled; the mask follows the shuffle
        let mask = benjamini_hochberg(&vec![0.4, 0.001, 0.3, 0.2], 0.05)
            .expect("failed to filter shuffled p-values");
        assert_eq!(mask, vec![false, true, false, false]);
    }

    #[test]
    fn all_above_alpha_all_false() {
        let mask = benjamini_hochberg(&vec![0.6, 0.7, 0.9], 0.05)
            .expect("failed to filter large p-values");
        assert_eq!(mask, vec![false, false, false]);
    }

    #[test]
    fn boundary_threshold_is_inclusive() {
        // Rank 1 of 2 has threshold exactly 0.025
        let mask = benjamini_hochberg(&vec![0.025, 0.9], 0.05)
            .expect("failed to filter boundary p-value");
        assert_eq!(mask, vec![true, false]);
    }

    #[test]
    fn later_rank_rescues_earlier_failure() {
        // Rank 2 (0.030) misses its 0.025 threshold, but rank 4 (0.033)
        // passes 0.05, so everything through rank 4 is significant
        let mask = benjamini_hochberg(&vec![0.001, 0.030, 0.032, 0.033], 0.05)
            .expect("failed to filter rescued p-values");
        assert_eq!(mask, vec![true, true, true, true]);
    }

    #[test]
    fn empty_input_empty_mask() {
        let mask = benjamini_hochberg(&vec![], 0.05).expect("failed to filter empty input");
        assert!(mask.is_empty());
    }

    #[test]
    fn mask_preserves_length() {
        let pvalues = vec![0.01, 0.04, 0.03, 0.5, 0.2, 0.001, 0.9];
        let mask =
            benjamini_hochberg(&pvalues, 0.05).expect("failed to filter length check input");
        assert_eq!(mask.len(), pvalues.len());
    }

    #[test]
    fn nan_pvalue_err() {
        if let Err(e) = benjamini_hochberg(&vec![0.01, f64::NAN], 0.05) {
            assert_eq!(
                String::from(
                    "while assessing multiple testing risk: p-values \
                    should be in [0, 1]; got NaN"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
