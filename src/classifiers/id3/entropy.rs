use crate::core::LabelDistribution;

/// Shannon entropy, in bits, of a label-count distribution.
///
/// The distribution must cover at least one record: asking for the entropy of
/// an empty distribution is an invariant violation upstream, so this aborts
/// instead of producing NaN. Zero-count entries cannot occur in a
/// [`LabelDistribution`], which keeps `log2(0)` out of the sum.
pub fn compute_entropy(distribution: &LabelDistribution) -> f64 {
    let total = distribution.total();
    assert!(total > 0, "entropy requested for an empty label distribution");

    distribution
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_label_has_zero_entropy() {
        let distribution = LabelDistribution::from_labels(["unacc"; 7]);
        assert_eq!(compute_entropy(&distribution), 0.0);
    }

    #[test]
    fn equally_represented_labels_reach_log2_k() {
        let two = LabelDistribution::from_labels(["acc", "unacc"]);
        assert!((compute_entropy(&two) - 1.0).abs() < 1e-12);

        let four = LabelDistribution::from_labels(["unacc", "acc", "good", "vgood"]);
        assert!((compute_entropy(&four) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn skewed_distribution_matches_the_formula() {
        let distribution = LabelDistribution::from_labels(["acc", "acc", "acc", "unacc"]);
        let expected = -(0.75 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        assert!((compute_entropy(&distribution) - expected).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "empty label distribution")]
    fn empty_distribution_aborts() {
        compute_entropy(&LabelDistribution::new());
    }
}
