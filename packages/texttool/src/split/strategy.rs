//! Strategies for assigning paragraphs to output parts.

/// Trait for paragraph-to-group assignment.
///
/// Implementations receive the word count of every paragraph in order and
/// return, for each paragraph, the index of the group it belongs to. The
/// returned indices must be non-decreasing and below `num_splits`, so that
/// paragraphs are never reordered or interleaved between groups.
pub trait SplitStrategy {
    /// Assign each paragraph to a group.
    fn assign(&self, word_counts: &[usize], num_splits: usize) -> Vec<usize>;
}

/// Word count each group aims for: total words divided by `num_splits`.
#[must_use]
pub fn target_per_split(word_counts: &[usize], num_splits: usize) -> f64 {
    if num_splits == 0 {
        return 0.0;
    }
    word_counts.iter().sum::<usize>() as f64 / num_splits as f64
}

/// Greedy left-to-right assignment with one paragraph of lookahead.
///
/// A paragraph moves to the next group only when adding it would push the
/// current group past the target and leave it further from the target than
/// it already is. The last group takes whatever remains.
///
/// This is the default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySplitStrategy;

impl SplitStrategy for GreedySplitStrategy {
    fn assign(&self, word_counts: &[usize], num_splits: usize) -> Vec<usize> {
        let Some(last_group) = num_splits.checked_sub(1) else {
            return Vec::new();
        };
        let target = target_per_split(word_counts, num_splits);

        let mut group = 0;
        let mut current = 0;

        word_counts
            .iter()
            .map(|&count| {
                let prospective = current + count;
                if group < last_group && prospective as f64 > target {
                    let current_distance = (current as f64 - target).abs();
                    let prospective_distance = (prospective as f64 - target).abs();

                    // An empty group always takes the paragraph
                    if prospective_distance > current_distance && current > 0 {
                        group += 1;
                        current = 0;
                    }
                }
                current += count;
                group
            })
            .collect()
    }
}

/// Contiguous partition minimising the largest deviation from the target.
///
/// Uses dynamic programming over all cut positions, so the result is the
/// best possible balance under the same no-reorder, no-split contract as
/// [`GreedySplitStrategy`]. Output can differ from the greedy strategy on
/// the same input. Ties go to the earliest cut.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedSplitStrategy;

impl SplitStrategy for BalancedSplitStrategy {
    fn assign(&self, word_counts: &[usize], num_splits: usize) -> Vec<usize> {
        let paragraphs = word_counts.len();
        if num_splits == 0 {
            return Vec::new();
        }
        if paragraphs <= num_splits {
            // One paragraph per group, trailing groups stay empty
            return (0..paragraphs).collect();
        }

        let target = target_per_split(word_counts, num_splits);
        let mut prefix = vec![0usize; paragraphs + 1];
        for (i, count) in word_counts.iter().enumerate() {
            prefix[i + 1] = prefix[i] + count;
        }
        let deviation =
            |from: usize, to: usize| ((prefix[to] - prefix[from]) as f64 - target).abs();

        // cost[k][i]: best max deviation placing the first i paragraphs into k + 1 groups
        // cut[k][i]: where the last of those groups starts
        let mut cost = vec![vec![f64::INFINITY; paragraphs + 1]; num_splits];
        let mut cut = vec![vec![0usize; paragraphs + 1]; num_splits];

        for i in 1..=paragraphs {
            cost[0][i] = deviation(0, i);
        }

        for k in 1..num_splits {
            for i in (k + 1)..=paragraphs {
                for j in k..i {
                    let candidate = cost[k - 1][j].max(deviation(j, i));
                    if candidate < cost[k][i] {
                        cost[k][i] = candidate;
                        cut[k][i] = j;
                    }
                }
            }
        }

        let mut assignment = vec![0usize; paragraphs];
        let mut end = paragraphs;
        for k in (1..num_splits).rev() {
            let start = cut[k][end];
            for slot in &mut assignment[start..end] {
                *slot = k;
            }
            end = start;
        }

        assignment
    }
}
