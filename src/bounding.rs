/// Returns the best score a partial node could still reach if every remaining assignment matched perfectly.
/// The bound must never underestimate what the subtree can achieve, it does not need to be tight.
/// # Arguments
/// * `actual` - the exact score over the assignments made so far
/// * `remaining` - the number of assignments still to be made
/// * `gain_per_step` - the largest score increase a single assignment can produce
pub fn optimistic_bound(actual: usize, remaining: usize, gain_per_step: usize) -> usize {
    actual + remaining * gain_per_step
}

/// Returns true if a subtree with the given bound cannot reach the best confirmed score.
/// Equal scores are not pruned, so ties are still explored.
pub fn should_prune(bound: usize, best: usize) -> bool {
    bound < best
}
