/// splits `total` across buckets in proportion to `weights` using the
/// largest remainder method, so the parts always add up to `total`. ties go
/// to the earlier bucket. returns None when the weights are all zero but the
/// total is not.
pub fn apportion(total: u64, weights: &[u64]) -> Option<Vec<u64>> {
    let weight_sum: u128 = weights.iter().map(|w| *w as u128).sum();
    if weight_sum == 0 {
        return if total == 0 {
            Some(vec![0; weights.len()])
        } else {
            None
        };
    }
    let total = total as u128;
    let mut parts = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    for (idx, weight) in weights.iter().enumerate() {
        let scaled = total * (*weight as u128);
        parts.push(scaled / weight_sum);
        remainders.push((scaled % weight_sum, idx));
    }
    let assigned: u128 = parts.iter().sum();
    let leftover = (total - assigned) as usize;
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for (_, idx) in remainders.into_iter().take(leftover) {
        parts[idx] += 1;
    }
    Some(parts.into_iter().map(|p| p as u64).collect())
}

/// rounds `total * part / whole` to the nearest integer, halves away from zero
pub fn scale_round(total: u64, part: u64, whole: u64) -> Option<u64> {
    if whole == 0 {
        return None;
    }
    let numerator = 2 * total as u128 * part as u128 + whole as u128;
    Some((numerator / (2 * whole as u128)) as u64)
}
