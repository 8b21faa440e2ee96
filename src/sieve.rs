//! Prime numbers by striking multiples out of a candidate list.

/// All primes strictly less than `n`, ascending.
///
/// Starts from the candidates `2..n` and, for each surviving candidate `p` with
/// `p * p < n`, removes every later multiple of `p`.
pub fn primes_below(n: usize) -> Vec<usize> {
    let mut candidates: Vec<usize> = (2..n).collect();
    let mut index = 0;

    while index < candidates.len() {
        let p = candidates[index];

        if p.saturating_mul(p) >= n {
            break;
        }

        let mut position = 0;
        candidates.retain(|&c| {
            position += 1;
            position <= index + 1 || c % p != 0
        });

        index += 1;
    }

    candidates
}
