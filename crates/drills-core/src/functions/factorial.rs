/// `n!` computed recursively. `None` once the result no longer fits in a
/// `u128` (from `35!` on).
pub fn factorial(n: u32) -> Option<u128> {
    match n {
        0 | 1 => Some(1),
        _ => factorial(n - 1)?.checked_mul(u128::from(n)),
    }
}
