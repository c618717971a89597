//! Constant-time byte operations

use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the length
/// check short-circuits; equal-length inputs are always fully scanned.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Checks that the last `count` bytes of `window` all equal `value`
///
/// Every byte of `window` is visited regardless of `count` so the scan
/// length depends only on the window size. A `count` larger than the window
/// yields a false result.
pub fn ct_tail_eq(window: &[u8], count: usize, value: u8) -> Choice {
    let len = window.len() as u64;
    let count = count as u64;
    let fits = !len.ct_lt(&count);
    let start = len.saturating_sub(count);

    let mut ok = fits;
    for (i, byte) in window.iter().enumerate() {
        let in_tail = !(i as u64).ct_lt(&start);
        ok &= !in_tail | byte.ct_eq(&value);
    }
    ok
}

/// XORs `src` into `dst` byte by byte over their common prefix
#[inline(always)]
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= *s;
    }
}
