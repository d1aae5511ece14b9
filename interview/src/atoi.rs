//! Decimal string to `int` conversion.

use interview_proc_macros::trace_fn;
use libc::c_int;

/// Returns the integer represented by `input`.
///
/// The sequence ends at the end of the slice or at the first NUL byte,
/// whichever comes first. A single leading `-` negates the result. Every
/// other non-digit byte is skipped and scanning carries on, so `"1a2"`
/// yields `12` and `"+5"` yields `5`. Overflow wraps.
///
/// `None` and the empty sequence both yield `0`.
#[trace_fn]
pub fn atoi(input: Option<&[u8]>) -> c_int {
    let Some(bytes) = input else {
        return 0;
    };

    let (neg, digits): (c_int, &[u8]) = match bytes {
        [b'-', rest @ ..] => (-1, rest),
        _ => (1, bytes),
    };

    let mut val: c_int = 0;
    for &c in digits.iter().take_while(|&&c| c != 0) {
        if c.is_ascii_digit() {
            val = val.wrapping_mul(10).wrapping_add(c_int::from(c - b'0'));
        }
    }

    neg.wrapping_mul(val)
}
