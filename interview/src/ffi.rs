//! C ABI exports.
//!
//! These take raw `char` pointers exactly as their C counterparts do and
//! forward to the safe implementations where that is possible.

use std::ffi::CStr;

use libc::{c_char, c_int};

use crate::atoi::atoi;

/// `int atoi(const char *str)`; a null `str` yields `0`.
///
/// # Safety
/// `str` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn interview_atoi(str: *const c_char) -> c_int {
    if str.is_null() {
        return atoi(None);
    }
    let c_str = unsafe { CStr::from_ptr(str) };
    atoi(Some(c_str.to_bytes()))
}

/// `char *strcpy(char *dst, const char *src)`; returns `dst`.
///
/// # Safety
/// `src` must point to a NUL-terminated string and `dst` must be valid for
/// writes of `strlen(src) + 1` bytes. The two regions must not overlap.
#[no_mangle]
pub unsafe extern "C" fn interview_strcpy(dst: *mut c_char, src: *const c_char) -> *mut c_char {
    let ret = dst;
    let mut dst = dst;
    let mut src = src;
    loop {
        let c = unsafe { *src };
        unsafe { *dst = c };
        if c == 0 {
            break;
        }
        dst = unsafe { dst.add(1) };
        src = unsafe { src.add(1) };
    }
    ret
}
