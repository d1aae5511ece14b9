use std::ffi::{CStr, CString};
use std::ptr;

use interview::ffi::{interview_atoi, interview_strcpy};
use libc::c_char;

fn c_atoi(input: &str) -> i32 {
    let c_str = CString::new(input).expect("no interior NUL");
    unsafe { interview_atoi(c_str.as_ptr()) }
}

#[test]
fn atoi_null_is_zero() {
    assert_eq!(unsafe { interview_atoi(ptr::null()) }, 0);
}

#[test]
fn atoi_matches_safe_api() {
    for input in ["", "0", "3", "-30", "-", "+5", "1a2", " 42 ", "2147483648", "-9-9"] {
        assert_eq!(
            c_atoi(input),
            interview::atoi(Some(input.as_bytes())),
            "input {:?}",
            input
        );
    }
}

#[test]
fn atoi_leaves_input_untouched() {
    let c_str = CString::new("-417").unwrap();
    let before = c_str.clone();
    assert_eq!(unsafe { interview_atoi(c_str.as_ptr()) }, -417);
    assert_eq!(c_str, before);
}

#[test]
fn strcpy_returns_destination() {
    let src = CString::new("123").unwrap();
    let mut buf = *b"xxxxxxx\0";
    let dst = buf.as_mut_ptr() as *mut c_char;
    let ret = unsafe { interview_strcpy(dst, src.as_ptr()) };
    assert_eq!(ret, dst);
    assert_eq!(&buf, b"123\0xxx\0");
}

#[test]
fn strcpy_matches_safe_api() {
    for input in ["", "1", "123", "hello, world"] {
        let src = CString::new(input).unwrap();

        let mut c_buf = [b'x'; 16];
        unsafe { interview_strcpy(c_buf.as_mut_ptr() as *mut c_char, src.as_ptr()) };

        let mut rust_buf = [b'x'; 16];
        interview::strcpy(&mut rust_buf, src.as_bytes()).unwrap();

        assert_eq!(c_buf, rust_buf, "input {:?}", input);
        let copied = CStr::from_bytes_until_nul(&c_buf).unwrap();
        assert_eq!(copied.to_bytes(), input.as_bytes());
    }
}
