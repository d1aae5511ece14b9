//! The built-in self-tests for `strcpy`, `array_size` and `atoi`.

use interview_proc_macros::self_test;
use libc::c_int;

use crate::array_size::array_size;
use crate::atoi::atoi;
use crate::selftest::SelfTest;
use crate::strcpy::strcpy;

/// Copies empty and non-empty strings into zeroed and non-zeroed memory.
#[self_test("Test strcpy")]
pub fn test_strcpy() -> bool {
    struct Case {
        input: [u8; 16],
        output: [u8; 16],
    }

    fn buf(s: &[u8]) -> [u8; 16] {
        let mut b = [0u8; 16];
        b[..s.len()].copy_from_slice(s);
        b
    }

    let mut tests = [
        Case {
            input: buf(b""),
            output: buf(b"xxxxxxx"),
        },
        Case {
            input: buf(b"123"),
            output: buf(b"xxxxxxx"),
        },
        Case {
            input: buf(b""),
            output: buf(b""),
        },
        Case {
            input: buf(b"123"),
            output: buf(b""),
        },
    ];

    for case in tests.iter_mut() {
        let start = case.output.as_ptr();
        let copied = match strcpy(&mut case.output, &case.input) {
            Ok(out) => out,
            Err(_) => return false,
        };
        if copied.as_ptr() != start {
            return false;
        }

        let mut j = 0;
        while case.input[j] != 0 && case.output[j] == case.input[j] {
            j += 1;
        }
        if case.output[j] != 0 {
            return false;
        }
    }

    true
}

/// Zero and more than zero elements.
#[self_test("Test ARRAY_SIZE")]
pub fn test_array_size() -> bool {
    let a: [i32; 0] = [];
    let b = [0, 1, 2];

    array_size(&a) == 0 && array_size(&b) == 3
}

/// Absent input, zero, positive and negative values.
#[self_test("Test atoi")]
pub fn test_atoi() -> bool {
    let tests: [(&str, c_int); 3] = [("", 0), ("3", 3), ("-30", -30)];

    if atoi(None) != 0 {
        return false;
    }

    tests
        .iter()
        .all(|&(input, num)| atoi(Some(input.as_bytes())) == num)
}

/// The default suite, in report order.
pub fn all() -> Vec<SelfTest> {
    vec![TEST_STRCPY, TEST_ARRAY_SIZE, TEST_ATOI]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selftest::{run, Outcome};

    #[test]
    fn test_default_suite_passes() {
        let mut out = Vec::new();
        let outcomes = run(&all(), &mut out).unwrap();
        assert!(outcomes.iter().all(|&o| o == Outcome::Passed));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "PASSED: Test strcpy\nPASSED: Test ARRAY_SIZE\nPASSED: Test atoi\n"
        );
    }

    #[test]
    fn test_descriptors() {
        assert_eq!(TEST_STRCPY.name(), "Test strcpy");
        assert_eq!(TEST_ARRAY_SIZE.name(), "Test ARRAY_SIZE");
        assert_eq!(TEST_ATOI.name(), "Test atoi");
        assert!(test_strcpy());
        assert!(test_array_size());
        assert!(test_atoi());
    }
}
