//! # interview
//!
//! Small reimplementations of three C standard-library primitives and the
//! self-test rig that exercises them:
//!
//! * [`atoi`](atoi::atoi): decimal string to `int`, skipping non-digits.
//! * [`strcpy`](strcpy::strcpy): copy a terminated string into a buffer.
//! * [`array_size`](array_size::array_size) / [`array_size!`]: element count of an array.
//!
//! The [`ffi`] module exports the C-pointer forms of `atoi` and `strcpy`.
//! With the `python-extension` feature the crate also builds a Python module.

pub mod array_size;
pub mod atoi;
pub mod ffi;
pub mod selftest;
pub mod strcpy;
pub mod suite;

#[cfg(feature = "python-extension")]
pub mod python;

pub use array_size::array_size;
pub use atoi::atoi;
pub use strcpy::{strcpy, CopyError};
