//! Terminated string copy.

use std::fmt;

use interview_proc_macros::trace_fn;

/// Failure to copy a string into a destination buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyError {
    /// The destination cannot hold the string and its terminator.
    DestinationTooSmall { needed: usize, capacity: usize },
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::DestinationTooSmall { needed, capacity } => write!(
                f,
                "destination holds {} bytes but the string needs {}",
                capacity, needed
            ),
        }
    }
}

impl std::error::Error for CopyError {}

/// Length of the string in `s`: bytes before the first NUL, or all of them.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&c| c == 0).unwrap_or(s.len())
}

/// Copies the string in `src` followed by a NUL terminator into `dst` and
/// returns `dst`.
///
/// `src` ends at its first NUL byte or at the end of the slice. Bytes of
/// `dst` past the terminator are left as they were. If `dst` is too small
/// nothing is written.
#[trace_fn]
pub fn strcpy<'a>(dst: &'a mut [u8], src: &[u8]) -> Result<&'a mut [u8], CopyError> {
    let len = strlen(src);
    if dst.len() <= len {
        return Err(CopyError::DestinationTooSmall {
            needed: len + 1,
            capacity: dst.len(),
        });
    }

    dst[..len].copy_from_slice(&src[..len]);
    dst[len] = 0;
    Ok(dst)
}
