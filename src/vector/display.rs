//! Text rendering for `NumVec`.
//!
//! The display form is `<e0,e1,...,en-1>`: angle-bracketed, comma-separated,
//! no trailing separator. A zero-length vector renders as `<>`. The
//! alternate form (`{:#}`) separates elements with spaces instead of commas.

// External dependencies
use core::fmt::{Display, Formatter, Result};

use super::NumVec;

impl<T: Display> Display for NumVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sep = if f.alternate() { ' ' } else { ',' };

        write!(f, "<")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, "{sep}")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ">")
    }
}
