//! Scalar and vector operators shared by the queries.

pub(crate) use self::consts::*;
pub use self::wops::{conjugate, scale, WSign};

mod consts;
mod wops;
