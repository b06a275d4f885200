//! Set algebra over graph elements.

mod set_ops;

pub use set_ops::{GraphElement, GraphSetOps};
