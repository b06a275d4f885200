//! Value types shared by every graph variant.

pub mod edge;
pub mod node;
pub mod path;

pub use edge::{Edge, EdgeKind};
pub use node::Node;
pub use path::{Cycle, Path};
