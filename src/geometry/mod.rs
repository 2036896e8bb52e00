pub mod boundary;

pub use boundary::{Boundary, ClosestEdge};
