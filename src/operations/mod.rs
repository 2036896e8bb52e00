mod insert_vertex;
mod move_vertex;
mod remove_vertex;

pub use insert_vertex::InsertVertex;
pub use move_vertex::MoveVertex;
pub use remove_vertex::RemoveVertex;
