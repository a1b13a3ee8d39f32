//! Interface header output.

mod render;
mod writer;

pub use render::render_interface;
pub use writer::{prepare_output_dir, write_interface, DirectoryWriter};
