pub mod config;
pub mod tree;
pub mod writer;

pub use config::{StyleMode, WriteConfig};
pub use tree::{SvgElement, to_element_tree};
pub use writer::{write_element_tree, write_json, write_svg};
