//! Retained preview-node tree: arena, node data, queries, standard page.

pub mod node;
pub mod page;
pub mod query;
pub mod tree;

pub use node::{Display, NodeData, NodeId, NodeRole, PLACEHOLDER_GLYPH};
pub use page::standard_page;
pub use tree::PreviewTree;
