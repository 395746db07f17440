pub mod names;
pub mod snippets;
