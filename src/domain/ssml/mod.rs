pub mod document;

pub use document::{clean_text, SsmlDocument, SsmlSegment};
