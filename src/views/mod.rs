// src/views/mod.rs
//
// Text views of the pages
//
// - Document is the only output format; the cli decides colour
// - Card/detail renderers mirror the fields each page shows

pub mod cards;
pub mod details;
pub mod document;
pub mod format;
pub mod pages;

pub use cards::CardView;
pub use details::DetailView;
pub use document::{Document, Line, Tone};
pub use pages::{navigation, render_detail, render_list};
