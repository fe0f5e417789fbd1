// src/core/mod.rs

pub mod net;
pub mod page;
pub mod sanitize;

pub use net::PageSource;
pub use page::{HtmlStatPage, PageNode, StatPage};
