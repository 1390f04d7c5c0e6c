//! Pagination module
//!
//! Supports: Next-page link, Enlarged size hint, and link-then-size.
//!
//! # Overview
//!
//! The pagination module decides how to reach the next page of a lookup
//! result. Each strategy inspects the latest parsed page and either names
//! the next request or reports that the result set is complete.

mod strategies;
mod types;

pub use strategies::{EnlargedSizeAdvance, LinkThenSizeAdvance, NextLinkAdvance};
pub use types::{
    NextPage, PageAdvance, PaginationState, DEFAULT_MAX_PAGES, DEFAULT_SIZE_PARAM,
};

#[cfg(test)]
mod tests;
