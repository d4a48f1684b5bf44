//! Directory listing: collection, filtering, ordering and traversal
//!
//! Data flows one directory at a time: [`collect`] reads the children,
//! [`order`] puts them in display order, and [`Lister`] hands each section to
//! a [`ListingOutput`] before recursing into subdirectories.

mod collector;
mod config;
mod filter;
mod order;
mod traversal;

pub use collector::{Collection, collect};
pub use config::ListOptions;
pub use filter::VisibilityFilter;
pub use order::{order, total_blocks};
pub use traversal::{ListSummary, Lister, ListingOutput, Section};
