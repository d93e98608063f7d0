//! tablekit augments an in-memory table document with client-side sorting,
//! paging, global and per-column text search (with a fuzzy fallback), and
//! row striping. There is no backing data service: every decision is derived
//! from the document's current content, and the document owns its rows — the
//! enhancer only reorders them and flips their visibility flags.
//!
//! The crate splits into a data layer (`data`), the pure computation core
//! (`core`), and the orchestrating [`Enhancer`](enhancer::Enhancer) that owns
//! the mutable search/sort/page state and runs the fixed
//! filter -> paginate -> stripe pipeline after every mutation.

pub mod core;
pub mod data;
pub mod debouncer;
pub mod enhancer;
pub mod i18n;
pub mod options;
pub mod plugin;
pub mod ui;

pub use enhancer::Enhancer;
pub use options::Options;
