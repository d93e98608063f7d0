//! The in-memory filter/sort/paginate core: pure computation over extracted
//! cell values, decoupled from the document and control surfaces.

pub mod filter_set;
pub mod fuzzy;
pub mod pagination;
pub mod sequencer;
