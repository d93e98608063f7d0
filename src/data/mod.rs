//! Data layer: the table document model, column type inference, and value
//! comparison. Everything here is independent of the control surfaces and of
//! the enhancer's mutable state.

pub mod document;
pub mod type_inference;
pub mod value_compare;
