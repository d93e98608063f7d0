//! Presentation plumbing: the control surfaces the enhancer adds around the
//! table, and the event/listener bookkeeping that makes teardown structural.

pub mod controls;
pub mod events;
