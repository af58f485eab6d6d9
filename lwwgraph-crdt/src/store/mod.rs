//! Timestamped element store: the four add/remove maps and the
//! last-writer-wins containment rules over them.

mod element_store;

pub use element_store::ElementStore;
