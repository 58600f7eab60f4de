//! Frame discovery and atlas compositing.

pub(crate) mod compose;
pub(crate) mod discover;
