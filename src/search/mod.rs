//! Search engines that are independent of the layout domain.

pub(crate) mod anneal;
