//! Layout search: the validity predicate, candidate enumeration, ranking, and the
//! two strategies that feed [`select::plan_layout`].

pub(crate) mod anneal;
pub(crate) mod grid;
pub(crate) mod rank;
pub(crate) mod select;
pub(crate) mod validity;
