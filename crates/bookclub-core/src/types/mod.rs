pub mod collections;
pub mod duration;
pub mod group;
pub mod identifiers;
