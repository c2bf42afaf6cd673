//! Crate for reading and writing ProGuard mapping files, and for looking up names in them.
//!
//! The [`proguard`] module reads a mapping file into a list of [class mappings][tree::mappings::ClassMapping].
//! Put those into a [`MappingSet`][remapper::MappingSet] to look up classes and members by their name in either
//! namespace, or to remap descriptors between the namespaces.

mod lines;

pub mod proguard;

pub mod tree;

pub mod remapper;
