//! JVM names and type descriptors, as they appear in mapping files.
//!
//! The [`tree`] module holds validated newtypes for class, field and method names as well as for
//! descriptors. The [`tree::descriptor`] module converts between Java source type names (`int[]`,
//! `java.lang.String`) and descriptors (`[I`, `Ljava/lang/String;`), and substitutes class names
//! inside existing descriptors.

mod macros;

pub mod tree;
