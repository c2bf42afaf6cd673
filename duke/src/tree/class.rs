use anyhow::{bail, Result};
use crate::macros::make_string_like;
use crate::tree::names::is_valid_class_name;

make_string_like!(
	/// Represents a class name.
	///
	/// The class name uses [internal binary names](https://docs.oracle.com/javase/specs/jvms/se22/html/jvms-4.html#jvms-4.2.1),
	/// i.e. with the complete package path written out and using slashes: `net/minecraft/world/level/Level`.
	///
	/// Mapping files use the dotted source form instead. Use [`ClassName::from_source_name`] to convert those.
	pub ClassName;
);

impl ClassName {
	pub fn check_valid(inner: &str) -> Result<()> {
		if !is_valid_class_name(inner) {
			bail!("invalid class name: must be non-empty, slash separated and not contain any of `.`, `;`, `[`, or empty segments");
		}
		Ok(())
	}

	/// Creates a class name from the dotted form found in source code and mapping files.
	///
	/// ```
	/// use duke::tree::class::ClassName;
	///
	/// let name = ClassName::from_source_name("net.minecraft.world.level.Level").unwrap();
	/// assert_eq!(name.as_str(), "net/minecraft/world/level/Level");
	/// assert_eq!(name.to_source_name(), "net.minecraft.world.level.Level");
	///
	/// assert!(ClassName::from_source_name("").is_err());
	/// assert!(ClassName::from_source_name("a..b").is_err());
	/// ```
	pub fn from_source_name(name: &str) -> Result<ClassName> {
		ClassName::try_from(to_internal_name(name))
	}

	/// The inverse of [`ClassName::from_source_name`].
	pub fn to_source_name(&self) -> String {
		self.as_str().replace('/', ".")
	}
}

/// Converts a dotted source name to the internal form, without any validation.
pub(crate) fn to_internal_name(name: &str) -> String {
	name.replace('.', "/")
}
