use anyhow::{bail, Result};
use crate::macros::make_string_like;
use crate::tree::names::is_valid_unqualified_name;

make_string_like!(
	/// Represents a field name.
	pub FieldName;
);

impl FieldName {
	pub fn check_valid(inner: &str) -> Result<()> {
		if !is_valid_unqualified_name(inner) {
			bail!("invalid field name: must be non-empty and not contain any of `.`, `;`, `[` and `/`");
		}
		Ok(())
	}
}

make_string_like!(
	/// Represents a field descriptor, like `I`, `[[D` or `Ljava/lang/Object;`.
	///
	/// See [section 4.3.2](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.3.2) of the
	/// Java Virtual Machine Specification.
	pub FieldDescriptor;
);

impl FieldDescriptor {
	pub fn check_valid(inner: &str) -> Result<()> {
		FieldDescriptor::parse_str(inner).map(|_| ())
	}
}
