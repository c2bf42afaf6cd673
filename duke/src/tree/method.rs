use anyhow::{bail, Result};
use crate::macros::make_string_like;
use crate::tree::names::is_valid_method_name;

make_string_like!(
	/// Represents a method name.
	///
	/// Besides the special `<init>` and `<clinit>`, method names must not contain `<` or `>`.
	pub MethodName;
);

impl MethodName {
	pub fn check_valid(inner: &str) -> Result<()> {
		if !is_valid_method_name(inner) {
			bail!("invalid method name: must be `<init>`, `<clinit>`, or non-empty and not contain any of `.`, `;`, `[`, `/`, `<` and `>`");
		}
		Ok(())
	}
}

make_string_like!(
	/// Represents a method descriptor, like `(ILjava/lang/String;)V`.
	///
	/// See [section 4.3.3](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.3.3) of the
	/// Java Virtual Machine Specification.
	pub MethodDescriptor;
);

impl MethodDescriptor {
	pub fn check_valid(inner: &str) -> Result<()> {
		MethodDescriptor::parse_str(inner).map(|_| ())
	}
}
