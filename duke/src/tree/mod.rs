pub mod class;
pub mod field;
pub mod method;
pub mod descriptor;

mod names {
	/// Checks if a class name is a valid internal binary name according to JVMS 4.2.1.
	///
	/// Array class names are not accepted, mapping files never name them.
	pub(super) fn is_valid_class_name(x: &str) -> bool {
		// a list of identifiers split by /
		// each identifier must be an unqualified name
		// (note that this rejects "", since "".split('/') yields one empty segment)
		x.split('/').all(is_valid_unqualified_name)
	}

	/// Checks if a name is an unqualified name according to JVMS 4.2.2
	///
	/// This is used for field names.
	pub(super) fn is_valid_unqualified_name(x: &str) -> bool {
		// must contain at least one unicode codepoint
		!x.is_empty() &&
			// must not contain any of . ; [ /
			x.chars().all(|c| !matches!(c, '.' | ';' | '[' | '/'))
	}

	/// Checks if a method name is valid according to JVMS 4.2.2
	pub(super) fn is_valid_method_name(x: &str) -> bool {
		// either one of the special names or an unqualified name with special < > restriction
		x == "<init>" || x == "<clinit>" || (
			// must contain at least one unicode codepoint
			!x.is_empty() &&
				x.chars().all(|c| !matches!(c, '.' | ';' | '[' | '/' | '<' | '>'))
		)
	}

}
