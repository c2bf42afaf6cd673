//! Splitting single lines of a ProGuard mapping file into their parts.
//!
//! Nothing here validates names or types, that's done when the parts are turned into mappings.

use crate::proguard::MalformedKind;

const ARROW: &str = " -> ";
const COMMENT: char = '#';

#[derive(Debug, PartialEq)]
pub(crate) enum MappingLine<'a> {
	/// A blank line or a comment.
	Skip,
	/// `<deobfuscated> -> <obfuscated>:`, both names still dotted.
	Class {
		deobfuscated: &'a str,
		obfuscated: &'a str,
	},
	/// `<type> <name> -> <obfuscated>`
	Field {
		type_name: &'a str,
		name: &'a str,
		obfuscated: &'a str,
	},
	/// `[<start>:<end>:]<return type> <name>(<parameter types>)[:<original lines>] -> <obfuscated>`
	Method {
		return_type: &'a str,
		name: &'a str,
		parameter_types: Vec<&'a str>,
		obfuscated: &'a str,
	},
}

impl<'a> MappingLine<'a> {
	pub(crate) fn classify(line: &'a str) -> Result<MappingLine<'a>, MalformedKind> {
		let trimmed = line.trim();
		if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
			Ok(MappingLine::Skip)
		} else if line.starts_with(char::is_whitespace) {
			classify_member(trimmed)
		} else {
			classify_class(trimmed)
		}
	}
}

fn classify_class(line: &str) -> Result<MappingLine<'_>, MalformedKind> {
	let (deobfuscated, obfuscated) = line.split_once(ARROW)
		.ok_or(MalformedKind::MissingArrow)?;
	let obfuscated = obfuscated.strip_suffix(':')
		.ok_or(MalformedKind::MissingColon)?;

	Ok(MappingLine::Class { deobfuscated, obfuscated })
}

fn classify_member(line: &str) -> Result<MappingLine<'_>, MalformedKind> {
	let (left, obfuscated) = line.split_once(ARROW)
		.ok_or(MalformedKind::MissingArrow)?;
	let left = strip_line_range(left)?;
	let obfuscated = obfuscated.trim();

	if let Some((head, rest)) = left.split_once('(') {
		let (parameters, suffix) = rest.split_once(')')
			.ok_or(MalformedKind::UnclosedParameters)?;
		if !is_original_line_suffix(suffix) {
			return Err(MalformedKind::TrailingContent);
		}

		let (return_type, name) = head.rsplit_once(' ')
			.ok_or(MalformedKind::MissingName)?;

		let parameter_types = if parameters.trim().is_empty() {
			Vec::new()
		} else {
			parameters.split(',').map(str::trim).collect()
		};

		Ok(MappingLine::Method { return_type, name, parameter_types, obfuscated })
	} else {
		let (type_name, name) = left.rsplit_once(' ')
			.ok_or(MalformedKind::MissingName)?;

		Ok(MappingLine::Field { type_name, name, obfuscated })
	}
}

fn is_number(s: &str) -> bool {
	!s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Strips a `<start>:<end>:` prefix.
///
/// The prefix is only detected if the part before the first colon is a number, colons elsewhere are left alone.
fn strip_line_range(s: &str) -> Result<&str, MalformedKind> {
	let Some((start, rest)) = s.split_once(':') else {
		return Ok(s);
	};
	if !is_number(start) {
		return Ok(s);
	}

	let (end, content) = rest.split_once(':')
		.ok_or(MalformedKind::UnparsableLineRange)?;
	if start.parse::<u32>().is_err() || !is_number(end) || end.parse::<u32>().is_err() {
		return Err(MalformedKind::UnparsableLineRange);
	}

	Ok(content)
}

/// Newer obfuscators append the original line numbers after the parameter list: `:<line>` or `:<start>:<end>`.
fn is_original_line_suffix(suffix: &str) -> bool {
	match suffix.strip_prefix(':') {
		None => suffix.is_empty(),
		Some(lines) => {
			let mut parts = lines.splitn(3, ':');
			parts.by_ref().take(2).all(is_number) && parts.next().is_none()
		},
	}
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use crate::lines::{is_original_line_suffix, strip_line_range, MappingLine};
	use crate::proguard::MalformedKind;

	#[test]
	fn skipped_lines() {
		assert_eq!(MappingLine::classify(""), Ok(MappingLine::Skip));
		assert_eq!(MappingLine::classify("   \t"), Ok(MappingLine::Skip));
		assert_eq!(MappingLine::classify("# compiler: R8"), Ok(MappingLine::Skip));
		assert_eq!(MappingLine::classify("    # {\"id\":\"sourceFile\",\"fileName\":\"Level.java\"}"), Ok(MappingLine::Skip));
	}

	#[test]
	fn class_header() {
		assert_eq!(
			MappingLine::classify("com.example.Foo -> a:"),
			Ok(MappingLine::Class { deobfuscated: "com.example.Foo", obfuscated: "a" }),
		);
		assert_eq!(MappingLine::classify("com.example.Foo a:"), Err(MalformedKind::MissingArrow));
		assert_eq!(MappingLine::classify("com.example.Foo -> a"), Err(MalformedKind::MissingColon));
	}

	#[test]
	fn field() {
		assert_eq!(
			MappingLine::classify("    net.minecraft.world.entity.Entity getEntity -> b"),
			Ok(MappingLine::Field { type_name: "net.minecraft.world.entity.Entity", name: "getEntity", obfuscated: "b" }),
		);
		assert_eq!(MappingLine::classify("    int health"), Err(MalformedKind::MissingArrow));
		assert_eq!(MappingLine::classify("    health -> a"), Err(MalformedKind::MissingName));
	}

	#[test]
	fn method() {
		assert_eq!(
			MappingLine::classify("    9:22:void setEntity(net.minecraft.world.entity.Entity,int[]) -> a"),
			Ok(MappingLine::Method {
				return_type: "void",
				name: "setEntity",
				parameter_types: vec!["net.minecraft.world.entity.Entity", "int[]"],
				obfuscated: "a",
			}),
		);
		assert_eq!(
			MappingLine::classify("    java.lang.String getName() -> b"),
			Ok(MappingLine::Method { return_type: "java.lang.String", name: "getName", parameter_types: vec![], obfuscated: "b" }),
		);
		assert_eq!(
			MappingLine::classify("    12:12:void net.minecraft.Other.bridge():34:34 -> c"),
			Ok(MappingLine::Method { return_type: "void", name: "net.minecraft.Other.bridge", parameter_types: vec![], obfuscated: "c" }),
		);
		assert_eq!(MappingLine::classify("    void tick( -> a"), Err(MalformedKind::UnclosedParameters));
		assert_eq!(MappingLine::classify("    void tick()x -> a"), Err(MalformedKind::TrailingContent));
		assert_eq!(MappingLine::classify("    tick() -> a"), Err(MalformedKind::MissingName));
	}

	#[test]
	fn line_range() {
		assert_eq!(strip_line_range("1:2:void heal(int)"), Ok("void heal(int)"));
		assert_eq!(strip_line_range("void heal(int)"), Ok("void heal(int)"));
		// a colon that isn't preceded by a number isn't a line range
		assert_eq!(strip_line_range("void a:b()"), Ok("void a:b()"));
		assert_eq!(strip_line_range("1:void heal(int)"), Err(MalformedKind::UnparsableLineRange));
		assert_eq!(strip_line_range("1:x:void heal(int)"), Err(MalformedKind::UnparsableLineRange));
		assert_eq!(strip_line_range("99999999999:1:void heal(int)"), Err(MalformedKind::UnparsableLineRange));
	}

	#[test]
	fn original_line_suffix() {
		assert!(is_original_line_suffix(""));
		assert!(is_original_line_suffix(":34"));
		assert!(is_original_line_suffix(":34:40"));
		assert!(!is_original_line_suffix(":"));
		assert!(!is_original_line_suffix(":1:2:3"));
		assert!(!is_original_line_suffix(":1:"));
		assert!(!is_original_line_suffix(":1::"));
		assert!(!is_original_line_suffix("x"));
	}
}
