//! Converting between Java source type names and descriptors, and remapping class names inside descriptors.
//!
//! Source type names are what mapping files use: `int`, `int[][]`, `java.lang.String`.
//! Descriptors are the compact encoding of the class file format: `I`, `[[I`, `Ljava/lang/String;`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter::Peekable;
use std::str::Chars;
use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;
use crate::macros::make_string_like;
use crate::tree::class::{to_internal_name, ClassName};
use crate::tree::field::FieldDescriptor;
use crate::tree::method::MethodDescriptor;

/// The keywords of the primitive types (and `void`), with their descriptor codes.
pub const PRIMITIVES: [(&str, char); 9] = [
	("void", 'V'),
	("boolean", 'Z'),
	("byte", 'B'),
	("char", 'C'),
	("short", 'S'),
	("int", 'I'),
	("long", 'J'),
	("float", 'F'),
	("double", 'D'),
];

const ARRAY_MARKER: char = '[';
const ARRAY_SUFFIX: &str = "[]";
const CLASS_MARKER: char = 'L';
const CLASS_TERMINATOR: char = ';';

/// Looks up the descriptor code of a primitive keyword (or `void`).
pub fn primitive_code(keyword: &str) -> Option<char> {
	PRIMITIVES.iter()
		.find(|(k, _)| *k == keyword)
		.map(|&(_, code)| code)
}

/// Looks up the keyword of a primitive descriptor code (or `V`).
pub fn primitive_keyword(code: char) -> Option<&'static str> {
	PRIMITIVES.iter()
		.find(|(_, c)| *c == code)
		.map(|&(keyword, _)| keyword)
}

/// Converts a source type name into its descriptor.
///
/// Each trailing `[]` becomes a leading `[`, primitive keywords and `void` use their one character code,
/// everything else is taken as a class name.
///
/// This never fails. Use [`FieldDescriptor::from_source_type`] or [`ReturnDescriptor::from_source_type`] to
/// also check that the result is well-formed.
///
/// ```
/// use duke::tree::descriptor::to_descriptor;
///
/// assert_eq!(to_descriptor("int"), "I");
/// assert_eq!(to_descriptor("void"), "V");
/// assert_eq!(to_descriptor("int[][]"), "[[I");
/// assert_eq!(to_descriptor("net.minecraft.Thing[]"), "[Lnet/minecraft/Thing;");
/// ```
pub fn to_descriptor(type_name: &str) -> String {
	let mut s = String::with_capacity(type_name.len() + 2);
	write_source_type(type_name, &mut s);
	s
}

fn write_source_type(type_name: &str, s: &mut String) {
	if let Some(element) = type_name.strip_suffix(ARRAY_SUFFIX) {
		s.push(ARRAY_MARKER);
		write_source_type(element, s);
	} else if let Some(code) = primitive_code(type_name) {
		s.push(code);
	} else {
		s.push(CLASS_MARKER);
		s.push_str(&to_internal_name(type_name));
		s.push(CLASS_TERMINATOR);
	}
}

/// Builds a method descriptor from the source type names of the return type and the parameters.
///
/// The parameters are encoded in the order given.
///
/// ```
/// use duke::tree::descriptor::to_method_descriptor;
///
/// assert_eq!(to_method_descriptor("void", ["int", "foo.Bar"]), "(ILfoo/Bar;)V");
/// assert_eq!(to_method_descriptor("java.lang.String", [] as [&str; 0]), "()Ljava/lang/String;");
/// ```
pub fn to_method_descriptor(return_type: &str, parameter_types: impl IntoIterator<Item=impl AsRef<str>>) -> String {
	let mut s = String::new();
	s.push('(');
	for parameter_type in parameter_types {
		write_source_type(parameter_type.as_ref(), &mut s);
	}
	s.push(')');
	write_source_type(return_type, &mut s);
	s
}

/// Something that knows the new names of classes.
///
/// Returning `None` means the class is not mapped, and its name is kept as is.
pub trait ClassNameMapper {
	fn map_class_name(&self, class: &str) -> Option<&str>;
}

impl<K, V, S> ClassNameMapper for IndexMap<K, V, S>
where
	K: Borrow<str> + Hash + Eq,
	V: AsRef<str>,
	S: BuildHasher,
{
	fn map_class_name(&self, class: &str) -> Option<&str> {
		self.get(class).map(AsRef::as_ref)
	}
}

impl<K, V, S> ClassNameMapper for HashMap<K, V, S>
where
	K: Borrow<str> + Hash + Eq,
	V: AsRef<str>,
	S: BuildHasher,
{
	fn map_class_name(&self, class: &str) -> Option<&str> {
		self.get(class).map(AsRef::as_ref)
	}
}

/// Substitutes the class names inside a descriptor.
///
/// Class names the mapper doesn't know are copied over, as is everything that isn't a class name.
/// The structure of the descriptor is never changed. Input that doesn't follow the descriptor grammar
/// is passed through instead of being rejected.
///
/// ```
/// use indexmap::IndexMap;
/// use duke::tree::descriptor::remap_descriptor;
///
/// let classes = IndexMap::from([("A", "B")]);
/// assert_eq!(remap_descriptor("(LA;I)LC;", &classes), "(LB;I)LC;");
/// ```
pub fn remap_descriptor(desc: &str, mapper: &(impl ClassNameMapper + ?Sized)) -> String {
	let mut s = String::with_capacity(desc.len());
	let mut rest = desc;
	while !rest.is_empty() {
		rest = remap_token(rest, mapper, &mut s);
	}
	s
}

// The productions, each consuming from the front of `rest` and returning what's left:
//   Token:
//     ArrayType | ClassReference | any other single char
//   ArrayType:
//     "[" Token
//   ClassReference:
//     "L" ClassName ";"
fn remap_token<'a>(rest: &'a str, mapper: &(impl ClassNameMapper + ?Sized), s: &mut String) -> &'a str {
	let mut chars = rest.chars();
	match chars.next() {
		Some(ARRAY_MARKER) => remap_array_type(rest, mapper, s),
		Some(CLASS_MARKER) => remap_class_reference(chars.as_str(), mapper, s),
		Some(other) => {
			s.push(other);
			chars.as_str()
		},
		None => rest,
	}
}

fn remap_array_type<'a>(rest: &'a str, mapper: &(impl ClassNameMapper + ?Sized), s: &mut String) -> &'a str {
	let element = rest.trim_start_matches(ARRAY_MARKER);
	for _ in 0..(rest.len() - element.len()) {
		s.push(ARRAY_MARKER);
	}
	remap_token(element, mapper, s)
}

/// `rest` starts right after the `L`.
fn remap_class_reference<'a>(rest: &'a str, mapper: &(impl ClassNameMapper + ?Sized), s: &mut String) -> &'a str {
	s.push(CLASS_MARKER);
	match rest.split_once(CLASS_TERMINATOR) {
		Some((class_name, remaining)) => {
			s.push_str(mapper.map_class_name(class_name).unwrap_or(class_name));
			s.push(CLASS_TERMINATOR);
			remaining
		},
		None => {
			// unterminated, keep it as is
			s.push_str(rest);
			""
		},
	}
}

/// Represents a type.
///
/// In case of an array, use the [`Type::Array`] variant.
///
/// ```
/// use duke::tree::descriptor::{ArrayType, Type};
///
/// // the type of a java `int`
/// let int_type = Type::I;
///
/// // the type of a java `int[][]`
/// let int_array_type = Type::Array(2, ArrayType::I);
///
/// assert_ne!(int_type, int_array_type);
/// assert_eq!(int_array_type.to_source_name(), "int[][]");
/// ```
///
/// Note: you should never construct the [`Type::Array`] variant with a dimension of zero.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Type {
	/// A `byte`. In rust, this is a `i8`.
	B,
	/// A `char`.
	C,
	/// A `double`. In rust, this is a `f64`.
	D,
	/// A `float`. In rust, this is a `f32`.
	F,
	/// An `int`. In rust, this is a `i32`.
	I,
	/// A `long`. In rust, this is a `i64`.
	J,
	/// A `short`. In rust, this is a `i16`.
	S,
	/// A `boolean`. In rust, this is a `bool`.
	Z,
	/// An instance of the class specified by [`ClassName`].
	Object(ClassName),
	/// An array type, represented by the dimension and the inner [`ArrayType`].
	Array(u8, ArrayType),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ArrayType {
	B,
	C,
	D,
	F,
	I,
	J,
	S,
	Z,
	Object(ClassName),
}

impl ArrayType {
	fn from_primitive_code(code: char) -> Option<ArrayType> {
		Some(match code {
			'B' => ArrayType::B,
			'C' => ArrayType::C,
			'D' => ArrayType::D,
			'F' => ArrayType::F,
			'I' => ArrayType::I,
			'J' => ArrayType::J,
			'S' => ArrayType::S,
			'Z' => ArrayType::Z,
			_ => return None,
		})
	}

	fn primitive_code(&self) -> Option<char> {
		Some(match self {
			ArrayType::B => 'B',
			ArrayType::C => 'C',
			ArrayType::D => 'D',
			ArrayType::F => 'F',
			ArrayType::I => 'I',
			ArrayType::J => 'J',
			ArrayType::S => 'S',
			ArrayType::Z => 'Z',
			ArrayType::Object(_) => return None,
		})
	}

	fn write_source_name(&self, s: &mut String) {
		match self {
			ArrayType::Object(class_name) => s.push_str(&class_name.to_source_name()),
			primitive => s.extend(primitive.primitive_code().and_then(primitive_keyword)),
		}
	}
}

impl From<ArrayType> for Type {
	fn from(value: ArrayType) -> Self {
		match value {
			ArrayType::B => Type::B,
			ArrayType::C => Type::C,
			ArrayType::D => Type::D,
			ArrayType::F => Type::F,
			ArrayType::I => Type::I,
			ArrayType::J => Type::J,
			ArrayType::S => Type::S,
			ArrayType::Z => Type::Z,
			ArrayType::Object(class_name) => Type::Object(class_name),
		}
	}
}

impl Type {
	fn split_array(&self) -> (u8, ArrayType) {
		match self {
			Type::B => (0, ArrayType::B),
			Type::C => (0, ArrayType::C),
			Type::D => (0, ArrayType::D),
			Type::F => (0, ArrayType::F),
			Type::I => (0, ArrayType::I),
			Type::J => (0, ArrayType::J),
			Type::S => (0, ArrayType::S),
			Type::Z => (0, ArrayType::Z),
			Type::Object(class_name) => (0, ArrayType::Object(class_name.clone())),
			Type::Array(dimension, array_type) => (*dimension, array_type.clone()),
		}
	}

	/// Returns the name of this type as written in java source code, like `int[]` or `java.lang.String`.
	pub fn to_source_name(&self) -> String {
		let (dimension, array_type) = self.split_array();
		let mut s = String::new();
		array_type.write_source_name(&mut s);
		for _ in 0..dimension {
			s.push_str(ARRAY_SUFFIX);
		}
		s
	}
}

// The grammar for descriptors is:
//   FieldDescriptor:
//     FieldType
//
//   MethodDescriptor:
//     "(" FieldType* ")" ReturnDescriptor
//
//   ReturnDescriptor:
//     FieldType | "V"
//
//   FieldType:
//     "B" | "C" | "D" | "F" | "I" | "J" | "S" | "Z" |
//     "L" ClassName ";" |
//     "[" FieldType
fn read_field_type(chars: &mut Peekable<Chars>) -> Result<Type> {
	let mut array_dimension: u8 = 0;
	while chars.next_if_eq(&ARRAY_MARKER).is_some() {
		array_dimension = array_dimension.checked_add(1)
			.context("array dimension doesn't fit into 255")?;
	}

	let char = chars.next().ok_or_else(|| anyhow!("unexpected abrupt ending of descriptor"))?;
	let array_type = if char == CLASS_MARKER {
		let mut s = String::new();

		let mut char = chars.next().ok_or_else(|| anyhow!("unexpected abrupt ending of descriptor"))?;
		while char != CLASS_TERMINATOR {
			s.push(char);

			char = chars.next().ok_or_else(|| anyhow!("unexpected abrupt ending of descriptor"))?;
		}

		ArrayType::Object(ClassName::try_from(s)?)
	} else if let Some(array_type) = ArrayType::from_primitive_code(char) {
		array_type
	} else {
		bail!("unexpected char {char:?} in descriptor");
	};

	if array_dimension == 0 {
		Ok(array_type.into())
	} else {
		Ok(Type::Array(array_dimension, array_type))
	}
}

fn read_return_type(chars: &mut Peekable<Chars>) -> Result<Option<Type>> {
	if chars.next_if_eq(&'V').is_some() {
		Ok(None)
	} else {
		read_field_type(chars).map(Some)
	}
}

fn expect_end(chars: Peekable<Chars>, kind: &str, desc: &str) -> Result<()> {
	let remaining: String = chars.collect();
	if !remaining.is_empty() {
		bail!("expected end of {kind} {desc:?}, got {remaining:?} remaining");
	}
	Ok(())
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParsedFieldDescriptor(pub Type);

impl FieldDescriptor {
	/// Attempts to parse a field descriptor.
	///
	/// A field descriptor is defined by the [grammar](https://docs.oracle.com/javase/specs/jvms/se22/html/jvms-4.html#jvms-4.3.2) in the
	/// Java Virtual Machine Specification.
	pub(crate) fn parse_str(desc: &str) -> Result<ParsedFieldDescriptor> {
		let mut chars = desc.chars().peekable();

		let descriptor = read_field_type(&mut chars)
			.with_context(|| anyhow!("failed to read field descriptor {desc:?}"))?;

		expect_end(chars, "field descriptor", desc)?;

		Ok(ParsedFieldDescriptor(descriptor))
	}

	/// Parses this field descriptor.
	///
	/// ```
	/// use duke::tree::descriptor::{ArrayType, ParsedFieldDescriptor, Type};
	/// use duke::tree::field::FieldDescriptor;
	///
	/// let desc = FieldDescriptor::try_from("[[[D").unwrap();
	/// assert_eq!(desc.parse().unwrap(), ParsedFieldDescriptor(Type::Array(3, ArrayType::D)));
	/// ```
	pub fn parse(&self) -> Result<ParsedFieldDescriptor> {
		FieldDescriptor::parse_str(self.as_str())
	}

	/// Encodes a source type name, like `int[]` or `java.lang.String`, as a field descriptor.
	///
	/// Fails if the result isn't a valid field descriptor, for example for `void` or an empty name.
	pub fn from_source_type(type_name: &str) -> Result<FieldDescriptor> {
		FieldDescriptor::try_from(to_descriptor(type_name))
			.with_context(|| anyhow!("type {type_name:?} doesn't encode to a field descriptor"))
	}

	/// Substitutes the class names in this descriptor. See [`remap_descriptor`].
	///
	/// Fails if the mapper produced a name that isn't a valid class name.
	pub fn remap(&self, mapper: &(impl ClassNameMapper + ?Sized)) -> Result<FieldDescriptor> {
		FieldDescriptor::try_from(remap_descriptor(self.as_str(), mapper))
	}
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParsedMethodDescriptor {
	pub parameter_descriptors: Vec<Type>,
	/// `None` for `void`.
	pub return_descriptor: Option<Type>,
}

impl MethodDescriptor {
	pub(crate) fn parse_str(desc: &str) -> Result<ParsedMethodDescriptor> {
		let mut chars = desc.chars().peekable();

		if chars.next_if_eq(&'(').is_none() {
			bail!("method descriptor {desc:?} doesn't start with '('");
		}

		let mut parameter_descriptors = Vec::new();
		while chars.next_if_eq(&')').is_none() {
			let descriptor = read_field_type(&mut chars)
				.with_context(|| anyhow!("failed to read parameter descriptor of {desc:?}"))?;
			parameter_descriptors.push(descriptor);
		}

		let return_descriptor = read_return_type(&mut chars)
			.with_context(|| anyhow!("failed to read return descriptor of {desc:?}"))?;

		expect_end(chars, "method descriptor", desc)?;

		Ok(ParsedMethodDescriptor {
			parameter_descriptors,
			return_descriptor,
		})
	}

	/// Parses this method descriptor.
	///
	/// ```
	/// use duke::tree::class::ClassName;
	/// use duke::tree::descriptor::{ParsedMethodDescriptor, Type};
	/// use duke::tree::method::MethodDescriptor;
	///
	/// let desc = MethodDescriptor::try_from("(ILfoo/Bar;)V").unwrap();
	/// assert_eq!(desc.parse().unwrap(), ParsedMethodDescriptor {
	///     parameter_descriptors: vec![Type::I, Type::Object(ClassName::try_from("foo/Bar").unwrap())],
	///     return_descriptor: None,
	/// });
	/// ```
	pub fn parse(&self) -> Result<ParsedMethodDescriptor> {
		MethodDescriptor::parse_str(self.as_str())
	}

	/// Builds a method descriptor from source type names. See [`to_method_descriptor`].
	///
	/// Fails if the result isn't a valid method descriptor, for example for a `void` parameter.
	pub fn from_source_types(return_type: &str, parameter_types: &[&str]) -> Result<MethodDescriptor> {
		MethodDescriptor::try_from(to_method_descriptor(return_type, parameter_types))
			.with_context(|| anyhow!("types {return_type:?} and {parameter_types:?} don't encode to a method descriptor"))
	}

	/// Substitutes the class names in this descriptor. See [`remap_descriptor`].
	///
	/// Fails if the mapper produced a name that isn't a valid class name.
	pub fn remap(&self, mapper: &(impl ClassNameMapper + ?Sized)) -> Result<MethodDescriptor> {
		MethodDescriptor::try_from(remap_descriptor(self.as_str(), mapper))
	}
}

impl ParsedMethodDescriptor {
	/// Returns the source name of the return type, `void` included.
	pub fn return_source_name(&self) -> String {
		match &self.return_descriptor {
			Some(return_descriptor) => return_descriptor.to_source_name(),
			None => "void".to_owned(),
		}
	}

	pub fn parameter_source_names(&self) -> Vec<String> {
		self.parameter_descriptors.iter()
			.map(Type::to_source_name)
			.collect()
	}
}

make_string_like!(
	/// Represents a return descriptor, that is either a field descriptor or `V`.
	pub ReturnDescriptor;
);

impl ReturnDescriptor {
	pub fn check_valid(inner: &str) -> Result<()> {
		let mut chars = inner.chars().peekable();

		read_return_type(&mut chars)
			.with_context(|| anyhow!("failed to read return descriptor {inner:?}"))?;

		expect_end(chars, "return descriptor", inner)
	}

	/// Encodes a source type name as a return descriptor. Unlike [`FieldDescriptor::from_source_type`] this accepts `void`.
	pub fn from_source_type(type_name: &str) -> Result<ReturnDescriptor> {
		ReturnDescriptor::try_from(to_descriptor(type_name))
			.with_context(|| anyhow!("type {type_name:?} doesn't encode to a return descriptor"))
	}
}

#[cfg(test)]
mod testing {
	use pretty_assertions::assert_eq;
	use anyhow::Result;
	use indexmap::IndexMap;
	use crate::tree::class::ClassName;
	use crate::tree::descriptor::{remap_array_type, remap_class_reference, remap_token, to_descriptor, ArrayType, ParsedFieldDescriptor, ParsedMethodDescriptor, ReturnDescriptor, Type, PRIMITIVES};
	use crate::tree::field::FieldDescriptor;
	use crate::tree::method::MethodDescriptor;

	fn classes() -> IndexMap<&'static str, &'static str> {
		IndexMap::from([
			("net/minecraft/Foo", "a"),
			("net/minecraft/Bar", "b"),
		])
	}

	#[test]
	fn primitive_table() {
		for (keyword, code) in PRIMITIVES {
			assert_eq!(to_descriptor(keyword), code.to_string());
		}
		assert_eq!(PRIMITIVES.len(), 9);
	}

	#[test]
	fn token_primitive() {
		let mut s = String::new();
		let rest = remap_token("IJ", &classes(), &mut s);
		assert_eq!(s, "I");
		assert_eq!(rest, "J");
	}

	#[test]
	fn token_delimiter() {
		let mut s = String::new();
		let rest = remap_token("()V", &classes(), &mut s);
		assert_eq!(s, "(");
		assert_eq!(rest, ")V");
	}

	#[test]
	fn array_type() {
		let mut s = String::new();
		let rest = remap_array_type("[[Lnet/minecraft/Foo;I", &classes(), &mut s);
		assert_eq!(s, "[[La;");
		assert_eq!(rest, "I");

		let mut s = String::new();
		let rest = remap_array_type("[[D)V", &classes(), &mut s);
		assert_eq!(s, "[[D");
		assert_eq!(rest, ")V");
	}

	#[test]
	fn class_reference_mapped() {
		let mut s = String::new();
		let rest = remap_class_reference("net/minecraft/Bar;I", &classes(), &mut s);
		assert_eq!(s, "Lb;");
		assert_eq!(rest, "I");
	}

	#[test]
	fn class_reference_unmapped() {
		let mut s = String::new();
		let rest = remap_class_reference("java/lang/String;)V", &classes(), &mut s);
		assert_eq!(s, "Ljava/lang/String;");
		assert_eq!(rest, ")V");
	}

	#[test]
	fn class_reference_unterminated() {
		let mut s = String::new();
		let rest = remap_class_reference("net/minecraft/Foo", &classes(), &mut s);
		assert_eq!(s, "Lnet/minecraft/Foo");
		assert_eq!(rest, "");
	}

	#[test]
	fn field_parse() -> Result<()> {
		assert_eq!(FieldDescriptor::try_from("I")?.parse()?, ParsedFieldDescriptor(Type::I));
		assert_eq!(FieldDescriptor::try_from("D")?.parse()?, ParsedFieldDescriptor(Type::D));
		assert_eq!(
			FieldDescriptor::try_from("Ljava/lang/Thread;")?.parse()?,
			ParsedFieldDescriptor(Type::Object(ClassName::try_from("java/lang/Thread")?)),
		);
		assert_eq!(
			FieldDescriptor::try_from("[[Ljava/lang/Object;")?.parse()?,
			ParsedFieldDescriptor(Type::Array(2, ArrayType::Object(ClassName::try_from("java/lang/Object")?))),
		);
		assert_eq!(FieldDescriptor::try_from("[[[Z")?.parse()?, ParsedFieldDescriptor(Type::Array(3, ArrayType::Z)));
		Ok(())
	}

	#[test]
	fn field_parse_err() {
		assert!(FieldDescriptor::try_from("").is_err());
		assert!(FieldDescriptor::try_from("V").is_err());
		assert!(FieldDescriptor::try_from("(").is_err());
		assert!(FieldDescriptor::try_from("()").is_err());
		assert!(FieldDescriptor::try_from("[V").is_err());
		assert!(FieldDescriptor::try_from("()V").is_err());
		assert!(FieldDescriptor::try_from("L;").is_err());
		assert!(FieldDescriptor::try_from("La.b;").is_err());
		assert!(FieldDescriptor::try_from("II").is_err());
		assert!(FieldDescriptor::try_from("Ljava/lang/Object").is_err());
	}

	#[test]
	fn array_dimension_overflow() {
		let max = format!("{}I", "[".repeat(255));
		assert!(FieldDescriptor::try_from(max.as_str()).is_ok());

		let too_many = format!("{}I", "[".repeat(256));
		assert!(FieldDescriptor::try_from(too_many.as_str()).is_err());
	}

	#[test]
	fn method_parse() -> Result<()> {
		let thread = ClassName::try_from("java/lang/Thread")?;
		let object = ClassName::try_from("java/lang/Object")?;

		let parsed = ParsedMethodDescriptor {
			parameter_descriptors: vec![Type::I, Type::D, Type::Object(thread)],
			return_descriptor: Some(Type::Object(object)),
		};
		assert_eq!(MethodDescriptor::try_from("(IDLjava/lang/Thread;)Ljava/lang/Object;")?.parse()?, parsed);
		assert_eq!(parsed.return_source_name(), "java.lang.Object");
		assert_eq!(parsed.parameter_source_names(), vec!["int", "double", "java.lang.Thread"]);

		let no_args = MethodDescriptor::try_from("()V")?.parse()?;
		assert_eq!(no_args, ParsedMethodDescriptor { parameter_descriptors: vec![], return_descriptor: None });
		assert_eq!(no_args.return_source_name(), "void");
		Ok(())
	}

	#[test]
	fn method_parse_err() {
		assert!(MethodDescriptor::try_from("").is_err());
		assert!(MethodDescriptor::try_from("(").is_err());
		assert!(MethodDescriptor::try_from("(D").is_err());
		assert!(MethodDescriptor::try_from("(V").is_err());
		assert!(MethodDescriptor::try_from("()").is_err());
		assert!(MethodDescriptor::try_from("(I)").is_err());
		assert!(MethodDescriptor::try_from("(V)D").is_err());
		assert!(MethodDescriptor::try_from("(D)[").is_err());
		assert!(MethodDescriptor::try_from("(D)[V").is_err());
		assert!(MethodDescriptor::try_from("[(D)V").is_err());
		assert!(MethodDescriptor::try_from("(L;;)V").is_err());
		assert!(MethodDescriptor::try_from("()VV").is_err());
	}

	#[test]
	fn return_parse() {
		assert!(ReturnDescriptor::try_from("V").is_ok());
		assert!(ReturnDescriptor::try_from("J").is_ok());
		assert!(ReturnDescriptor::try_from("[Ljava/lang/Object;").is_ok());

		assert!(ReturnDescriptor::try_from("").is_err());
		assert!(ReturnDescriptor::try_from("[V").is_err());
		assert!(ReturnDescriptor::try_from("()V").is_err());
		assert!(ReturnDescriptor::try_from("VV").is_err());
	}

	#[test]
	fn source_names() -> Result<()> {
		assert_eq!(FieldDescriptor::try_from("[[I")?.parse()?.0.to_source_name(), "int[][]");
		assert_eq!(FieldDescriptor::try_from("Lfoo/Bar;")?.parse()?.0.to_source_name(), "foo.Bar");
		assert_eq!(FieldDescriptor::try_from("[Lfoo/Bar$Baz;")?.parse()?.0.to_source_name(), "foo.Bar$Baz[]");
		assert_eq!(FieldDescriptor::try_from("Z")?.parse()?.0.to_source_name(), "boolean");
		Ok(())
	}

	#[test]
	fn typed_constructors() -> Result<()> {
		assert_eq!(FieldDescriptor::from_source_type("net.minecraft.Thing[][]")?.as_str(), "[[Lnet/minecraft/Thing;");
		assert!(FieldDescriptor::from_source_type("void").is_err());
		assert!(FieldDescriptor::from_source_type("void[]").is_err());
		assert!(FieldDescriptor::from_source_type("").is_err());

		assert_eq!(ReturnDescriptor::from_source_type("void")?.as_str(), "V");

		assert_eq!(MethodDescriptor::from_source_types("void", &["int[]", "net.minecraft.Thing[]"])?.as_str(), "([I[Lnet/minecraft/Thing;)V");
		assert_eq!(MethodDescriptor::from_source_types("long", &[])?.as_str(), "()J");
		assert!(MethodDescriptor::from_source_types("void", &["void"]).is_err());
		assert!(MethodDescriptor::from_source_types("void", &[""]).is_err());
		Ok(())
	}

	#[test]
	fn typed_remap() -> Result<()> {
		let classes = classes();
		assert_eq!(FieldDescriptor::try_from("[Lnet/minecraft/Foo;")?.remap(&classes)?.as_str(), "[La;");
		assert_eq!(
			MethodDescriptor::try_from("(Lnet/minecraft/Foo;ILjava/lang/String;)Lnet/minecraft/Bar;")?.remap(&classes)?.as_str(),
			"(La;ILjava/lang/String;)Lb;",
		);

		let broken = IndexMap::from([("net/minecraft/Foo", "not.valid")]);
		assert!(FieldDescriptor::try_from("Lnet/minecraft/Foo;")?.remap(&broken).is_err());
		Ok(())
	}
}
