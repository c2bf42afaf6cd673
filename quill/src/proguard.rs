//! Functions to read and write mappings in the ProGuard format.
//!
//! # Reading
//! You can read a mapping file using the [`read_file`] method, by passing a path.
//! If you already have a [`Read`]er, you can use the [`read`] method, and for text already in memory
//! there's [`parse_str`] and [`parse`].
//!
//! Reading is all or nothing: the first malformed line fails the whole read, with a [`MalformedMappingError`]
//! inside the returned error. Methods that were inlined from another class (their name contains a `.`) are
//! not an error, they're left out.
//!
//! # Writing
//! For writing mapping files, there are the [`write`][fn@write] as well as the [`write_vec`] and [`write_string`] methods.
//!
//! Writing keeps the order of classes and members, but never writes line numbers.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use log::{debug, trace};
use duke::tree::class::ClassName;
use duke::tree::descriptor::ReturnDescriptor;
use duke::tree::field::FieldDescriptor;
use duke::tree::method::MethodDescriptor;
use crate::lines::MappingLine;
use crate::tree::mappings::{ClassMapping, FieldMapping, MethodMapping};

/// What exactly is wrong with a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
	/// An indented line came before the first class.
	MemberBeforeClass,
	/// The line doesn't contain ` -> `.
	MissingArrow,
	/// A class line doesn't end in `:`.
	MissingColon,
	/// A member has no space between its type and its name.
	MissingName,
	/// A method has a `(` but no `)`.
	UnclosedParameters,
	/// Something other than original line numbers follows the `)` of a method.
	TrailingContent,
	/// The `<start>:<end>:` prefix of a member is incomplete or doesn't fit into an `u32`.
	UnparsableLineRange,
	/// The class or member name isn't valid.
	InvalidName(String),
	/// The type doesn't encode into a valid descriptor, like a field of type `void`.
	InvalidType(String),
}

impl Display for MalformedKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			MalformedKind::MemberBeforeClass => write!(f, "member line before any class line"),
			MalformedKind::MissingArrow => write!(f, "missing \" -> \" separator"),
			MalformedKind::MissingColon => write!(f, "class line doesn't end in ':'"),
			MalformedKind::MissingName => write!(f, "missing space between type and name"),
			MalformedKind::UnclosedParameters => write!(f, "parameter list isn't closed"),
			MalformedKind::TrailingContent => write!(f, "unexpected content after the parameter list"),
			MalformedKind::UnparsableLineRange => write!(f, "unparsable line number prefix"),
			MalformedKind::InvalidName(name) => write!(f, "invalid name {name:?}"),
			MalformedKind::InvalidType(type_name) => write!(f, "invalid type {type_name:?}"),
		}
	}
}

/// A line of a mapping file that couldn't be read.
///
/// This is carried inside the [`anyhow::Error`] returned by the reading functions, get it back with
/// [`anyhow::Error::downcast_ref`]:
/// ```
/// use quill::proguard::{MalformedKind, MalformedMappingError};
///
/// let error = quill::proguard::parse_str("    int health -> a\n").unwrap_err();
/// let error = error.downcast_ref::<MalformedMappingError>().unwrap();
/// assert_eq!(error.line_number, 1);
/// assert_eq!(error.kind, MalformedKind::MemberBeforeClass);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedMappingError {
	/// Starts at `1`.
	pub line_number: usize,
	pub line: String,
	pub kind: MalformedKind,
}

impl Display for MalformedMappingError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "malformed mapping on line {}: {}: {:?}", self.line_number, self.kind, self.line)
	}
}

impl std::error::Error for MalformedMappingError {}

/// Reads a mapping file, by opening the file given by the path.
///
/// ```
/// use std::path::Path;
///
/// let path = Path::new("tests/sample_mappings.txt");
/// let classes = quill::proguard::read_file(path).unwrap();
///
/// assert_eq!(classes.len(), 4);
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<ClassMapping>> {
	let file = File::open(&path)
		.with_context(|| anyhow!("failed to open mappings file {:?}", path.as_ref()))?;
	read(file)
		.with_context(|| anyhow!("failed to read mappings file {:?}", path.as_ref()))
}

/// Reads mappings from the given reader.
///
/// A failure of the reader fails the whole read.
pub fn read(reader: impl Read) -> Result<Vec<ClassMapping>> {
	let mut parser = Parser::new();

	for (index, line) in BufReader::new(reader).lines().enumerate() {
		let line_number = index + 1;
		let line = line.with_context(|| anyhow!("failed to read line {line_number}"))?;
		parser.line(line_number, &line)?;
	}

	Ok(parser.finish())
}

/// Parses mappings from text already in memory.
///
/// ```
/// let classes = quill::proguard::parse_str("\
/// com.example.Foo -> a:
///     int health -> a
///     1:2:void heal(int) -> b
/// ").unwrap();
///
/// assert_eq!(classes.len(), 1);
/// assert_eq!(classes[0].deobfuscated_name().as_str(), "com/example/Foo");
/// assert_eq!(classes[0].methods()[0].descriptor().as_str(), "(I)V");
/// ```
pub fn parse_str(text: &str) -> Result<Vec<ClassMapping>> {
	parse(text.lines())
}

/// Parses mappings from the given lines, the first one being line number `1`.
pub fn parse(lines: impl IntoIterator<Item=impl AsRef<str>>) -> Result<Vec<ClassMapping>> {
	let mut parser = Parser::new();

	for (index, line) in lines.into_iter().enumerate() {
		parser.line(index + 1, line.as_ref())?;
	}

	Ok(parser.finish())
}

/// A class whose members are still being read.
#[derive(Debug)]
struct PendingClass {
	deobfuscated_name: ClassName,
	obfuscated_name: ClassName,
	fields: Vec<FieldMapping>,
	methods: Vec<MethodMapping>,
}

impl PendingClass {
	fn into_mapping(self) -> ClassMapping {
		ClassMapping::new(self.deobfuscated_name, self.obfuscated_name, self.fields, self.methods)
	}
}

#[derive(Debug)]
enum State {
	NoActiveClass,
	InClass(PendingClass),
}

#[derive(Debug)]
struct Parser {
	state: State,
	classes: Vec<ClassMapping>,
	skipped_methods: usize,
}

impl Parser {
	fn new() -> Parser {
		Parser {
			state: State::NoActiveClass,
			classes: Vec::new(),
			skipped_methods: 0,
		}
	}

	fn line(&mut self, line_number: usize, line: &str) -> Result<()> {
		self.apply(line_number, line)
			.map_err(|kind| MalformedMappingError { line_number, line: line.to_owned(), kind }.into())
	}

	fn apply(&mut self, line_number: usize, line: &str) -> Result<(), MalformedKind> {
		match MappingLine::classify(line)? {
			MappingLine::Skip => {},
			MappingLine::Class { deobfuscated, obfuscated } => {
				let deobfuscated_name = class_name(deobfuscated)?;
				let obfuscated_name = class_name(obfuscated)?;

				self.flush();
				self.state = State::InClass(PendingClass {
					deobfuscated_name,
					obfuscated_name,
					fields: Vec::new(),
					methods: Vec::new(),
				});
			},
			MappingLine::Field { type_name, name, obfuscated } => {
				let State::InClass(class) = &mut self.state else {
					return Err(MalformedKind::MemberBeforeClass);
				};

				let descriptor = field_descriptor(type_name)?;

				class.fields.push(FieldMapping::new(member_name(name)?, member_name(obfuscated)?, descriptor));
			},
			MappingLine::Method { return_type, name, parameter_types, obfuscated } => {
				let State::InClass(class) = &mut self.state else {
					return Err(MalformedKind::MemberBeforeClass);
				};

				if name.contains('.') {
					trace!("line {line_number}: skipping method {name:?} inlined into {}", class.deobfuscated_name);
					self.skipped_methods += 1;
					return Ok(());
				}

				let descriptor = method_descriptor(return_type, &parameter_types)?;

				class.methods.push(MethodMapping::new(member_name(name)?, member_name(obfuscated)?, descriptor));
			},
		}
		Ok(())
	}

	/// Moves the class currently being read, if any, into the finished classes.
	fn flush(&mut self) {
		if let State::InClass(class) = std::mem::replace(&mut self.state, State::NoActiveClass) {
			self.classes.push(class.into_mapping());
		}
	}

	fn finish(mut self) -> Vec<ClassMapping> {
		self.flush();

		debug!(
			"read {} classes with {} fields and {} methods, skipped {} inlined methods",
			self.classes.len(),
			self.classes.iter().map(|class| class.fields().len()).sum::<usize>(),
			self.classes.iter().map(|class| class.methods().len()).sum::<usize>(),
			self.skipped_methods,
		);

		self.classes
	}
}

// Spaces separate the parts of a line, so a name or type containing one was split wrong.
fn has_whitespace(s: &str) -> bool {
	s.contains(char::is_whitespace)
}

fn class_name(name: &str) -> Result<ClassName, MalformedKind> {
	if has_whitespace(name) {
		return Err(MalformedKind::InvalidName(name.to_owned()));
	}
	ClassName::from_source_name(name)
		.map_err(|_| MalformedKind::InvalidName(name.to_owned()))
}

fn field_descriptor(type_name: &str) -> Result<FieldDescriptor, MalformedKind> {
	if has_whitespace(type_name) {
		return Err(MalformedKind::InvalidType(type_name.to_owned()));
	}
	FieldDescriptor::from_source_type(type_name)
		.map_err(|_| MalformedKind::InvalidType(type_name.to_owned()))
}

fn method_descriptor(return_type: &str, parameter_types: &[&str]) -> Result<MethodDescriptor, MalformedKind> {
	if has_whitespace(return_type) {
		return Err(MalformedKind::InvalidType(return_type.to_owned()));
	}
	ReturnDescriptor::from_source_type(return_type)
		.map_err(|_| MalformedKind::InvalidType(return_type.to_owned()))?;
	for parameter_type in parameter_types {
		field_descriptor(parameter_type)?;
	}

	MethodDescriptor::from_source_types(return_type, parameter_types)
		.map_err(|_| MalformedKind::InvalidType(return_type.to_owned()))
}

fn member_name<T>(name: &str) -> Result<T, MalformedKind>
where
	T: for<'a> TryFrom<&'a str>,
{
	if has_whitespace(name) {
		return Err(MalformedKind::InvalidName(name.to_owned()));
	}
	T::try_from(name)
		.map_err(|_| MalformedKind::InvalidName(name.to_owned()))
}

/// Writes the given classes into a `String`, in the ProGuard format.
///
/// This is equivalent to first calling [`write_vec`] and then [`String::from_utf8`].
///
/// This method is of most use in test cases, where you also use the `pretty_assertions` crate for viewing string diffs.
pub fn write_string(classes: &[ClassMapping]) -> Result<String> {
	let vec = write_vec(classes)?;
	String::from_utf8(vec).context("failed to convert written mappings to utf8")
}

/// Writes the given classes into a `Vec<u8>`, in the ProGuard format.
///
/// Note that there's also the helper method [`write_string`] that also tries to convert the `Vec<u8>` into a `String`.
pub fn write_vec(classes: &[ClassMapping]) -> Result<Vec<u8>> {
	let mut vec = Vec::new();
	write(classes, &mut vec)?;
	Ok(vec)
}

/// Writes the given classes to the given writer, in the ProGuard format.
///
/// ```
/// # use pretty_assertions::assert_eq;
/// let input = "\
/// ## some comment
/// com.example.Foo -> a:
///     int[] health -> a
///     1:2:void heal(int,com.example.Foo) -> b
/// ";
///
/// let classes = quill::proguard::parse_str(input).unwrap();
///
/// let mut buf: Vec<u8> = Vec::new();
/// quill::proguard::write(&classes, &mut buf).unwrap();
/// let written = String::from_utf8(buf).unwrap();
///
/// let output = "\
/// com.example.Foo -> a:
///     int[] health -> a
///     void heal(int,com.example.Foo) -> b
/// ";
///
/// assert_eq!(written, output);
/// ```
pub fn write(classes: &[ClassMapping], w: &mut impl Write) -> Result<()> {
	let mut w = BufWriter::new(w);
	let w = &mut w;

	for class in classes {
		writeln!(w, "{} -> {}:", class.deobfuscated_name().to_source_name(), class.obfuscated_name().to_source_name())?;

		for field in class.fields() {
			let desc = field.descriptor().parse()
				.with_context(|| anyhow!("in field {:?} of class {:?}", field.deobfuscated_name(), class.deobfuscated_name()))?;

			writeln!(w, "    {} {} -> {}", desc.0.to_source_name(), field.deobfuscated_name(), field.obfuscated_name())?;
		}

		for method in class.methods() {
			let desc = method.descriptor().parse()
				.with_context(|| anyhow!("in method {:?} of class {:?}", method.deobfuscated_name(), class.deobfuscated_name()))?;

			writeln!(w, "    {} {}({}) -> {}",
				desc.return_source_name(),
				method.deobfuscated_name(),
				desc.parameter_source_names().join(","),
				method.obfuscated_name(),
			)?;
		}
	}

	w.flush()?;
	Ok(())
}
