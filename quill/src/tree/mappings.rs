//! The mappings of one class and its members, in both namespaces.
//!
//! All of these are values: they're built once by the reader and never changed afterwards.
//! Class names are always in the internal, slash separated form; this is guaranteed by [`ClassName`].

use serde::Serialize;
use duke::tree::class::ClassName;
use duke::tree::field::{FieldDescriptor, FieldName};
use duke::tree::method::{MethodDescriptor, MethodName};
use crate::tree::names::Namespace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMapping {
	deobfuscated_name: ClassName,
	obfuscated_name: ClassName,
	fields: Vec<FieldMapping>,
	methods: Vec<MethodMapping>,
}

impl ClassMapping {
	pub fn new(deobfuscated_name: ClassName, obfuscated_name: ClassName, fields: Vec<FieldMapping>, methods: Vec<MethodMapping>) -> ClassMapping {
		ClassMapping { deobfuscated_name, obfuscated_name, fields, methods }
	}

	pub fn deobfuscated_name(&self) -> &ClassName {
		&self.deobfuscated_name
	}

	pub fn obfuscated_name(&self) -> &ClassName {
		&self.obfuscated_name
	}

	pub fn name(&self, namespace: Namespace) -> &ClassName {
		match namespace {
			Namespace::Named => &self.deobfuscated_name,
			Namespace::Obfuscated => &self.obfuscated_name,
		}
	}

	/// The fields, in the order of the mapping file.
	pub fn fields(&self) -> &[FieldMapping] {
		&self.fields
	}

	/// The methods, in the order of the mapping file.
	pub fn methods(&self) -> &[MethodMapping] {
		&self.methods
	}

	/// Finds the first field with the given name.
	pub fn find_field(&self, name: &str, namespace: Namespace) -> Option<&FieldMapping> {
		self.fields.iter().find(|field| field.name(namespace) == name)
	}

	/// Finds all methods with the given name, that is all overloads.
	pub fn find_methods<'a, 'n>(&'a self, name: &'n str, namespace: Namespace) -> impl Iterator<Item=&'a MethodMapping> + 'n
	where
		'a: 'n,
	{
		self.methods.iter().filter(move |method| method.name(namespace) == name)
	}

	/// Finds a member by name.
	///
	/// Obfuscated names are heavily reused, a field and several methods may all be called `a`. Fields are
	/// searched first, and the first match in file order is returned. Use [`ClassMapping::find_methods`] to see all
	/// methods of a name.
	pub fn find_member(&self, name: &str, namespace: Namespace) -> Option<MemberMapping<'_>> {
		self.find_field(name, namespace)
			.map(MemberMapping::Field)
			.or_else(|| self.methods.iter().find(|method| method.name(namespace) == name).map(MemberMapping::Method))
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMapping {
	deobfuscated_name: FieldName,
	obfuscated_name: FieldName,
	descriptor: FieldDescriptor,
}

impl FieldMapping {
	/// `descriptor` uses the class names of the named namespace.
	pub fn new(deobfuscated_name: FieldName, obfuscated_name: FieldName, descriptor: FieldDescriptor) -> FieldMapping {
		FieldMapping { deobfuscated_name, obfuscated_name, descriptor }
	}

	pub fn deobfuscated_name(&self) -> &FieldName {
		&self.deobfuscated_name
	}

	pub fn obfuscated_name(&self) -> &FieldName {
		&self.obfuscated_name
	}

	pub fn name(&self, namespace: Namespace) -> &FieldName {
		match namespace {
			Namespace::Named => &self.deobfuscated_name,
			Namespace::Obfuscated => &self.obfuscated_name,
		}
	}

	pub fn descriptor(&self) -> &FieldDescriptor {
		&self.descriptor
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodMapping {
	deobfuscated_name: MethodName,
	obfuscated_name: MethodName,
	descriptor: MethodDescriptor,
}

impl MethodMapping {
	/// `descriptor` uses the class names of the named namespace.
	pub fn new(deobfuscated_name: MethodName, obfuscated_name: MethodName, descriptor: MethodDescriptor) -> MethodMapping {
		MethodMapping { deobfuscated_name, obfuscated_name, descriptor }
	}

	pub fn deobfuscated_name(&self) -> &MethodName {
		&self.deobfuscated_name
	}

	pub fn obfuscated_name(&self) -> &MethodName {
		&self.obfuscated_name
	}

	pub fn name(&self, namespace: Namespace) -> &MethodName {
		match namespace {
			Namespace::Named => &self.deobfuscated_name,
			Namespace::Obfuscated => &self.obfuscated_name,
		}
	}

	pub fn descriptor(&self) -> &MethodDescriptor {
		&self.descriptor
	}
}

/// Either a field or a method.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberMapping<'a> {
	Field(&'a FieldMapping),
	Method(&'a MethodMapping),
}

impl<'a> MemberMapping<'a> {
	pub fn name(&self, namespace: Namespace) -> &'a str {
		match *self {
			MemberMapping::Field(field) => field.name(namespace).as_str(),
			MemberMapping::Method(method) => method.name(namespace).as_str(),
		}
	}

	pub fn descriptor(&self) -> &'a str {
		match *self {
			MemberMapping::Field(field) => field.descriptor().as_str(),
			MemberMapping::Method(method) => method.descriptor().as_str(),
		}
	}
}
