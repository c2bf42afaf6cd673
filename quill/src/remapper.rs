//! The symbol table built from a mapping file, answering "what is the name of X in the other namespace?".
//!
//! A [`MappingSet`] is built once from the classes read by [`crate::proguard`], and never changes afterwards.
//! To load different mappings, build a new one and replace the old one as a whole.
//!
//! Member descriptors in the mapping file use the class names of the named namespace. When building the table,
//! the descriptors of the obfuscated namespace are derived from them, so that members can be looked up by what's
//! actually found in the obfuscated module: the owner, name and descriptor, all obfuscated.

use anyhow::{anyhow, bail, Context, Result};
use indexmap::{Equivalent, IndexMap};
use log::debug;
use duke::tree::class::ClassName;
use duke::tree::descriptor::{remap_descriptor, ClassNameMapper};
use crate::tree::mappings::{ClassMapping, FieldMapping, MemberMapping, MethodMapping};
use crate::tree::names::{Direction, Namespace};

/// Identifies a field or method by its owner, name and descriptor, all in the same namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemberKey {
	owner: String,
	name: String,
	desc: String,
}

/// Borrowed form of [`MemberKey`], for lookups. Hashes the same way.
#[derive(Debug, Hash)]
struct MemberKeyRef<'a> {
	owner: &'a str,
	name: &'a str,
	desc: &'a str,
}

impl Equivalent<MemberKey> for MemberKeyRef<'_> {
	fn equivalent(&self, key: &MemberKey) -> bool {
		self.owner == key.owner && self.name == key.name && self.desc == key.desc
	}
}

/// Index of the owning class, and the index of the member in its list.
type MemberPosition = (usize, usize);

#[derive(Debug, Default)]
struct NamespaceIndex {
	classes: IndexMap<ClassName, usize>,
	fields: IndexMap<MemberKey, MemberPosition>,
	methods: IndexMap<MemberKey, MemberPosition>,
}

/// Maps the class names of one namespace to the other one.
struct ClassNames<'a> {
	index: &'a NamespaceIndex,
	classes: &'a [ClassMapping],
	target: Namespace,
}

impl ClassNameMapper for ClassNames<'_> {
	fn map_class_name(&self, class: &str) -> Option<&str> {
		self.index.classes.get(class)
			.map(|&index| self.classes[index].name(self.target).as_str())
	}
}

#[derive(Debug)]
pub struct MappingSet {
	classes: Vec<ClassMapping>,
	named: NamespaceIndex,
	obfuscated: NamespaceIndex,
}

impl MappingSet {
	/// Builds the symbol table.
	///
	/// Fails if two classes have the same name in either namespace.
	///
	/// Members of a class that share their name and descriptor in one namespace are indexed once, the one listed
	/// last wins. That happens for methods listed once per line range, and for groups of inlined frames.
	pub fn new(classes: Vec<ClassMapping>) -> Result<MappingSet> {
		let mut named = NamespaceIndex::default();
		let mut obfuscated = NamespaceIndex::default();

		for (index, class) in classes.iter().enumerate() {
			insert_class(&mut named, &classes, class.deobfuscated_name(), index, Namespace::Named)?;
			insert_class(&mut obfuscated, &classes, class.obfuscated_name(), index, Namespace::Obfuscated)?;
		}

		// the class indices must be complete before any descriptor can be remapped
		let to_obfuscated = ClassNames { index: &named, classes: &classes, target: Namespace::Obfuscated };

		let mut named_fields = IndexMap::new();
		let mut named_methods = IndexMap::new();
		let mut obfuscated_fields = IndexMap::new();
		let mut obfuscated_methods = IndexMap::new();

		for (class_index, class) in classes.iter().enumerate() {
			for (field_index, field) in class.fields().iter().enumerate() {
				let position = (class_index, field_index);
				let obfuscated_desc = field.descriptor().remap(&to_obfuscated)
					.with_context(|| anyhow!("failed to remap descriptor of field {:?} in {:?}", field.deobfuscated_name(), class.deobfuscated_name()))?;

				insert_member(&mut named_fields, MemberKey {
					owner: class.deobfuscated_name().to_string(),
					name: field.deobfuscated_name().to_string(),
					desc: field.descriptor().to_string(),
				}, position);
				insert_member(&mut obfuscated_fields, MemberKey {
					owner: class.obfuscated_name().to_string(),
					name: field.obfuscated_name().to_string(),
					desc: obfuscated_desc.into_inner(),
				}, position);
			}

			for (method_index, method) in class.methods().iter().enumerate() {
				let position = (class_index, method_index);
				let obfuscated_desc = method.descriptor().remap(&to_obfuscated)
					.with_context(|| anyhow!("failed to remap descriptor of method {:?} in {:?}", method.deobfuscated_name(), class.deobfuscated_name()))?;

				insert_member(&mut named_methods, MemberKey {
					owner: class.deobfuscated_name().to_string(),
					name: method.deobfuscated_name().to_string(),
					desc: method.descriptor().to_string(),
				}, position);
				insert_member(&mut obfuscated_methods, MemberKey {
					owner: class.obfuscated_name().to_string(),
					name: method.obfuscated_name().to_string(),
					desc: obfuscated_desc.into_inner(),
				}, position);
			}
		}

		named.fields = named_fields;
		named.methods = named_methods;
		obfuscated.fields = obfuscated_fields;
		obfuscated.methods = obfuscated_methods;

		let set = MappingSet { classes, named, obfuscated };

		debug!("built mapping set of {} classes, {} fields and {} methods", set.class_count(), set.field_count(), set.method_count());

		Ok(set)
	}

	fn index(&self, namespace: Namespace) -> &NamespaceIndex {
		match namespace {
			Namespace::Named => &self.named,
			Namespace::Obfuscated => &self.obfuscated,
		}
	}

	/// All classes, in the order of the mapping file.
	pub fn classes(&self) -> &[ClassMapping] {
		&self.classes
	}

	pub fn class_count(&self) -> usize {
		self.classes.len()
	}

	/// The number of distinct fields, by their obfuscated owner, name and descriptor.
	pub fn field_count(&self) -> usize {
		self.obfuscated.fields.len()
	}

	/// The number of distinct methods, by their obfuscated owner, name and descriptor.
	pub fn method_count(&self) -> usize {
		self.obfuscated.methods.len()
	}

	/// Finds a class by its name, in the internal form, like `com/example/Foo`.
	pub fn find_class(&self, name: &str, namespace: Namespace) -> Option<&ClassMapping> {
		self.index(namespace).classes.get(name)
			.map(|&index| &self.classes[index])
	}

	/// Finds a member by name. See [`ClassMapping::find_member`] for which member is picked if the name is ambiguous.
	pub fn find_member<'a>(&self, class: &'a ClassMapping, name: &str, namespace: Namespace) -> Option<MemberMapping<'a>> {
		class.find_member(name, namespace)
	}

	pub fn find_field<'a>(&self, class: &'a ClassMapping, name: &str, namespace: Namespace) -> Option<&'a FieldMapping> {
		class.find_field(name, namespace)
	}

	pub fn find_methods<'a, 'n>(&self, class: &'a ClassMapping, name: &'n str, namespace: Namespace) -> impl Iterator<Item=&'a MethodMapping> + 'n
	where
		'a: 'n,
	{
		class.find_methods(name, namespace)
	}

	/// Finds the method with exactly this name and descriptor. Both the name and the descriptor must be in the
	/// given namespace.
	pub fn find_method(&self, class: &ClassMapping, name: &str, descriptor: &str, namespace: Namespace) -> Option<&MethodMapping> {
		let key = MemberKeyRef { owner: class.name(namespace).as_str(), name, desc: descriptor };
		self.index(namespace).methods.get(&key)
			.map(|&(c, m)| &self.classes[c].methods()[m])
	}

	/// Substitutes the class names in a descriptor, going in the given direction.
	///
	/// Classes not in the mappings keep their name.
	pub fn remap_descriptor(&self, descriptor: &str, direction: Direction) -> String {
		let mapper = ClassNames {
			index: self.index(direction.source()),
			classes: &self.classes,
			target: direction.target(),
		};
		remap_descriptor(descriptor, &mapper)
	}

	/// Gets the named name of an obfuscated class, or the input if the class isn't mapped.
	pub fn map_class<'a>(&'a self, class: &'a str) -> &'a str {
		self.find_class(class, Namespace::Obfuscated)
			.map_or(class, |class| class.deobfuscated_name().as_str())
	}

	/// Gets the named name of a field, given its obfuscated owner, name and descriptor.
	///
	/// Returns `name` if the field isn't mapped.
	pub fn map_field<'a>(&'a self, owner: &str, name: &'a str, descriptor: &str) -> &'a str {
		let key = MemberKeyRef { owner, name, desc: descriptor };
		self.obfuscated.fields.get(&key)
			.map_or(name, |&(class, field)| self.classes[class].fields()[field].deobfuscated_name().as_str())
	}

	/// Gets the named name of a method, given its obfuscated owner, name and descriptor.
	///
	/// Returns `name` if the method isn't mapped.
	pub fn map_method<'a>(&'a self, owner: &str, name: &'a str, descriptor: &str) -> &'a str {
		let key = MemberKeyRef { owner, name, desc: descriptor };
		self.obfuscated.methods.get(&key)
			.map_or(name, |&(class, method)| self.classes[class].methods()[method].deobfuscated_name().as_str())
	}
}

fn insert_class(index: &mut NamespaceIndex, classes: &[ClassMapping], name: &ClassName, position: usize, namespace: Namespace) -> Result<()> {
	if let Some(&existing) = index.classes.get(name) {
		bail!(
			"class name {name:?} of the {namespace} namespace is used by both {:?} and {:?}",
			classes[existing].deobfuscated_name(),
			classes[position].deobfuscated_name(),
		);
	}
	index.classes.insert(name.clone(), position);
	Ok(())
}

/// Later entries replace earlier ones with the same key.
///
/// Inlined frames list several methods under the same obfuscated range, name and descriptor, and the last
/// one of them is the method that actually exists in the obfuscated module.
fn insert_member(members: &mut IndexMap<MemberKey, MemberPosition>, key: MemberKey, position: MemberPosition) {
	if let Some(replaced) = members.insert(key, position) {
		debug!("member at {position:?} replaces the one at {replaced:?} with the same owner, name and descriptor");
	}
}
