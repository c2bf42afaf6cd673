pub mod mappings;

pub mod names {
	use std::fmt::{Display, Formatter};

	/// One of the two namespaces of a mapping file.
	///
	/// The named namespace is the human-readable one, found on the left side of the `->`, the obfuscated one
	/// is what the compiled module actually uses.
	#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
	pub enum Namespace {
		Named,
		Obfuscated,
	}

	impl Namespace {
		pub fn other(self) -> Namespace {
			match self {
				Namespace::Named => Namespace::Obfuscated,
				Namespace::Obfuscated => Namespace::Named,
			}
		}
	}

	impl Display for Namespace {
		fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
			f.write_str(match self {
				Namespace::Named => "named",
				Namespace::Obfuscated => "obfuscated",
			})
		}
	}

	/// Which way names are translated.
	#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
	pub enum Direction {
		NamedToObfuscated,
		ObfuscatedToNamed,
	}

	impl Direction {
		pub fn source(self) -> Namespace {
			match self {
				Direction::NamedToObfuscated => Namespace::Named,
				Direction::ObfuscatedToNamed => Namespace::Obfuscated,
			}
		}

		pub fn target(self) -> Namespace {
			self.source().other()
		}

		pub fn reverse(self) -> Direction {
			match self {
				Direction::NamedToObfuscated => Direction::ObfuscatedToNamed,
				Direction::ObfuscatedToNamed => Direction::NamedToObfuscated,
			}
		}
	}

}
