/// Creates a validated [String] newtype.
///
/// You need to have a function
/// ```no_run
/// # struct Owned;
/// impl Owned {
///     fn check_valid(inner: &str) -> anyhow::Result<()> {
///         // ...
/// # Ok(())
///     }
/// }
/// ```
/// that checks if the contents are valid. Every way of constructing the type from the outside goes through it.
macro_rules! make_string_like {
	(
		$( #[$doc:meta] )*
		$vis:vis $owned:ident;
	) => {
		$( #[$doc] )*
		#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, serde::Serialize)]
		#[serde(transparent)]
		$vis struct $owned(String);

		impl $owned {
			pub fn as_str(&self) -> &str {
				&self.0
			}

			pub fn into_inner(self) -> String {
				self.0
			}

			/// Checks if a given value is valid for being represented by this type.
			///
			/// See [`Self::check_valid`] for the specification on what's valid.
			pub fn is_valid(inner: &str) -> bool {
				Self::check_valid(inner).is_ok()
			}
		}

		impl std::fmt::Display for $owned {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl AsRef<str> for $owned {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}

		// `Hash` is derived on the inner `String`, which hashes like the `str` it derefs to,
		// so lookups with a `&str` key find the same entry.
		impl std::borrow::Borrow<str> for $owned {
			fn borrow(&self) -> &str {
				&self.0
			}
		}

		impl std::ops::Deref for $owned {
			type Target = str;

			fn deref(&self) -> &str {
				&self.0
			}
		}

		impl TryFrom<String> for $owned {
			type Error = anyhow::Error;

			fn try_from(value: String) -> anyhow::Result<$owned> {
				match $owned::check_valid(&value) {
					Ok(()) => Ok($owned(value)),
					Err(e) => {
						use anyhow::Context;
						Err(e).with_context(|| anyhow::anyhow!("on value {value:?}"))
					},
				}
			}
		}

		impl<'a> TryFrom<&'a str> for $owned {
			type Error = anyhow::Error;

			fn try_from(value: &'a str) -> anyhow::Result<$owned> {
				$owned::try_from(value.to_owned())
			}
		}

		impl std::str::FromStr for $owned {
			type Err = anyhow::Error;

			fn from_str(s: &str) -> anyhow::Result<$owned> {
				$owned::try_from(s)
			}
		}

		impl From<$owned> for String {
			fn from(value: $owned) -> Self {
				value.0
			}
		}

		impl PartialEq<str> for $owned {
			fn eq(&self, other: &str) -> bool {
				self.0 == other
			}
		}
		impl<'a> PartialEq<&'a str> for $owned {
			fn eq(&self, other: &&'a str) -> bool {
				self.0 == *other
			}
		}
	}
}

pub(crate) use make_string_like;
