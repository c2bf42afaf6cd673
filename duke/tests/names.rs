use anyhow::Result;
use pretty_assertions::assert_eq;
use duke::tree::class::ClassName;
use duke::tree::field::FieldName;
use duke::tree::method::MethodName;

#[test]
fn valid_class_names() -> Result<()> {
	let valid_class_names = [
		"1234", // yes numbers are allowed at the start, only the java language denies it
		"---",
		"a",
		"foo$bar",
		"java/lang/Object",
		"org/example/MyClassName",
		"net/minecraft/world/level/Level",
	];

	for i in valid_class_names {
		assert!(
			ClassName::is_valid(i),
			"{:?} is a valid class name", i
		);
	}

	Ok(())
}

#[test]
fn invalid_class_names() -> Result<()> {
	let invalid_class_names = [
		"",
		".",
		"/",
		";",
		"[",
		"a/",
		"/a",
		"[V",
		"[[[D",
		"L;",
		"//a",
		"a//",
		"a.b",
		"a;b",
		"a[b",
		"java.lang.Object",
	];

	for i in invalid_class_names {
		assert!(
			!ClassName::is_valid(i),
			"{:?} is an invalid class name", i
		);
	}

	Ok(())
}

#[test]
fn source_names_are_canonicalized() -> Result<()> {
	let cases = [
		("com.example.Foo", "com/example/Foo"),
		("a", "a"),
		("net.minecraft.client.Minecraft$1", "net/minecraft/client/Minecraft$1"),
		("already/internal", "already/internal"),
	];

	for (source, internal) in cases {
		let class_name = ClassName::from_source_name(source)?;
		assert_eq!(class_name.as_str(), internal);
		assert!(!class_name.contains('.'));
	}

	assert!(ClassName::from_source_name("").is_err());
	assert!(ClassName::from_source_name(".a").is_err());
	assert!(ClassName::from_source_name("a.").is_err());
	Ok(())
}

#[test]
fn valid_field_names() -> Result<()> {
	let valid_field_names = [
		"health",
		"a",
		"$VALUES",
		"this$0",
		"1234",
	];

	for i in valid_field_names {
		assert!(
			FieldName::is_valid(i),
			"{:?} is a valid field name", i
		);
	}

	Ok(())
}

#[test]
fn invalid_field_names() -> Result<()> {
	let invalid_field_names = [
		"",
		".",
		"a.b",
		"a;",
		"[a",
		"a/b",
	];

	for i in invalid_field_names {
		assert!(
			!FieldName::is_valid(i),
			"{:?} is an invalid field name", i
		);
	}

	Ok(())
}

#[test]
fn valid_method_names() -> Result<()> {
	let valid_method_names = [
		"<init>",
		"<clinit>",
		"tick",
		"a",
		"lambda$tick$0",
		"access$000",
	];

	for i in valid_method_names {
		assert!(
			MethodName::is_valid(i),
			"{:?} is a valid method name", i
		);
	}

	Ok(())
}

#[test]
fn invalid_method_names() -> Result<()> {
	let invalid_method_names = [
		"",
		"<init",
		"<foo>",
		"other.Class.bridge",
		"a;",
		"a/b",
	];

	for i in invalid_method_names {
		assert!(
			!MethodName::is_valid(i),
			"{:?} is an invalid method name", i
		);
	}

	Ok(())
}
