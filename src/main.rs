use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use quill::remapper::MappingSet;
use quill::tree::mappings::ClassMapping;
use quill::tree::names::{Direction, Namespace};

#[derive(Debug, Parser)]
#[command(version, about = "Reads ProGuard mapping files and looks up names in them")]
struct Cli {
	/// Be verbose. Give it twice for debug output, three times for trace output.
	#[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
	verbose: u8,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Prints how many classes, fields and methods the mappings contain
	Stats {
		mappings: PathBuf,
	},
	/// Prints a class and all of its members
	Class {
		mappings: PathBuf,
		/// The class name, either dotted or slash separated
		name: String,
		#[arg(long, value_enum, default_value_t)]
		namespace: NamespaceArg,
		/// Print the class as json
		#[arg(long)]
		json: bool,
	},
	/// Substitutes the class names in a field or method descriptor
	Remap {
		mappings: PathBuf,
		descriptor: String,
		#[arg(long, value_enum, default_value_t)]
		direction: DirectionArg,
	},
	/// Writes the mappings again, without comments and line numbers
	Normalize {
		mappings: PathBuf,
		/// Where to write to, instead of stdout
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
enum NamespaceArg {
	#[default]
	Named,
	Obfuscated,
}

impl From<NamespaceArg> for Namespace {
	fn from(value: NamespaceArg) -> Self {
		match value {
			NamespaceArg::Named => Namespace::Named,
			NamespaceArg::Obfuscated => Namespace::Obfuscated,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
enum DirectionArg {
	#[default]
	NamedToObfuscated,
	ObfuscatedToNamed,
}

impl From<DirectionArg> for Direction {
	fn from(value: DirectionArg) -> Self {
		match value {
			DirectionArg::NamedToObfuscated => Direction::NamedToObfuscated,
			DirectionArg::ObfuscatedToNamed => Direction::ObfuscatedToNamed,
		}
	}
}

fn setup_logger(verbose: u8) -> Result<()> {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	fern::Dispatch::new()
		.format(|out, message, record| {
			out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
		})
		.level(level)
		.chain(std::io::stderr())
		.apply()
		.context("failed to set up logging")
}

fn load(path: &Path) -> Result<MappingSet> {
	let classes = quill::proguard::read_file(path)?;
	let set = MappingSet::new(classes)
		.with_context(|| anyhow!("failed to build symbol table from {path:?}"))?;

	info!("loaded {} classes from {path:?}", set.class_count());

	Ok(set)
}

fn print_class(class: &ClassMapping, w: &mut impl Write) -> Result<()> {
	writeln!(w, "{} -> {}", class.deobfuscated_name(), class.obfuscated_name())?;
	for field in class.fields() {
		writeln!(w, "\tfield {} {} -> {}", field.descriptor(), field.deobfuscated_name(), field.obfuscated_name())?;
	}
	for method in class.methods() {
		writeln!(w, "\tmethod {}{} -> {}", method.deobfuscated_name(), method.descriptor(), method.obfuscated_name())?;
	}
	Ok(())
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_logger(cli.verbose)?;

	let stdout = std::io::stdout();
	let mut stdout = stdout.lock();

	match cli.command {
		Command::Stats { mappings } => {
			let set = load(&mappings)?;
			writeln!(stdout, "classes: {}", set.class_count())?;
			writeln!(stdout, "fields: {}", set.field_count())?;
			writeln!(stdout, "methods: {}", set.method_count())?;
		},
		Command::Class { mappings, name, namespace, json } => {
			let set = load(&mappings)?;
			let namespace: Namespace = namespace.into();
			let name = name.replace('.', "/");

			let Some(class) = set.find_class(&name, namespace) else {
				bail!("no class {name:?} in the {namespace} namespace of {mappings:?}");
			};

			if json {
				serde_json::to_writer_pretty(&mut stdout, class)
					.context("failed to write class as json")?;
				writeln!(stdout)?;
			} else {
				print_class(class, &mut stdout)?;
			}
		},
		Command::Remap { mappings, descriptor, direction } => {
			let set = load(&mappings)?;
			writeln!(stdout, "{}", set.remap_descriptor(&descriptor, direction.into()))?;
		},
		Command::Normalize { mappings, output } => {
			let classes = quill::proguard::read_file(&mappings)?;

			match output {
				Some(output) => {
					let mut file = File::create(&output)
						.with_context(|| anyhow!("failed to create output file {output:?}"))?;
					quill::proguard::write(&classes, &mut file)?;
				},
				None => quill::proguard::write(&classes, &mut stdout)?,
			}
		},
	}

	Ok(())
}
