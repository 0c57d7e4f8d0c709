// Command-line interface for papyr
//
// This binary is the shell around the papyr-convert library: it owns the
// document store (the persistence side the editor normally handles) and
// wires user commands to the conversion core.
//
// The core never prints; capability load summaries, fidelity warnings and
// errors are surfaced here, on stderr, so stdout stays scriptable (ids,
// listings, markup).
//
// Usage:
//  papyr new                                  - Create an untitled document
//  papyr list                                 - List stored documents
//  papyr show <id>                            - Print a document's markup
//  papyr import <file>                        - Import a file into the store
//  papyr export <id> [--to <format>] [-o DIR] - Export a stored document
//
// The store lives in the user data directory by default; override with
// --store or the PAPYR_STORE environment variable (useful in tests).

mod store;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use papyr_config::{Loader, PapyrConfig};
use papyr_convert::{export_named, ConvertSession};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use store::DocumentStore;

fn build_cli() -> Command {
    Command::new("papyr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command-line companion for papyr documents")
        .long_about(
            "papyr manages a local store of editor documents and converts them\n\
            to and from other formats.\n\n\
            Import understands .md, .txt, .docx, .odt and, best-effort, .doc\n\
            and .pdf. Export produces docx, doc, pdf (as plain text), odt or\n\
            md.\n\n\
            Examples:\n  \
            papyr import notes.md                # convert and store, prints the id\n  \
            papyr list                           # list stored documents\n  \
            papyr export 1718000000000 --to md   # write notes.md next to you",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a papyr.toml configuration file")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("DIR")
                .help("Directory holding the document store")
                .global(true)
                .value_hint(ValueHint::DirPath),
        )
        .subcommand(Command::new("new").about("Create a new untitled document"))
        .subcommand(Command::new("list").about("List stored documents, oldest first"))
        .subcommand(
            Command::new("show")
                .about("Print a stored document's markup")
                .arg(Arg::new("id").help("Document id").required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Import a file into the document store")
                .arg(
                    Arg::new("file")
                        .help("File to import (.md, .txt, .docx, .odt, .doc, .pdf)")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("quiet")
                        .long("quiet")
                        .help("Suppress the capability load summary")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export a stored document to a downloadable file")
                .arg(Arg::new("id").help("Document id").required(true))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_name("FORMAT")
                        .help("docx, doc, pdf, odt or md (defaults from config)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .help("Directory to write into (defaults to the current one)")
                        .value_hint(ValueHint::DirPath),
                ),
        )
}

fn main() {
    env_logger::init();
    let matches = build_cli().get_matches();
    let config = load_config(&matches);

    match matches.subcommand() {
        Some(("new", _)) => handle_new(&matches, &config),
        Some(("list", _)) => handle_list(&matches),
        Some(("show", sub)) => handle_show(&matches, sub),
        Some(("import", sub)) => handle_import(&matches, sub, &config),
        Some(("export", sub)) => handle_export(&matches, sub, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn load_config(matches: &ArgMatches) -> PapyrConfig {
    let mut loader = Loader::new();
    match matches.get_one::<String>("config") {
        Some(path) => loader = loader.with_file(path),
        None => {
            if let Some(config_dir) = dirs::config_dir() {
                loader = loader.with_optional_file(config_dir.join("papyr").join("papyr.toml"));
            }
        }
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    })
}

fn open_store(matches: &ArgMatches) -> DocumentStore {
    let root = matches
        .get_one::<String>("store")
        .map(PathBuf::from)
        .or_else(|| env::var_os("PAPYR_STORE").map(PathBuf::from))
        .or_else(|| dirs::data_dir().map(|dir| dir.join("papyr").join("documents")));

    let root = root.unwrap_or_else(|| {
        eprintln!("No store directory available; pass --store or set PAPYR_STORE.");
        std::process::exit(1);
    });

    DocumentStore::open(root).unwrap_or_else(|e| {
        eprintln!("Error opening document store: {e}");
        std::process::exit(1);
    })
}

/// Handle the new command
fn handle_new(matches: &ArgMatches, config: &PapyrConfig) {
    let store = open_store(matches);
    let title = &config.editor.untitled_title;
    let content = format!("<p>{title}</p>");
    let id = store.insert(title, &content).unwrap_or_else(|e| {
        eprintln!("Error creating document: {e}");
        std::process::exit(1);
    });
    println!("{id}");
}

/// Handle the list command
fn handle_list(matches: &ArgMatches) {
    let store = open_store(matches);
    let documents = store.list().unwrap_or_else(|e| {
        eprintln!("Error reading document store: {e}");
        std::process::exit(1);
    });
    for (id, title) in documents {
        println!("{id}\t{title}");
    }
}

/// Handle the show command
fn handle_show(matches: &ArgMatches, sub: &ArgMatches) {
    let store = open_store(matches);
    let id = sub.get_one::<String>("id").expect("id is required");
    let document = store.get(id).unwrap_or_else(|e| {
        eprintln!("Error loading document '{id}': {e}");
        std::process::exit(1);
    });
    println!("{}", document.content);
}

/// Handle the import command
fn handle_import(matches: &ArgMatches, sub: &ArgMatches, config: &PapyrConfig) {
    let store = open_store(matches);
    let path = sub.get_one::<String>("file").expect("file is required");

    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    let file_name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);

    let session = ConvertSession::with_capabilities(config.capabilities.to_capabilities());
    if !sub.get_flag("quiet") {
        eprintln!("{}", session.load_report().summary());
    }

    let result = session.import(&bytes, file_name).unwrap_or_else(|e| {
        eprintln!("Failed to process file: {e}");
        std::process::exit(1);
    });
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    let id = store
        .insert(&result.title, &result.content)
        .unwrap_or_else(|e| {
            eprintln!("Error storing document: {e}");
            std::process::exit(1);
        });
    println!("{id}");
}

/// Handle the export command
fn handle_export(matches: &ArgMatches, sub: &ArgMatches, config: &PapyrConfig) {
    let store = open_store(matches);
    let id = sub.get_one::<String>("id").expect("id is required");
    let format = sub
        .get_one::<String>("to")
        .unwrap_or(&config.export.default_format);

    let document = store.get(id).unwrap_or_else(|e| {
        eprintln!("Error loading document '{id}': {e}");
        std::process::exit(1);
    });

    let exported = export_named(&document.content, &document.title, format).unwrap_or_else(|e| {
        eprintln!("Export error: {e}");
        std::process::exit(1);
    });

    let output_dir = sub
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let output_path = output_dir.join(&exported.file_name);

    fs::write(&output_path, &exported.bytes).unwrap_or_else(|e| {
        eprintln!("Error writing '{}': {e}", output_path.display());
        std::process::exit(1);
    });
    println!("{}", output_path.display());
}
