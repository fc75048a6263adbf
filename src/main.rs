//! zutun-render CLI
//!
//! Usage:
//!   zutun-render [OPTIONS] [FILE]
//!
//! Options:
//!   -l, --library <FILE>  Additional component library (TOML), repeatable
//!       --no-builtin      Do not register the built-in zutun views
//!       --list            List registered components and their slots
//!       --check <FILE>    Validate a component library and exit
//!   -d, --debug           Log registration and tree building to stderr
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::Level;

use zutun_components::{render_document, Library, LibraryError, RenderConfig, Registry};

#[derive(Parser)]
#[command(name = "zutun-render")]
#[command(about = "Render zutun view-component trees to HTML")]
struct Cli {
    /// Component tree document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Additional component library file (TOML format)
    #[arg(short, long)]
    library: Vec<PathBuf>,

    /// Start from an empty registry instead of the built-in views
    #[arg(long)]
    no_builtin: bool,

    /// List registered components with their placeholders and defaults
    #[arg(long)]
    list: bool,

    /// Validate a component library file and exit
    #[arg(long, value_name = "FILE")]
    check: Option<PathBuf>,

    /// Debug mode: log registration and tree building
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .init();

    if let Some(path) = &cli.check {
        check_library(path);
        return;
    }

    // Load libraries
    let mut config = RenderConfig::new().with_builtin(!cli.no_builtin);
    for path in &cli.library {
        match Library::from_file(path) {
            Ok(library) => config = config.with_library(library),
            Err(e) => {
                eprintln!("{}", describe_library_error(path, &e));
                std::process::exit(1);
            }
        }
    }

    let registry = match config.registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.list {
        print_components(&registry);
        return;
    }

    // If no input file and stdin is a terminal (interactive), show usage
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match render_document(&source, &registry) {
        Ok(html) => {
            println!("{}", html);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn check_library(path: &Path) {
    match Library::from_file(path) {
        Ok(library) => {
            println!(
                "{}: {} component(s) OK",
                path.display(),
                library.variants().len()
            );
        }
        Err(e) => {
            eprintln!("{}", describe_library_error(path, &e));
            std::process::exit(1);
        }
    }
}

/// Template syntax errors get an ariadne report against the template text
fn describe_library_error(path: &Path, error: &LibraryError) -> String {
    match error {
        LibraryError::Variant(e) => format!(
            "Error in component '{}' of '{}':\n{}",
            e.name,
            path.display(),
            e.format(&e.name)
        ),
        other => format!("Error loading library '{}': {}", path.display(), other),
    }
}

fn print_components(registry: &Registry) {
    for name in registry.names() {
        let Some(variant) = registry.get(name) else {
            continue;
        };
        println!("{}", name);
        println!("  slots: {}", variant.template().placeholders().join(", "));
        if !variant.separator().is_empty() {
            println!("  separator: {:?}", variant.separator());
        }
        for (slot, value) in variant.defaults() {
            println!("  default {} = {:?}", slot, value);
        }
    }
}

fn print_intro() {
    println!(
        r#"zutun-render - render view-component trees

Pipe a component tree document in, or pass it as a file:

    zutun-render board.toml
    echo 'component = "storypoints"
    args = [3]' | zutun-render

A tree document names a component and fills its slots:

    component = "kanban_column"
    [slots]
    name = "Done"
    items = [{{ component = "ticket_card", slots = {{ id = 7, summary = "Ship" }} }}]

Arrays become lists joined with the component's separator; inline tables
with a `component` key become nested components.

Use --list to see the available components and their slots."#
    );
}
