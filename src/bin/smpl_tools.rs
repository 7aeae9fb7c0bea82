//! Command-line interface for the smpl build tools
//! This binary runs the two offline passes that prepare artifacts for the
//! smpl interpreter.
//!
//! Usage:
//!   smpl-tools extract-examples [--courses `<dir>`] [--out `<dir>`]  - Extract @code listings into numbered fixtures
//!   smpl-tools collect-prototypes [--src `<dir>`]                  - Emit the generated prototype bundle on stdout

use clap::{Arg, Command};
use smpl_tools::corpus::{CourseCorpus, DocumentSource};
use smpl_tools::extract;
use smpl_tools::prototypes::{self, DirModules};
use std::path::{Path, PathBuf};

fn main() {
    let matches = Command::new("smpl-tools")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build-time artifact generators for the smpl interpreter")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract-examples")
                .about("Extract @code listings from the lesson corpus into numbered fixture files")
                .arg(
                    Arg::new("courses")
                        .long("courses")
                        .help("Root of the course repository checkout")
                        .default_value("../mathebuddy-public-courses"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .help("Existing directory that receives the test_NNN.txt fixtures")
                        .default_value("examples"),
                ),
        )
        .subcommand(
            Command::new("collect-prototypes")
                .about("Collect //G declaration lines into the generated prototype bundle")
                .arg(
                    Arg::new("src")
                        .long("src")
                        .help("Directory containing the interpreter modules")
                        .default_value("src"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract-examples", extract_matches)) => {
            let courses = PathBuf::from(extract_matches.get_one::<String>("courses").unwrap());
            let out_dir = PathBuf::from(extract_matches.get_one::<String>("out").unwrap());
            handle_extract_command(&courses, &out_dir);
        }
        Some(("collect-prototypes", collect_matches)) => {
            let src_dir = PathBuf::from(collect_matches.get_one::<String>("src").unwrap());
            handle_collect_command(&src_dir);
        }
        _ => unreachable!(),
    }
}

/// Handle the extract-examples command
fn handle_extract_command(courses: &Path, out_dir: &Path) {
    let corpus = CourseCorpus::demo_courses(courses);
    let documents = corpus.documents().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    for document in &documents {
        println!("{}", document.name);
    }

    let listings = extract::extract_listings(&documents);
    for (index, listing) in listings.iter().enumerate() {
        println!("===== {} =====", index);
        print!("{}", listing);
    }

    if let Err(e) = extract::write_listings(&listings, out_dir) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle the collect-prototypes command
fn handle_collect_command(src_dir: &Path) {
    let source = DirModules::new(src_dir);
    let bundle =
        prototypes::build_bundle(&source, &prototypes::DEFAULT_MODULES).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", bundle);
}
