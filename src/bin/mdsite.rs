//! Command-line interface for mdsite
//! This binary converts markdown files to HTML and builds whole static sites.
//!
//! Usage:
//!   mdsite render `<path>` [--format `<format>`]   - Convert one markdown file and print the result
//!   mdsite build [--content `<dir>`] [--template `<file>`] [--static-dir `<dir>`] [--output `<dir>`]

use clap::{Arg, Command};
use std::path::Path;

use mdsite::markdown::markdown_to_html;
use mdsite::site::{copy_dir_recursive, generate_pages_recursive};

fn main() {
    let matches = Command::new("mdsite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A markdown-to-HTML converter and static site generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Convert one markdown file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('html' or 'json')")
                        .default_value("html"),
                ),
        )
        .subcommand(
            Command::new("build")
                .about("Build a static site from a content directory")
                .arg(
                    Arg::new("content")
                        .long("content")
                        .help("Directory of markdown content")
                        .default_value("content"),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .help("HTML template with {{ Title }} and {{ Content }} placeholders")
                        .default_value("template.html"),
                )
                .arg(
                    Arg::new("static-dir")
                        .long("static-dir")
                        .help("Directory of static assets copied verbatim")
                        .default_value("static"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .help("Directory the site is written to")
                        .default_value("public"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("path").unwrap();
            let format = render_matches.get_one::<String>("format").unwrap();
            handle_render_command(path, format);
        }
        Some(("build", build_matches)) => {
            let content = build_matches.get_one::<String>("content").unwrap();
            let template = build_matches.get_one::<String>("template").unwrap();
            let static_dir = build_matches.get_one::<String>("static-dir").unwrap();
            let output = build_matches.get_one::<String>("output").unwrap();
            handle_build_command(content, template, static_dir, output);
        }
        _ => unreachable!(),
    }
}

/// Handle the render command
fn handle_render_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let root = markdown_to_html(&source).unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    });

    match format {
        "html" => println!("{}", root.to_html()),
        "json" => {
            let json = serde_json::to_string_pretty(&root).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Unknown format '{}' (expected 'html' or 'json')", other);
            std::process::exit(1);
        }
    }
}

/// Handle the build command
fn handle_build_command(content: &str, template: &str, static_dir: &str, output: &str) {
    let output = Path::new(output);

    if Path::new(static_dir).is_dir() {
        if let Err(e) = copy_dir_recursive(Path::new(static_dir), output) {
            eprintln!("Error copying static assets: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = generate_pages_recursive(Path::new(content), Path::new(template), output) {
        eprintln!("Error generating pages: {}", e);
        std::process::exit(1);
    }
}
