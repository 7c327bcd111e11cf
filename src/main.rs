//! SVG Creator CLI
//!
//! Usage:
//!   svg-creator [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <PATH>    Write to a .svg or .html file instead of stdout
//!   -f, --format <FORMAT>  Stdout format: svg, html or bare
//!   -p, --pretty           Indent nested elements
//!   --indent <N>           Spaces per nesting level
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use svg_creator::{OutputFormat, RenderConfig, RenderError, Scene};

#[derive(Parser)]
#[command(name = "svg-creator")]
#[command(about = "Render TOML scene descriptions to SVG")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file; the .svg or .html extension selects the wrapper
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format used when printing to stdout
    #[arg(short, long, value_enum, default_value_t = StdoutFormat::Svg)]
    format: StdoutFormat,

    /// Put each child element on its own indented line
    #[arg(short, long)]
    pretty: bool,

    /// Spaces per nesting level when pretty printing
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum StdoutFormat {
    /// XML declaration, doctype and markup
    Svg,
    /// Markup inside a minimal HTML page
    Html,
    /// Markup only
    Bare,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

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

    let config = RenderConfig::new()
        .with_pretty_print(cli.pretty)
        .with_indent_width(cli.indent);

    if let Err(e) = run(&cli, &source, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, source: &str, config: &RenderConfig) -> Result<(), RenderError> {
    let document = Scene::from_str(source)?.into_document();

    match &cli.output {
        Some(path) => document.write_to(path, config)?,
        None => {
            let out = match cli.format {
                StdoutFormat::Svg => document.render(OutputFormat::Svg, config),
                StdoutFormat::Html => document.render(OutputFormat::Html, config),
                StdoutFormat::Bare => document.to_svg_string(config),
            };
            print!("{}", out);
            if matches!(cli.format, StdoutFormat::Bare) {
                println!();
            }
        }
    }
    Ok(())
}

fn print_intro() {
    println!(
        r#"SVG Creator - render TOML scene descriptions to SVG

USAGE:
    svg-creator [OPTIONS] [FILE]
    cat scene.toml | svg-creator

OPTIONS:
    -o, --output <PATH>    Write a .svg or .html file
    -f, --format <FORMAT>  Stdout format: svg, html, bare
    -p, --pretty           Indent nested elements
    --indent <N>           Spaces per nesting level (default 2)
    -h, --help             Print help

SCENE FORMAT:
    [svg]
    width = 200
    height = 100

    [[element]]
    tag = "circle"
    attributes = {{ id = "dot", cx = 50, cy = 50, r = 20 }}

    [[element.children]]
    tag = "animate"
    attributes = {{ attributeName = "r", begin = "0s", dur = "1s", to = 40, fill = "freeze" }}

TAGS:
    svg, circle, ellipse, line, path, polygon, polyline, rect, text, animate
    Shapes and text take only animate children."#
    );
}
