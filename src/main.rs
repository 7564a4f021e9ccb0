//! Lucide SVG CLI
//!
//! Usage:
//!   lucide-svg [OPTIONS] [ICON]...
//!
//! Options:
//!   -s, --size <SIZE>            Width and height
//!   -c, --color <COLOR>          Stroke color
//!   -w, --stroke-width <WIDTH>   Stroke width
//!   -a, --attr <KEY=VALUE>       Extra attribute on the <svg> element
//!       --config <FILE>          Defaults, custom icons and aliases (TOML)
//!   -m, --markup <FILE>          Render a custom icon from SVG markup
//!   -o, --output <DIR>           Write one <kebab-name>.svg per icon
//!   -l, --list                   List icon names and aliases
//!   -h, --help                   Print help

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use lucide_svg::{to_data_uri, to_pascal_case, Config, Icon, IconRegistry, SvgConfig};

#[derive(Parser)]
#[command(name = "lucide-svg")]
#[command(about = "Render Lucide icons to SVG", version)]
struct Cli {
    /// Icon names: PascalCase, kebab-case or an alias
    icons: Vec<String>,

    /// Width and height in user units
    #[arg(short, long)]
    size: Option<f64>,

    /// Stroke color
    #[arg(short, long)]
    color: Option<String>,

    /// Stroke width on the 24x24 grid
    #[arg(short = 'w', long)]
    stroke_width: Option<f64>,

    /// Keep the stroke width constant regardless of size
    #[arg(long)]
    absolute_stroke_width: bool,

    /// Extra CSS classes
    #[arg(long)]
    class: Option<String>,

    /// Extra attribute on the <svg> element (repeatable)
    #[arg(short, long = "attr", value_name = "KEY=VALUE", value_parser = parse_attr)]
    attrs: Vec<(String, String)>,

    /// Config file with defaults, custom icons and aliases (TOML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render a custom icon from an SVG markup file
    #[arg(short, long)]
    markup: Option<PathBuf>,

    /// Name of the --markup icon (defaults to the file stem)
    #[arg(short, long, requires = "markup")]
    name: Option<String>,

    /// Print base64 data URIs instead of markup
    #[arg(long, conflicts_with = "output")]
    data_uri: bool,

    /// Indent the output
    #[arg(short, long)]
    pretty: bool,

    /// Prepend an XML declaration
    #[arg(long)]
    xml_declaration: bool,

    /// Write one <kebab-name>.svg file per icon into this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List icon names with their aliases
    #[arg(short, long)]
    list: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("lucide_svg=debug"),
        _ => EnvFilter::new("lucide_svg=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    let registry = match config.registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.list {
        print_list(&registry);
        return;
    }

    // Collect icons: the markup file first, then names in the order given
    let mut icons: Vec<Icon> = Vec::new();
    if let Some(path) = &cli.markup {
        icons.push(load_markup_icon(path, cli.name.as_deref()));
    }
    for name in &cli.icons {
        match registry.resolve(name) {
            Ok(icon) => icons.push(icon.clone()),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
    if icons.is_empty() {
        eprintln!("Error: no icons given (run with --list to see available names)");
        std::process::exit(1);
    }

    // CLI flags win over config defaults
    let mut props = config.props();
    if let Some(size) = cli.size {
        props.size = size;
    }
    if let Some(color) = cli.color {
        props.color = color;
    }
    if let Some(stroke_width) = cli.stroke_width {
        props.stroke_width = stroke_width;
    }
    if cli.absolute_stroke_width {
        props.absolute_stroke_width = true;
    }
    if let Some(class) = cli.class {
        props.class = Some(class);
    }
    for (key, value) in cli.attrs {
        props.attrs.set(key, value);
    }

    let svg_config = SvgConfig::new()
        .with_pretty_print(cli.pretty)
        .with_xml_declaration(cli.xml_declaration);

    if let Some(dir) = &cli.output {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Error creating directory '{}': {}", dir.display(), e);
            std::process::exit(1);
        }
    }

    for icon in &icons {
        let svg = icon.to_svg_with_config(&props, &svg_config);
        match &cli.output {
            Some(dir) => {
                let path = dir.join(format!("{}.svg", icon.kebab_name()));
                if let Err(e) = fs::write(&path, svg + "\n") {
                    eprintln!("Error writing '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
                tracing::debug!(icon = icon.name(), path = %path.display(), "wrote icon");
            }
            None if cli.data_uri => println!("{}", to_data_uri(&svg)),
            None => println!("{}", svg),
        }
    }
}

fn load_markup_icon(path: &Path, name: Option<&str>) -> Icon {
    let source = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let name = match name {
        Some(n) => n.to_string(),
        None => path
            .file_stem()
            .map(|stem| to_pascal_case(&stem.to_string_lossy()))
            .unwrap_or_else(|| "Custom".to_string()),
    };

    match Icon::from_markup(name, &source) {
        Ok(icon) => icon,
        Err(errors) => {
            let filename = path.display().to_string();
            for error in &errors {
                eprint!("{}", error.format(&source, &filename));
            }
            std::process::exit(1);
        }
    }
}

fn print_list(registry: &IconRegistry) {
    let mut aliases: HashMap<&str, Vec<&str>> = HashMap::new();
    for (alias, canonical) in registry.aliases() {
        aliases.entry(canonical).or_default().push(alias);
    }

    for name in registry.names() {
        match aliases.get(name) {
            Some(names) => println!("{} ({})", name, names.join(", ")),
            None => println!("{}", name),
        }
    }
}
