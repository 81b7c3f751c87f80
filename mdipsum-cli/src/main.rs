// Command-line interface for mdipsum
//
// This binary is the host around the mdipsum-core library: it collects the generation
// options, generates a placeholder markdown document, shows it, and exports it.
//
// Generating:
//
// Every generation toggle has a matching flag. `--<flag>` switches it on and
// `--<flag>=false` switches off a toggle the configuration turned on. Values not given on
// the command line come from the configuration (embedded defaults, then ./mdipsum.toml,
// then --config <path>).
// Usage:
//  mdipsum [flags]                                   - Generate markdown to stdout (default)
//  mdipsum generate [flags] --to html -o out.html    - Same as above (explicit)
//  mdipsum generate --to html --download             - Write Markdown-YYYY-MM-DD.html
//  mdipsum convert <input.md> --to html              - Export a previously generated file
//  mdipsum show-config                               - Print the resolved configuration
//  mdipsum generate-css                              - Print the baseline HTML stylesheet
//  mdipsum --list-formats                            - List export formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  mdipsum --to html --extra-theme dark --extra-css-path custom.css

use chrono::Local;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdipsum_config::{IpsumConfig, Loader};
use mdipsum_core::display::render_for_display;
use mdipsum_core::formats::get_default_css;
use mdipsum_core::publish::{download_path, publish, PublishArtifact, PublishSpec};
use mdipsum_core::{FormatRegistry, GenerationConfig, MAX_BLOCKS, MIN_BLOCKS};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generation toggles: (arg id / long flag, help).
const GENERATION_FLAGS: &[(&str, &str)] = &[
    ("no-headers", "Do not emit any heading"),
    ("no-code-snippets", "Do not emit code blocks or inline code"),
    ("no-inline-markup", "Accepted for compatibility; currently has no effect"),
    ("no-blockquotes", "Accepted for compatibility; currently has no effect"),
    ("no-lists", "Do not emit bullet lists"),
    ("no-external-links", "Do not emit links"),
    ("no-wrapping", "Show the document on a single line (stdout only)"),
    ("capitalize-sentences", "Capitalize the first letter of each sentence"),
    ("underlined-headers", "Use underlined (Setext) headings instead of '#'"),
    ("reference-links", "Use reference-style links instead of inline links"),
    ("em-style", "Wrap some words in _emphasis_"),
    ("strong-style", "Wrap some words in __strong__ emphasis (wins over --em-style)"),
    ("code-blocks", "Use fenced code blocks instead of inline code"),
];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn generation_args() -> Vec<Arg> {
    let mut args: Vec<Arg> = GENERATION_FLAGS
        .iter()
        .map(|(id, help)| {
            Arg::new(*id)
                .long(*id)
                .help(*help)
                .value_name("BOOL")
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .value_parser(clap::value_parser!(bool))
        })
        .collect();

    args.push(
        Arg::new("blocks")
            .long("blocks")
            .short('n')
            .value_name("N")
            .help("Number of content blocks (1-10)")
            .value_parser(clap::value_parser!(usize)),
    );
    args.push(
        Arg::new("to")
            .long("to")
            .help("Export format: markdown, text or html")
            .value_hint(ValueHint::Other),
    );
    args.push(
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Output file path (defaults to stdout)")
            .value_hint(ValueHint::FilePath)
            .conflicts_with("download"),
    );
    args.push(
        Arg::new("download")
            .long("download")
            .value_name("DIR")
            .help("Write Markdown-YYYY-MM-DD.<ext> into DIR (defaults to the current directory)")
            .num_args(0..=1)
            .default_missing_value(".")
            .value_hint(ValueHint::DirPath),
    );
    args
}

fn build_cli() -> Command {
    Command::new("mdipsum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate placeholder markdown documents")
        .long_about(
            "mdipsum generates lorem ipsum markdown: headings, paragraphs, lists, code\n\
            snippets and links, shaped by a set of toggles and a block count.\n\n\
            Toggles:\n  \
            Every toggle flag accepts an optional value: --code-blocks turns it on,\n  \
            --code-blocks=false turns off a toggle enabled in mdipsum.toml.\n\n\
            Commands:\n  \
            - generate: Generate a document (default command)\n  \
            - convert: Export a previously generated markdown file\n  \
            - show-config: Print the resolved configuration as JSON\n  \
            - generate-css: Print the baseline CSS used for HTML export\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdipsum                                  # Markdown to stdout\n  \
            mdipsum --blocks 8 --code-blocks         # Longer document with fenced code\n  \
            mdipsum --to html --download             # Markdown-YYYY-MM-DD.html\n  \
            mdipsum --to html --extra-theme dark     # Dark HTML page to stdout",
        )
        .args_conflicts_with_subcommands(true)
        .args(generation_args())
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available export formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdipsum.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log generation details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a placeholder markdown document (default command)")
                .args(generation_args()),
        )
        .subcommand(
            Command::new("convert")
                .about("Export a previously generated markdown file")
                .long_about(
                    "Re-export a markdown file produced by mdipsum.\n\n\
                    The target format comes from --to, or is detected from the\n\
                    --output file extension.\n\n\
                    Examples:\n  \
                    mdipsum convert Markdown-2024-05-01.md --to html\n  \
                    mdipsum convert doc.md -o doc.html",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected from --output if omitted)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("show-config").about("Print the resolved configuration as JSON"),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS used for HTML export")
                .long_about(
                    "Outputs the baseline CSS embedded in every HTML export.\n\n\
                    Save it, customize it, and pass it back with --extra-css-path\n\
                    to layer your own styles over the defaults.",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = build_cli().get_matches_from(&cleaned_args);
    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("generate", sub_matches)) => {
            handle_generate_command(sub_matches, &extra_params, &config);
        }
        None => {
            handle_generate_command(&matches, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let registry = FormatRegistry::default();
            let to = match sub_matches.get_one::<String>("to") {
                Some(to) => to.clone(),
                None => output
                    .and_then(|path| registry.detect_format_from_filename(path))
                    .unwrap_or_else(|| {
                        eprintln!("Error: Could not detect target format");
                        eprintln!("Please specify --to explicitly");
                        std::process::exit(1);
                    }),
            };
            handle_convert_command(input, &to, output, &extra_params, &config);
        }
        Some(("show-config", _)) => {
            handle_show_config_command(&config);
        }
        Some(("generate-css", _)) => {
            print!("{}", get_default_css());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the generate command (also used when no subcommand is given)
fn handle_generate_command(
    matches: &ArgMatches,
    extra_params: &HashMap<String, String>,
    config: &IpsumConfig,
) {
    let mut generation = config.generation.clone();
    apply_generation_flags(&mut generation, matches);
    let markdown = mdipsum_core::generate(&generation).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let to = matches
        .get_one::<String>("to")
        .cloned()
        .unwrap_or_else(|| config.export.format.clone());

    let output = match matches.get_one::<String>("download") {
        Some(dir) => {
            let registry = FormatRegistry::default();
            let path = download_path(&registry, &to, dir, Local::now().date_naive())
                .unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
            Some(path)
        }
        None => matches.get_one::<String>("output").map(PathBuf::from),
    };

    tracing::debug!(format = %to, bytes = markdown.len(), "generated document");

    export(&markdown, &to, output, extra_params, config, generation.no_wrapping);
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &IpsumConfig,
) {
    let markdown = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    export(
        &markdown,
        to,
        output.map(PathBuf::from),
        extra_params,
        config,
        false,
    );
}

/// Serialize the document and write it to `output`, or print it.
fn export(
    markdown: &str,
    to: &str,
    output: Option<PathBuf>,
    extra_params: &HashMap<String, String>,
    config: &IpsumConfig,
    no_wrapping: bool,
) {
    let registry = FormatRegistry::default();
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let mut spec = PublishSpec::new(markdown, to).with_options(&format_options(to, config, extra_params));
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish(spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::File(path) => eprintln!("Wrote {}", path.display()),
            PublishArtifact::InMemory(text) if to == "html" => print!("{text}"),
            PublishArtifact::InMemory(text) => print!("{}", render_for_display(&text, no_wrapping)),
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the show-config command
fn handle_show_config_command(config: &IpsumConfig) {
    let value = serde_json::json!({
        "generation": config.generation,
        "export": {
            "format": config.export.format,
            "html": {
                "theme": config.export.html.theme,
                "custom_css": config.export.html.custom_css,
            },
        },
    });
    match serde_json::to_string_pretty(&value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Export formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!(
                "  {:<10} {:<40} (.{})",
                name,
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> IpsumConfig {
    let loader = Loader::new().with_optional_file("mdipsum.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Toggles given on the command line replace the configured value; absent ones keep it.
fn apply_generation_flags(generation: &mut GenerationConfig, matches: &ArgMatches) {
    for (id, _) in GENERATION_FLAGS {
        let Some(&value) = matches.get_one::<bool>(id) else {
            continue;
        };
        let toggle = match *id {
            "no-headers" => &mut generation.no_headers,
            "no-code-snippets" => &mut generation.no_code_snippets,
            "no-inline-markup" => &mut generation.no_inline_markup,
            "no-blockquotes" => &mut generation.no_blockquotes,
            "no-lists" => &mut generation.no_lists,
            "no-external-links" => &mut generation.no_external_links,
            "no-wrapping" => &mut generation.no_wrapping,
            "capitalize-sentences" => &mut generation.capitalize_sentences,
            "underlined-headers" => &mut generation.underlined_headers,
            "reference-links" => &mut generation.reference_links,
            "em-style" => &mut generation.em_style,
            "strong-style" => &mut generation.strong_style,
            "code-blocks" => &mut generation.code_blocks,
            _ => continue,
        };
        *toggle = value;
    }

    if let Some(blocks) = matches.get_one::<usize>("blocks") {
        generation.num_blocks = *blocks;
    }
}

fn apply_config_overrides(config: &mut IpsumConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["theme"]) {
        config.export.html.theme = raw;
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.export.html.custom_css = Some(path);
    }

    if let Some(raw) = take_override(extra_params, &["blocks", "num-blocks"]) {
        config.generation.num_blocks = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid block count '{raw}', expected {MIN_BLOCKS}-{MAX_BLOCKS}");
            std::process::exit(1);
        });
    }
}

/// Options handed to the target format: configured HTML settings plus any leftover extras.
fn format_options(
    to: &str,
    config: &IpsumConfig,
    extra_params: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut options = HashMap::new();
    if to == "html" {
        options.insert("theme".to_string(), config.export.html.theme.clone());
        if let Some(css_path) = &config.export.html.custom_css {
            options.insert("css-path".to_string(), css_path.clone());
        }
    }
    for (key, value) in extra_params {
        options.insert(key.clone(), value.clone());
    }
    options
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
