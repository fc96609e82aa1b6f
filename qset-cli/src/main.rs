// Command-line interface for qset
//
// This binary converts multiple-choice question sets between the structured JSON form and the
// plain-text notation, using the qset-babel crate for every format.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag.
// Usage:
//  qset <input> --to <format> [--from <format>] [--base <json>] [--output <file>]  - Convert (default)
//  qset convert <input> --to <format> ...                                           - Same as above
//  qset format <input>                                                              - Renumber a text file
//  qset --list-formats                                                              - List formats
//
// Text parsed with --base is reconciled against that stored set, so fields the notation cannot
// express survive as long as a question keeps its number.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// Keys that match a configuration entry override it, the rest are handed to the target format.
// Example:
//  qset quiz.txt --to json --base quiz.json --extra-pretty false

use clap::{Arg, ArgAction, Command, ValueHint};
use qset_babel::{FormatRegistry, JsonFormat, Question, TextFormat, TextRules};
use qset_config::{ConfigError, Loader, QsetConfig};
use std::collections::HashMap;
use std::fs;

const DEFAULT_LOG_FILTER: &str = "qset=warn";

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
        let key = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key {
            let value = args.get(i + 1).filter(|next| !next.starts_with('-'));
            match value {
                Some(value) => {
                    extra_params.insert(key.to_string(), value.clone());
                    i += 2;
                }
                None => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("qset")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting multiple-choice question sets")
        .long_about(
            "qset converts question sets between structured JSON and a plain-text notation.\n\n\
            Text notation:\n  \
            - A blank line separates questions\n  \
            - The first line of a block is the question\n  \
            - Every other line is an answer, '*' marks it correct\n  \
            - answer:tip:chosen feedback:not chosen feedback (write '\\:' for a colon)\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration or pass format options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            qset quiz.json --to text                      # Structured set to text (stdout)\n  \
            qset quiz.txt --to json --base quiz.json      # Edited text back to JSON\n  \
            qset quiz.txt --to json --extra-pretty false  # Compact JSON",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a qset.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between question set formats (default command)")
                .long_about(
                    "Convert question sets between formats.\n\n\
                    Supported formats:\n  \
                    - text: Text notation (.txt, .qset)\n  \
                    - json: Structured question set (.json)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    qset convert quiz.json --to text -o quiz.txt             # Open for editing\n  \
                    qset convert quiz.txt --to json --base quiz.json         # Merge edits back\n  \
                    qset quiz.txt --to json                                  # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: text, json\n\
                            Use the format name, not the file extension.",
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("base")
                        .long("base")
                        .value_name("JSON")
                        .help("Stored question set to reconcile parsed text against")
                        .long_help(
                            "Stored question set (JSON) the text was produced from.\n\n\
                            Questions whose number is unchanged keep every field the text\n\
                            notation cannot express, and untouched placeholder lines bring\n\
                            back the stored item.",
                        )
                        .value_hint(ValueHint::FilePath),
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
            Command::new("format")
                .about("Format a text notation file")
                .long_about(
                    "Parse a text notation file and write it back with fresh numbering.\n\n\
                    Output is always written to stdout.\n\n\
                    Examples:\n  \
                    qset format quiz.txt              # Format to stdout\n  \
                    qset format quiz.txt > tidy.txt   # Redirect to file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "format"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &mut extra_params,
    );

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                exit_with("Error: an input file is required");
            };
            let Some(to) = sub_matches.get_one::<String>("to") else {
                exit_with("Error: --to is required");
            };

            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.to_string(),
                None => FormatRegistry::default()
                    .detect_format_from_filename(input)
                    .unwrap_or_else(|| {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        exit_with("Please specify --from explicitly");
                    }),
            };

            let base = sub_matches
                .get_one::<String>("base")
                .map(|path| load_base(path))
                .unwrap_or_default();
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, base, &extra_params, &config);
        }
        Some(("format", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                exit_with("Error: an input file is required");
            };
            handle_convert_command(
                input,
                "text",
                "text",
                None,
                Vec::new(),
                &extra_params,
                &config,
            );
        }
        _ => exit_with("Unknown subcommand. Use --help for usage information."),
    }
}

fn init_logging() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Registry holding the text and JSON formats as configured.
fn build_registry(config: &QsetConfig, base: Vec<Question>) -> FormatRegistry {
    let rules: TextRules = (&config.editor).into();
    let mut registry = FormatRegistry::new();
    registry.register(TextFormat::new(rules).with_base(base));
    registry.register(JsonFormat::new(config.convert.json.pretty));
    registry
}

fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    base: Vec<Question>,
    extra_params: &HashMap<String, String>,
    config: &QsetConfig,
) {
    let registry = build_registry(config, base);

    if let Err(e) = registry.get(from) {
        exit_with(&format!("Error: {e}"));
    }
    if let Err(e) = registry.get(to) {
        exit_with(&format!("Error: {e}"));
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        exit_with(&format!("Error reading file '{input}': {e}"));
    });

    let questions = registry.parse(&source, from).unwrap_or_else(|e| {
        exit_with(&format!("Parse error: {e}"));
    });
    tracing::debug!(count = questions.len(), from, to, "parsed question set");

    let result = registry
        .serialize_with_options(&questions, to, extra_params)
        .unwrap_or_else(|e| {
            exit_with(&format!("Serialization error: {e}"));
        });

    match output {
        Some(path) => fs::write(path, result).unwrap_or_else(|e| {
            exit_with(&format!("Error writing file '{path}': {e}"));
        }),
        None => print!("{result}"),
    }
}

fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!(
                "  {name:<6} {} (.{})",
                format.description(),
                format.file_extensions().join(", .")
            );
        }
    }
}

/// Read the stored question set a text file is reconciled against.
fn load_base(path: &str) -> Vec<Question> {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with(&format!("Error reading base file '{path}': {e}"));
    });
    FormatRegistry::default()
        .parse(&source, "json")
        .unwrap_or_else(|e| {
            exit_with(&format!("Error in base file '{path}': {e}"));
        })
}

/// Layer defaults, `./qset.toml`, the `--config` file and finally the `--extra-*` overrides.
///
/// Extras that match a configuration key are consumed; the rest stay for the target format.
fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> QsetConfig {
    let loader = Loader::new().with_optional_file("qset.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    apply_config_overrides(loader, extra_params)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            exit_with(&format!("Failed to load configuration: {err}"));
        })
}

fn apply_config_overrides(
    mut loader: Loader,
    extra_params: &mut HashMap<String, String>,
) -> Result<Loader, ConfigError> {
    if let Some(raw) = extra_params.remove("placeholder") {
        loader = loader.set_override("editor.placeholder", raw)?;
    }
    if let Some(raw) = take_override(extra_params, &["recycle-placeholders", "recycle"]) {
        let value = parse_bool_arg("recycle-placeholders", &raw);
        loader = loader.set_override("editor.recycle_placeholders", value)?;
    }
    if let Some(raw) = take_override(extra_params, &["strip-numbering"]) {
        let value = parse_bool_arg("strip-numbering", &raw);
        loader = loader.set_override("editor.strip_numbering", value)?;
    }
    if let Some(raw) = extra_params.remove("pretty") {
        loader = loader.set_override("convert.json.pretty", parse_bool_arg("pretty", &raw))?;
    }
    Ok(loader)
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => exit_with(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
