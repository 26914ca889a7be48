use c4view::markdown::replace_diagram_blocks;
use c4view::render::{CharCountMeasurer, TextMeasurer, UnicodeWidthMeasurer};
use c4view::{C4Config, Dispatcher, Engine, detect_kind};
use serde::Serialize;
use std::io::Read;
use std::sync::Arc;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    NoDiagram,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoDiagram => write!(f, "No C4 diagram detected"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Detect,
    Parse,
}

#[derive(Debug, Clone, Copy, Default)]
enum TextMeasurerKind {
    #[default]
    Unicode,
    Chars,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    markdown: bool,
    text_measurer: TextMeasurerKind,
    box_width: Option<u64>,
    columns: Option<u64>,
    config: Option<String>,
}

fn usage() -> &'static str {
    "c4view\n\
\n\
USAGE:\n\
  c4view [render] [--markdown] [--config <json>] [--text-measurer unicode|chars] [--box-width <n>] [--columns <n>] [<path>|-]\n\
  c4view detect [<path>|-]\n\
  c4view parse [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - render prints C4 text art; other dialects are shown inside an error box.\n\
  - --markdown replaces every ```mermaid block of a markdown document instead.\n\
  - parse prints the parsed entity graph as JSON.\n\
  - --config merges a JSON object such as '{\"c4\":{\"boxWidth\":24}}' into the site config.\n\
  - --box-width and --columns are applied on top of --config.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "detect" => args.command = Command::Detect,
            "parse" => args.command = Command::Parse,
            "--pretty" => args.pretty = true,
            "--markdown" => args.markdown = true,
            "--text-measurer" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.text_measurer = match kind.as_str() {
                    "unicode" => TextMeasurerKind::Unicode,
                    "chars" => TextMeasurerKind::Chars,
                    _ => return Err(CliError::Usage(usage())),
                };
            }
            "--config" => {
                let Some(json) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(json.clone());
            }
            "--box-width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.box_width = Some(w.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--columns" => {
                let Some(c) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.columns = Some(c.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn build_text_measurer(kind: TextMeasurerKind) -> Arc<dyn TextMeasurer + Send + Sync> {
    match kind {
        TextMeasurerKind::Unicode => Arc::new(UnicodeWidthMeasurer),
        TextMeasurerKind::Chars => Arc::new(CharCountMeasurer),
    }
}

fn build_engine(args: &Args) -> Result<Engine, CliError> {
    let mut cfg = C4Config::empty_object();
    if let Some(json) = args.config.as_deref() {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        if !overrides.is_object() {
            return Err(CliError::Usage("--config expects a JSON object"));
        }
        cfg.merge(overrides);
    }
    if let Some(w) = args.box_width {
        cfg.set_value("c4.boxWidth", serde_json::json!(w));
    }
    if let Some(c) = args.columns {
        cfg.set_value("c4.columns", serde_json::json!(c));
    }
    Ok(Engine::new().with_site_config(cfg))
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let engine = build_engine(&args)?;

    match args.command {
        Command::Detect => {
            let diagram_type = engine.detect_type(&text).map_err(|_| CliError::NoDiagram)?;
            match detect_kind(&text) {
                Some(kind) => println!("{diagram_type} {}", kind.marker()),
                None => println!("{diagram_type}"),
            }
            Ok(())
        }
        Command::Parse => {
            let Some(parsed) = engine.parse_diagram(&text) else {
                return Err(CliError::NoDiagram);
            };
            write_json(&parsed, args.pretty)
        }
        Command::Render => {
            let dispatcher = Dispatcher::new()
                .with_engine(engine)
                .with_text_measurer(build_text_measurer(args.text_measurer));
            let out = if args.markdown {
                replace_diagram_blocks(&text, &dispatcher)
            } else {
                dispatcher.render_diagram(&text)
            };
            println!("{out}");
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(CliError::NoDiagram) => {
            eprintln!("{}", CliError::NoDiagram);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
