use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tbx_core::{CorpusLoader, ExampleLibrary, Navigator, NormalizeStage, PlaygroundConfig};
use tbx_corpus::parsers::DocumentFormat;
use tbx_logic::{ChapterIndex, ConstructorCall};
use tbx_symbol::{BuiltinCatalog, CatalogValidator, Symbol};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("tbx")
        .version(tbx_core::VERSION)
        .about("Tableaux playground example corpus tool")
        .subcommand_required(true)
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Corpus file (overrides EXAMPLES_GRAHAM_PRIEST_PATH)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("stage")
                .long("stage")
                .global(true)
                .value_parser(["source", "fields"])
                .help("When to normalize symbols"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .value_parser(["toml", "json", "yaml"])
                .help("Corpus format (default: from file extension)"),
        )
        .subcommand(
            Command::new("check")
                .about("Load and validate the corpus")
                .arg(
                    Arg::new("deny-warnings")
                        .long("deny-warnings")
                        .action(ArgAction::SetTrue)
                        .help("Fail if any schema warning is raised"),
                ),
        )
        .subcommand(
            Command::new("entries")
                .about("List every chapter, section and paragraph route")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show a paragraph's examples and logic parameters")
                .arg(Arg::new("chapter").required(true))
                .arg(Arg::new("section").required(true))
                .arg(Arg::new("paragraph").required(true))
                .arg(
                    Arg::new("variant")
                        .long("variant")
                        .help("Only this variant"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("redirect")
                .about("Show where a section route redirects")
                .arg(Arg::new("chapter").required(true))
                .arg(Arg::new("section").required(true)),
        )
        .subcommand(Command::new("symbols").about("Print the symbol catalog and its diagnostics"))
}

fn config_from(matches: &ArgMatches) -> anyhow::Result<PlaygroundConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => PlaygroundConfig::from_toml_file(path)?,
        None => PlaygroundConfig::new(),
    }
    .with_env_overrides()?;

    if let Some(path) = matches.get_one::<PathBuf>("corpus") {
        config = config.with_corpus_path(path);
    }
    if let Some(stage) = matches.get_one::<String>("stage") {
        config = config.with_normalize_stage(stage.parse::<NormalizeStage>()?);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config = config.with_format(format.parse::<DocumentFormat>()?);
    }
    Ok(config)
}

async fn load(config: PlaygroundConfig) -> anyhow::Result<ExampleLibrary> {
    let path = config.corpus_path.clone();
    CorpusLoader::new(config)
        .load()
        .await
        .with_context(|| format!("loading corpus from {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let config = config_from(&matches)?;

    match matches.subcommand() {
        Some(("check", args)) => {
            let config = if args.get_flag("deny-warnings") {
                config.with_deny_warnings(true)
            } else {
                config
            };
            let library = load(config).await?;
            let corpus = library.corpus();
            let metadata = library.metadata();

            let source = metadata.path.as_deref().unwrap_or_else(|| Path::new("<memory>"));
            println!("Corpus: {}", source.display());
            println!("  Bytes: {}", metadata.bytes);
            println!("  BLAKE3: {}", metadata.checksum);
            println!("  Chapters: {}", corpus.len());
            println!("  Examples: {}", corpus.example_count());
            println!("  Warnings: {}", library.warnings().len());
            for warning in library.warnings() {
                println!("    - {warning}");
            }
        }
        Some(("entries", args)) => {
            let entries = Navigator::new(load(config).await?).entries();

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for route in &entries.paragraphs {
                    println!("/example/{}/{}/{}", route.chapter, route.section, route.paragraph);
                }
            }
        }
        Some(("show", args)) => {
            let chapter = string_arg(args, "chapter");
            let section = string_arg(args, "section");
            let paragraph = string_arg(args, "paragraph");
            let variant = args.get_one::<String>("variant").map(String::as_str);

            let library = load(config).await?;
            let navigator = Navigator::new(library.clone());
            let page = navigator.paragraph_page(chapter, section, paragraph)?;
            let chapter_index: ChapterIndex = page.chapter;

            let names: Vec<Option<&str>> = match variant {
                Some(name) => vec![Some(name)],
                None => page
                    .example_or_examples
                    .examples()
                    .into_iter()
                    .map(|(name, _)| name)
                    .collect(),
            };

            let mut resolved = Vec::new();
            for name in names {
                resolved.push(library.resolve(chapter_index, section, paragraph, name)?);
            }

            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                println!("Chapter {chapter_index} ({})", chapter_index.logic());
                for item in &resolved {
                    println!();
                    println!("{}", item.path);
                    println!("  {}", item.example.argument());
                    if let Some(holds) = item.example.holds() {
                        println!("  Holds: {holds}");
                    }
                    println!("  Logic: {}", item.params.instantiate(&ConstructorCall));
                }
            }
        }
        Some(("redirect", args)) => {
            let navigator = Navigator::new(load(config).await?);
            let chapter = string_arg(args, "chapter");
            let redirect = navigator.section_redirect(chapter, string_arg(args, "section"))?;
            println!("{} {}", redirect.status_code(), redirect.location());
        }
        Some(("symbols", _)) => {
            println!("Symbol Catalog");
            println!("==============");
            for symbol in Symbol::iter() {
                println!("  {:<4} {}  {}", symbol.ascii(), symbol.glyph(), symbol.name());
            }

            let conflicts = CatalogValidator::new().diagnose(&BuiltinCatalog);
            println!();
            if conflicts.is_empty() {
                println!("Ordering: OK");
            } else {
                for conflict in &conflicts {
                    println!("  {:?}: {}", conflict.severity(), conflict.description);
                }
            }
        }
        _ => {}
    }

    Ok(())
}

fn string_arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map_or("", String::as_str)
}
