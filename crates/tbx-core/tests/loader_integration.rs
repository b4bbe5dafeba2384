//! Corpus loading from disk

use pretty_assertions::assert_eq;
use tbx_core::{CorpusLoader, LoadError, Navigator, NormalizeStage, PlaygroundConfig};
use tbx_corpus::parsers::DocumentFormat;
use tbx_logic::{ChapterIndex, LogicKind};
use tbx_test_utils::{
    load_sample, write_corpus, LogicCall, RecordingEngine, SAMPLE_EXAMPLE_COUNT, SAMPLE_JSON,
    SAMPLE_TOML, SAMPLE_YAML,
};

#[tokio::test]
async fn load_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(dir.path(), "priest.toml", SAMPLE_TOML);

    let library = CorpusLoader::new(PlaygroundConfig::new().with_corpus_path(&path))
        .load()
        .await
        .unwrap();

    assert_eq!(library.corpus().example_count(), SAMPLE_EXAMPLE_COUNT);
    assert_eq!(library.metadata().path.as_deref(), Some(path.as_path()));
    assert_eq!(library.metadata().bytes, SAMPLE_TOML.len());
    assert!(library.warnings().is_empty());
}

#[tokio::test]
async fn formats_produce_the_same_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let loader = CorpusLoader::new(PlaygroundConfig::new());

    let toml = loader
        .load_path(write_corpus(dir.path(), "c.toml", SAMPLE_TOML))
        .await
        .unwrap();
    let json = loader
        .load_path(write_corpus(dir.path(), "c.json", SAMPLE_JSON))
        .await
        .unwrap();
    let yaml = loader
        .load_path(write_corpus(dir.path(), "c.yml", SAMPLE_YAML))
        .await
        .unwrap();

    assert_eq!(toml.corpus(), json.corpus());
    assert_eq!(toml.corpus(), yaml.corpus());
}

#[tokio::test]
async fn explicit_format_ignores_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(dir.path(), "corpus.txt", SAMPLE_JSON);
    let config = PlaygroundConfig::new()
        .with_corpus_path(&path)
        .with_format(DocumentFormat::Json);

    let library = CorpusLoader::new(config).load().await.unwrap();
    assert_eq!(library.corpus().example_count(), SAMPLE_EXAMPLE_COUNT);
}

#[tokio::test]
async fn unknown_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(dir.path(), "corpus.txt", SAMPLE_TOML);
    let err = CorpusLoader::new(PlaygroundConfig::new()).load_path(&path).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CorpusLoader::new(PlaygroundConfig::new())
        .load_path(dir.path().join("absent.toml"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[tokio::test]
async fn size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_corpus(dir.path(), "big.toml", SAMPLE_TOML);
    let config = PlaygroundConfig::new().with_max_file_size(16);

    let err = CorpusLoader::new(config).load_path(&path).await.unwrap_err();
    assert!(matches!(err, LoadError::TooLarge { max: 16, .. }));
}

#[tokio::test]
async fn config_file_drives_loading() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = write_corpus(dir.path(), "book.yaml", SAMPLE_YAML);
    let config_path = write_corpus(
        dir.path(),
        "tbx.toml",
        &format!(
            "corpus_path = {:?}\nnormalize_stage = \"source\"\n",
            corpus.display().to_string()
        ),
    );

    let config = PlaygroundConfig::from_toml_file(&config_path).unwrap();
    assert_eq!(config.normalize_stage, NormalizeStage::Source);

    let library = CorpusLoader::new(config).load().await.unwrap();
    assert_eq!(library.corpus().example_count(), SAMPLE_EXAMPLE_COUNT);
}

#[test]
fn every_text_field_is_normalized() {
    const MNEMONICS: [&str; 7] = ["!", "&&", "||", ">", "==", "<>", "[]"];

    for stage in [NormalizeStage::Fields, NormalizeStage::Source] {
        let library = CorpusLoader::new(PlaygroundConfig::new().with_normalize_stage(stage))
            .load_str(SAMPLE_TOML, DocumentFormat::Toml)
            .unwrap();

        for (path, example) in library.corpus().examples() {
            let text = format!("{} {}", example.premises().unwrap_or(""), example.conclusion());
            for mnemonic in MNEMONICS {
                assert!(!text.contains(mnemonic), "{path} ({stage}): {text}");
            }
        }
    }
}

#[test]
fn resolve_every_example() {
    let library = load_sample(SAMPLE_TOML, DocumentFormat::Toml);
    let engine = RecordingEngine::new();

    for (path, _) in library.corpus().examples() {
        let segments = path.segments();
        let chapter = ChapterIndex::new(segments[0].parse().unwrap()).unwrap();
        let resolved = library
            .resolve(chapter, &segments[1], &segments[2], path.variant_name())
            .unwrap();
        assert_eq!(resolved.params.kind(), chapter.logic());
        resolved.params.instantiate(&engine);
    }

    let calls = engine.calls();
    assert_eq!(calls.len(), SAMPLE_EXAMPLE_COUNT);
    assert_eq!(calls[0], LogicCall::Classical);
    assert_eq!(calls[3], LogicCall::Modal);
    assert_eq!(
        calls[4],
        LogicCall::NormalModal {
            reflexive: true,
            symmetric: false,
            transitive: false,
            extendable: false,
        }
    );
    assert_eq!(
        calls[6],
        LogicCall::NormalModal {
            reflexive: true,
            symmetric: true,
            transitive: true,
            extendable: false,
        }
    );
}

#[test]
fn navigation_over_sample() {
    let navigator = Navigator::new(load_sample(SAMPLE_TOML, DocumentFormat::Toml));

    let entries = navigator.entries();
    assert_eq!(entries.chapters.len(), 3);
    assert_eq!(entries.sections.len(), 5);
    assert_eq!(entries.paragraphs.len(), 6);

    assert_eq!(navigator.section_redirect("1", "1").unwrap().location(), "/example/1/");
    assert_eq!(navigator.section_redirect("1", "4").unwrap().location(), "/example/1/4/c");
    assert_eq!(navigator.section_redirect("3", "2").unwrap().location(), "/example/3/2/a");
    assert_eq!(navigator.chapter_page("3").unwrap().logic, LogicKind::NormalModal);
    assert_eq!(navigator.chapter_page("4").unwrap_err().status_code(), 400);
}

#[test]
fn library_is_shareable_across_threads() {
    let library = load_sample(SAMPLE_TOML, DocumentFormat::Toml);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let library = library.clone();
            std::thread::spawn(move || library.corpus().example_count())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), SAMPLE_EXAMPLE_COUNT);
    }
}
