//! Testing utilities for the tableaux playground workspace
//!
//! Shared corpus fixtures, a recording logic engine and catalog helpers.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tbx_core::{CorpusLoader, ExampleLibrary, PlaygroundConfig};
use tbx_corpus::parsers::DocumentFormat;
use tbx_logic::LogicEngine;
use tbx_symbol::PairCatalog;

/// Corpus covering all three chapters, a variant map and every mnemonic
pub const SAMPLE_TOML: &str = r#"
[1.1.a]
premises = "p > q, p"
conclusion = "q"
holds = true

[1.1.b]
premises = "p || q, !p"
conclusion = "q"
holds = true

[1.4.c]
conclusion = "(p && q) == (q && p)"

[2.3.a]
premises = "[](p > q)"
conclusion = "[]p > []q"
holds = true

[3.2.a.rho]
conclusion = "[]p > p"
holds = true
kind = { reflexive = true }

[3.2.a.plain]
conclusion = "[]p > p"
holds = false

[3.5.b]
conclusion = "<>p > []<>p"
kind = { reflexive = true, symmetric = true, transitive = true }
"#;

/// [`SAMPLE_TOML`] as JSON
pub const SAMPLE_JSON: &str = r#"{
  "1": {
    "1": {
      "a": { "premises": "p > q, p", "conclusion": "q", "holds": true },
      "b": { "premises": "p || q, !p", "conclusion": "q", "holds": true }
    },
    "4": { "c": { "conclusion": "(p && q) == (q && p)" } }
  },
  "2": {
    "3": { "a": { "premises": "[](p > q)", "conclusion": "[]p > []q", "holds": true } }
  },
  "3": {
    "2": {
      "a": {
        "rho": { "conclusion": "[]p > p", "holds": true, "kind": { "reflexive": true } },
        "plain": { "conclusion": "[]p > p", "holds": false }
      }
    },
    "5": {
      "b": {
        "conclusion": "<>p > []<>p",
        "kind": { "reflexive": true, "symmetric": true, "transitive": true }
      }
    }
  }
}"#;

/// [`SAMPLE_TOML`] as YAML, with unquoted numeric keys
pub const SAMPLE_YAML: &str = r#"
1:
  1:
    a: { premises: "p > q, p", conclusion: q, holds: true }
    b: { premises: "p || q, !p", conclusion: q, holds: true }
  4:
    c: { conclusion: "(p && q) == (q && p)" }
2:
  3:
    a: { premises: "[](p > q)", conclusion: "[]p > []q", holds: true }
3:
  2:
    a:
      rho: { conclusion: "[]p > p", holds: true, kind: { reflexive: true } }
      plain: { conclusion: "[]p > p", holds: false }
  5:
    b:
      conclusion: "<>p > []<>p"
      kind: { reflexive: true, symmetric: true, transitive: true }
"#;

/// Example count of the sample corpus
pub const SAMPLE_EXAMPLE_COUNT: usize = 7;

/// Load a fixture with default configuration
pub fn load_sample(content: &str, format: DocumentFormat) -> ExampleLibrary {
    CorpusLoader::new(PlaygroundConfig::new())
        .load_str(content, format)
        .unwrap()
}

/// The TOML sample, loaded
pub fn sample_library() -> ExampleLibrary {
    load_sample(SAMPLE_TOML, DocumentFormat::Toml)
}

/// Write a corpus file into `dir`
pub fn write_corpus(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Arrow catalog, longer mnemonic first
pub fn arrow_catalog() -> PairCatalog {
    PairCatalog::new().with_pair("<->", "↔").with_pair("->", "→")
}

/// Arrow catalog with the shorter mnemonic first (corrupts `<->`)
pub fn misordered_arrow_catalog() -> PairCatalog {
    PairCatalog::new().with_pair("->", "→").with_pair("<->", "↔")
}

/// A constructor call observed by [`RecordingEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicCall {
    Classical,
    Modal,
    NormalModal {
        reflexive: bool,
        symmetric: bool,
        transitive: bool,
        extendable: bool,
    },
}

/// Logic engine that records every constructor call
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<LogicCall>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<LogicCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: LogicCall) -> LogicCall {
        self.calls.lock().unwrap().push(call);
        call
    }
}

impl LogicEngine for RecordingEngine {
    type Logic = LogicCall;

    fn classical(&self) -> LogicCall {
        self.record(LogicCall::Classical)
    }

    fn modal(&self) -> LogicCall {
        self.record(LogicCall::Modal)
    }

    fn normal_modal(
        &self,
        reflexive: bool,
        symmetric: bool,
        transitive: bool,
        extendable: bool,
    ) -> LogicCall {
        self.record(LogicCall::NormalModal {
            reflexive,
            symmetric,
            transitive,
            extendable,
        })
    }
}
