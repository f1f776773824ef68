//! # Modelos dos Analisadores
//!
//! Cada analisador tem um modelo imutável, construído uma única vez:
//!
//! - **LexicalModel**: o etiquetador Penn ([`PennTagger`]).
//! - **PipelineModel**: o etiquetador Penn + o motor de regras de entidades ([`RuleEngine`]).
//!
//! ## Origem do modelo
//!
//! Por padrão o modelo é **embutido** (léxico e gazetteers de [`crate::lexicon`]).
//! Opcionalmente, um **artefato TOML** em disco estende esses dados:
//!
//! ```toml
//! [lexicon]
//! blockchain = "NN"
//!
//! [gazetteer]
//! ORG = ["Acme Labs", "Initech"]
//! PERSON = ["Ada Byron"]
//! ```
//!
//! As tags de `[lexicon]` precisam ser do Penn Treebank (`NN`, `VBD`, `,`...);
//! tags universais como `NOUN` são rejeitadas.
//!
//! Um artefato ausente ou inválido é um erro [`AnalysisError::ModelArtifact`];
//! o registro de analisadores o converte em `ModelUnavailable`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{AnalysisError, CoreResult};
use crate::glossary::is_penn_tag;
use crate::pos::PennTagger;
use crate::rule_based::RuleEngine;
use crate::tagger::EntityLabel;

/// De onde o modelo de um analisador é carregado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Dados embutidos no binário.
    Builtin,
    /// Dados embutidos + extensões lidas de um arquivo TOML.
    Artifact(PathBuf),
}

impl ModelSource {
    pub fn describe(&self) -> String {
        match self {
            ModelSource::Builtin => "embutido".to_string(),
            ModelSource::Artifact(path) => path.display().to_string(),
        }
    }
}

/// Seção `[models]` da configuração: caminho opcional do artefato de cada analisador.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    #[serde(default)]
    pub lexical: Option<PathBuf>,
    #[serde(default)]
    pub pipeline: Option<PathBuf>,
}

impl ModelConfig {
    pub fn lexical_source(&self) -> ModelSource {
        source_of(&self.lexical)
    }

    pub fn pipeline_source(&self) -> ModelSource {
        source_of(&self.pipeline)
    }
}

fn source_of(path: &Option<PathBuf>) -> ModelSource {
    match path {
        Some(path) => ModelSource::Artifact(path.clone()),
        None => ModelSource::Builtin,
    }
}

/// Conteúdo de um artefato de modelo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelArtifact {
    /// Palavra → tag Penn Treebank
    #[serde(default)]
    pub lexicon: HashMap<String, String>,
    /// Rótulo OntoNotes → nomes de entidades
    #[serde(default)]
    pub gazetteer: HashMap<String, Vec<String>>,
}

impl ModelArtifact {
    /// Lê e valida um artefato do disco.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| artifact_error(path, e.to_string()))?;
        Self::parse(&content, path)
    }

    /// Interpreta o conteúdo TOML; `path` só aparece nas mensagens de erro.
    pub fn parse(content: &str, path: &Path) -> CoreResult<Self> {
        let artifact: ModelArtifact = toml::from_str(content).map_err(|e| artifact_error(path, e.to_string()))?;

        for (word, tag) in &artifact.lexicon {
            // O léxico alimenta o etiquetador Penn; tags universais são convertidas depois
            if !is_penn_tag(tag) {
                return Err(artifact_error(path, format!("tag Penn Treebank inválida '{tag}' para '{word}'")));
            }
        }
        artifact.entity_entries().map_err(|label| {
            artifact_error(path, format!("rótulo de entidade desconhecido '{label}'"))
        })?;
        Ok(artifact)
    }

    /// Gazetteer com os rótulos já convertidos. Em caso de erro, devolve o rótulo inválido.
    pub fn entity_entries(&self) -> Result<HashMap<EntityLabel, Vec<String>>, String> {
        self.gazetteer
            .iter()
            .map(|(label, names)| match EntityLabel::from_name(label) {
                Some(parsed) => Ok((parsed, names.clone())),
                None => Err(label.clone()),
            })
            .collect()
    }
}

fn artifact_error(path: &Path, message: String) -> AnalysisError {
    AnalysisError::ModelArtifact {
        path: path.display().to_string(),
        message,
    }
}

fn load_artifact(source: &ModelSource) -> CoreResult<Option<ModelArtifact>> {
    match source {
        ModelSource::Builtin => Ok(None),
        ModelSource::Artifact(path) => ModelArtifact::load(path).map(Some),
    }
}

fn extend_tagger(tagger: &mut PennTagger, artifact: &ModelArtifact) {
    for (word, tag) in &artifact.lexicon {
        tagger.add_word(word, tag);
    }
}

/// Modelo do analisador `lexical`.
#[derive(Debug, Clone)]
pub struct LexicalModel {
    pub tagger: PennTagger,
}

impl LexicalModel {
    pub fn builtin() -> Self {
        Self { tagger: PennTagger::new() }
    }

    pub fn load(source: &ModelSource) -> CoreResult<Self> {
        let mut model = Self::builtin();
        if let Some(artifact) = load_artifact(source)? {
            extend_tagger(&mut model.tagger, &artifact);
            if !artifact.gazetteer.is_empty() {
                warn!("Gazetteer ignorado: o analisador lexical não reconhece entidades");
            }
        }
        info!(
            "📦 Modelo lexical carregado ({}; {} palavras no léxico)",
            source.describe(),
            model.tagger.lexicon_size()
        );
        Ok(model)
    }
}

/// Modelo do analisador `pipeline`.
#[derive(Debug, Clone)]
pub struct PipelineModel {
    pub tagger: PennTagger,
    pub rules: RuleEngine,
}

impl PipelineModel {
    pub fn builtin() -> Self {
        Self {
            tagger: PennTagger::new(),
            rules: RuleEngine::new(),
        }
    }

    pub fn load(source: &ModelSource) -> CoreResult<Self> {
        let mut model = Self::builtin();
        if let Some(artifact) = load_artifact(source)? {
            extend_tagger(&mut model.tagger, &artifact);
            // Já validado em `ModelArtifact::parse`
            if let Ok(entries) = artifact.entity_entries() {
                model.rules.extend(&entries);
            }
        }
        info!(
            "📦 Modelo pipeline carregado ({}; {} entradas de gazetteer)",
            source.describe(),
            model.rules.gazetteer_size()
        );
        Ok(model)
    }
}
