//! # Adaptadores de Análise
//!
//! Uma interface única ([`Analyzer`]) sobre dois analisadores com capacidades
//! diferentes:
//!
//! | Analisador | Tokenização        | POS                 | NER                    |
//! |------------|--------------------|---------------------|------------------------|
//! | `lexical`  | Treebank           | Penn Treebank       | não suportado          |
//! | `pipeline` | Pipeline (infixos) | Universal (UD)      | Regras + gazetteers    |
//!
//! ## Carregamento preguiçoso
//!
//! O [`AnalyzerRegistry`] guarda um [`ModelSlot`] por analisador. O modelo só é
//! construído no primeiro uso e **no máximo uma vez por processo**: o resultado
//! (sucesso ou falha) fica cacheado em um `OnceLock`. Uma falha desativa o
//! analisador até o fim do processo, sem derrubá-lo.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AnalysisError, Capability, CoreResult};
use crate::model::{LexicalModel, ModelConfig, ModelSource, PipelineModel};
use crate::pos::to_universal;
use crate::tokenizer::{tokenize_with_mode, Token, TokenizerMode};

/// Identificador de cada analisador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    Lexical,
    Pipeline,
}

impl AnalyzerKind {
    /// Ordem de exibição na UI.
    pub const ALL: [AnalyzerKind; 2] = [AnalyzerKind::Lexical, AnalyzerKind::Pipeline];

    pub fn name(&self) -> &'static str {
        match self {
            AnalyzerKind::Lexical => "lexical",
            AnalyzerKind::Pipeline => "pipeline",
        }
    }

    /// Título da seção no dashboard
    pub fn title(&self) -> &'static str {
        match self {
            AnalyzerKind::Lexical => "Analisador Léxico (Penn Treebank)",
            AnalyzerKind::Pipeline => "Analisador Pipeline (Universal + NER)",
        }
    }

    pub fn tokenizer_mode(&self) -> TokenizerMode {
        match self {
            AnalyzerKind::Lexical => TokenizerMode::Treebank,
            AnalyzerKind::Pipeline => TokenizerMode::Pipeline,
        }
    }
}

impl std::fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// O que um analisador sabe fazer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub tokenization: bool,
    pub pos_tagging: bool,
    pub entity_recognition: bool,
}

impl Capabilities {
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Tokenization => self.tokenization,
            Capability::PosTagging => self.pos_tagging,
            Capability::EntityRecognition => self.entity_recognition,
        }
    }
}

/// Um token com sua classe gramatical (abreviação da tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosTag {
    pub token: String,
    pub tag: String,
}

/// Uma entidade reconhecida. `text` é sempre `input[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
    /// Regra que reconheceu a entidade (ex: "gazetteer")
    pub source: String,
}

/// Interface comum aos analisadores.
///
/// Quem chama deve rejeitar texto vazio antes ([`AnalysisError::EmptyInput`]);
/// para `""` os métodos devolvem listas vazias.
pub trait Analyzer: Send + Sync {
    fn kind(&self) -> AnalyzerKind;

    fn capabilities(&self) -> Capabilities;

    /// Tokens em ordem de documento.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Um par (token, tag) por token de [`Analyzer::tokenize`].
    fn tag(&self, text: &str) -> Vec<PosTag>;

    /// Entidades em ordem de documento, ou `UnsupportedCapability`.
    fn recognize_entities(&self, text: &str) -> CoreResult<Vec<Entity>>;
}

/// Analisador `lexical`: tokenização Treebank + tags Penn. Não faz NER.
pub struct LexicalAnalyzer {
    model: Arc<LexicalModel>,
}

impl LexicalAnalyzer {
    pub fn new(model: Arc<LexicalModel>) -> Self {
        Self { model }
    }

    /// Etiqueta tokens já tokenizados.
    pub fn tag_tokens(&self, tokens: &[Token]) -> Vec<PosTag> {
        let tags = self.model.tagger.tag(tokens);
        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| PosTag { token: token.text.clone(), tag })
            .collect()
    }
}

impl Analyzer for LexicalAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Lexical
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            tokenization: true,
            pos_tagging: true,
            entity_recognition: false,
        }
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize_with_mode(text, self.kind().tokenizer_mode())
    }

    fn tag(&self, text: &str) -> Vec<PosTag> {
        self.tag_tokens(&self.tokenize(text))
    }

    fn recognize_entities(&self, _text: &str) -> CoreResult<Vec<Entity>> {
        Err(AnalysisError::UnsupportedCapability {
            analyzer: AnalyzerKind::Lexical,
            capability: Capability::EntityRecognition,
        })
    }
}

/// Analisador `pipeline`: tokenização com infixos, tags universais e NER.
pub struct PipelineAnalyzer {
    model: Arc<PipelineModel>,
}

impl PipelineAnalyzer {
    pub fn new(model: Arc<PipelineModel>) -> Self {
        Self { model }
    }
}

impl Analyzer for PipelineAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Pipeline
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            tokenization: true,
            pos_tagging: true,
            entity_recognition: true,
        }
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize_with_mode(text, self.kind().tokenizer_mode())
    }

    fn tag(&self, text: &str) -> Vec<PosTag> {
        let tokens = self.tokenize(text);
        let penn = self.model.tagger.tag(&tokens);
        let universal = to_universal(&tokens, &penn);
        tokens
            .into_iter()
            .zip(universal)
            .map(|(token, tag)| PosTag { token: token.text, tag: tag.to_string() })
            .collect()
    }

    fn recognize_entities(&self, text: &str) -> CoreResult<Vec<Entity>> {
        let tokens = self.tokenize(text);
        let entities = self
            .model
            .rules
            .recognize(&tokens, text)
            .into_iter()
            .map(|span| Entity {
                text: span.text,
                label: span.label.name().to_string(),
                start: span.start,
                end: span.end,
                source: span.source,
            })
            .collect();
        Ok(entities)
    }
}

/// Um modelo carregado no máximo uma vez. A falha também fica cacheada.
pub struct ModelSlot<T> {
    kind: AnalyzerKind,
    source: ModelSource,
    cell: OnceLock<CoreResult<Arc<T>>>,
    attempts: AtomicUsize,
}

impl<T> ModelSlot<T> {
    pub fn new(kind: AnalyzerKind, source: ModelSource) -> Self {
        Self {
            kind,
            source,
            cell: OnceLock::new(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Devolve o modelo, executando `load` apenas na primeira chamada.
    ///
    /// Qualquer erro de carregamento vira `ModelUnavailable` e é devolvido
    /// igual em todas as chamadas seguintes.
    pub fn get_or_load<F>(&self, load: F) -> CoreResult<Arc<T>>
    where
        F: FnOnce(&ModelSource) -> CoreResult<T>,
    {
        self.cell
            .get_or_init(|| {
                self.attempts.fetch_add(1, Ordering::SeqCst);
                match load(&self.source) {
                    Ok(model) => Ok(Arc::new(model)),
                    Err(err) => {
                        warn!("⚠️ Analisador '{}' desativado: {}", self.kind, err);
                        Err(AnalysisError::ModelUnavailable {
                            analyzer: self.kind,
                            reason: err.to_string(),
                        })
                    }
                }
            })
            .clone()
    }

    /// Quantas vezes o carregamento foi tentado (0 ou 1).
    pub fn load_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn source(&self) -> &ModelSource {
        &self.source
    }
}

/// Situação de um analisador, para a rota de status.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerStatus {
    pub kind: AnalyzerKind,
    pub title: &'static str,
    pub source: String,
    pub available: bool,
    pub reason: Option<String>,
    pub capabilities: Capabilities,
}

/// Registro dos analisadores do processo (compartilhado via `Arc` no servidor).
pub struct AnalyzerRegistry {
    lexical: ModelSlot<LexicalModel>,
    pipeline: ModelSlot<PipelineModel>,
}

impl AnalyzerRegistry {
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            lexical: ModelSlot::new(AnalyzerKind::Lexical, config.lexical_source()),
            pipeline: ModelSlot::new(AnalyzerKind::Pipeline, config.pipeline_source()),
        }
    }

    /// Registro com os dois modelos embutidos.
    pub fn builtin() -> Self {
        Self::new(&ModelConfig::default())
    }

    pub fn lexical(&self) -> CoreResult<LexicalAnalyzer> {
        self.lexical
            .get_or_load(LexicalModel::load)
            .map(LexicalAnalyzer::new)
    }

    pub fn pipeline(&self) -> CoreResult<PipelineAnalyzer> {
        self.pipeline
            .get_or_load(PipelineModel::load)
            .map(PipelineAnalyzer::new)
    }

    /// Analisador pelo identificador, carregando o modelo se preciso.
    pub fn get(&self, kind: AnalyzerKind) -> CoreResult<Arc<dyn Analyzer>> {
        match kind {
            AnalyzerKind::Lexical => Ok(Arc::new(self.lexical()?)),
            AnalyzerKind::Pipeline => Ok(Arc::new(self.pipeline()?)),
        }
    }

    pub fn load_attempts(&self, kind: AnalyzerKind) -> usize {
        match kind {
            AnalyzerKind::Lexical => self.lexical.load_attempts(),
            AnalyzerKind::Pipeline => self.pipeline.load_attempts(),
        }
    }

    /// Carrega os dois modelos agora (em vez de no primeiro pedido).
    pub fn preload(&self) {
        for kind in AnalyzerKind::ALL {
            match self.get(kind) {
                Ok(_) => info!("✅ Analisador '{}' pronto", kind),
                Err(err) => warn!("Analisador '{}' indisponível: {}", kind, err),
            }
        }
    }

    /// Situação de cada analisador (carrega os modelos se ainda não carregados).
    pub fn status(&self) -> Vec<AnalyzerStatus> {
        AnalyzerKind::ALL
            .into_iter()
            .map(|kind| {
                let source = match kind {
                    AnalyzerKind::Lexical => self.lexical.source().describe(),
                    AnalyzerKind::Pipeline => self.pipeline.source().describe(),
                };
                match self.get(kind) {
                    Ok(analyzer) => AnalyzerStatus {
                        kind,
                        title: kind.title(),
                        source,
                        available: true,
                        reason: None,
                        capabilities: analyzer.capabilities(),
                    },
                    Err(err) => AnalyzerStatus {
                        kind,
                        title: kind.title(),
                        source,
                        available: false,
                        reason: Some(err.to_string()),
                        capabilities: Capabilities {
                            tokenization: false,
                            pos_tagging: false,
                            entity_recognition: false,
                        },
                    },
                }
            })
            .collect()
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SAMPLE: &str = "Apple Inc. was founded by Steve Jobs in California on April 1, 1976.";

    fn missing_artifact_config() -> ModelConfig {
        ModelConfig {
            lexical: None,
            pipeline: Some(PathBuf::from("/nao/existe/pipeline.toml")),
        }
    }

    #[test]
    fn test_tokenize_is_non_empty_and_lossless() {
        let registry = AnalyzerRegistry::builtin();
        let expected: String = SAMPLE.split_whitespace().collect();
        for kind in AnalyzerKind::ALL {
            let analyzer = registry.get(kind).unwrap();
            let tokens = analyzer.tokenize(SAMPLE);
            assert!(!tokens.is_empty());
            let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
            assert_eq!(joined, expected);
        }
    }

    #[test]
    fn test_tag_aligns_with_tokens() {
        let registry = AnalyzerRegistry::builtin();
        let lexical = registry.lexical().unwrap();
        let tags = lexical.tag(SAMPLE);
        assert_eq!(tags.len(), lexical.tokenize(SAMPLE).len());
        assert_eq!(tags[0], PosTag { token: "Apple".into(), tag: "NNP".into() });

        let pipeline = registry.pipeline().unwrap();
        let tags = pipeline.tag(SAMPLE);
        assert_eq!(tags[0].tag, "PROPN");
        assert!(tags.iter().any(|t| t.token == "founded" && t.tag == "VERB"));
    }

    #[test]
    fn test_lexical_has_no_ner() {
        let registry = AnalyzerRegistry::builtin();
        let lexical = registry.get(AnalyzerKind::Lexical).unwrap();
        assert!(!lexical.capabilities().supports(Capability::EntityRecognition));
        assert_eq!(
            lexical.recognize_entities(SAMPLE),
            Err(AnalysisError::UnsupportedCapability {
                analyzer: AnalyzerKind::Lexical,
                capability: Capability::EntityRecognition,
            })
        );
    }

    #[test]
    fn test_pipeline_entities_are_substrings() {
        let registry = AnalyzerRegistry::builtin();
        let entities = registry.pipeline().unwrap().recognize_entities(SAMPLE).unwrap();
        let pairs: Vec<(&str, &str)> = entities.iter().map(|e| (e.text.as_str(), e.label.as_str())).collect();
        assert_eq!(
            pairs,
            [
                ("Apple Inc.", "ORG"),
                ("Steve Jobs", "PERSON"),
                ("California", "GPE"),
                ("April 1, 1976", "DATE"),
            ]
        );
        for entity in &entities {
            assert_eq!(&SAMPLE[entity.start..entity.end], entity.text);
        }
    }

    #[test]
    fn test_empty_text_yields_empty_lists() {
        let registry = AnalyzerRegistry::builtin();
        let pipeline = registry.pipeline().unwrap();
        assert!(pipeline.tokenize("").is_empty());
        assert!(pipeline.tag("").is_empty());
        assert_eq!(pipeline.recognize_entities(""), Ok(vec![]));
    }

    #[test]
    fn test_models_load_once() {
        let registry = AnalyzerRegistry::builtin();
        assert_eq!(registry.load_attempts(AnalyzerKind::Pipeline), 0);
        for _ in 0..3 {
            registry.pipeline().unwrap();
        }
        assert_eq!(registry.load_attempts(AnalyzerKind::Pipeline), 1);
    }

    #[test]
    fn test_missing_artifact_disables_analyzer() {
        let registry = AnalyzerRegistry::new(&missing_artifact_config());
        for _ in 0..3 {
            let err = registry.get(AnalyzerKind::Pipeline).err().unwrap();
            assert!(matches!(
                err,
                AnalysisError::ModelUnavailable { analyzer: AnalyzerKind::Pipeline, .. }
            ));
        }
        assert_eq!(registry.load_attempts(AnalyzerKind::Pipeline), 1);
        // O outro analisador continua funcionando
        assert!(registry.get(AnalyzerKind::Lexical).is_ok());

        let status = registry.status();
        assert!(status[0].available);
        assert!(!status[1].available);
        assert!(status[1].reason.as_deref().unwrap_or("").contains("pipeline"));
    }

    #[test]
    fn test_concurrent_first_use_loads_once() {
        let registry = Arc::new(AnalyzerRegistry::builtin());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.lexical().is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(registry.load_attempts(AnalyzerKind::Lexical), 1);
    }
}
