//! # Orquestrador da Análise
//!
//! Transforma um pedido ([`AnalysisRequest`]) em um retrato imutável do que a
//! interface deve mostrar ([`AnalysisResult`]):
//!
//! 1. Estatísticas do texto (sempre).
//! 2. Uma seção por analisador selecionado, **independentes entre si**:
//!    tokens, tabela POS e, se o analisador suporta NER, o relatório de entidades.
//! 3. Avisos: analisador indisponível, nenhuma entidade encontrada.
//!
//! A análise é síncrona: cada pedido roda até o fim na thread que o recebeu.
//! O [`Session`] modela o ciclo da tela (Idle → Displayed).

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzer::{Analyzer, AnalyzerKind, AnalyzerRegistry, Entity};
use crate::corpus::DEFAULT_TEXT;
use crate::error::{AnalysisError, CoreResult};
use crate::glossary::{explain, TagKind};
use crate::highlight::{highlight, highlight_spans, Segment};
use crate::stats::{compute, TextStatistics};

/// Quais analisadores rodar. Por padrão, os dois.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerSelection {
    pub use_lexical: bool,
    pub use_pipeline: bool,
}

impl AnalyzerSelection {
    pub fn includes(&self, kind: AnalyzerKind) -> bool {
        match kind {
            AnalyzerKind::Lexical => self.use_lexical,
            AnalyzerKind::Pipeline => self.use_pipeline,
        }
    }
}

impl Default for AnalyzerSelection {
    fn default() -> Self {
        Self {
            use_lexical: true,
            use_pipeline: true,
        }
    }
}

/// Um pedido de análise validado: o texto nunca está em branco.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: String,
    selection: AnalyzerSelection,
}

impl AnalysisRequest {
    /// Rejeita texto vazio ou só com espaços com [`AnalysisError::EmptyInput`].
    pub fn new(text: impl Into<String>, selection: AnalyzerSelection) -> CoreResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(Self { text, selection })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> AnalyzerSelection {
        self.selection
    }
}

/// Linha da tabela POS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosRow {
    pub token: String,
    pub tag: String,
    pub description: &'static str,
}

/// Linha da tabela de entidades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRow {
    pub entity: String,
    pub label: String,
    pub description: &'static str,
    /// Regra que reconheceu a entidade
    pub source: String,
}

/// Quantas entidades de um rótulo (para o gráfico de pizza).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Relatório de entidades de um analisador com NER.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityReport {
    pub rows: Vec<EntityRow>,
    /// Markdown com substituição literal
    pub highlighted: String,
    /// Segmentos por offset (concatenação == texto original)
    pub segments: Vec<Segment>,
    /// Em ordem de primeira aparição
    pub label_distribution: Vec<LabelCount>,
}

/// Resultado de um analisador.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerSection {
    pub analyzer: AnalyzerKind,
    pub title: &'static str,
    pub tokens: Vec<String>,
    pub token_count: usize,
    pub pos_table: Vec<PosRow>,
    /// `None` quando o analisador não reconhece entidades
    pub entities: Option<EntityReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Mensagem informativa exibida junto ao resultado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub analyzer: Option<AnalyzerKind>,
    pub message: String,
}

impl Notice {
    fn info(analyzer: AnalyzerKind, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, analyzer: Some(analyzer), message: message.into() }
    }

    fn warning(analyzer: AnalyzerKind, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, analyzer: Some(analyzer), message: message.into() }
    }
}

pub const NO_ENTITIES_MESSAGE: &str = "Nenhuma entidade nomeada encontrada no texto.";

/// Retrato completo de uma análise. Imutável e serializável.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub statistics: TextStatistics,
    /// Entidades do analisador com NER; `None` ("N/A") se ele não rodou
    pub entity_count: Option<usize>,
    pub sections: Vec<AnalyzerSection>,
    pub notices: Vec<Notice>,
    pub processing_ms: u64,
}

impl AnalysisResult {
    pub fn section(&self, kind: AnalyzerKind) -> Option<&AnalyzerSection> {
        self.sections.iter().find(|section| section.analyzer == kind)
    }
}

/// Executa a análise completa de um pedido.
///
/// Analisadores desmarcados são omitidos; analisadores indisponíveis também,
/// gerando um aviso. Nenhuma falha de um analisador afeta o outro.
pub fn analyze(request: &AnalysisRequest, registry: &AnalyzerRegistry) -> AnalysisResult {
    let start = Instant::now();
    let statistics = compute(request.text());
    let mut sections = Vec::new();
    let mut notices = Vec::new();

    for kind in AnalyzerKind::ALL {
        if !request.selection().includes(kind) {
            continue;
        }
        match registry.get(kind) {
            Ok(analyzer) => sections.push(build_section(analyzer.as_ref(), request.text(), &mut notices)),
            Err(err) => notices.push(Notice::warning(kind, err.to_string())),
        }
    }

    let entity_count = sections
        .iter()
        .filter_map(|section| section.entities.as_ref())
        .map(|report| report.rows.len())
        .reduce(|a, b| a + b);

    AnalysisResult {
        statistics,
        entity_count,
        sections,
        notices,
        processing_ms: start.elapsed().as_millis() as u64,
    }
}

fn build_section(analyzer: &dyn Analyzer, text: &str, notices: &mut Vec<Notice>) -> AnalyzerSection {
    let kind = analyzer.kind();
    let start = Instant::now();

    let tokens: Vec<String> = analyzer.tokenize(text).into_iter().map(|t| t.text).collect();
    let pos_table: Vec<PosRow> = analyzer
        .tag(text)
        .into_iter()
        .map(|pos| PosRow {
            description: explain(&pos.tag, TagKind::PartOfSpeech),
            token: pos.token,
            tag: pos.tag,
        })
        .collect();

    let entities = match analyzer.recognize_entities(text) {
        Ok(entities) => {
            if entities.is_empty() {
                notices.push(Notice::info(kind, NO_ENTITIES_MESSAGE));
            }
            Some(entity_report(text, &entities))
        }
        Err(AnalysisError::UnsupportedCapability { .. }) => None,
        Err(err) => {
            notices.push(Notice::warning(kind, err.to_string()));
            None
        }
    };

    debug!(
        "Analisador '{}': {} tokens, {} entidades em {:?}",
        kind,
        tokens.len(),
        entities.as_ref().map(|r| r.rows.len()).unwrap_or(0),
        start.elapsed()
    );

    AnalyzerSection {
        analyzer: kind,
        title: kind.title(),
        token_count: tokens.len(),
        tokens,
        pos_table,
        entities,
    }
}

fn entity_report(text: &str, entities: &[Entity]) -> EntityReport {
    let rows = entities
        .iter()
        .map(|entity| EntityRow {
            entity: entity.text.clone(),
            label: entity.label.clone(),
            description: explain(&entity.label, TagKind::EntityLabel),
            source: entity.source.clone(),
        })
        .collect();

    EntityReport {
        rows,
        highlighted: highlight(text, entities),
        segments: highlight_spans(text, entities),
        label_distribution: label_distribution(entities),
    }
}

/// Contagem por rótulo, na ordem em que cada rótulo aparece pela primeira vez.
pub fn label_distribution(entities: &[Entity]) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Vec::new();
    for entity in entities {
        match counts.iter_mut().find(|c| c.label == entity.label) {
            Some(count) => count.count += 1,
            None => counts.push(LabelCount { label: entity.label.clone(), count: 1 }),
        }
    }
    counts
}

/// Estado da tela. A análise em si é síncrona, então não há estado
/// intermediário observável entre `Idle` e `Displayed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Texto de exemplo no campo, nenhum resultado.
    Idle,
    /// Último resultado sendo exibido.
    Displayed(AnalysisResult),
}

/// Uma sessão do dashboard: o texto no campo, as seleções e o estado.
#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    selection: AnalyzerSelection,
    state: SessionState,
}

impl Session {
    pub fn new(default_text: impl Into<String>) -> Self {
        Self {
            input: default_text.into(),
            selection: AnalyzerSelection::default(),
            state: SessionState::Idle,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selection(&self) -> AnalyzerSelection {
        self.selection
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Dispara uma análise. Texto em branco é rejeitado e o estado não muda.
    pub fn submit(
        &mut self,
        registry: &AnalyzerRegistry,
        text: &str,
        selection: AnalyzerSelection,
    ) -> CoreResult<()> {
        let request = AnalysisRequest::new(text, selection)?;
        let result = analyze(&request, registry);
        self.input = text.to_string();
        self.selection = selection;
        self.state = SessionState::Displayed(result);
        Ok(())
    }

    /// Resultado em exibição, se houver.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            SessionState::Displayed(result) => Some(result),
            SessionState::Idle => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelConfig;
    use std::path::PathBuf;

    const SAMPLE: &str = "Apple Inc. was founded by Steve Jobs in California on April 1, 1976.";

    fn request(text: &str, use_lexical: bool, use_pipeline: bool) -> AnalysisRequest {
        AnalysisRequest::new(text, AnalyzerSelection { use_lexical, use_pipeline }).unwrap()
    }

    #[test]
    fn test_blank_request_is_rejected() {
        for text in ["", "   ", "\n\t"] {
            assert_eq!(
                AnalysisRequest::new(text, AnalyzerSelection::default()),
                Err(AnalysisError::EmptyInput)
            );
        }
    }

    #[test]
    fn test_full_analysis() {
        let registry = AnalyzerRegistry::builtin();
        let result = analyze(&request(SAMPLE, true, true), &registry);

        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.sections[0].analyzer, AnalyzerKind::Lexical);
        assert_eq!(result.statistics.word_count, 13);
        assert!(result.notices.is_empty());

        let lexical = result.section(AnalyzerKind::Lexical).unwrap();
        assert!(lexical.entities.is_none());
        assert_eq!(lexical.token_count, lexical.tokens.len());
        assert_eq!(lexical.pos_table[0].description, "Proper noun, singular");

        let pipeline = result.section(AnalyzerKind::Pipeline).unwrap();
        let report = pipeline.entities.as_ref().unwrap();
        let labels: Vec<&str> = report.label_distribution.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["ORG", "PERSON", "GPE", "DATE"]);
        assert_eq!(report.rows[1].description, "People, including fictional");
        assert_eq!(report.rows[1].source, "gazetteer");
        assert!(report.rows.iter().all(|row| !row.source.is_empty()));
        assert!(report.highlighted.contains("**Steve Jobs** (PERSON)"));
        let joined: String = report.segments.iter().map(Segment::text).collect();
        assert_eq!(joined, SAMPLE);
        assert_eq!(result.entity_count, Some(4));
    }

    #[test]
    fn test_no_analyzers_selected() {
        let registry = AnalyzerRegistry::builtin();
        let result = analyze(&request(SAMPLE, false, false), &registry);
        assert!(result.sections.is_empty());
        assert_eq!(result.entity_count, None);
        assert_eq!(result.statistics.character_count, SAMPLE.len());
        // Nada foi carregado
        assert_eq!(registry.load_attempts(AnalyzerKind::Lexical), 0);
        assert_eq!(registry.load_attempts(AnalyzerKind::Pipeline), 0);
    }

    #[test]
    fn test_lexical_only_has_no_entity_count() {
        let registry = AnalyzerRegistry::builtin();
        let result = analyze(&request(SAMPLE, true, false), &registry);
        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.entity_count, None);
    }

    #[test]
    fn test_no_entities_is_a_notice() {
        let registry = AnalyzerRegistry::builtin();
        let result = analyze(&request("hello world", false, true), &registry);
        let report = result.sections[0].entities.as_ref().unwrap();
        assert!(report.rows.is_empty());
        assert!(report.label_distribution.is_empty());
        assert_eq!(report.highlighted, "hello world");
        assert_eq!(result.entity_count, Some(0));
        assert_eq!(
            result.notices,
            vec![Notice::info(AnalyzerKind::Pipeline, NO_ENTITIES_MESSAGE)]
        );
    }

    #[test]
    fn test_unavailable_analyzer_is_omitted() {
        let config = ModelConfig {
            lexical: None,
            pipeline: Some(PathBuf::from("/nao/existe/pipeline.toml")),
        };
        let registry = AnalyzerRegistry::new(&config);
        for _ in 0..2 {
            let result = analyze(&request(SAMPLE, true, true), &registry);
            assert_eq!(result.sections.len(), 1);
            assert_eq!(result.sections[0].analyzer, AnalyzerKind::Lexical);
            assert_eq!(result.entity_count, None);
            assert_eq!(result.notices.len(), 1);
            assert_eq!(result.notices[0].level, NoticeLevel::Warning);
            assert_eq!(result.notices[0].analyzer, Some(AnalyzerKind::Pipeline));
        }
        assert_eq!(registry.load_attempts(AnalyzerKind::Pipeline), 1);
    }

    #[test]
    fn test_label_distribution_first_appearance() {
        let entity = |text: &str, label: &str| Entity {
            text: text.into(),
            label: label.into(),
            start: 0,
            end: 0,
            source: String::new(),
        };
        let entities = [entity("a", "GPE"), entity("b", "ORG"), entity("c", "GPE")];
        assert_eq!(
            label_distribution(&entities),
            vec![
                LabelCount { label: "GPE".into(), count: 2 },
                LabelCount { label: "ORG".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_session_transitions() {
        let registry = AnalyzerRegistry::builtin();
        let mut session = Session::default();
        assert_eq!(session.input(), DEFAULT_TEXT);
        assert_eq!(session.state(), &SessionState::Idle);

        assert_eq!(
            session.submit(&registry, "   ", AnalyzerSelection::default()).err(),
            Some(AnalysisError::EmptyInput)
        );
        assert_eq!(session.state(), &SessionState::Idle);

        assert!(session.result().is_none());
        session.submit(&registry, SAMPLE, AnalyzerSelection::default()).unwrap();
        assert_eq!(session.result().map(|r| r.sections.len()), Some(2));
        assert!(matches!(session.state(), SessionState::Displayed(_)));

        // Um envio inválido mantém o resultado anterior na tela
        assert!(session.submit(&registry, "", AnalyzerSelection::default()).is_err());
        assert!(matches!(session.state(), SessionState::Displayed(r) if r.sections.len() == 2));
        assert_eq!(session.input(), SAMPLE);
    }

    #[test]
    fn test_result_serializes() {
        let registry = AnalyzerRegistry::builtin();
        let result = analyze(&request(SAMPLE, false, true), &registry);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["entity_count"], 4);
        assert_eq!(json["sections"][0]["analyzer"], "pipeline");
        assert_eq!(json["sections"][0]["entities"]["segments"][0]["kind"], "entity");
        assert_eq!(json["statistics"]["sentence_count"], 2);
    }
}
