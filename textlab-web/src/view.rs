//! Modelos de visão do dashboard (template askama `dashboard.html`).
//!
//! Tudo que o template mostra já chega formatado: strings, booleanos e listas.

use askama::Template;
use textlab_core::highlight::Segment;
use textlab_core::pipeline::{AnalyzerSection, NoticeLevel, PosRow};
use textlab_core::{AnalysisResult, AnalyzerSelection, Session};

use crate::chart::{label_color, pie_slices, PieSlice, CENTER, RADIUS};

pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

pub struct NoticeView {
    pub css_class: &'static str,
    pub message: String,
}

pub struct EntityRowView {
    pub entity: String,
    pub label: String,
    pub description: &'static str,
    pub source: String,
    pub color: &'static str,
}

pub struct SegmentView {
    pub text: String,
    pub is_entity: bool,
    pub label: String,
    pub color: &'static str,
}

pub struct SectionView {
    pub name: &'static str,
    pub title: &'static str,
    pub token_count: usize,
    pub tokens: Vec<String>,
    pub pos_rows: Vec<PosRow>,
    pub has_entities: bool,
    pub entity_rows: Vec<EntityRowView>,
    pub highlighted: String,
    pub segments: Vec<SegmentView>,
    pub slices: Vec<PieSlice>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub text: String,
    pub use_lexical: bool,
    pub use_pipeline: bool,
    pub has_error: bool,
    pub error_message: String,
    pub has_result: bool,
    pub metrics: Vec<Metric>,
    pub notices: Vec<NoticeView>,
    pub sections: Vec<SectionView>,
    pub processing_ms: u64,
    pub chart_center: String,
    pub chart_radius: String,
}

impl DashboardTemplate {
    /// Tela sem resultado (estado Idle), opcionalmente com erro de validação.
    pub fn idle(text: &str, selection: AnalyzerSelection, error: Option<String>) -> Self {
        Self {
            text: text.to_string(),
            use_lexical: selection.use_lexical,
            use_pipeline: selection.use_pipeline,
            has_error: error.is_some(),
            error_message: error.unwrap_or_default(),
            has_result: false,
            metrics: Vec::new(),
            notices: Vec::new(),
            sections: Vec::new(),
            processing_ms: 0,
            chart_center: format!("{CENTER:.0}"),
            chart_radius: format!("{RADIUS:.0}"),
        }
    }

    /// Tela correspondente ao estado atual da sessão.
    pub fn from_session(session: &Session) -> Self {
        let mut view = Self::idle(session.input(), session.selection(), None);
        if let Some(result) = session.result() {
            view.fill(result);
        }
        view
    }

    fn fill(&mut self, result: &AnalysisResult) {
        let stats = &result.statistics;
        self.has_result = true;
        self.processing_ms = result.processing_ms;
        self.metrics = vec![
            Metric { label: "Caracteres", value: stats.character_count.to_string() },
            Metric { label: "Palavras", value: stats.word_count.to_string() },
            Metric { label: "Sentenças", value: stats.sentence_count.to_string() },
            Metric {
                label: "Entidades",
                value: result
                    .entity_count
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            },
        ];
        self.notices = result
            .notices
            .iter()
            .map(|notice| NoticeView {
                css_class: match notice.level {
                    NoticeLevel::Info => "notice-info",
                    NoticeLevel::Warning => "notice-warning",
                },
                message: match notice.analyzer {
                    Some(kind) => format!("{}: {}", kind.title(), notice.message),
                    None => notice.message.clone(),
                },
            })
            .collect();
        self.sections = result.sections.iter().map(section_view).collect();
    }
}

fn section_view(section: &AnalyzerSection) -> SectionView {
    let mut view = SectionView {
        name: section.analyzer.name(),
        title: section.title,
        token_count: section.token_count,
        tokens: section.tokens.clone(),
        pos_rows: section.pos_table.clone(),
        has_entities: false,
        entity_rows: Vec::new(),
        highlighted: String::new(),
        segments: Vec::new(),
        slices: Vec::new(),
    };

    if let Some(report) = &section.entities {
        view.has_entities = true;
        view.highlighted = report.highlighted.clone();
        view.slices = pie_slices(&report.label_distribution);
        view.entity_rows = report
            .rows
            .iter()
            .map(|row| EntityRowView {
                entity: row.entity.clone(),
                label: row.label.clone(),
                description: row.description,
                source: row.source.clone(),
                color: label_color(&row.label),
            })
            .collect();
        view.segments = report
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Plain { text } => SegmentView {
                    text: text.clone(),
                    is_entity: false,
                    label: String::new(),
                    color: "",
                },
                Segment::Entity { text, label } => SegmentView {
                    text: text.clone(),
                    is_entity: true,
                    label: label.clone(),
                    color: label_color(label),
                },
            })
            .collect();
    }
    view
}
