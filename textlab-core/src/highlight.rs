//! # Destaque de Entidades
//!
//! Duas políticas de anotação do texto com as entidades encontradas:
//!
//! - [`highlight`]: **substituição literal** em markdown. Para cada entidade, em
//!   ordem, toda ocorrência do seu texto vira `**texto** (RÓTULO)`. Depende da
//!   ordem e pode anotar ocorrências que não foram reconhecidas como entidade.
//!   É a saída compatível (markdown da API JSON).
//! - [`highlight_spans`]: **por offsets**. Usa as posições de cada entidade,
//!   descarta sobreposições (a primeira vence) e devolve segmentos cuja
//!   concatenação é exatamente o texto original. Alimenta o dashboard HTML.

use serde::Serialize;

use crate::analyzer::Entity;

/// Anota o texto em markdown substituindo literalmente o texto de cada entidade.
///
/// ```rust
/// use textlab_core::analyzer::Entity;
/// use textlab_core::highlight::highlight;
///
/// let text = "Steve Jobs lived in California.";
/// let entities = [Entity { text: "California".into(), label: "GPE".into(), start: 20, end: 30, source: "gazetteer".into() }];
/// assert_eq!(highlight(text, &entities), "Steve Jobs lived in **California** (GPE).");
/// ```
pub fn highlight(text: &str, entities: &[Entity]) -> String {
    entities.iter().fold(text.to_string(), |annotated, entity| {
        if entity.text.is_empty() {
            return annotated;
        }
        let marked = format!("**{}** ({})", entity.text, entity.label);
        annotated.replace(&entity.text, &marked)
    })
}

/// Um trecho do texto: simples ou parte de uma entidade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain { text: String },
    Entity { text: String, label: String },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Entity { text, .. } => text,
        }
    }
}

/// Divide o texto em segmentos usando os offsets das entidades.
///
/// Entidades com offsets inválidos (fora do texto, fora de fronteira de
/// caractere ou vazias) e entidades que se sobrepõem a uma anterior são ignoradas.
pub fn highlight_spans(text: &str, entities: &[Entity]) -> Vec<Segment> {
    let mut accepted: Vec<&Entity> = Vec::new();
    for entity in entities {
        let valid = entity.start < entity.end
            && entity.end <= text.len()
            && text.is_char_boundary(entity.start)
            && text.is_char_boundary(entity.end);
        let overlaps = accepted
            .iter()
            .any(|other| entity.start < other.end && other.start < entity.end);
        if valid && !overlaps {
            accepted.push(entity);
        }
    }
    accepted.sort_by_key(|entity| entity.start);

    let mut segments = Vec::with_capacity(accepted.len() * 2 + 1);
    let mut cursor = 0;
    for entity in accepted {
        if cursor < entity.start {
            segments.push(Segment::Plain { text: text[cursor..entity.start].to_string() });
        }
        segments.push(Segment::Entity {
            text: text[entity.start..entity.end].to_string(),
            label: entity.label.clone(),
        });
        cursor = entity.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Plain { text: text[cursor..].to_string() });
    }
    segments
}
