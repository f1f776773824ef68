//! # Esquema de Tags BIO e Rótulos de Entidade
//!
//! Define o esquema de anotação **BIO** (Beginning-Inside-Outside) utilizado
//! para rotular tokens no reconhecimento de entidades nomeadas, com o conjunto
//! de rótulos do OntoNotes 5.
//!
//! ## Rótulos de Entidades
//!
//! | Rótulo      | Significado                        | Exemplos                       |
//! |-------------|------------------------------------|--------------------------------|
//! | PERSON      | Pessoa                             | Steve Jobs, Marie Curie        |
//! | ORG         | Organização                        | Apple Inc., NASA               |
//! | GPE         | País, cidade, estado               | California, Japan              |
//! | LOC         | Local não-GPE                      | Pacific Ocean, Alps            |
//! | DATE        | Data ou período                    | April 1, 1976, last week       |
//! | MONEY       | Valor monetário                    | $3 trillion                    |
//! | ...         | (18 rótulos no total)              |                                |
//!
//! ## Esquema BIO
//!
//! - `B-TAG`: Begin — primeiro token de uma entidade
//! - `I-TAG`: Inside — tokens subsequentes da mesma entidade
//! - `O`: Outside — não é parte de nenhuma entidade

use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;

/// Rótulos de entidade do OntoNotes 5 reconhecidos pelo analisador `pipeline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
}

impl EntityLabel {
    /// Todos os rótulos, na ordem do glossário.
    pub const ALL: [EntityLabel; 18] = [
        EntityLabel::Person,
        EntityLabel::Norp,
        EntityLabel::Fac,
        EntityLabel::Org,
        EntityLabel::Gpe,
        EntityLabel::Loc,
        EntityLabel::Product,
        EntityLabel::Event,
        EntityLabel::WorkOfArt,
        EntityLabel::Law,
        EntityLabel::Language,
        EntityLabel::Date,
        EntityLabel::Time,
        EntityLabel::Percent,
        EntityLabel::Money,
        EntityLabel::Quantity,
        EntityLabel::Ordinal,
        EntityLabel::Cardinal,
    ];

    /// Nome do rótulo como string (para serialização e UI)
    pub fn name(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Fac => "FAC",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Event => "EVENT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Law => "LAW",
            EntityLabel::Language => "LANGUAGE",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }

    /// Cor CSS para highlight na UI
    pub fn color(&self) -> &'static str {
        match self {
            EntityLabel::Person => "#3b82f6",  // azul
            EntityLabel::Org => "#10b981",     // verde esmeralda
            EntityLabel::Gpe => "#f59e0b",     // âmbar
            EntityLabel::Loc => "#d97706",     // âmbar escuro
            EntityLabel::Norp => "#ec4899",    // rosa
            EntityLabel::Fac => "#14b8a6",     // verde-azulado
            EntityLabel::Product => "#6366f1", // índigo
            EntityLabel::Event => "#8b5cf6",   // violeta
            EntityLabel::WorkOfArt => "#a855f7",
            EntityLabel::Law => "#64748b",
            EntityLabel::Language => "#0ea5e9",
            EntityLabel::Date => "#ef4444", // vermelho
            EntityLabel::Time => "#f97316",
            EntityLabel::Percent => "#84cc16",
            EntityLabel::Money => "#22c55e",
            EntityLabel::Quantity => "#eab308",
            EntityLabel::Ordinal => "#78716c",
            EntityLabel::Cardinal => "#a8a29e",
        }
    }

    /// Tenta parsear a partir do nome (ex: "ORG" → Some(Org))
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.name() == s)
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tag BIO aplicada a um token.
///
/// O esquema BIO permite representar entidades de múltiplos tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// **Begin**: Marca o INÍCIO de uma entidade. Ex: **Steve** (B-PERSON) Jobs.
    Begin(EntityLabel),
    /// **Inside**: Marca a CONTINUAÇÃO de uma entidade. Ex: Steve **Jobs** (I-PERSON).
    Inside(EntityLabel),
    /// **Outside**: O token não faz parte de nenhuma entidade.
    Outside,
}

impl Tag {
    /// Representação textual da tag (ex: "B-PERSON", "I-ORG", "O")
    pub fn label(&self) -> String {
        match self {
            Tag::Begin(label) => format!("B-{}", label.name()),
            Tag::Inside(label) => format!("I-{}", label.name()),
            Tag::Outside => "O".to_string(),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Um token com sua tag BIO e a regra que a atribuiu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioToken {
    pub token: Token,
    pub tag: Tag,
    /// Nome da regra (vazio para `O`)
    pub source: String,
}

/// Uma entidade identificada no texto (spans de múltiplos tokens)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Texto da entidade, exatamente como aparece no original
    pub text: String,
    pub label: EntityLabel,
    /// Posição de byte inicial no texto original
    pub start: usize,
    /// Posição de byte final no texto original
    pub end: usize,
    /// Regra que originou a entidade (a do token `B-`), ex: "gazetteer", "date_month"
    pub source: String,
}

/// Converte uma sequência de tokens classificados (BIO) em spans de entidades.
///
/// Máquina de estados do esquema BIO:
/// - Inicia uma nova entidade ao encontrar `B-XXX`.
/// - Continua a entidade enquanto encontrar `I-XXX` do **mesmo** rótulo.
/// - Finaliza a entidade ao encontrar `O`, `B-YYY` ou `I-YYY` (de outro rótulo).
///
/// Um `I-XXX` órfão (sem `B-XXX` antes) é ignorado.
///
/// # Exemplo
/// `[B-PERSON, I-PERSON, O, B-GPE]` -> `[EntitySpan(PERSON), EntitySpan(GPE)]`
pub fn tokens_to_spans(tagged: &[BioToken], original_text: &str) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tagged.len() {
        if let Tag::Begin(label) = tagged[i].tag {
            let start_byte = tagged[i].token.start;
            let mut end_byte = tagged[i].token.end;

            // Acumula tokens I-XXX consecutivos do mesmo rótulo
            let mut j = i + 1;
            while j < tagged.len() && tagged[j].tag == Tag::Inside(label) {
                end_byte = tagged[j].token.end;
                j += 1;
            }

            spans.push(EntitySpan {
                text: original_text[start_byte..end_byte].to_string(),
                label,
                start: start_byte,
                end: end_byte,
                source: tagged[i].source.clone(),
            });

            i = j;
        } else {
            i += 1;
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::{explain, TagKind, UNKNOWN};
    use crate::tokenizer::tokenize;

    #[test]
    fn test_tag_labels() {
        assert_eq!(Tag::Outside.label(), "O");
        assert_eq!(Tag::Begin(EntityLabel::Person).label(), "B-PERSON");
        assert_eq!(Tag::Inside(EntityLabel::WorkOfArt).label(), "I-WORK_OF_ART");
    }

    #[test]
    fn test_every_label_is_in_glossary() {
        for label in EntityLabel::ALL {
            assert_ne!(explain(label.name(), TagKind::EntityLabel), UNKNOWN);
            assert_eq!(EntityLabel::from_name(label.name()), Some(label));
        }
        let json = serde_json::to_string(&EntityLabel::WorkOfArt).unwrap();
        assert_eq!(json, "\"WORK_OF_ART\"");
    }

    #[test]
    fn test_tokens_to_spans() {
        let text = "Steve Jobs visited Paris";
        let tags = [
            Tag::Begin(EntityLabel::Person),
            Tag::Inside(EntityLabel::Person),
            Tag::Outside,
            Tag::Begin(EntityLabel::Gpe),
        ];
        let tagged: Vec<BioToken> = tokenize(text)
            .into_iter()
            .zip(tags)
            .map(|(token, tag)| BioToken { token, tag, source: "gazetteer".to_string() })
            .collect();

        let spans = tokens_to_spans(&tagged, text);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Steve Jobs");
        assert_eq!(spans[0].label, EntityLabel::Person);
        assert_eq!((spans[0].start, spans[0].end), (0, 10));
        assert_eq!(spans[0].source, "gazetteer");
        assert_eq!(spans[1].text, "Paris");
        assert_eq!(&text[spans[1].start..spans[1].end], "Paris");
    }

    #[test]
    fn test_orphan_inside_is_ignored() {
        let text = "hello world";
        let tagged: Vec<BioToken> = tokenize(text)
            .into_iter()
            .map(|token| BioToken { token, tag: Tag::Inside(EntityLabel::Org), source: String::new() })
            .collect();
        assert!(tokens_to_spans(&tagged, text).is_empty());
    }
}
