//! # Glossário de Tags
//!
//! Duas tabelas estáticas e independentes que traduzem abreviações em descrições
//! legíveis:
//!
//! - **Classes gramaticais**: tags do Penn Treebank (usadas pelo analisador `lexical`)
//!   e tags Universal Dependencies (usadas pelo analisador `pipeline`).
//! - **Rótulos de entidade**: categorias do OntoNotes 5 (PERSON, ORG, GPE...).
//!
//! O glossário é "mundo aberto": uma tag desconhecida nunca gera erro, apenas a
//! descrição sentinela [`UNKNOWN`].

use serde::{Deserialize, Serialize};

/// Descrição devolvida para qualquer tag fora das tabelas.
pub const UNKNOWN: &str = "Unknown";

/// Qual tabela consultar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    PartOfSpeech,
    EntityLabel,
}

/// Tags do Penn Treebank (palavras).
const PENN_TAGS: &[(&str, &str)] = &[
    ("CC", "Coordinating conjunction"),
    ("CD", "Cardinal number"),
    ("DT", "Determiner"),
    ("EX", "Existential there"),
    ("FW", "Foreign word"),
    ("IN", "Preposition or subordinating conjunction"),
    ("JJ", "Adjective"),
    ("JJR", "Adjective, comparative"),
    ("JJS", "Adjective, superlative"),
    ("LS", "List item marker"),
    ("MD", "Modal"),
    ("NN", "Noun, singular or mass"),
    ("NNS", "Noun, plural"),
    ("NNP", "Proper noun, singular"),
    ("NNPS", "Proper noun, plural"),
    ("PDT", "Predeterminer"),
    ("POS", "Possessive ending"),
    ("PRP", "Personal pronoun"),
    ("PRP$", "Possessive pronoun"),
    ("RB", "Adverb"),
    ("RBR", "Adverb, comparative"),
    ("RBS", "Adverb, superlative"),
    ("RP", "Particle"),
    ("SYM", "Symbol"),
    ("TO", "to"),
    ("UH", "Interjection"),
    ("VB", "Verb, base form"),
    ("VBD", "Verb, past tense"),
    ("VBG", "Verb, gerund or present participle"),
    ("VBN", "Verb, past participle"),
    ("VBP", "Verb, non-3rd person singular present"),
    ("VBZ", "Verb, 3rd person singular present"),
    ("WDT", "Wh-determiner"),
    ("WP", "Wh-pronoun"),
    ("WP$", "Possessive wh-pronoun"),
    ("WRB", "Wh-adverb"),
];

/// Tags de pontuação do Penn Treebank.
const PENN_PUNCTUATION: &[(&str, &str)] = &[
    (".", "Sentence-final punctuation"),
    (",", "Comma"),
    (":", "Colon or ellipsis"),
    ("``", "Opening quotation mark"),
    ("''", "Closing quotation mark"),
    ("$", "Dollar sign"),
    ("#", "Pound sign"),
    ("-LRB-", "Left bracket"),
    ("-RRB-", "Right bracket"),
    ("HYPH", "Hyphen"),
];

/// Tags universais (Universal Dependencies).
const UNIVERSAL_TAGS: &[(&str, &str)] = &[
    ("ADJ", "Adjective"),
    ("ADP", "Adposition"),
    ("ADV", "Adverb"),
    ("AUX", "Auxiliary verb"),
    ("CCONJ", "Coordinating conjunction"),
    ("DET", "Determiner"),
    ("INTJ", "Interjection"),
    ("NOUN", "Noun"),
    ("NUM", "Numeral"),
    ("PART", "Particle"),
    ("PRON", "Pronoun"),
    ("PROPN", "Proper noun"),
    ("PUNCT", "Punctuation"),
    ("SCONJ", "Subordinating conjunction"),
    ("SYM", "Symbol"),
    ("VERB", "Verb"),
    ("X", "Other"),
];

/// Rótulos de entidade do OntoNotes 5.
const ENTITY_LABELS: &[(&str, &str)] = &[
    ("PERSON", "People, including fictional"),
    ("NORP", "Nationalities or religious or political groups"),
    ("FAC", "Buildings, airports, highways, bridges, etc."),
    ("ORG", "Companies, agencies, institutions, etc."),
    ("GPE", "Countries, cities, states"),
    ("LOC", "Non-GPE locations, mountain ranges, bodies of water"),
    ("PRODUCT", "Objects, vehicles, foods, etc. (not services)"),
    ("EVENT", "Named hurricanes, battles, wars, sports events, etc."),
    ("WORK_OF_ART", "Titles of books, songs, etc."),
    ("LAW", "Named documents made into laws"),
    ("LANGUAGE", "Any named language"),
    ("DATE", "Absolute or relative dates or periods"),
    ("TIME", "Times smaller than a day"),
    ("PERCENT", "Percentage, including \"%\""),
    ("MONEY", "Monetary values, including unit"),
    ("QUANTITY", "Measurements, as of weight or distance"),
    ("ORDINAL", "\"first\", \"second\", etc."),
    ("CARDINAL", "Numerals that do not fall under another type"),
];

/// Explica uma abreviação de tag. Nunca falha: tags desconhecidas viram [`UNKNOWN`].
///
/// ```rust
/// use textlab_core::glossary::{explain, TagKind};
///
/// assert_eq!(explain("NNP", TagKind::PartOfSpeech), "Proper noun, singular");
/// assert_eq!(explain("GPE", TagKind::EntityLabel), "Countries, cities, states");
/// assert_eq!(explain("XYZ", TagKind::EntityLabel), "Unknown");
/// ```
pub fn explain(tag: &str, kind: TagKind) -> &'static str {
    tables(kind)
        .iter()
        .flat_map(|table| table.iter())
        .find(|(abbr, _)| *abbr == tag)
        .map(|(_, description)| *description)
        .unwrap_or(UNKNOWN)
}

/// Lista todas as entradas de uma tabela (na ordem de declaração).
///
/// Uma abreviação presente em mais de uma tabela (ex: `SYM`, Penn e Universal)
/// aparece uma única vez, com a primeira descrição.
pub fn entries(kind: TagKind) -> Vec<(&'static str, &'static str)> {
    let mut listed: Vec<(&'static str, &'static str)> = Vec::new();
    for &(tag, description) in tables(kind).iter().flat_map(|table| table.iter()) {
        if !listed.iter().any(|(seen, _)| *seen == tag) {
            listed.push((tag, description));
        }
    }
    listed
}

/// A tag pertence ao conjunto Penn Treebank (palavras ou pontuação)?
///
/// ```rust
/// use textlab_core::glossary::is_penn_tag;
///
/// assert!(is_penn_tag("NNP"));
/// assert!(is_penn_tag(","));
/// assert!(!is_penn_tag("NOUN"));
/// ```
pub fn is_penn_tag(tag: &str) -> bool {
    PENN_TAGS
        .iter()
        .chain(PENN_PUNCTUATION)
        .any(|(abbr, _)| *abbr == tag)
}

fn tables(kind: TagKind) -> &'static [&'static [(&'static str, &'static str)]] {
    match kind {
        TagKind::PartOfSpeech => &[PENN_TAGS, PENN_PUNCTUATION, UNIVERSAL_TAGS],
        TagKind::EntityLabel => &[ENTITY_LABELS],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_known_tags() {
        assert_eq!(explain("NN", TagKind::PartOfSpeech), "Noun, singular or mass");
        assert_eq!(explain("PRP$", TagKind::PartOfSpeech), "Possessive pronoun");
        assert_eq!(explain("PROPN", TagKind::PartOfSpeech), "Proper noun");
        assert_eq!(
            explain("ORG", TagKind::EntityLabel),
            "Companies, agencies, institutions, etc."
        );
    }

    #[test]
    fn test_explain_unknown_never_fails() {
        for tag in ["", "nn", "B-ORG", "😀", "WORK OF ART"] {
            assert_eq!(explain(tag, TagKind::PartOfSpeech), UNKNOWN);
            assert_eq!(explain(tag, TagKind::EntityLabel), UNKNOWN);
        }
    }

    #[test]
    fn test_tables_are_independent() {
        // ORG é rótulo de entidade, não classe gramatical
        assert_eq!(explain("ORG", TagKind::PartOfSpeech), UNKNOWN);
        assert_eq!(explain("NN", TagKind::EntityLabel), UNKNOWN);
    }

    #[test]
    fn test_entries_have_unique_abbreviations() {
        for kind in [TagKind::PartOfSpeech, TagKind::EntityLabel] {
            let mut abbrs: Vec<&str> = entries(kind).iter().map(|(a, _)| *a).collect();
            let total = abbrs.len();
            abbrs.sort();
            abbrs.dedup();
            assert_eq!(total, abbrs.len());
        }
        assert_eq!(entries(TagKind::EntityLabel).len(), 18);
        // SYM está nas tabelas Penn e Universal, mas é listado uma vez
        let pos = entries(TagKind::PartOfSpeech);
        assert_eq!(pos.iter().filter(|(tag, _)| *tag == "SYM").count(), 1);
    }

    #[test]
    fn test_penn_tags_exclude_universal() {
        for tag in ["NN", "VBZ", "PRP$", "SYM", ".", ","] {
            assert!(is_penn_tag(tag), "{tag}");
        }
        for tag in ["NOUN", "PROPN", "VERB", "X", "ORG", ""] {
            assert!(!is_penn_tag(tag), "{tag}");
        }
    }
}
