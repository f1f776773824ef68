//! # Etiquetador Morfossintático (POS Tagger)
//!
//! Atribui uma tag Penn Treebank a cada token em três passos:
//!
//! 1. **Pontuação e números**: mapeamento direto (`,` → `,`, `1976` → `CD`).
//! 2. **Léxico + morfologia**: consulta o léxico; palavras desconhecidas recebem
//!    uma tag pelo formato (capitalização) e pelo sufixo (`-ly` → RB, `-ing` → VBG...).
//! 3. **Regras contextuais** (estilo Brill): corrigem a tag olhando os vizinhos,
//!    ex: `was founded` → `founded` vira VBN.
//!
//! O módulo também converte Penn → tags universais (UD), usado pelo analisador
//! `pipeline`.

use std::collections::HashMap;

use crate::lexicon::{
    BE_FORMS, CLOSED_CLASS_TAGS, DO_FORMS, HAVE_FORMS, PENN_LEXICON, SUBORDINATORS,
};
use crate::tokenizer::{starts_uppercase, Token};

/// De onde veio a tag de um token: as regras contextuais só corrigem palpites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagSource {
    Lexicon,
    Guess,
    Fixed,
}

/// Etiquetador Penn Treebank baseado em léxico, morfologia e regras de contexto.
#[derive(Debug, Clone)]
pub struct PennTagger {
    lexicon: HashMap<String, String>,
}

impl PennTagger {
    /// Cria o etiquetador com o léxico embutido.
    pub fn new() -> Self {
        let lexicon = PENN_LEXICON
            .iter()
            .map(|(word, tag)| (word.to_string(), tag.to_string()))
            .collect();
        Self { lexicon }
    }

    /// Acrescenta (ou sobrescreve) uma entrada do léxico.
    pub fn add_word(&mut self, word: &str, tag: &str) {
        self.lexicon.insert(word.to_lowercase(), tag.to_string());
    }

    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    /// Etiqueta uma sequência de tokens já tokenizada. Retorna uma tag por token.
    pub fn tag(&self, tokens: &[Token]) -> Vec<String> {
        let mut tagged: Vec<(String, TagSource)> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.initial_tag(tokens, i, &token.text))
            .collect();

        apply_contextual_rules(tokens, &mut tagged);
        tagged.into_iter().map(|(tag, _)| tag).collect()
    }

    fn initial_tag(&self, tokens: &[Token], i: usize, word: &str) -> (String, TagSource) {
        if let Some(tag) = punctuation_tag(word) {
            return (tag.to_string(), TagSource::Fixed);
        }
        if is_numeric(word) {
            return ("CD".to_string(), TagSource::Fixed);
        }

        let lower = word.to_lowercase();
        let lexical = self.lexicon.get(&lower);

        if starts_uppercase(word) && word.chars().any(char::is_alphabetic) {
            // Classe fechada vence a capitalização ("The", "I", "In")
            if let Some(tag) = lexical.filter(|t| CLOSED_CLASS_TAGS.contains(&t.as_str())) {
                return (tag.clone(), TagSource::Lexicon);
            }
            if is_sentence_start(tokens, i) {
                if let Some(tag) = lexical {
                    return (tag.clone(), TagSource::Lexicon);
                }
                let guess = guess_by_suffix(&lower);
                return if guess == "NN" {
                    ("NNP".to_string(), TagSource::Guess)
                } else {
                    (guess.to_string(), TagSource::Guess)
                };
            }
            return ("NNP".to_string(), TagSource::Guess);
        }

        match lexical {
            Some(tag) => (tag.clone(), TagSource::Lexicon),
            None => (guess_by_suffix(&lower).to_string(), TagSource::Guess),
        }
    }
}

impl Default for PennTagger {
    fn default() -> Self {
        Self::new()
    }
}

/// Regras de correção contextual aplicadas em uma única passada da esquerda para a direita.
fn apply_contextual_rules(tokens: &[Token], tagged: &mut [(String, TagSource)]) {
    for i in 0..tagged.len() {
        let word = tokens[i].text.to_lowercase();
        let prev_tag = if i > 0 { tagged[i - 1].0.clone() } else { String::new() };
        let prev_word = if i > 0 { tokens[i - 1].text.to_lowercase() } else { String::new() };

        // "'s": verbo depois de pronome, possessivo depois de nome
        if word == "'s" || word == "\u{2019}s" {
            let verbal = matches!(prev_tag.as_str(), "PRP" | "EX" | "WP" | "DT" | "WDT");
            tagged[i].0 = if verbal { "VBZ" } else { "POS" }.to_string();
            continue;
        }

        // Passiva / perfeito: "was founded", "has recently said"
        if tagged[i].0 == "VBD" {
            let auxiliary_before = previous_auxiliary(tokens, tagged, i);
            if auxiliary_before {
                tagged[i].0 = "VBN".to_string();
                continue;
            }
        }

        // Depois de modal, "to" ou "do", forma base: "to analyze", "didn't stop"
        if expects_base_form(tokens, tagged, i) {
            let guessed_noun = tagged[i].1 == TagSource::Guess && tagged[i].0 == "NN";
            if guessed_noun || tagged[i].0 == "VBP" {
                tagged[i].0 = "VB".to_string();
                continue;
            }
        }

        if tagged[i].0 == "VB" {
            // Determinante ou possessivo antes: é substantivo ("the run")
            if matches!(prev_tag.as_str(), "DT" | "PRP$" | "JJ") {
                tagged[i].0 = "NN".to_string();
                continue;
            }
            // Sujeito antes: presente não-3ª pessoa ("they say")
            let subject_before = matches!(prev_tag.as_str(), "PRP" | "NNS" | "NNPS" | "WDT" | "WP");
            let infinitive = DO_FORMS.contains(&prev_word.as_str()) || prev_word == "n't";
            if subject_before && !infinitive {
                tagged[i].0 = "VBP".to_string();
            }
        }
    }
}

/// Há uma forma de "be"/"have" imediatamente antes (pulando um advérbio)?
fn previous_auxiliary(tokens: &[Token], tagged: &[(String, TagSource)], i: usize) -> bool {
    let mut j = i;
    let mut skipped_adverb = false;
    while j > 0 {
        j -= 1;
        let word = tokens[j].text.to_lowercase();
        if BE_FORMS.contains(&word.as_str()) || HAVE_FORMS.contains(&word.as_str()) {
            return true;
        }
        if tagged[j].0.starts_with("RB") && !skipped_adverb {
            skipped_adverb = true;
            continue;
        }
        return false;
    }
    false
}

fn expects_base_form(tokens: &[Token], tagged: &[(String, TagSource)], i: usize) -> bool {
    let mut j = i;
    while j > 0 {
        j -= 1;
        let word = tokens[j].text.to_lowercase();
        if word == "not" || word == "n't" {
            continue;
        }
        return matches!(tagged[j].0.as_str(), "MD" | "TO") || DO_FORMS.contains(&word.as_str());
    }
    false
}

fn is_sentence_start(tokens: &[Token], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    matches!(
        tokens[i - 1].text.as_str(),
        "." | "!" | "?" | "\"" | "\u{201C}" | ":" | ";" | "(" | "\u{2014}"
    )
}

/// Tags fixas para pontuação e símbolos.
fn punctuation_tag(word: &str) -> Option<&'static str> {
    let tag = match word {
        "." | "!" | "?" | "..." | "\u{2026}" => ".",
        "," => ",",
        ":" | ";" | "-" | "--" | "\u{2013}" | "\u{2014}" => ":",
        "$" | "US$" | "€" | "£" | "¥" => "$",
        "#" => "#",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "\"" | "\u{201C}" | "``" => "``",
        "\u{201D}" | "''" | "'" | "\u{2019}" => "''",
        "&" | "+" | "=" | "@" | "*" | "/" | "\\" | "<" | ">" | "|" | "~" | "^" => "SYM",
        _ => return None,
    };
    Some(tag)
}

/// `1976`, `3.5`, `1,000`, `-2` são numerais.
pub(crate) fn is_numeric(word: &str) -> bool {
    let digits = word.trim_start_matches(['-', '+']);
    !digits.is_empty()
        && digits.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false)
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        && digits.chars().last().map(|c| c.is_ascii_digit()).unwrap_or(false)
}

/// Palpite morfológico para palavras fora do léxico (em minúsculas).
fn guess_by_suffix(lower: &str) -> &'static str {
    let len = lower.chars().count();
    if lower.contains('-') && len > 3 {
        return "JJ";
    }
    if len <= 3 {
        return "NN";
    }
    const RULES: &[(&str, &str)] = &[
        ("ly", "RB"),
        ("ing", "VBG"),
        ("ed", "VBD"),
        ("est", "JJS"),
        ("tion", "NN"),
        ("sion", "NN"),
        ("ment", "NN"),
        ("ness", "NN"),
        ("ity", "NN"),
        ("ship", "NN"),
        ("ism", "NN"),
        ("able", "JJ"),
        ("ible", "JJ"),
        ("ous", "JJ"),
        ("ful", "JJ"),
        ("ive", "JJ"),
        ("less", "JJ"),
        ("ical", "JJ"),
        ("ish", "JJ"),
        ("ize", "VB"),
        ("ise", "VB"),
        ("ss", "NN"),
        ("us", "NN"),
        ("s", "NNS"),
    ];
    RULES
        .iter()
        .find(|(suffix, _)| lower.ends_with(suffix))
        .map(|(_, tag)| *tag)
        .unwrap_or("NN")
}

/// Converte uma tag Penn Treebank para a tag universal (UD).
///
/// `word` desambigua casos que dependem da palavra (preposição vs. conjunção
/// subordinativa, "not"/"n't" como partícula) e `next_is_verb` indica se o
/// próximo token é verbal (auxiliares "have"/"do").
pub fn penn_to_universal(penn: &str, word: &str, next_is_verb: bool) -> &'static str {
    let lower = word.to_lowercase();
    match penn {
        "CC" => "CCONJ",
        "CD" => "NUM",
        "DT" | "PDT" => "DET",
        "EX" | "PRP" | "PRP$" | "WP" | "WP$" | "WDT" => "PRON",
        "FW" | "LS" => "X",
        "IN" if SUBORDINATORS.contains(&lower.as_str()) => "SCONJ",
        "IN" | "RP" => "ADP",
        "JJ" | "JJR" | "JJS" => "ADJ",
        "MD" => "AUX",
        "NN" | "NNS" => "NOUN",
        "NNP" | "NNPS" => "PROPN",
        "POS" | "TO" => "PART",
        "RB" if lower == "not" || lower == "n't" => "PART",
        "RB" | "RBR" | "RBS" | "WRB" => "ADV",
        "UH" => "INTJ",
        "SYM" | "$" | "#" => "SYM",
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => {
            if BE_FORMS.contains(&lower.as_str()) {
                "AUX"
            } else if (HAVE_FORMS.contains(&lower.as_str()) || DO_FORMS.contains(&lower.as_str())) && next_is_verb {
                "AUX"
            } else {
                "VERB"
            }
        }
        "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" => "PUNCT",
        _ => "X",
    }
}

/// Converte uma sequência inteira de tags Penn para universais.
pub fn to_universal(tokens: &[Token], penn: &[String]) -> Vec<&'static str> {
    (0..tokens.len())
        .map(|i| {
            // Pula advérbios/negação entre o auxiliar e o verbo: "did not go"
            let next_is_verb = penn[i + 1..]
                .iter()
                .take(3)
                .find(|tag| !tag.starts_with("RB"))
                .map(|tag| tag.starts_with("VB"))
                .unwrap_or(false);
            penn_to_universal(&penn[i], &tokens[i].text, next_is_verb)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, tokenize_with_mode, TokenizerMode};

    fn tag_text(text: &str) -> Vec<(String, String)> {
        let tokens = tokenize(text);
        let tags = PennTagger::new().tag(&tokens);
        tokens.into_iter().map(|t| t.text).zip(tags).collect()
    }

    fn tag_of<'a>(tagged: &'a [(String, String)], word: &str) -> &'a str {
        tagged
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, t)| t.as_str())
            .unwrap_or("<ausente>")
    }

    #[test]
    fn test_sample_sentence_tags() {
        let tagged = tag_text("Apple Inc. was founded by Steve Jobs in California on April 1, 1976.");
        assert_eq!(tag_of(&tagged, "Apple"), "NNP");
        assert_eq!(tag_of(&tagged, "Inc."), "NNP");
        assert_eq!(tag_of(&tagged, "was"), "VBD");
        assert_eq!(tag_of(&tagged, "founded"), "VBN");
        assert_eq!(tag_of(&tagged, "by"), "IN");
        assert_eq!(tag_of(&tagged, "Jobs"), "NNP");
        assert_eq!(tag_of(&tagged, "1976"), "CD");
        assert_eq!(tag_of(&tagged, ","), ",");
        assert_eq!(tag_of(&tagged, "."), ".");
    }

    #[test]
    fn test_sentence_initial_function_word() {
        let tagged = tag_text("The company is now worth over $3 trillion.");
        assert_eq!(tag_of(&tagged, "The"), "DT");
        assert_eq!(tag_of(&tagged, "company"), "NN");
        assert_eq!(tag_of(&tagged, "is"), "VBZ");
        assert_eq!(tag_of(&tagged, "$"), "$");
        assert_eq!(tag_of(&tagged, "3"), "CD");
    }

    #[test]
    fn test_suffix_guesses() {
        let tagged = tag_text("they quickly started jumping over wonderful obstacles");
        assert_eq!(tag_of(&tagged, "quickly"), "RB");
        assert_eq!(tag_of(&tagged, "started"), "VBD");
        assert_eq!(tag_of(&tagged, "jumping"), "VBG");
        assert_eq!(tag_of(&tagged, "wonderful"), "JJ");
        assert_eq!(tag_of(&tagged, "obstacles"), "NNS");
    }

    #[test]
    fn test_contextual_rules() {
        let tagged = tag_text("we want to analyze the run");
        assert_eq!(tag_of(&tagged, "want"), "VBP");
        assert_eq!(tag_of(&tagged, "analyze"), "VB");
        assert_eq!(tag_of(&tagged, "run"), "NN");

        let possessive = tag_text("the company's profit");
        assert_eq!(tag_of(&possessive, "'s"), "POS");
        let verbal = tag_text("she's here");
        assert_eq!(tag_of(&verbal, "'s"), "VBZ");
    }

    #[test]
    fn test_custom_lexicon_entry() {
        let mut tagger = PennTagger::new();
        tagger.add_word("Blockchain", "NN");
        let tokens = tokenize("blockchain");
        assert_eq!(tagger.tag(&tokens), ["NN"]);
    }

    #[test]
    fn test_universal_mapping() {
        let text = "Apple Inc. was founded by Steve Jobs because he didn't stop.";
        let tokens = tokenize_with_mode(text, TokenizerMode::Pipeline);
        let penn = PennTagger::new().tag(&tokens);
        let universal = to_universal(&tokens, &penn);
        let pairs: Vec<(&str, &str)> = tokens.iter().map(|t| t.text.as_str()).zip(universal).collect();

        assert!(pairs.contains(&("Apple", "PROPN")));
        assert!(pairs.contains(&("was", "AUX")));
        assert!(pairs.contains(&("founded", "VERB")));
        assert!(pairs.contains(&("by", "ADP")));
        assert!(pairs.contains(&("because", "SCONJ")));
        assert!(pairs.contains(&("did", "AUX")));
        assert!(pairs.contains(&("n't", "PART")));
        assert!(pairs.contains(&(".", "PUNCT")));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("1976"));
        assert!(is_numeric("3.5"));
        assert!(is_numeric("1,000"));
        assert!(!is_numeric("1st"));
        assert!(!is_numeric("."));
        assert!(!is_numeric("abc"));
    }
}
