//! # Tokenizador para Inglês
//!
//! Divide o texto bruto em tokens (palavras, números, pontuações) preservando a
//! posição original de cada um (offsets em bytes). Os offsets permitem destacar
//! entidades na interface sem alterar o texto.
//!
//! ## Estratégia
//!
//! A segmentação base usa as fronteiras de palavra do Unicode (UAX #29, via
//! `unicode-segmentation`), que já mantêm juntos números como `1,000` e `3.5`
//! e palavras com apóstrofo como `don't`. Sobre ela, aplicamos pós-processamento:
//!
//! - **Abreviações**: `Inc` + `.` → `Inc.`; `U.S` + `.` → `U.S.`
//! - **Clíticos**: `don't` → `do`, `n't`; `she's` → `she`, `'s`
//! - **Hífens** (só no modo [`TokenizerMode::Treebank`]): `well`, `-`, `known` → `well-known`
//!
//! ## Modos
//!
//! - **Treebank**: estilo Penn Treebank, usado pelo analisador `lexical`.
//!   Mantém palavras hifenizadas inteiras.
//! - **Pipeline**: usado pelo analisador `pipeline`. Separa hífens internos
//!   (`well`, `-`, `known`), como fazem os tokenizadores baseados em regras de infixo.
//!
//! Nenhum caractere que não seja espaço em branco é descartado: a concatenação
//! dos tokens reproduz o texto sem os espaços.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use textlab_core::tokenizer::{tokenize_with_mode, TokenizerMode};
//!
//! let tokens = tokenize_with_mode("Apple Inc. isn't well-known.", TokenizerMode::Treebank);
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["Apple", "Inc.", "is", "n't", "well-known", "."]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
///
/// Mantém a referência exata da sua posição (`start` e `end`), o que garante
/// que `&text[token.start..token.end] == token.text`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "Apple", ",", "n't").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Estratégias de tokenização disponíveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerMode {
    /// **Treebank**: separa clíticos e pontuação, preserva palavras hifenizadas.
    #[default]
    Treebank,
    /// **Pipeline**: como o Treebank, mas também separa hífens internos.
    Pipeline,
}

/// Abreviações comuns que carregam o ponto final junto.
const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Mt", "Ft", "Gen", "Gov",
    "Sen", "Rep", "Capt", "Lt", "Col", "Sgt", "Rev", "Hon", "Inc", "Corp", "Ltd",
    "Co", "Bros", "Jan", "Feb", "Apr", "Aug", "Sep", "Sept", "Oct", "Nov", "Dec",
    "Ave", "Blvd", "Rd", "No", "Vol", "Fig", "etc", "vs", "approx", "dept", "est",
];

/// Sufixos clíticos separados após o apóstrofo (comparados em minúsculas).
const CLITIC_SUFFIXES: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

/// Tokeniza com o modo padrão ([`TokenizerMode::Treebank`]).
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with_mode(text, TokenizerMode::Treebank)
}

/// Tokeniza um texto com o modo especificado.
pub fn tokenize_with_mode(text: &str, mode: TokenizerMode) -> Vec<Token> {
    let segments = word_segments(text);
    let merged = merge_abbreviations(segments);
    let merged = match mode {
        TokenizerMode::Treebank => merge_hyphenated(merged),
        TokenizerMode::Pipeline => merged,
    };

    let mut tokens: Vec<Token> = merged.into_iter().flat_map(split_clitics).collect();

    // Re-indexa os tokens
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

/// Fronteiras de palavra UAX #29, descartando os segmentos de espaço em branco.
fn word_segments(text: &str) -> Vec<Token> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
        .map(|(start, segment)| Token {
            text: segment.to_string(),
            start,
            end: start + segment.len(),
            index: 0,
        })
        .collect()
}

fn merge_abbreviations(segments: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(segments.len());
    let mut i = 0;

    while i < segments.len() {
        let current = &segments[i];
        if let Some(dot) = segments.get(i + 1) {
            let next_is_upper = segments
                .get(i + 2)
                .map(|t| starts_uppercase(&t.text))
                .unwrap_or(false);
            if dot.text == "." && dot.start == current.end && is_abbreviation(&current.text, next_is_upper) {
                merged.push(join(current, dot));
                i += 2;
                continue;
            }
        }
        merged.push(current.clone());
        i += 1;
    }
    merged
}

/// "Inc", "U.S" (pontos internos) ou uma inicial maiúscula seguida de nome ("J. Smith").
fn is_abbreviation(word: &str, next_is_upper: bool) -> bool {
    if ABBREVIATIONS.contains(&word) {
        return true;
    }
    let alphabetic = word.chars().all(|c| c.is_alphabetic() || c == '.');
    if alphabetic && word.contains('.') {
        return true;
    }
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_uppercase() && next_is_upper,
        _ => false,
    }
}

fn merge_hyphenated(segments: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(segments.len());

    for segment in segments {
        let glue = match merged.last() {
            Some(prev) => prev.end == segment.start && (segment.text == "-" || prev.text.ends_with('-')),
            None => false,
        };
        // Só cola o hífen se ele vier entre dois trechos alfanuméricos
        let joinable = glue
            && merged.last().map(|p| p.text.chars().next().map(char::is_alphanumeric).unwrap_or(false)).unwrap_or(false)
            && (segment.text == "-" || segment.text.chars().all(char::is_alphanumeric));
        if joinable {
            if let Some(prev) = merged.last_mut() {
                *prev = join(prev, &segment);
                continue;
            }
        }
        merged.push(segment);
    }

    // Hífens pendurados no fim ("pré-") voltam a ser tokens separados
    merged
        .into_iter()
        .flat_map(|token| {
            if token.text.len() > 1 && token.text.ends_with('-') {
                let cut = token.end - 1;
                vec![
                    Token { text: token.text[..token.text.len() - 1].to_string(), start: token.start, end: cut, index: 0 },
                    Token { text: "-".to_string(), start: cut, end: token.end, index: 0 },
                ]
            } else {
                vec![token]
            }
        })
        .collect()
}

/// Separa `n't`, `'s`, `'re`... do radical.
fn split_clitics(token: Token) -> Vec<Token> {
    let lower = token.text.to_lowercase();
    let split_at = if (lower.ends_with("n't") || lower.ends_with("n\u{2019}t")) && token.text.chars().count() > 3 {
        let suffix_len = if lower.ends_with("n't") { 3 } else { "n\u{2019}t".len() };
        Some(token.text.len() - suffix_len)
    } else {
        token
            .text
            .rfind(['\'', '\u{2019}'])
            .filter(|&pos| pos > 0)
            .filter(|&pos| {
                let apostrophe_len = token.text[pos..].chars().next().map(char::len_utf8).unwrap_or(1);
                let suffix = token.text[pos + apostrophe_len..].to_lowercase();
                CLITIC_SUFFIXES.contains(&suffix.as_str())
            })
    };

    match split_at {
        Some(cut) if cut > 0 && cut < token.text.len() => {
            let (base, clitic) = token.text.split_at(cut);
            vec![
                Token { text: base.to_string(), start: token.start, end: token.start + cut, index: 0 },
                Token { text: clitic.to_string(), start: token.start + cut, end: token.end, index: 0 },
            ]
        }
        _ => vec![token],
    }
}

fn join(left: &Token, right: &Token) -> Token {
    Token {
        text: format!("{}{}", left.text, right.text),
        start: left.start,
        end: right.end,
        index: 0,
    }
}

pub(crate) fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map(char::is_uppercase).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_tokenize_sample_sentence() {
        let tokens = tokenize("Apple Inc. was founded by Steve Jobs in California on April 1, 1976.");
        assert_eq!(
            texts(&tokens),
            [
                "Apple", "Inc.", "was", "founded", "by", "Steve", "Jobs", "in", "California", "on",
                "April", "1", ",", "1976", "."
            ]
        );
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "The company is now worth over $3 trillion.";
        for token in tokenize_with_mode(text, TokenizerMode::Pipeline) {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_clitics() {
        let tokens = tokenize("I don't think she's here, we'll see.");
        assert_eq!(
            texts(&tokens),
            ["I", "do", "n't", "think", "she", "'s", "here", ",", "we", "'ll", "see", "."]
        );
    }

    #[test]
    fn test_apostrophe_inside_name_is_kept() {
        let tokens = tokenize("O'Brien left");
        assert_eq!(texts(&tokens), ["O'Brien", "left"]);
    }

    #[test]
    fn test_hyphen_modes() {
        let treebank = tokenize_with_mode("a well-known fact", TokenizerMode::Treebank);
        assert_eq!(texts(&treebank), ["a", "well-known", "fact"]);

        let pipeline = tokenize_with_mode("a well-known fact", TokenizerMode::Pipeline);
        assert_eq!(texts(&pipeline), ["a", "well", "-", "known", "fact"]);
    }

    #[test]
    fn test_dotted_abbreviation() {
        let tokens = tokenize("She moved to the U.S. last year.");
        assert!(texts(&tokens).contains(&"U.S."));
        assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("."));
    }

    #[test]
    fn test_numbers_and_currency() {
        let tokens = tokenize("It costs $3.5 million, up 12%.");
        assert_eq!(texts(&tokens), ["It", "costs", "$", "3.5", "million", ",", "up", "12", "%", "."]);
    }

    #[test]
    fn test_concatenation_reconstructs_non_whitespace() {
        let samples = [
            "Apple Inc. was founded by Steve Jobs in California on April 1, 1976.",
            "  leading and trailing   spaces\t\n",
            "Emoji 👍🏽 and café — “quotes” (parens) rock'n'roll e-mail can't",
            "x",
        ];
        for text in samples {
            let expected: String = text.split_whitespace().collect();
            for mode in [TokenizerMode::Treebank, TokenizerMode::Pipeline] {
                let tokens = tokenize_with_mode(text, mode);
                assert!(!tokens.is_empty());
                let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(joined, expected, "modo {:?}", mode);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n").is_empty());
    }

    #[test]
    fn test_indices_are_sequential() {
        let tokens = tokenize("one two three");
        let indices: Vec<usize> = tokens.iter().map(|t| t.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }
}
