//! # Estatísticas do Texto
//!
//! Três métricas simples, independentes de qualquer analisador:
//!
//! - **Caracteres**: número de valores escalares Unicode (`chars().count()`).
//! - **Palavras**: trechos máximos separados por espaço em branco.
//! - **Sentenças**: trechos terminados por `.` com conteúdo não-vazio.
//!
//! A contagem de sentenças é propositalmente ingênua: não trata abreviações,
//! decimais nem `?`/`!`. "Inc." conta como um ponto final.

use serde::Serialize;

/// Métricas do texto de entrada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStatistics {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

/// Calcula as métricas de um texto. Nunca falha, inclusive para `""`.
///
/// ```rust
/// use textlab_core::stats::compute;
///
/// let stats = compute("A. B. C.");
/// assert_eq!(stats.sentence_count, 3);
/// assert_eq!(stats.word_count, 3);
/// ```
pub fn compute(text: &str) -> TextStatistics {
    TextStatistics {
        character_count: text.chars().count(),
        word_count: text.split_whitespace().count(),
        sentence_count: count_sentences(text),
    }
}

fn count_sentences(text: &str) -> usize {
    let mut segments: Vec<&str> = text.split('.').collect();
    // O último trecho não tem ponto final depois dele
    segments.pop();
    segments.iter().filter(|segment| !segment.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_text() {
        let text = "Apple Inc. was founded by Steve Jobs in California on April 1, 1976. \
                    The company is now worth over $3 trillion.";
        let stats = compute(text);
        assert_eq!(stats.character_count, text.len());
        assert_eq!(stats.word_count, 21);
        // "Apple Inc" | " was founded ... 1976" | " The company ... trillion"
        assert_eq!(stats.sentence_count, 3);
    }

    #[test]
    fn test_sentence_policy() {
        assert_eq!(compute("A. B. C.").sentence_count, 3);
        assert_eq!(compute("no periods here").sentence_count, 0);
        assert_eq!(compute("Hello. World").sentence_count, 1);
        assert_eq!(compute("...").sentence_count, 0);
        assert_eq!(compute("Wait... what.").sentence_count, 2);
    }

    #[test]
    fn test_characters_are_scalar_values() {
        for text in ["", "abc", "café", "👍🏽 ok", "日本語"] {
            assert_eq!(compute(text).character_count, text.chars().count());
        }
        assert_eq!(compute("café").character_count, 4);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(compute(""), TextStatistics::default());
        let blank = compute("  \n\t ");
        assert_eq!(blank.word_count, 0);
        assert_eq!(blank.sentence_count, 0);
        assert_eq!(blank.character_count, 5);
    }
}
