//! # Motor de Regras — Gazetteers e Padrões
//!
//! Reconhecimento de entidades do analisador `pipeline`, sem modelo estatístico:
//! listas de entidades conhecidas (gazetteers) e padrões sobre a forma dos tokens.
//!
//! ## Fases (em ordem de prioridade)
//!
//! Cada fase só pode marcar tokens ainda livres; a primeira que reivindica um
//! trecho vence.
//!
//! 1. **Núcleos nominais**: `Apple Inc.`, `Mississippi River`, `University of Tokyo`
//! 2. **Idioma com contexto**: `speaks French`
//! 3. **Gazetteers** (casamento mais longo): `Steve Jobs`, `California`, `NASA`
//! 4. **Numéricos**: MONEY, PERCENT, TIME, DATE, QUANTITY, ORDINAL
//! 5. **Idiomas restantes**: `English`
//! 6. **Pessoas**: prenome conhecido (`Emily Watson`) ou título (`Dr. Smith`)
//! 7. **CARDINAL**: números que sobraram

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::{
    builtin_gazetteers, AMBIGUOUS_MONTHS, CURRENCY_SYMBOLS, CURRENCY_WORDS, DATE_MODIFIERS,
    DATE_UNITS, DAY_PARTS, FIRST_NAMES, FUNCTION_WORDS, HEAD_PREFIXES, HEAD_SUFFIXES,
    LANGUAGES, LANGUAGE_CUES, MERIDIEMS, MONTHS, NUMBER_WORDS, ORDINAL_WORDS, PERCENT_WORDS,
    PERSON_TITLES, RELATIVE_DAYS, SCALE_WORDS, TIME_WORDS, UNITS, WEEKDAYS,
};
use crate::pos::is_numeric;
use crate::tagger::{tokens_to_spans, BioToken, EntityLabel, EntitySpan, Tag};
use crate::tokenizer::{starts_uppercase, tokenize_with_mode, Token, TokenizerMode};

/// Uma correspondência de regra: qual token foi marcado e com qual tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMatch {
    pub tag: Tag,
    /// Regra que marcou o token (ex: "gazetteer", "date_month")
    pub rule_name: String,
}

/// Uma entrada de gazetteer já tokenizada.
#[derive(Debug, Clone)]
struct GazetteerEntry {
    parts: Vec<String>,
    label: EntityLabel,
}

impl GazetteerEntry {
    /// Compara sem diferenciar caixa, exceto:
    /// - parte capitalizada exige token capitalizado ("Apple" não casa "apple");
    /// - siglas exigem forma exata ("US" não casa "us").
    fn matches_at(&self, tokens: &[Token], i: usize) -> bool {
        if i + self.parts.len() > tokens.len() {
            return false;
        }
        self.parts.iter().enumerate().all(|(j, part)| {
            let token = &tokens[i + j].text;
            if is_acronym(part) {
                return token == part;
            }
            if starts_uppercase(part) && !starts_uppercase(token) {
                return false;
            }
            token.to_lowercase() == part.to_lowercase()
        })
    }
}

/// Padrões compilados uma única vez por motor.
#[derive(Debug, Clone)]
struct Patterns {
    clock_time: Regex,
    ordinal_number: Regex,
    decade: Regex,
}

impl Patterns {
    fn new() -> Self {
        Self {
            clock_time: Regex::new(r"^\d{1,2}(am|pm)$").expect("regex válida"),
            ordinal_number: Regex::new(r"^\d+(st|nd|rd|th)$").expect("regex válida"),
            decade: Regex::new(r"^(1[0-9]|20)\d0s$").expect("regex válida"),
        }
    }
}

/// Marcações parciais: um slot por token, preenchido por no máximo uma regra.
struct Claims {
    slots: Vec<Option<RuleMatch>>,
}

impl Claims {
    fn new(len: usize) -> Self {
        Self { slots: vec![None; len] }
    }

    fn is_free(&self, start: usize, end: usize) -> bool {
        end <= self.slots.len() && start < end && self.slots[start..end].iter().all(Option::is_none)
    }

    /// Marca `start..end` (exclusivo) como uma entidade. Falha se algum token já estiver marcado.
    fn claim(&mut self, start: usize, end: usize, label: EntityLabel, rule: &str) -> bool {
        if !self.is_free(start, end) {
            return false;
        }
        for i in start..end {
            let tag = if i == start { Tag::Begin(label) } else { Tag::Inside(label) };
            self.slots[i] = Some(RuleMatch {
                tag,
                rule_name: rule.to_string(),
            });
        }
        true
    }
}

/// Motor de regras com gazetteers e padrões
#[derive(Debug, Clone)]
pub struct RuleEngine {
    /// Ordenado do mais longo para o mais curto (casamento mais longo vence)
    gazetteer: Vec<GazetteerEntry>,
    patterns: Patterns,
}

impl RuleEngine {
    /// Motor com os gazetteers embutidos.
    pub fn new() -> Self {
        let mut engine = Self::empty();
        for (label, names) in builtin_gazetteers() {
            if let Some(label) = EntityLabel::from_name(label) {
                for name in names {
                    engine.push_entry(name, label);
                }
            }
        }
        engine.sort_gazetteer();
        engine
    }

    /// Motor sem nenhuma entrada de gazetteer (só padrões).
    pub fn empty() -> Self {
        Self {
            gazetteer: Vec::new(),
            patterns: Patterns::new(),
        }
    }

    /// Acrescenta uma entidade conhecida.
    pub fn add_entity(&mut self, name: &str, label: EntityLabel) {
        self.push_entry(name, label);
        self.sort_gazetteer();
    }

    /// Acrescenta várias entidades de uma vez (ex: vindas de um artefato).
    pub fn extend(&mut self, entries: &HashMap<EntityLabel, Vec<String>>) {
        for (label, names) in entries {
            for name in names {
                self.push_entry(name, *label);
            }
        }
        self.sort_gazetteer();
    }

    pub fn gazetteer_size(&self) -> usize {
        self.gazetteer.len()
    }

    fn push_entry(&mut self, name: &str, label: EntityLabel) {
        let parts: Vec<String> = tokenize_with_mode(name, TokenizerMode::Pipeline)
            .into_iter()
            .map(|t| t.text)
            .collect();
        if !parts.is_empty() {
            self.gazetteer.push(GazetteerEntry { parts, label });
        }
    }

    fn sort_gazetteer(&mut self) {
        self.gazetteer.sort_by(|a, b| b.parts.len().cmp(&a.parts.len()));
    }

    /// Aplica todas as regras à sequência de tokens
    ///
    /// Retorna, para cada token, a regra que o marcou (ou `None`).
    pub fn apply(&self, tokens: &[Token]) -> Vec<Option<RuleMatch>> {
        let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
        let mut claims = Claims::new(tokens.len());

        self.head_words(tokens, &mut claims);
        self.cued_languages(tokens, &lower, &mut claims);
        self.gazetteers(tokens, &mut claims);
        self.money(tokens, &lower, &mut claims);
        self.percent(&lower, &mut claims);
        self.time(tokens, &lower, &mut claims);
        self.date(tokens, &lower, &mut claims);
        self.quantity(&lower, &mut claims);
        self.ordinal(&lower, &mut claims);
        self.remaining_languages(tokens, &mut claims);
        self.persons(tokens, &lower, &mut claims);
        self.cardinal(&lower, &mut claims);

        claims.slots
    }

    /// Aplica as regras e agrupa os tokens marcados em entidades.
    /// Cada entidade guarda o nome da regra que a marcou.
    pub fn recognize(&self, tokens: &[Token], original_text: &str) -> Vec<EntitySpan> {
        let bio: Vec<BioToken> = tokens
            .iter()
            .zip(self.apply(tokens))
            .map(|(token, rule)| match rule {
                Some(rule) => BioToken { token: token.clone(), tag: rule.tag, source: rule.rule_name },
                None => BioToken { token: token.clone(), tag: Tag::Outside, source: String::new() },
            })
            .collect();

        tokens_to_spans(&bio, original_text)
    }

    // ------------------------------------------------------------------
    // Fases
    // ------------------------------------------------------------------

    /// "Apple Inc.", "Golden Gate Bridge", "Mount Fuji", "University of Tokyo"
    fn head_words(&self, tokens: &[Token], claims: &mut Claims) {
        for i in 0..tokens.len() {
            if let Some((_, label)) = HEAD_SUFFIXES.iter().find(|(head, _)| *head == tokens[i].text) {
                let mut start = i;
                while start > 0 && is_name_word(&tokens[start - 1].text) && claims.is_free(start - 1, start) {
                    start -= 1;
                }
                if start < i {
                    claim_label(claims, start, i + 1, label, "head_suffix");
                }
            }
        }

        for i in 0..tokens.len() {
            let Some((_, label, allow_of)) = HEAD_PREFIXES.iter().find(|(head, _, _)| *head == tokens[i].text) else {
                continue;
            };
            let mut end = name_run(tokens, i + 1, claims);
            if end == i + 1 && *allow_of && tokens.get(i + 1).map(|t| t.text == "of").unwrap_or(false) {
                end = name_run(tokens, i + 2, claims);
                if end == i + 2 {
                    continue;
                }
            }
            if end > i + 1 {
                claim_label(claims, i, end, label, "head_prefix");
            }
        }
    }

    /// "speaks French", "written in Portuguese"
    fn cued_languages(&self, tokens: &[Token], lower: &[String], claims: &mut Claims) {
        for i in 1..tokens.len() {
            if LANGUAGES.contains(&tokens[i].text.as_str()) && LANGUAGE_CUES.contains(&lower[i - 1].as_str()) {
                claims.claim(i, i + 1, EntityLabel::Language, "language_cue");
            }
        }
    }

    fn gazetteers(&self, tokens: &[Token], claims: &mut Claims) {
        let mut i = 0;
        while i < tokens.len() {
            let found = self
                .gazetteer
                .iter()
                .find(|entry| entry.matches_at(tokens, i) && claims.is_free(i, i + entry.parts.len()));
            match found {
                Some(entry) => {
                    claims.claim(i, i + entry.parts.len(), entry.label, "gazetteer");
                    i += entry.parts.len();
                }
                None => i += 1,
            }
        }
    }

    /// "$3 trillion", "US$ 20", "three million dollars"
    fn money(&self, tokens: &[Token], lower: &[String], claims: &mut Claims) {
        for i in 0..tokens.len() {
            if CURRENCY_SYMBOLS.contains(&tokens[i].text.as_str()) && lower.get(i + 1).map(|w| is_numeric(w)).unwrap_or(false) {
                let mut end = i + 2;
                while end < lower.len() && SCALE_WORDS.contains(&lower[end].as_str()) {
                    end += 1;
                }
                claims.claim(i, end, EntityLabel::Money, "money_symbol");
                continue;
            }
            if is_number(&lower[i]) {
                let mut end = i + 1;
                while end < lower.len() && (SCALE_WORDS.contains(&lower[end].as_str()) || is_number(&lower[end])) {
                    end += 1;
                }
                if lower.get(end).map(|w| CURRENCY_WORDS.contains(&w.as_str())).unwrap_or(false) {
                    claims.claim(i, end + 1, EntityLabel::Money, "money_words");
                }
            }
        }
    }

    /// "12%", "five percent"
    fn percent(&self, lower: &[String], claims: &mut Claims) {
        for i in 0..lower.len().saturating_sub(1) {
            if is_number(&lower[i]) && PERCENT_WORDS.contains(&lower[i + 1].as_str()) {
                claims.claim(i, i + 2, EntityLabel::Percent, "percent");
            }
        }
    }

    /// "10:30 a.m.", "5pm", "7 o'clock", "noon", "this morning"
    fn time(&self, tokens: &[Token], lower: &[String], claims: &mut Claims) {
        for i in 0..tokens.len() {
            let is_clock = i + 2 < tokens.len()
                && is_small_number(&lower[i], 24)
                && tokens[i + 1].text == ":"
                && tokens[i + 2].text.len() == 2
                && is_numeric(&lower[i + 2])
                && tokens[i].end == tokens[i + 1].start
                && tokens[i + 1].end == tokens[i + 2].start;
            if is_clock {
                let mut end = i + 3;
                if lower.get(end).map(|w| MERIDIEMS.contains(&w.as_str())).unwrap_or(false) {
                    end += 1;
                }
                claims.claim(i, end, EntityLabel::Time, "clock_time");
                continue;
            }
            if is_small_number(&lower[i], 12) && lower.get(i + 1).map(|w| MERIDIEMS.contains(&w.as_str())).unwrap_or(false) {
                claims.claim(i, i + 2, EntityLabel::Time, "clock_time");
                continue;
            }
            if self.patterns.clock_time.is_match(&lower[i]) || TIME_WORDS.contains(&lower[i].as_str()) {
                claims.claim(i, i + 1, EntityLabel::Time, "time_word");
                continue;
            }
            let day_part_follows = lower.get(i + 1).map(|w| DAY_PARTS.contains(&w.as_str())).unwrap_or(false);
            let relative = matches!(lower[i].as_str(), "this" | "yesterday" | "tomorrow" | "last");
            if relative && day_part_follows {
                claims.claim(i, i + 2, EntityLabel::Time, "day_part");
            }
        }
    }

    fn date(&self, tokens: &[Token], lower: &[String], claims: &mut Claims) {
        for i in 0..tokens.len() {
            // "1 April 1976"
            if is_small_number(&lower[i], 31) && is_month(tokens, lower, i + 1) {
                let end = extend_year(lower, i + 2);
                claims.claim(i, end, EntityLabel::Date, "date_day_month");
                continue;
            }
            // "April 1, 1976", "April 1976", "April"
            if is_month(tokens, lower, i) {
                let mut end = i + 1;
                if lower.get(end).map(|w| is_small_number(w, 31) || self.patterns.ordinal_number.is_match(w)).unwrap_or(false) {
                    end += 1;
                }
                end = extend_year(lower, end);
                let ambiguous = AMBIGUOUS_MONTHS.contains(&lower[i].as_str());
                if end > i + 1 || !ambiguous {
                    claims.claim(i, end, EntityLabel::Date, "date_month");
                }
                continue;
            }
            // "last Monday", "Monday"
            if WEEKDAYS.contains(&lower[i].as_str()) && starts_uppercase(&tokens[i].text) {
                let start = if i > 0 && DATE_MODIFIERS.contains(&lower[i - 1].as_str()) { i - 1 } else { i };
                if !claims.claim(start, i + 1, EntityLabel::Date, "weekday") {
                    claims.claim(i, i + 1, EntityLabel::Date, "weekday");
                }
                continue;
            }
            if RELATIVE_DAYS.contains(&lower[i].as_str()) {
                claims.claim(i, i + 1, EntityLabel::Date, "relative_day");
                continue;
            }
            // "last week", "next year"
            if DATE_MODIFIERS.contains(&lower[i].as_str())
                && lower.get(i + 1).map(|w| DATE_UNITS.contains(&w.as_str())).unwrap_or(false)
            {
                claims.claim(i, i + 2, EntityLabel::Date, "relative_period");
                continue;
            }
            // "three years ago", "20 years old"
            if is_number(&lower[i]) && lower.get(i + 1).map(|w| DATE_UNITS.contains(&w.as_str())).unwrap_or(false) {
                let mut end = i + 2;
                if lower.get(end).map(|w| w == "ago" || w == "old").unwrap_or(false) {
                    end += 1;
                }
                claims.claim(i, end, EntityLabel::Date, "period");
                continue;
            }
            if self.patterns.decade.is_match(&lower[i]) {
                claims.claim(i, i + 1, EntityLabel::Date, "decade");
                continue;
            }
            if is_year(&lower[i]) && year_context(lower, i) {
                claims.claim(i, i + 1, EntityLabel::Date, "year");
            }
        }
    }

    /// "42 km", "ten miles"
    fn quantity(&self, lower: &[String], claims: &mut Claims) {
        for i in 0..lower.len().saturating_sub(1) {
            if is_number(&lower[i]) && UNITS.contains(&lower[i + 1].as_str()) {
                claims.claim(i, i + 2, EntityLabel::Quantity, "quantity");
            }
        }
    }

    /// "first", "21st"
    fn ordinal(&self, lower: &[String], claims: &mut Claims) {
        for (i, word) in lower.iter().enumerate() {
            if ORDINAL_WORDS.contains(&word.as_str()) || self.patterns.ordinal_number.is_match(word) {
                claims.claim(i, i + 1, EntityLabel::Ordinal, "ordinal");
            }
        }
    }

    /// Nomes de idioma que não são também nacionalidade ("English", "Mandarin")
    fn remaining_languages(&self, tokens: &[Token], claims: &mut Claims) {
        for (i, token) in tokens.iter().enumerate() {
            if LANGUAGES.contains(&token.text.as_str()) {
                claims.claim(i, i + 1, EntityLabel::Language, "language");
            }
        }
    }

    /// "Emily Watson" (prenome conhecido) e "Dr. Smith" (título + nome)
    fn persons(&self, tokens: &[Token], lower: &[String], claims: &mut Claims) {
        for i in 0..tokens.len() {
            if FIRST_NAMES.contains(&tokens[i].text.as_str()) && claims.is_free(i, i + 1) {
                let end = name_run(tokens, i + 1, claims);
                claims.claim(i, end, EntityLabel::Person, "first_name");
                continue;
            }
            if PERSON_TITLES.contains(&lower[i].as_str()) {
                let end = name_run(tokens, i + 1, claims);
                if end > i + 1 {
                    claims.claim(i + 1, end, EntityLabel::Person, "title");
                }
            }
        }
    }

    /// Números que nenhuma outra regra reivindicou: "12", "three million"
    fn cardinal(&self, lower: &[String], claims: &mut Claims) {
        let mut i = 0;
        while i < lower.len() {
            if is_number(&lower[i]) && claims.is_free(i, i + 1) {
                let mut end = i + 1;
                while end < lower.len()
                    && (is_number(&lower[end]) || SCALE_WORDS.contains(&lower[end].as_str()))
                    && claims.is_free(end, end + 1)
                {
                    end += 1;
                }
                claims.claim(i, end, EntityLabel::Cardinal, "cardinal");
                i = end;
            } else {
                i += 1;
            }
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn claim_label(claims: &mut Claims, start: usize, end: usize, label: &str, rule: &str) {
    if let Some(label) = EntityLabel::from_name(label) {
        claims.claim(start, end, label, rule);
    }
}

/// Palavra capitalizada que pode compor um nome próprio.
fn is_name_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    word.chars().next().map(char::is_alphabetic).unwrap_or(false)
        && starts_uppercase(word)
        && !FUNCTION_WORDS.contains(&lower.as_str())
        && !MONTHS.contains(&lower.as_str())
        && !WEEKDAYS.contains(&lower.as_str())
        && !RELATIVE_DAYS.contains(&lower.as_str())
}

/// Fim (exclusivo) da sequência de nomes livres que começa em `start`.
fn name_run(tokens: &[Token], start: usize, claims: &Claims) -> usize {
    let mut end = start;
    while end < tokens.len() && is_name_word(&tokens[end].text) && claims.is_free(end, end + 1) {
        end += 1;
    }
    end
}

fn is_acronym(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && word.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}

fn is_number(lower: &str) -> bool {
    is_numeric(lower) || NUMBER_WORDS.contains(&lower)
}

fn is_small_number(lower: &str, max: u32) -> bool {
    lower.len() <= 2 && lower.parse::<u32>().map(|n| n >= 1 && n <= max).unwrap_or(false)
}

fn is_year(lower: &str) -> bool {
    lower.len() == 4 && lower.parse::<u32>().map(|n| (1000..=2100).contains(&n)).unwrap_or(false)
}

/// Ano isolado só conta como data em posição típica: "in 1976", "since 2001", "1999."
fn year_context(lower: &[String], i: usize) -> bool {
    const BEFORE: &[&str] = &["in", "since", "by", "from", "until", "of", "to", "during", "before", "after", "early", "late", "mid", ","];
    let before = i == 0 || BEFORE.contains(&lower[i - 1].as_str());
    let after = lower
        .get(i + 1)
        .map(|w| !w.chars().next().map(char::is_alphanumeric).unwrap_or(false))
        .unwrap_or(true);
    before || after
}

fn is_month(tokens: &[Token], lower: &[String], i: usize) -> bool {
    i < tokens.len() && MONTHS.contains(&lower[i].as_str()) && starts_uppercase(&tokens[i].text)
}

/// Inclui ", 1976" ou "1976" a partir de `end`.
fn extend_year(lower: &[String], end: usize) -> usize {
    if lower.get(end).map(|w| is_year(w)).unwrap_or(false) {
        return end + 1;
    }
    if lower.get(end).map(|w| w == ",").unwrap_or(false) && lower.get(end + 1).map(|w| is_year(w)).unwrap_or(false) {
        return end + 2;
    }
    end
}
