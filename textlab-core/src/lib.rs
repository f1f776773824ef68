//! # textlab-core — Análise de Texto em Inglês (Tokenização, POS e NER)
//!
//! Este crate implementa o núcleo de um painel de análise de texto. Dado um
//! texto em inglês, ele produz estatísticas, tokens, classes gramaticais e
//! entidades nomeadas, comparando dois analisadores lado a lado.
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui em uma única direção:
//!
//! 1.  **Entrada**: Texto bruto, validado em um [`AnalysisRequest`] (nunca em branco).
//! 2.  **Tokenização** ([`tokenizer`]): O texto é dividido em tokens, preservando offsets originais.
//! 3.  **POS Tagging** ([`pos`]): Léxico + morfologia + regras de contexto (Penn Treebank),
//!     com conversão para tags universais.
//! 4.  **NER** ([`rule_based`], [`tagger`]): Gazetteers e padrões marcam tokens no esquema BIO,
//!     que depois viram spans de entidade.
//! 5.  **Apresentação** ([`pipeline`]): Estatísticas ([`stats`]), tabelas com descrições do
//!     glossário ([`glossary`]), destaque ([`highlight`]) e distribuição de rótulos.
//!
//! Os analisadores ficam atrás da trait [`Analyzer`] e são carregados sob demanda,
//! uma única vez, pelo [`AnalyzerRegistry`].
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use textlab_core::{analyze, AnalysisRequest, AnalyzerRegistry, AnalyzerSelection};
//!
//! // 1. O registro carrega os modelos no primeiro uso
//! let registry = AnalyzerRegistry::builtin();
//!
//! // 2. Pedido validado: texto em branco seria rejeitado aqui
//! let request = AnalysisRequest::new(
//!     "Steve Jobs founded Apple in California.",
//!     AnalyzerSelection::default(),
//! ).unwrap();
//!
//! // 3. Executa os dois analisadores
//! let result = analyze(&request, &registry);
//!
//! // 4. Exibe as entidades encontradas
//! for section in &result.sections {
//!     if let Some(report) = &section.entities {
//!         for row in &report.rows {
//!             println!("Entidade: {} ({}) - {}", row.entity, row.label, row.description);
//!         }
//!     }
//! }
//! assert_eq!(result.statistics.word_count, 6);
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: Orquestrador que monta o resultado exibido.
//! - [`analyzer`]: Interface dos analisadores e carregamento dos modelos.
//! - [`tokenizer`]: Segmentação do texto.
//! - [`glossary`]: Descrições das tags e rótulos.

pub mod analyzer;
pub mod corpus;
pub mod error;
pub mod glossary;
pub mod highlight;
pub mod lexicon;
pub mod model;
pub mod pipeline;
pub mod pos;
pub mod rule_based;
pub mod stats;
pub mod tagger;
pub mod tokenizer;

pub use analyzer::{Analyzer, AnalyzerKind, AnalyzerRegistry, Entity, PosTag};
pub use error::{AnalysisError, CoreResult};
pub use model::ModelConfig;
pub use pipeline::{analyze, AnalysisRequest, AnalysisResult, AnalyzerSelection, Session};
pub use tagger::{EntityLabel, EntitySpan, Tag};
pub use tokenizer::{Token, TokenizerMode};
