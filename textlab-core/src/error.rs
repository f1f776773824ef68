//! # Taxonomia de Erros
//!
//! Todos os erros ficam restritos a uma única requisição: nenhum deles corrompe
//! o estado compartilhado (os modelos carregados) nem derruba o processo.
//!
//! | Variante                | Quando ocorre                                   | Efeito na UI                    |
//! |-------------------------|-------------------------------------------------|---------------------------------|
//! | `EmptyInput`            | Texto vazio ou só com espaços                   | Erro inline, nenhum resultado   |
//! | `ModelUnavailable`      | O modelo do analisador não pôde ser carregado   | Aviso informativo, seção omitida |
//! | `UnsupportedCapability` | O analisador não oferece o recurso (ex: NER)    | Seção omitida silenciosamente   |
//! | `ModelArtifact`         | Falha de I/O ou de parse no artefato TOML       | Convertido em `ModelUnavailable` |
//!
//! "Nenhuma entidade encontrada" **não** é erro: é um resultado vazio válido,
//! representado por um [`crate::pipeline::Notice`].

use serde::Serialize;
use thiserror::Error;

use crate::analyzer::AnalyzerKind;

/// Erros do núcleo de análise.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisError {
    /// O usuário disparou a análise com texto em branco.
    #[error("o texto de entrada está vazio")]
    EmptyInput,

    /// O modelo não carregou; o analisador fica desativado até o fim do processo.
    #[error("modelo do analisador '{analyzer}' indisponível: {reason}")]
    ModelUnavailable { analyzer: AnalyzerKind, reason: String },

    /// O analisador não implementa o recurso pedido.
    #[error("o analisador '{analyzer}' não suporta {capability}")]
    UnsupportedCapability {
        analyzer: AnalyzerKind,
        capability: Capability,
    },

    /// Erro ao ler ou interpretar um artefato de modelo em disco.
    #[error("falha ao carregar o artefato {path}: {message}")]
    ModelArtifact { path: String, message: String },
}

/// Recursos que um analisador pode (ou não) oferecer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Tokenization,
    PosTagging,
    EntityRecognition,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Capability::Tokenization => "tokenização",
            Capability::PosTagging => "POS tagging",
            Capability::EntityRecognition => "reconhecimento de entidades",
        };
        f.write_str(name)
    }
}

/// Resultado das operações do núcleo.
pub type CoreResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::UnsupportedCapability {
            analyzer: AnalyzerKind::Lexical,
            capability: Capability::EntityRecognition,
        };
        assert_eq!(
            err.to_string(),
            "o analisador 'lexical' não suporta reconhecimento de entidades"
        );
        assert_eq!(AnalysisError::EmptyInput.to_string(), "o texto de entrada está vazio");
    }

    #[test]
    fn test_error_serializes_with_kind() {
        let err = AnalysisError::ModelUnavailable {
            analyzer: AnalyzerKind::Pipeline,
            reason: "arquivo ausente".into(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "model_unavailable");
        assert_eq!(json["analyzer"], "pipeline");
    }
}
