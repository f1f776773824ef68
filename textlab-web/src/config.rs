//! Configuração do servidor: arquivo TOML opcional + variáveis de ambiente.
//!
//! ```toml
//! bind = "127.0.0.1:8080"
//! default_text = "Marie Curie won the Nobel Prize in 1903."
//! preload_models = false
//!
//! [models]
//! pipeline = "models/pipeline.toml"
//! ```
//!
//! Ordem de precedência: valores padrão < arquivo (`TEXTLAB_CONFIG`) < variáveis
//! `TEXTLAB_BIND`, `TEXTLAB_LEXICAL_MODEL`, `TEXTLAB_PIPELINE_MODEL`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use textlab_core::corpus::DEFAULT_TEXT;
use textlab_core::ModelConfig;
use thiserror::Error;

pub const CONFIG_ENV: &str = "TEXTLAB_CONFIG";
pub const BIND_ENV: &str = "TEXTLAB_BIND";
pub const LEXICAL_MODEL_ENV: &str = "TEXTLAB_LEXICAL_MODEL";
pub const PIPELINE_MODEL_ENV: &str = "TEXTLAB_PIPELINE_MODEL";

/// Erros que impedem o servidor de iniciar.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("não foi possível ler a configuração {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuração inválida em {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("endereço de escuta inválido '{0}'")]
    InvalidBind(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Endereço de escuta (ex: "0.0.0.0:3000")
    pub bind: String,
    /// Texto que vem preenchido no dashboard
    pub default_text: String,
    /// Carrega os modelos na inicialização em vez de no primeiro pedido
    pub preload_models: bool,
    pub models: ModelConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            default_text: DEFAULT_TEXT.to_string(),
            preload_models: true,
            models: ModelConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Configuração do processo: arquivo de `TEXTLAB_CONFIG` (se definido) + ambiente.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = Self::load(path.as_deref())?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.socket_addr()?;
        Ok(config)
    }

    /// Lê o arquivo indicado; sem arquivo, usa os padrões.
    /// Um arquivo indicado explicitamente que não existe é erro.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Aplica as variáveis de ambiente. `lookup` abstrai `std::env::var` nos testes.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(BIND_ENV) {
            self.bind = bind;
        }
        if let Some(path) = lookup(LEXICAL_MODEL_ENV) {
            self.models.lexical = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(PIPELINE_MODEL_ENV) {
            self.models.pipeline = Some(PathBuf::from(path));
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.bind.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = ServerConfig::load(None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
        assert!(config.preload_models);
        assert_eq!(config.default_text, DEFAULT_TEXT);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind = \"127.0.0.1:8080\"\n\n[models]\npipeline = \"modelos/pipeline.toml\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert_eq!(config.default_text, DEFAULT_TEXT);
        assert_eq!(config.models.pipeline, Some(PathBuf::from("modelos/pipeline.toml")));
        assert_eq!(config.models.lexical, None);
    }

    #[test]
    fn test_missing_named_file_is_error() {
        let err = ServerConfig::load(Some(Path::new("/nao/existe/textlab.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 3000").unwrap();
        let err = ServerConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (BIND_ENV, "127.0.0.1:9000"),
            (LEXICAL_MODEL_ENV, "/tmp/lexical.toml"),
        ]
        .into_iter()
        .collect();

        let mut config = ServerConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.models.lexical, Some(PathBuf::from("/tmp/lexical.toml")));
        assert_eq!(config.models.pipeline, None);
    }

    #[test]
    fn test_invalid_bind() {
        let config = ServerConfig {
            bind: "localhost".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.socket_addr(), Err(ConfigError::InvalidBind(_))));
    }
}
