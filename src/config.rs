//! Configuração dos exercícios carregada a partir de `exercicios.toml`.
//!
//! A struct [`ExerciseConfig`] agrupa as opções do corretor de lacunas e do
//! reparo de e-mails. Valores ausentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `EXERCICIOS_TRACE` tem precedência sobre o arquivo.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::error::{ExerciseError, Result};

/// Nome do arquivo procurado no diretório atual por [`ExerciseConfig::load`].
pub const CONFIG_FILE: &str = "exercicios.toml";

/// Variável de ambiente que liga o rastreamento da busca de caminhos.
pub const TRACE_ENV: &str = "EXERCICIOS_TRACE";

/// Configuração de nível superior carregada de `exercicios.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExerciseConfig {
    /// Opções do corretor de lacunas.
    #[serde(default)]
    pub corrector: CorrectorConfig,

    /// Opções do reparo de e-mails.
    #[serde(default)]
    pub email: EmailConfig,
}

/// Opções da seção `[corrector]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrectorConfig {
    /// Conta o caminho vazio quando origem e destino de uma lacuna coincidem.
    #[serde(default)]
    pub self_gap_empty_path: bool,

    /// Emite eventos `tracing` a cada camada da busca.
    #[serde(default)]
    pub trace: bool,
}

/// Opções da seção `[email]`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Sufixo exigido de um e-mail reparado.
    #[serde(default = "default_domain")]
    pub domain: String,
}

// Domínio padrão: "@usp.br".
fn default_domain() -> String {
    "@usp.br".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
        }
    }
}

impl ExerciseConfig {
    /// Carrega a configuração de `exercicios.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new(CONFIG_FILE);
        let config = if path.exists() {
            Self::load_from(path).with_context(|| format!("failed to load {CONFIG_FILE}"))?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo.
        Ok(config.with_trace_override(trace_from_env()))
    }

    /// Substitui `corrector.trace` quando `trace` é `Some`.
    pub fn with_trace_override(mut self, trace: Option<bool>) -> Self {
        if let Some(trace) = trace {
            self.corrector.trace = trace;
        }
        self
    }

    /// Lê e valida a configuração de um caminho explícito.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str::<ExerciseConfig>(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejeita valores que tornariam os exercícios sem sentido.
    pub fn validate(&self) -> Result<()> {
        if self.email.domain.trim().is_empty() {
            return Err(ExerciseError::Config(
                "email.domain must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn trace_from_env() -> Option<bool> {
    parse_trace(&std::env::var(TRACE_ENV).ok()?)
}

// Interpreta o valor de `EXERCICIOS_TRACE`; valores não reconhecidos são ignorados.
fn parse_trace(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = ExerciseConfig::default();
        assert!(!config.corrector.self_gap_empty_path);
        assert!(!config.corrector.trace);
        assert_eq!(config.email.domain, "@usp.br");
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            [corrector]
            self_gap_empty_path = true
        "#;
        let config: ExerciseConfig = toml::from_str(toml_str).unwrap();
        assert!(config.corrector.self_gap_empty_path);
        assert!(!config.corrector.trace);
        assert_eq!(config.email.domain, "@usp.br");
    }

    #[test]
    fn load_from_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[corrector]\ntrace = true\n\n[email]\ndomain = \"@ime.usp.br\"\n",
        )
        .unwrap();

        let config = ExerciseConfig::load_from(&path).unwrap();
        assert!(config.corrector.trace);
        assert_eq!(config.email.domain, "@ime.usp.br");
    }

    #[test]
    fn load_from_rejects_empty_domain() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[email]\ndomain = \"  \"\n").unwrap();

        let err = ExerciseConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ExerciseError::Config(_)));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = ExerciseConfig::load_from(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ExerciseError::Io(_)));
    }

    #[test]
    fn load_from_malformed_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[corrector\n").unwrap();

        let err = ExerciseConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ExerciseError::Toml(_)));
    }

    #[test]
    fn parse_trace_values() {
        assert_eq!(parse_trace("1"), Some(true));
        assert_eq!(parse_trace(" TRUE "), Some(true));
        assert_eq!(parse_trace("on"), Some(true));
        assert_eq!(parse_trace("off"), Some(false));
        assert_eq!(parse_trace("0"), Some(false));
        assert_eq!(parse_trace("maybe"), None);
        assert_eq!(parse_trace(""), None);
    }

    #[test]
    fn env_trace_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[corrector]\ntrace = false\n").unwrap();

        let config = ExerciseConfig::load_from(&path)
            .unwrap()
            .with_trace_override(parse_trace("1"));
        assert!(config.corrector.trace);
    }

    #[test]
    fn unrecognised_env_value_keeps_file_setting() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "[corrector]\ntrace = true\n").unwrap();

        let config = ExerciseConfig::load_from(&path)
            .unwrap()
            .with_trace_override(parse_trace("maybe"));
        assert!(config.corrector.trace);
    }

    #[test]
    fn load_falls_back_to_defaults() {
        // No ambiente de teste, tipicamente não há exercicios.toml no diretório de trabalho.
        let config = ExerciseConfig::load().unwrap();
        assert_eq!(config.email.domain, "@usp.br");
    }
}
