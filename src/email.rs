//! Reparo de e-mails embaralhados.
//!
//! Um e-mail embaralhado é a concatenação das duas metades do original, cada
//! uma invertida. O [`EmailRepairer`] desfaz a inversão e só aceita o
//! resultado se ele terminar com o domínio configurado.

use tracing::debug;

use crate::config::EmailConfig;

/// Placeholder emitted for e-mails that cannot be repaired.
pub const REJECTED: &str = "ERRO";

/// Repairs scrambled e-mails for a fixed domain.
#[derive(Debug, Clone)]
pub struct EmailRepairer {
    domain: String,
}

impl Default for EmailRepairer {
    fn default() -> Self {
        Self::from_config(&EmailConfig::default())
    }
}

impl EmailRepairer {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    pub fn from_config(config: &EmailConfig) -> Self {
        Self::new(config.domain.clone())
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Split at the midpoint (the left half takes the floor), reverse each half
    /// and keep the result only if it ends with the domain.
    pub fn repair(&self, scrambled: &str) -> Option<String> {
        let chars: Vec<char> = scrambled.chars().collect();
        let (left, right) = chars.split_at(chars.len() / 2);
        let repaired: String = left.iter().rev().chain(right.iter().rev()).collect();

        if repaired.ends_with(&self.domain) {
            Some(repaired)
        } else {
            debug!(scrambled, repaired = %repaired, domain = %self.domain, "rejected email");
            None
        }
    }

    /// Repair every entry, replacing rejected ones with [`REJECTED`].
    pub fn repair_all<S: AsRef<str>>(&self, scrambled: &[S]) -> Vec<String> {
        scrambled
            .iter()
            .map(|email| {
                self.repair(email.as_ref())
                    .unwrap_or_else(|| REJECTED.to_string())
            })
            .collect()
    }
}

/// Repair one e-mail for the default `@usp.br` domain.
pub fn repair_email(scrambled: &str) -> Option<String> {
    EmailRepairer::default().repair(scrambled)
}

/// Repair a list of e-mails for the default `@usp.br` domain.
pub fn repair_emails<S: AsRef<str>>(scrambled: &[S]) -> Vec<String> {
    EmailRepairer::default().repair_all(scrambled)
}
