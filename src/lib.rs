//! Exercícios de programação.
//!
//! - [`correction`]: conta as correções de lacunas em episódios de transições.
//! - [`cipher`]: cifra de César.
//! - [`email`]: reparo de e-mails embaralhados.
//! - [`projects`]: organização de episódios por projeto.
//! - [`troops`]: movimentação de tropas em direção à fronteira.

pub mod cipher;
pub mod config;
pub mod correction;
pub mod email;
pub mod error;
pub mod projects;
pub mod troops;

pub use config::ExerciseConfig;
pub use correction::{Correction, GapCorrector, TransitionTable, count_corrections};
pub use error::{ExerciseError, Result};
