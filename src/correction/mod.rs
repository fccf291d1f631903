//! Correção de lacunas em episódios de transições de estado.
//!
//! Um episódio é uma sequência observada de estados. Cada par consecutivo sem
//! transição válida é uma [`Gap`]; o [`GapCorrector`] conta de quantas formas
//! todas as lacunas podem ser preenchidas por caminhos válidos de profundidade
//! limitada.

mod corrector;
mod episode;
mod observer;
mod transitions;

pub use corrector::{Correction, GapCorrector, count_corrections};
pub use episode::{Gap, find_gaps};
pub use observer::{NoTrace, SearchObserver, TracingObserver};
pub use transitions::{State, TransitionTable};
