//! Organização de episódios por projeto.
//!
//! Os episódios chegam intercalados; cada projeto precisa recebê-los em ordem
//! cronológica não decrescente de índice. Projetos cuja soma de passos não
//! atinge o mínimo são descartados.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ExerciseError, Result};

/// One recorded episode of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEpisode {
    /// Project id in `1..=project_count`.
    pub project: u32,
    /// Chronological index within the project.
    pub index: u32,
    pub steps: u64,
}

impl ProjectEpisode {
    pub fn new(project: u32, index: u32, steps: u64) -> Self {
        Self {
            project,
            index,
            steps,
        }
    }
}

/// Overall answer of [`organize_episodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// At least one project was kept.
    Sim,
    /// Out-of-order episodes, or no project reached the minimum.
    Nao,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Sim => write!(f, "sim"),
            Verdict::Nao => write!(f, "nao"),
        }
    }
}

/// Episodes grouped by project, index `i` holding project `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organized {
    pub verdict: Verdict,
    pub projects: Vec<Vec<ProjectEpisode>>,
}

/// Group `episodes` by project, keeping only projects with at least `min_steps` steps.
///
/// If any project's index goes backwards the whole result is rejected with
/// every project empty. Repeated indices are accepted.
pub fn organize_episodes(
    project_count: u32,
    episodes: &[ProjectEpisode],
    min_steps: u64,
) -> Result<Organized> {
    let mut projects: Vec<Vec<ProjectEpisode>> = vec![Vec::new(); project_count as usize];

    for episode in episodes {
        let slot = slot(project_count, episode.project)?;
        let bucket = &mut projects[slot];
        if let Some(last) = bucket.last() {
            if episode.index < last.index {
                debug!(
                    project = episode.project,
                    index = episode.index,
                    previous = last.index,
                    "episode out of chronological order"
                );
                return Ok(Organized {
                    verdict: Verdict::Nao,
                    projects: vec![Vec::new(); project_count as usize],
                });
            }
        }
        bucket.push(*episode);
    }

    let mut kept_any = false;
    for bucket in &mut projects {
        // Saturates: any total past u64::MAX already meets every minimum.
        let total = bucket
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.steps));
        if total >= min_steps {
            kept_any = true;
        } else {
            bucket.clear();
        }
    }

    Ok(Organized {
        verdict: if kept_any { Verdict::Sim } else { Verdict::Nao },
        projects,
    })
}

fn slot(project_count: u32, project: u32) -> Result<usize> {
    if project == 0 || project > project_count {
        return Err(ExerciseError::UnknownProject {
            project,
            project_count,
        });
    }
    Ok(project as usize - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ep(project: u32, index: u32, steps: u64) -> ProjectEpisode {
        ProjectEpisode::new(project, index, steps)
    }

    #[test]
    fn groups_and_filters_by_steps() {
        let episodes = [ep(1, 1, 10), ep(2, 1, 3), ep(1, 2, 5), ep(3, 1, 20), ep(2, 2, 4)];
        let result = organize_episodes(3, &episodes, 15).unwrap();

        assert_eq!(result.verdict, Verdict::Sim);
        assert_eq!(
            result.projects,
            vec![
                vec![ep(1, 1, 10), ep(1, 2, 5)],
                vec![],
                vec![ep(3, 1, 20)],
            ]
        );
    }

    #[test]
    fn out_of_order_rejects_everything() {
        let episodes = [ep(1, 2, 10), ep(2, 1, 30), ep(1, 1, 10)];
        let result = organize_episodes(2, &episodes, 0).unwrap();

        assert_eq!(result.verdict, Verdict::Nao);
        assert_eq!(result.projects, vec![Vec::new(), Vec::new()]);
    }

    #[test]
    fn repeated_index_is_in_order() {
        let episodes = [ep(1, 3, 1), ep(1, 3, 1)];
        let result = organize_episodes(1, &episodes, 2).unwrap();
        assert_eq!(result.verdict, Verdict::Sim);
        assert_eq!(result.projects[0].len(), 2);
    }

    #[test]
    fn nothing_reaches_minimum() {
        let episodes = [ep(1, 1, 2), ep(2, 1, 3)];
        let result = organize_episodes(2, &episodes, 10).unwrap();
        assert_eq!(result.verdict, Verdict::Nao);
        assert!(result.projects.iter().all(Vec::is_empty));
    }

    #[test]
    fn project_without_episodes_meets_zero_minimum() {
        let result = organize_episodes(2, &[], 0).unwrap();
        assert_eq!(result.verdict, Verdict::Sim);
        assert_eq!(result.projects, vec![Vec::new(), Vec::new()]);
    }

    #[test]
    fn unknown_project_is_rejected() {
        let err = organize_episodes(2, &[ep(3, 1, 1)], 0).unwrap_err();
        assert!(matches!(
            err,
            ExerciseError::UnknownProject {
                project: 3,
                project_count: 2
            }
        ));
        assert!(organize_episodes(2, &[ep(0, 1, 1)], 0).is_err());
    }

    #[test]
    fn huge_step_totals_do_not_overflow() {
        let episodes = [ep(1, 1, u64::MAX), ep(1, 2, 1), ep(2, 1, 3)];
        let result = organize_episodes(2, &episodes, 5).unwrap();

        assert_eq!(result.verdict, Verdict::Sim);
        assert_eq!(result.projects[0], vec![ep(1, 1, u64::MAX), ep(1, 2, 1)]);
        assert!(result.projects[1].is_empty());
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::Sim.to_string(), "sim");
        assert_eq!(Verdict::Nao.to_string(), "nao");
    }
}
