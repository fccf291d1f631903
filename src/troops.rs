//! Movimentação de tropas em direção à fronteira.
//!
//! Territórios de um jogador que têm mais de uma tropa e nenhum vizinho
//! inimigo devem mover tropas para o vizinho aliado mais próximo de um
//! inimigo. Distâncias são medidas por busca em largura no mapa.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A territory on the map with its garrison and owner color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub troops: u32,
    pub owner: String,
}

impl Territory {
    pub fn new(name: impl Into<String>, troops: u32, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            troops,
            owner: owner.into(),
        }
    }
}

/// A suggested movement from one territory to an allied neighbor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: String,
    pub to: String,
}

/// Undirected adjacency between territory names.
#[derive(Debug, Default)]
pub struct BorderMap<'a> {
    neighbors: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> BorderMap<'a> {
    /// Build the map from border pairs; each pair is linked both ways.
    pub fn new<S: AsRef<str>>(borders: &'a [(S, S)]) -> Self {
        let mut neighbors: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for (a, b) in borders {
            let (a, b) = (a.as_ref(), b.as_ref());
            neighbors.entry(a).or_default().push(b);
            neighbors.entry(b).or_default().push(a);
        }
        Self { neighbors }
    }

    /// Neighbors of `territory` in border order; empty for unknown names.
    pub fn neighbors(&self, territory: &str) -> &[&'a str] {
        self.neighbors
            .get(territory)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of borders crossed on the shortest route, or `None` if unreachable.
    pub fn distance(&self, from: &str, to: &str) -> Option<usize> {
        let mut queue = VecDeque::from([from]);
        let mut seen: HashMap<&str, usize> = HashMap::from([(from, 0)]);

        while let Some(current) = queue.pop_front() {
            let depth = seen[current];
            if current == to {
                return Some(depth);
            }
            for &next in self.neighbors(current) {
                if !seen.contains_key(next) {
                    seen.insert(next, depth + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

/// Suggest moves for every territory of `color`, in the order `territories` lists them.
///
/// A territory moves only if it holds more than one troop and borders no
/// enemy. The destination is the allied neighbor closest to any enemy; ties
/// go to the neighbor with fewer troops, then to the smaller name.
pub fn plan_moves<S: AsRef<str>>(
    color: &str,
    borders: &[(S, S)],
    territories: &[Territory],
) -> Vec<Move> {
    let map = BorderMap::new(borders);
    let by_name: HashMap<&str, &Territory> =
        territories.iter().map(|t| (t.name.as_str(), t)).collect();
    let enemies: Vec<&str> = territories
        .iter()
        .filter(|t| t.owner != color)
        .map(|t| t.name.as_str())
        .collect();

    let mut moves = Vec::new();
    for territory in territories {
        if territory.owner != color || territory.troops <= 1 {
            continue;
        }

        let neighbors = map.neighbors(&territory.name);
        let borders_enemy = neighbors
            .iter()
            .any(|n| by_name.get(n).is_some_and(|t| t.owner != color));
        if borders_enemy {
            continue;
        }

        // Distance ties go to the weaker garrison before the name; this is the
        // intended ranking, not just alphabetical order.
        let best = neighbors
            .iter()
            .filter_map(|n| by_name.get(n).copied())
            .filter(|t| t.owner == color)
            .map(|t| {
                let distance = nearest_enemy(&map, &t.name, &enemies);
                // `None` (no reachable enemy) sorts after every distance.
                ((distance.is_none(), distance, t.troops), t)
            })
            .min_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| a.name.cmp(&b.name)))
            .map(|(_, t)| t);

        if let Some(best) = best {
            debug!(from = %territory.name, to = %best.name, "planned move");
            moves.push(Move {
                from: territory.name.clone(),
                to: best.name.clone(),
            });
        }
    }
    moves
}

fn nearest_enemy(map: &BorderMap<'_>, from: &str, enemies: &[&str]) -> Option<usize> {
    enemies
        .iter()
        .filter_map(|enemy| map.distance(from, enemy))
        .min()
}
