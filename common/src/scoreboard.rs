use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub wins: u32,
}

/// Round wins per player name, in the order names were first seen.
/// Entries are never removed for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` with zero wins unless it is already on the board.
    pub fn register(&mut self, name: &str) {
        if self.get(name).is_none() {
            self.entries.push(ScoreEntry { name: name.to_string(), wins: 0 });
        }
    }

    /// Credit one round win and return the new total.
    pub fn award(&mut self, name: &str) -> u32 {
        self.register(name);
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.wins += 1;
                entry.wins
            }
            None => 0,
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.wins)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// `name: score` pairs joined with " | ".
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}: {}", e.name, e.wins))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
