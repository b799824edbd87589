// Keeps the decisions of every team, per round, in memory
use anyhow::{anyhow, Result};
use shared::models::Decision;
use std::collections::{BTreeMap, HashMap, HashSet};

pub struct DecisionStore {
    // team -> round -> decisions, at most one per field, sorted by field name
    data: HashMap<String, BTreeMap<u32, Vec<Decision>>>,
}

impl DecisionStore {
    pub fn new() -> Self {
        DecisionStore {
            data: HashMap::new(),
        }
    }

    /// Stores decisions; a decision for a field already present in the same round replaces it
    /// unless the stored one was submitted later. Returns how many distinct (team, round, field)
    /// entries this batch left in the store; rows superseded inside the batch are not counted.
    pub fn add_decisions(&mut self, new_decisions: Vec<Decision>) -> Result<usize> {
        if let Some(bad) = new_decisions.iter().find(|d| !d.value.is_finite()) {
            return Err(anyhow!(
                "Non-finite value for field '{}' of team '{}' in round {}",
                bad.field,
                bad.team,
                bad.round
            ));
        }

        let mut accepted = HashSet::new();
        for decision in new_decisions {
            let key = (decision.team.clone(), decision.round, decision.field.clone());
            let round_data = self
                .data
                .entry(decision.team.clone())
                .or_default()
                .entry(decision.round)
                .or_default();

            match round_data.iter_mut().find(|d| d.field == decision.field) {
                Some(existing) if existing.submitted_at > decision.submitted_at => {
                    tracing::debug!(
                        team = %decision.team,
                        round = decision.round,
                        field = %decision.field,
                        "Ignoring decision older than the stored one"
                    );
                }
                Some(existing) => {
                    *existing = decision;
                    accepted.insert(key);
                }
                None => {
                    round_data.push(decision);
                    round_data.sort_by(|a, b| a.field.cmp(&b.field));
                    accepted.insert(key);
                }
            }
        }
        Ok(accepted.len())
    }

    pub fn get_decisions(&self, team: &str, round: u32) -> Option<Vec<Decision>> {
        self.data
            .get(team)
            .and_then(|rounds| rounds.get(&round))
            .cloned()
    }

    /// Rounds with decisions for a team, ascending.
    pub fn rounds(&self, team: &str) -> Vec<u32> {
        self.data
            .get(team)
            .map(|rounds| rounds.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn teams(&self) -> Vec<String> {
        let mut teams: Vec<String> = self.data.keys().cloned().collect();
        teams.sort();
        teams
    }
}

impl Default for DecisionStore {
    fn default() -> Self {
        Self::new()
    }
}
