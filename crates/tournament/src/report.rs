//! Text and JSON reports for schedules and standings

use roundrobin_core::{Match, ParticipantId, Tournament};
use serde::Serialize;

/// One row of the JSON standings
#[derive(Debug, Clone, Serialize)]
pub struct StandingRow {
    pub rank: usize,
    pub name: String,
    pub rating: i64,
    pub games: u32,
    pub score: u32,
}

fn name_of(tournament: &Tournament, id: ParticipantId) -> String {
    tournament
        .participant(id)
        .map(|p| p.name())
        .unwrap_or_else(|| format!("unknown {}", id))
}

fn rating_of(tournament: &Tournament, id: ParticipantId) -> i64 {
    tournament.participant(id).map(|p| p.rating()).unwrap_or(0)
}

fn describe_game(tournament: &Tournament, number: usize, game: &Match) -> String {
    let side = |slot: usize| {
        let id = game.opponents[slot];
        format!(
            "{} ({}, {} min.)",
            name_of(tournament, id),
            rating_of(tournament, id),
            game.time_limits[slot]
        )
    };
    format!("Game {}: ({}) {} vs. {}", number, game.result, side(0), side(1))
}

/// Full schedule, one block per matchday
pub fn schedule_report(tournament: &Tournament) -> String {
    let mut report = String::new();
    for (i, day) in tournament.matchdays().iter().enumerate() {
        report.push_str(&format!(
            "--------------------------- Matchday {} ---------------------------\n",
            i + 1
        ));
        for (j, game) in day.matches.iter().enumerate() {
            report.push_str(&describe_game(tournament, j + 1, game));
            report.push('\n');
        }
        if let Some(bye) = day.bye {
            report.push_str(&format!("Bye: {}\n", name_of(tournament, bye)));
        }
        report.push('\n');
    }
    report
}

/// Leaderboard rows, best first
pub fn standing_rows(tournament: &Tournament) -> Vec<StandingRow> {
    tournament
        .scoreboard()
        .leaderboard()
        .into_iter()
        .enumerate()
        .map(|(i, (id, standing))| StandingRow {
            rank: i + 1,
            name: name_of(tournament, id),
            rating: rating_of(tournament, id),
            games: standing.games,
            score: standing.score,
        })
        .collect()
}

/// Standings as a text table
pub fn standings_report(tournament: &Tournament) -> String {
    let rows = standing_rows(tournament);
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(6).max(6);

    let mut report = String::new();
    report.push_str(&format!(
        "{:>3}  {:<name_width$} {:>6} {:>6} {:>6}\n",
        "#", "Player", "Rating", "Games", "Score"
    ));
    report.push_str(&"-".repeat(name_width + 26));
    report.push('\n');
    for row in &rows {
        report.push_str(&format!(
            "{:>3}  {:<name_width$} {:>6} {:>6} {:>6}\n",
            row.rank, row.name, row.rating, row.games, row.score
        ));
    }
    report
}

/// Standings as pretty JSON
pub fn standings_json(tournament: &Tournament) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&standing_rows(tournament))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
