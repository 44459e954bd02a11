//! Scoreboard text formatting and the report file writer.

use std::path::Path;

use crate::error::AppError;
use crate::riot::MatchDto;

pub const NO_MATCHES: &str = "No tournament matches found.\n";

const PLAYER_WIDTH: usize = 20;
const CHAMPION_WIDTH: usize = 15;
const STAT_WIDTH: usize = 4;
const TABLE_WIDTH: usize = PLAYER_WIDTH + CHAMPION_WIDTH + STAT_WIDTH * 3;

/// Render one match as a fixed-width table. Participants keep the API order.
///
/// Content wider than its column is not truncated.
pub fn format_scoreboard(match_data: &MatchDto) -> String {
    let mut lines = Vec::with_capacity(match_data.info.participants.len() + 4);

    lines.push(format!("Game ID: {}", match_data.metadata.match_id));
    lines.push(row("Player", "Champion", "K", "D", "A"));
    lines.push("-".repeat(TABLE_WIDTH));

    for p in &match_data.info.participants {
        lines.push(row(
            &p.riot_id_game_name,
            &p.champion_name,
            &p.kills.to_string(),
            &p.deaths.to_string(),
            &p.assists.to_string(),
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

fn row(player: &str, champion: &str, kills: &str, deaths: &str, assists: &str) -> String {
    format!(
        "{player:<PLAYER_WIDTH$}{champion:<CHAMPION_WIDTH$}{kills:>STAT_WIDTH$}{deaths:>STAT_WIDTH$}{assists:>STAT_WIDTH$}"
    )
}

/// Final file content for the given blocks, in order.
pub fn render_report(blocks: &[String]) -> String {
    if blocks.is_empty() {
        NO_MATCHES.to_string()
    } else {
        blocks.join("\n")
    }
}

/// Overwrites `path` with `content`.
pub async fn write_report(path: &Path, content: &str) -> Result<(), AppError> {
    tokio::fs::write(path, content).await?;

    tracing::info!(path = %path.display(), bytes = content.len(), "report written");
    Ok(())
}
