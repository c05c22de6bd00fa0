//! Text rendering of the leaderboard

use crate::leaderboard::directory::PlayerDirectory;
use crate::leaderboard::ranker::Standing;
use serde::{Deserialize, Serialize};

/// Table layout for the final leaderboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Right-aligned columns for a terminal
    #[default]
    Plain,
    /// Pipe-delimited markdown table (reddit style)
    Pipe,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Pipe => write!(f, "pipe"),
        }
    }
}

/// Render the standings, one line per player
pub fn render(standings: &[Standing], directory: &PlayerDirectory, format: OutputFormat) -> String {
    let mut out = String::new();

    if format == OutputFormat::Pipe {
        out.push_str("Rank|Team|Player|Wins|Loses|Draws|Rating|Rating Detail\n");
        out.push_str(":--|:--|:--|:-:|:-:|:-:|:-:|:--\n");
    }

    for standing in standings {
        let team = directory.team_name(standing.player_id);
        let player = directory.player_name(standing.player_id);
        let record = standing.record;

        let line = match format {
            OutputFormat::Plain => format!(
                "{:>3} {:>22} {:>11} [{:>2}-{:>2}-{:>2}] {:>7.2} ({})",
                standing.rank,
                team,
                player,
                record.wins,
                record.losses,
                record.draws,
                standing.conservative_rating,
                standing.rating
            ),
            OutputFormat::Pipe => format!(
                "{}|{}|{}|{}|{}|{}|{:.2}|{}",
                standing.rank,
                team,
                player,
                record.wins,
                record.losses,
                record.draws,
                standing.conservative_rating,
                standing.rating
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::records::PlayerRecord;
    use crate::rating::model::RatingModel;
    use crate::types::{Competitor, Participant};

    fn fixture() -> (Vec<Standing>, PlayerDirectory) {
        let mut directory = PlayerDirectory::new();
        directory.record_competitor(&Competitor {
            id: 1,
            name: "Seoul Dynasty".to_string(),
        });
        directory.record_participant(&Participant {
            player_id: 5,
            name: "Fleta".to_string(),
            team_id: 1,
        });

        let standings = vec![Standing {
            rank: 1,
            player_id: 5,
            conservative_rating: 123.456,
            rating: RatingModel::new(600.0, 158.848),
            record: PlayerRecord {
                wins: 12,
                losses: 3,
                draws: 1,
            },
        }];
        (standings, directory)
    }

    #[test]
    fn test_plain_table() {
        let (standings, directory) = fixture();
        let table = render(&standings, &directory, OutputFormat::Plain);
        assert_eq!(
            table,
            "  1          Seoul Dynasty       Fleta [12- 3- 1]  123.46 (μ=600.0000, σ=158.8480)\n"
        );
    }

    #[test]
    fn test_pipe_table() {
        let (standings, directory) = fixture();
        let table = render(&standings, &directory, OutputFormat::Pipe);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Rank|Team|Player|Wins|Loses|Draws|Rating|Rating Detail");
        assert_eq!(lines[1], ":--|:--|:--|:-:|:-:|:-:|:-:|:--");
        assert_eq!(
            lines[2],
            "1|Seoul Dynasty|Fleta|12|3|1|123.46|μ=600.0000, σ=158.8480"
        );
    }

    #[test]
    fn test_empty_plain_table() {
        assert_eq!(render(&[], &PlayerDirectory::new(), OutputFormat::Plain), "");
    }
}
