//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file naming the X and O participants
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// File to write logs to (the terminal is taken by the UI)
        #[arg(long, env = "REWIND_LOG", default_value = "rewind.log")]
        log_file: PathBuf,
    },

    /// Apply moves headlessly and print the resulting position
    Replay {
        /// Moves as indices 0-8 (row-major from the top-left) or cell labels
        /// such as `center` or `top-left`
        #[arg(value_parser = parse_move)]
        moves: Vec<usize>,

        /// Jump to this move number after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Parses one replay move into its board index.
fn parse_move(s: &str) -> Result<usize, String> {
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{}' is not a cell: use 0-8 or a label like top-left", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("rewind").chain(args.iter().copied()))
    }

    #[test]
    fn test_replay_with_jump_and_json() {
        let cli = parse(&["replay", "--jump", "2", "--json", "0", "4", "1"]).unwrap();
        match cli.command {
            Command::Replay { moves, jump, json } => {
                assert_eq!(moves, vec![0, 4, 1]);
                assert_eq!(jump, Some(2));
                assert!(json);
            }
            other => panic!("expected replay, got {:?}", other),
        }
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_accepts_cell_labels() {
        let cli = parse(&["replay", "center", "Top-Left", "8"]).unwrap();
        match cli.command {
            Command::Replay { moves, jump, json } => {
                assert_eq!(moves, vec![4, 0, 8]);
                assert_eq!(jump, None);
                assert!(!json);
            }
            other => panic!("expected replay, got {:?}", other),
        }
    }

    #[test]
    fn test_replay_rejects_non_cells() {
        assert!(parse(&["replay", "-1"]).is_err());
        assert!(parse(&["replay", "9"]).is_err());
        assert!(parse(&["replay", "nowhere"]).is_err());
        assert!(parse(&["replay", "--jump", "-1", "0"]).is_err());
    }

    #[test]
    fn test_config_is_global() {
        let cli = parse(&["replay", "0", "--config", "players.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("players.toml")));

        let cli = parse(&["-c", "players.toml", "play"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("players.toml")));
    }

    #[test]
    fn test_play_log_file() {
        let cli = parse(&["play", "--log-file", "/tmp/game.log"]).unwrap();
        match cli.command {
            Command::Play { log_file } => assert_eq!(log_file, PathBuf::from("/tmp/game.log")),
            other => panic!("expected play, got {:?}", other),
        }

        let cli = parse(&["play"]).unwrap();
        let Command::Play { log_file } = cli.command else {
            panic!("expected play");
        };
        let expected = std::env::var_os("REWIND_LOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("rewind.log"));
        assert_eq!(log_file, expected);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_parse_move_message() {
        assert_eq!(parse_move("middle-right"), Ok(5));
        assert!(parse_move("10").unwrap_err().contains("'10' is not a cell"));
    }
}
