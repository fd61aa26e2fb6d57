use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use crate::form::{ScheduleInput, DEFAULT_INPUT_FILE};
use crate::parser::parse_player_list;

/// Golf group scheduler: balances who plays which tee time
#[derive(Parser)]
#[command(name = "golf-groups", version)]
pub struct Cli {
    /// File the last-used input is saved to and restored from
    #[arg(long, global = true, env = "GOLF_INPUT_FILE", default_value = DEFAULT_INPUT_FILE)]
    pub input_file: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate groups from the saved input, overridden by any flags given
    Schedule(ScheduleArgs),

    /// Print the saved input
    ShowInput,

    /// Serve the scheduler form over HTTP
    Web {
        #[arg(short, long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}

#[derive(Args, Debug, Default)]
pub struct ScheduleArgs {
    /// Comma-separated player names, e.g. "Kim,Lee,Park,Choi"
    #[arg(long)]
    pub players: Option<String>,

    /// Tee times as month/day/hour[/player], separated by commas or spaces
    #[arg(long)]
    pub dates: Option<String>,

    /// Players per group
    #[arg(short, long)]
    pub group_size: Option<String>,

    /// Write the text report to this file
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Write the groups as CSV to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Save the resulting input for next time
    #[arg(long)]
    pub save_input: bool,
}

impl ScheduleArgs {
    /// Overlays the flags that were given on top of a saved form
    pub fn apply(&self, mut input: ScheduleInput) -> ScheduleInput {
        if let Some(players) = &self.players {
            input.player_names = parse_player_list(players);
            input.num_players = input.player_names.len().to_string();
        }
        if let Some(dates) = &self.dates {
            input.dates_text = dates.clone();
        }
        if let Some(group_size) = &self.group_size {
            input.group_size = group_size.clone();
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_schedule_command() {
        let cli = Cli::try_parse_from([
            "golf-groups",
            "schedule",
            "--players",
            "Kim,Lee,Park",
            "--dates",
            "8/12/4 8/13/4/Kim",
            "-g",
            "2",
            "--csv",
            "out.csv",
        ])
        .unwrap();

        assert_eq!(cli.input_file, PathBuf::from(DEFAULT_INPUT_FILE));
        match cli.command {
            Command::Schedule(args) => {
                assert_eq!(args.players.as_deref(), Some("Kim,Lee,Park"));
                assert_eq!(args.group_size.as_deref(), Some("2"));
                assert_eq!(args.csv, Some(PathBuf::from("out.csv")));
                assert!(args.out.is_none());
                assert!(!args.save_input);
            }
            _ => panic!("expected schedule command"),
        }
    }

    #[test]
    fn test_parse_web_command() {
        let cli = Cli::try_parse_from(["golf-groups", "web", "--port", "9000", "--input-file", "x.json"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("x.json"));
        assert!(matches!(cli.command, Command::Web { port: 9000 }));
    }

    #[test]
    fn test_apply_overrides_only_given_fields() {
        let saved = ScheduleInput {
            num_players: "2".to_string(),
            player_names: vec!["A".to_string(), "B".to_string()],
            dates_text: "8/12/4".to_string(),
            group_size: "1".to_string(),
        };

        let args = ScheduleArgs {
            players: Some("Kim, Lee, Park".to_string()),
            ..Default::default()
        };
        let input = args.apply(saved.clone());
        assert_eq!(input.num_players, "3");
        assert_eq!(input.player_names, vec!["Kim", "Lee", "Park"]);
        assert_eq!(input.dates_text, "8/12/4");
        assert_eq!(input.group_size, "1");

        assert_eq!(ScheduleArgs::default().apply(saved.clone()), saved);
    }
}
