use clap::Parser;

use crate::{Cli, Commands};

#[test]
fn no_subcommand_defaults_to_serve() {
    let cli = Cli::try_parse_from(["career_compass"]).unwrap();

    assert_eq!(cli.command.unwrap_or(Commands::Serve), Commands::Serve);
}

#[test]
fn seed_and_migrate_subcommands_parse() {
    let seed = Cli::try_parse_from(["career_compass", "seed"]).unwrap();
    let migrate = Cli::try_parse_from(["career_compass", "migrate"]).unwrap();

    assert_eq!(seed.command, Some(Commands::Seed));
    assert_eq!(migrate.command, Some(Commands::Migrate));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["career_compass", "drop-tables"]).is_err());
}
