use clap::Parser;
use rig_config::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(["rig-config", "check"]).unwrap();

    assert_eq!(cli.command, Commands::Check);
    assert!(!cli.json);
    assert!(cli.base_dir.is_none());
    assert!(cli.log_level.is_none());
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "rig-config",
        "show",
        "--json",
        "--base-dir",
        "/etc/cell/config",
        "--log-level",
        "warn",
    ])
    .unwrap();

    assert_eq!(cli.command, Commands::Show);
    assert!(cli.json);
    assert_eq!(cli.base_dir, Some(PathBuf::from("/etc/cell/config")));
    assert_eq!(cli.log_level.as_deref(), Some("warn"));
}

#[test]
fn test_parse_short_flags() {
    let cli = Cli::try_parse_from(["rig-config", "-j", "-b", "bundle", "paths"]).unwrap();

    assert_eq!(cli.command, Commands::Paths);
    assert!(cli.json);
    assert_eq!(cli.base_dir, Some(PathBuf::from("bundle")));
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["rig-config"]).is_err());
}

#[test]
fn test_parse_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["rig-config", "deploy"]).is_err());
}
