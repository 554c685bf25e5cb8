//! Argument parsing tests.

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn generate_with_target() {
    let cli = Cli::try_parse_from(["palgen", "generate", "--target", "st", "-o", "/tmp/out"])
        .expect("parse");
    match cli.command {
        Command::Generate(args) => {
            assert_eq!(args.target, Some(TargetArg::St));
            assert_eq!(args.out_dir, Some(PathBuf::from("/tmp/out")));
            assert!(!args.watch);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn global_config_after_subcommand() {
    let cli = Cli::try_parse_from(["palgen", "check", "colors-wal-st.h", "--config", "c.toml"])
        .expect("parse");
    assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    match cli.command {
        Command::Check(args) => {
            assert_eq!(args.file, PathBuf::from("colors-wal-st.h"));
            assert!(!args.canonical);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn unknown_target_is_rejected() {
    assert!(Cli::try_parse_from(["palgen", "generate", "--target", "xterm"]).is_err());
}

#[test]
fn target_arg_expands() {
    assert_eq!(TargetArg::Dwm.targets(), vec![Target::WindowManagerScheme]);
    assert_eq!(TargetArg::All.targets(), Target::ALL.to_vec());
}
