use clap::Parser;
use docscope_cli::{Cli, Commands, OutputFormat};
use std::io::Write;

#[test]
fn given_check_flags_when_parsed_then_they_override_config_file() {
    let mut config = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        config,
        r#"{{ "missing-check-level": "private", "missing-check-ignore": ["Module::Variable"] }}"#
    )
    .expect("write config");
    let config_path = config.path().to_string_lossy().to_string();

    let cli = Cli::try_parse_from([
        "docscope",
        "check",
        "tree.json",
        "--config",
        config_path.as_str(),
        "--level",
        "protected",
        "--ignore",
        "Module::Enumeration",
        "--verbose",
        "--format",
        "json",
    ])
    .expect("parse args");

    let Commands::Check {
        tree,
        options,
        format,
        log_dir,
    } = cli.command
    else {
        panic!("expected check command");
    };
    assert_eq!(tree.to_string_lossy(), "tree.json");
    assert_eq!(format, OutputFormat::Json);
    assert!(log_dir.is_none());

    let resolved = options.resolve().expect("resolve options");
    assert_eq!(resolved.level, "protected");
    assert!(resolved.verbose);
    assert!(!resolved.disabled);
    assert_eq!(
        resolved.ignore,
        vec!["Module::Variable".to_string(), "Module::Enumeration".to_string()]
    );
}

#[test]
fn given_unknown_level_flag_when_parsed_then_rejected() {
    let res = Cli::try_parse_from(["docscope", "check", "tree.json", "--level", "internal"]);
    assert!(res.is_err());
}

#[test]
fn given_no_config_when_resolved_then_defaults_apply() {
    let cli = Cli::try_parse_from(["docscope", "exclusions"]).expect("parse args");
    let Commands::Exclusions { options, schema } = cli.command else {
        panic!("expected exclusions command");
    };
    assert!(!schema);

    let resolved = options.resolve().expect("resolve options");
    assert_eq!(resolved, docscope_core::MissingCheckOptions::default());
}
