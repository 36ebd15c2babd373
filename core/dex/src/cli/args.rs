use crate::domain::command::DEFAULT_IDENTIFIER;
use crate::domain::DexCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::StatKind;
use common::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    /// --json: 整形テキストではなく JSON で出力する
    pub json: bool,
    /// --base-url: API のベース URL（config.json / DEX_BASE_URL より優先）
    pub base_url: Option<String>,
    /// --locale: 説明文の言語タグ（config.json より優先）
    pub locale: Option<String>,
    /// サブコマンド名（lookup / compare / types）
    pub subcommand: Option<String>,
    /// lookup / compare の識別子
    pub identifiers: Vec<String>,
    /// types --stat
    pub stat: Option<StatKind>,
    /// types --limit
    pub limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            json: false,
            base_url: None,
            locale: None,
            subcommand: None,
            identifiers: Vec::new(),
            stat: None,
            limit: None,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn parse_stat(s: &str) -> Result<StatKind, String> {
    s.parse::<StatKind>()
}

pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new("dex")
        .about("Look up Pokémon, compare base stats and summarize types from PokeAPI")
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Also write structured logs to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print JSON instead of formatted text")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("PokeAPI base URL (default: https://pokeapi.co/api/v2)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("locale")
                .long("locale")
                .value_name("lang")
                .help("Language tag used to pick the description (default: es)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(
            clap::Command::new("lookup")
                .disable_help_flag(true)
                .about("Show the Pokédex card of one Pokémon")
                .arg(
                    clap::Arg::new("identifier")
                        .index(1)
                        .value_name("name-or-number")
                        .help("Pokémon name or national number (default: 1)")
                        .num_args(1),
                ),
        )
        .subcommand(
            clap::Command::new("compare")
                .disable_help_flag(true)
                .about("Compare the base stats of two Pokémon")
                .arg(
                    clap::Arg::new("identifiers")
                        .index(1)
                        .value_name("name-or-number")
                        .required(true)
                        .num_args(2),
                ),
        )
        .subcommand(
            clap::Command::new("types")
                .disable_help_flag(true)
                .about("Summarize primary types over the first N Pokémon")
                .arg(
                    clap::Arg::new("stat")
                        .short('s')
                        .long("stat")
                        .value_name("stat")
                        .help("Stat to average per type: hp, attack, defense, special-attack, special-defense, speed")
                        .value_parser(parse_stat)
                        .num_args(1),
                )
                .arg(
                    clap::Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .value_name("count")
                        .help("Number of Pokémon to load (default: config population_limit)")
                        .value_parser(value_parser!(usize))
                        .num_args(1),
                ),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let mut config = Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        json: matches.get_flag("json"),
        base_url: matches.get_one::<String>("base-url").cloned(),
        locale: matches.get_one::<String>("locale").cloned(),
        ..Config::default()
    };

    if let Some((name, sub)) = matches.subcommand() {
        config.subcommand = Some(name.to_string());
        // global 引数はサブコマンド側の matches に伝播する
        config.help |= sub.get_flag("help");
        config.verbose |= sub.get_flag("verbose");
        config.json |= sub.get_flag("json");
        if let Some(u) = sub.get_one::<String>("base-url") {
            config.base_url = Some(u.clone());
        }
        if let Some(l) = sub.get_one::<String>("locale") {
            config.locale = Some(l.clone());
        }
        match name {
            "lookup" => {
                config.identifiers = sub
                    .get_one::<String>("identifier")
                    .map(|s| vec![s.clone()])
                    .unwrap_or_default();
            }
            "compare" => {
                config.identifiers = sub
                    .get_many::<String>("identifiers")
                    .map(|i| i.cloned().collect())
                    .unwrap_or_default();
            }
            "types" => {
                config.stat = sub.get_one::<StatKind>("stat").copied();
                config.limit = sub.get_one::<usize>("limit").copied();
            }
            _ => {}
        }
    }
    config
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "dex", &mut std::io::stdout());
}

/// Config を DexCommand に変換する
pub fn config_to_command(config: &Config) -> Result<DexCommand, Error> {
    if config.help {
        return Ok(DexCommand::Help);
    }

    match config.subcommand.as_deref() {
        None => Ok(DexCommand::Help),
        Some("lookup") => Ok(DexCommand::Lookup {
            identifier: config
                .identifiers
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_IDENTIFIER.to_string()),
        }),
        Some("compare") => match config.identifiers.as_slice() {
            [left, right] => Ok(DexCommand::Compare {
                left: left.clone(),
                right: right.clone(),
            }),
            _ => Err(Error::invalid_argument("compare takes exactly two Pokémon")),
        },
        Some("types") => Ok(DexCommand::Types {
            stat: config.stat.unwrap_or(StatKind::Hp),
            limit: config.limit,
        }),
        Some(other) => Err(Error::invalid_argument(format!("unknown command: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.verbose);
        assert!(!config.json);
        assert!(config.base_url.is_none());
        assert!(config.subcommand.is_none());
        assert!(config.identifiers.is_empty());
    }

    #[test]
    fn test_parse_args_no_args_is_help() {
        let config = parse_args_from(&["dex"]).unwrap();
        assert!(!config.help);
        assert_eq!(config_to_command(&config).unwrap(), DexCommand::Help);
    }

    #[test]
    fn test_parse_args_help_short() {
        let config = parse_args_from(&["dex", "-h"]).unwrap();
        assert!(config.help);
        assert_eq!(config_to_command(&config).unwrap(), DexCommand::Help);
    }

    #[test]
    fn test_parse_args_help_after_subcommand() {
        let config = parse_args_from(&["dex", "lookup", "--help"]).unwrap();
        assert!(config.help);
        assert_eq!(config_to_command(&config).unwrap(), DexCommand::Help);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args_from(&["dex", "--unknown"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());
    }

    #[test]
    fn test_parse_lookup_default_identifier() {
        let config = parse_args_from(&["dex", "lookup"]).unwrap();
        assert_eq!(
            config_to_command(&config).unwrap(),
            DexCommand::Lookup {
                identifier: "1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_lookup_with_identifier() {
        let config = parse_args_from(&["dex", "lookup", "Pikachu"]).unwrap();
        assert_eq!(config.identifiers, vec!["Pikachu".to_string()]);
        assert_eq!(
            config_to_command(&config).unwrap(),
            DexCommand::Lookup {
                identifier: "Pikachu".to_string()
            }
        );
    }

    #[test]
    fn test_parse_compare() {
        let config = parse_args_from(&["dex", "compare", "bulbasaur", "squirtle"]).unwrap();
        assert_eq!(
            config_to_command(&config).unwrap(),
            DexCommand::Compare {
                left: "bulbasaur".to_string(),
                right: "squirtle".to_string()
            }
        );
    }

    #[test]
    fn test_parse_compare_needs_two() {
        let err = parse_args_from(&["dex", "compare", "bulbasaur"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_config_to_command_compare_wrong_arity() {
        let config = Config {
            subcommand: Some("compare".to_string()),
            identifiers: vec!["a".to_string()],
            ..Config::default()
        };
        assert!(config_to_command(&config).unwrap_err().is_usage());
    }

    #[test]
    fn test_parse_types_defaults() {
        let config = parse_args_from(&["dex", "types"]).unwrap();
        assert_eq!(
            config_to_command(&config).unwrap(),
            DexCommand::Types {
                stat: StatKind::Hp,
                limit: None
            }
        );
    }

    #[test]
    fn test_parse_types_with_stat_and_limit() {
        let config =
            parse_args_from(&["dex", "types", "--stat", "special-attack", "-n", "20"]).unwrap();
        assert_eq!(
            config_to_command(&config).unwrap(),
            DexCommand::Types {
                stat: StatKind::SpecialAttack,
                limit: Some(20)
            }
        );
    }

    #[test]
    fn test_parse_types_bad_stat() {
        let err = parse_args_from(&["dex", "types", "--stat", "luck"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_global_options_before_and_after_subcommand() {
        let config = parse_args_from(&[
            "dex",
            "-v",
            "--base-url",
            "http://localhost:8000/api/v2",
            "lookup",
            "25",
            "--json",
            "--locale",
            "en",
        ])
        .unwrap();
        assert!(config.verbose);
        assert!(config.json);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000/api/v2"));
        assert_eq!(config.locale.as_deref(), Some("en"));
        assert_eq!(config.identifiers, vec!["25".to_string()]);
    }
}
