mod cli;
mod domain;
mod ports;
mod presenter;
mod usecase;
mod wiring;


use std::io::Write;
use std::process;

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::DexCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_dex, App, Overrides};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
    /// true なら整形テキストではなく JSON を出す
    json: bool,
}

impl Runner {
    fn write_json<T: serde::Serialize>(out: &mut dyn Write, value: &T) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(value)?;
        writeln!(out, "{}", text)?;
        Ok(())
    }

    fn dispatch(&self, cmd: DexCommand, out: &mut dyn Write) -> Result<i32, Error> {
        match cmd {
            DexCommand::Help => {
                write_help(out)?;
                Ok(0)
            }
            DexCommand::Lookup { identifier } => {
                let pokemon = self.app.use_case.lookup(&identifier)?;
                if self.json {
                    Self::write_json(out, &pokemon)?;
                } else {
                    write!(out, "{}", presenter::render_card(&pokemon))?;
                }
                Ok(0)
            }
            DexCommand::Compare { left, right } => {
                let comparison = self.app.use_case.compare(&left, &right)?;
                if self.json {
                    Self::write_json(out, &comparison)?;
                } else {
                    write!(out, "{}", presenter::render_comparison(&comparison))?;
                }
                Ok(0)
            }
            DexCommand::Types { stat, limit } => {
                let analysis = self.app.use_case.type_analysis(stat, limit);
                if self.json {
                    Self::write_json(out, &analysis)?;
                } else {
                    write!(out, "{}", presenter::render_type_analysis(&analysis))?;
                }
                Ok(0)
            }
        }
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, cmd: DexCommand, out: &mut dyn Write) -> Result<i32, Error> {
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("base_url", self.app.config.base_url.as_str()),
        );

        let result = self.dispatch(cmd, out);

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("dex: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let cmd = config_to_command(&config)?;
    let overrides = Overrides {
        base_url: config.base_url.clone(),
        locale: config.locale.clone(),
        verbose: config.verbose,
    };
    let app = wire_dex(&overrides)?;
    let runner = Runner {
        app,
        json: config.json,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(cmd, &mut out)
}

fn print_usage() {
    eprintln!("Usage: dex [options] <lookup|compare|types> [args...]");
}

fn write_help(out: &mut dyn Write) -> Result<(), Error> {
    let help = "\
Usage: dex [options] <command> [args...]
Commands:
  lookup [name-or-number]       Show the Pokédex card of one Pokémon (default: 1)
  compare <left> <right>        Compare the base stats of two Pokémon
  types [-s stat] [-n count]    Summarize primary types over the first N Pokémon
Options:
  -h, --help                    Show this help message
  -v, --verbose                 Also write structured logs to stderr
      --json                    Print JSON instead of formatted text
      --base-url <url>          PokeAPI base URL (env: DEX_BASE_URL)
      --locale <lang>           Language tag used to pick the description (default: es)
      --generate <shell>        Generate shell completion script
Files:
  $DEX_HOME/config/config.json  (or $XDG_CONFIG_HOME/dex, ~/.config/dex)
  $DEX_HOME/state/logs/dex.jsonl
";
    write!(out, "{}", help)?;
    Ok(())
}
