#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use dialoguer::Select;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AttemptId;
use crate::domain::models::QuizAttempt;
use crate::domain::services::actions::help_text;
use crate::domain::services::HistoryList;
use crate::infrastructure::services::QuizServiceManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

/// Directory the debug log is written to when `RUST_LOG` enables it.
pub fn debug_log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("WIKIQUIZ_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("wikiquiz");
}

fn format_history(history: &[QuizAttempt]) -> Vec<String> {
    return HistoryList::new(history)
        .entries()
        .iter()
        .zip(history)
        .map(|(entry, attempt)| {
            let id = attempt
                .id
                .map(|id| return id.to_string())
                .unwrap_or_else(|| return "-".to_string());

            return format!("- (ID: {id}) {entry}");
        })
        .collect();
}

async fn print_history_list() -> Result<()> {
    let history = QuizServiceManager::get()?.list_quizzes().await?;

    if history.is_empty() {
        println!("No quizzes generated yet. Start one with `wikiquiz quiz`!");
    } else {
        println!("{}", format_history(&history).join("\n"));
    }

    return Ok(());
}

async fn open_history_interactive() -> Result<bool> {
    let history = QuizServiceManager::get()?
        .list_quizzes()
        .await?
        .into_iter()
        .filter(|attempt| return attempt.id.is_some())
        .collect::<Vec<QuizAttempt>>();

    if history.is_empty() {
        println!("No quizzes generated yet. Start one with `wikiquiz quiz`!");
        return Ok(false);
    }

    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which quiz would you like to open?")
        .default(0)
        .items(&format_history(&history))
        .interact_opt()?;

    if let Some(id) = idx.and_then(|idx| return history[idx].id) {
        Config::set(ConfigKey::AttemptID, &id.to_string());
        return Ok(true);
    }

    return Ok(false);
}

async fn delete_history_entry(id: AttemptId, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Are you sure you want to delete quiz {id}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    QuizServiceManager::get()?.delete_quiz(id).await?;
    println!("Deleted quiz {id}");

    return Ok(());
}

async fn print_health() -> Result<()> {
    let url = Config::get(ConfigKey::ServiceURL);
    QuizServiceManager::get()?.health_check().await?;
    println!("Quiz service at {url} is reachable");

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for wikiquiz")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running wikiquiz with environment variable RUST_LOG=wikiquiz")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_quiz() -> Command {
    return Command::new("quiz")
        .about("Start a new quiz session.")
        .arg(
            Arg::new(ConfigKey::Input.to_string())
                .short('i')
                .long("input")
                .num_args(1)
                .help("Topic or Wikipedia URL to generate a quiz from straight away."),
        );
}

fn subcommand_history_delete() -> Command {
    return Command::new("delete")
        .about("Delete a saved quiz.")
        .arg(
            clap::Arg::new(ConfigKey::AttemptID.to_string())
                .short('i')
                .long("id")
                .help("Quiz ID")
                .num_args(1)
                .value_parser(value_parser!(AttemptId))
                .required(true),
        )
        .arg(
            clap::Arg::new("yes")
                .short('y')
                .long("yes")
                .help("Skip the confirmation prompt.")
                .action(ArgAction::SetTrue),
        );
}

fn subcommand_history() -> Command {
    return Command::new("history")
        .about("Manage saved quizzes.")
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List all saved quizzes with their ids and scores."))
        .subcommand(
            Command::new("open")
                .about("Open a saved quiz by ID. Omit passing any ID to load an interactive selection.")
                .arg(
                    clap::Arg::new(ConfigKey::AttemptID.to_string())
                        .short('i')
                        .long("id")
                        .help("Quiz ID")
                        .required(false),
                ),
        )
        .subcommand(subcommand_history_delete());
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.ends_with(':') {
                return Paint::new(format!("TUI {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("wikiquiz")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_quiz())
        .subcommand(subcommand_history())
        .subcommand(Command::new("health").about("Checks whether the quiz service is reachable."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("WIKIQUIZ_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::HealthCheckTimeout.to_string())
                .long(ConfigKey::HealthCheckTimeout.to_string())
                .env("WIKIQUIZ_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds before timing out when probing the quiz service. [default: {}]", Config::default(ConfigKey::HealthCheckTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ServiceURL.to_string())
                .long(ConfigKey::ServiceURL.to_string())
                .env("WIKIQUIZ_SERVICE_URL")
                .num_args(1)
                .help(format!("Base URL of the quiz service. [default: {}]", Config::default(ConfigKey::ServiceURL)))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = debug_log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("quiz", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
        }
        Some(("history", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("list", _)) => {
                Config::load(vec![&matches]).await?;
                print_history_list().await?;
                return Ok(false);
            }
            Some(("open", open_matches)) => {
                Config::load(vec![&matches, open_matches]).await?;
                if Config::get(ConfigKey::AttemptID).is_empty() {
                    return open_history_interactive().await;
                }
            }
            Some(("delete", delete_matches)) => {
                Config::load(vec![&matches]).await?;
                if let Some(id) =
                    delete_matches.get_one::<AttemptId>(&ConfigKey::AttemptID.to_string())
                {
                    delete_history_entry(*id, delete_matches.get_flag("yes")).await?;
                } else {
                    subcommand_history_delete().print_long_help()?;
                }
                return Ok(false);
            }
            _ => {
                subcommand_history().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("health", _)) => {
            Config::load(vec![&matches]).await?;
            print_health().await?;
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
