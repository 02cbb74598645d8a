use std::io::IsTerminal;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, Select};
use tenki_core::{
    Config, FormInput, Prefecture, RequestState, WeatherSession, handle_submission,
    provider_from_config,
};

use crate::output::{TempUnit, render_error, render_report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tenki", version, about = "Current weather for Japanese prefectures")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key in the config file.
    Configure,

    /// Show current weather for a prefecture.
    Show {
        /// Prefecture in Japanese ("東京都"), romaji ("tokyo") or JIS code ("13"); any other
        /// text is sent to the provider as a city name. Prompts when absent.
        prefecture: Option<String>,

        /// Print the raw outcome as JSON.
        #[arg(long)]
        json: bool,

        /// Show temperatures in Fahrenheit.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// List all prefectures and the city queried for each.
    List,

    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location.
    Path,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { prefecture, json, fahrenheit } => {
                let prefecture = match prefecture {
                    Some(input) => normalize_prefecture(&input),
                    None => prompt_prefecture()?,
                };
                let unit = if fahrenheit { TempUnit::Fahrenheit } else { TempUnit::Celsius };

                show(prefecture, json, unit).await
            }
            Command::List => {
                for p in Prefecture::ALL {
                    println!("{:02}  {:<10} {:<11} {}", p.code(), p.romaji(), p.city(), p.name());
                }
                Ok(())
            }
            Command::Config { action: ConfigCommand::Path } => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

/// Known prefectures are submitted by their Japanese name; anything else verbatim.
fn normalize_prefecture(input: &str) -> String {
    input.parse::<Prefecture>().map(|p| p.name().to_string()).unwrap_or_else(|_| input.to_string())
}

fn prompt_prefecture() -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        bail!("No prefecture given.\nHint: run `tenki show <prefecture>` (e.g. `tenki show 東京都`).");
    }

    let choice = Select::new("都道府県を選択してください", Prefecture::ALL.to_vec())
        .with_page_size(12)
        .prompt()
        .context("Prefecture selection aborted")?;

    Ok(choice.name().to_string())
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("API key prompt aborted")?;

    let key = key.trim();
    if key.is_empty() {
        bail!("API key must not be empty.");
    }

    cfg.set_api_key(key.to_string());
    cfg.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(prefecture: String, json: bool, unit: TempUnit) -> anyhow::Result<()> {
    let cfg = Config::resolve()?;
    let provider = provider_from_config(&cfg);

    if json {
        let outcome = handle_submission(&FormInput::new(prefecture), &provider).await;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let interactive = std::io::stdin().is_terminal();
    let mut session = WeatherSession::new(provider);
    session.select(prefecture);

    eprintln!("取得中...");
    let mut state = session.submit().await.clone();

    loop {
        match state {
            RequestState::Ready { prefecture, report } => {
                print!("{}", render_report(&prefecture, &report, unit));
                return Ok(());
            }
            RequestState::Failed { message, retryable } => {
                eprint!("{}", render_error(&message));

                let retry = retryable
                    && interactive
                    && Confirm::new("再試行しますか?").with_default(true).prompt().unwrap_or(false);
                if !retry {
                    return Ok(());
                }

                eprintln!("取得中...");
                state = match session.retry().await {
                    Some(next) => next.clone(),
                    None => return Ok(()),
                };
            }
            RequestState::Idle => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_known_prefectures() {
        assert_eq!(normalize_prefecture("tokyo"), "東京都");
        assert_eq!(normalize_prefecture("大阪府"), "大阪府");
        assert_eq!(normalize_prefecture("13"), "東京都");
        assert_eq!(normalize_prefecture("Hakodate"), "Hakodate");
        assert_eq!(normalize_prefecture("99"), "99");
    }

    #[test]
    fn parses_show_arguments() {
        let cli = Cli::try_parse_from(["tenki", "show", "kyoto", "--json"]).unwrap();
        match cli.command {
            Command::Show { prefecture, json, fahrenheit } => {
                assert_eq!(prefecture.as_deref(), Some("kyoto"));
                assert!(json);
                assert!(!fahrenheit);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["tenki", "list", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
