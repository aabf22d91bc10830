use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use std::io::Write;
use weather_core::{Config, ProviderId, WeatherApp, provider::provider_from_config_with};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current temperature for a city")]
pub struct Cli {
    /// API key; takes precedence over OPENWEATHER_API_KEY and the config file.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Without a subcommand, shows the configured default city.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current temperature for a city.
    Show {
        /// City name; defaults to the configured city, then "London".
        city: Option<String>,
    },

    /// Store an API key and default city in the config file.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => show(None, self.api_key.as_deref()),
            Some(Command::Show { city }) => show(city, self.api_key.as_deref()),
            Some(Command::Configure) => configure(),
            Some(Command::ConfigPath) => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

/// Looks up and prints one city. Lookup failures are printed, never returned.
fn show(city: Option<String>, api_key: Option<&str>) -> anyhow::Result<()> {
    show_to(
        &mut std::io::stdout().lock(),
        Config::load(),
        city,
        api_key,
        |name| std::env::var(name).ok(),
    )
}

pub(crate) fn show_to(
    out: &mut impl Write,
    config: anyhow::Result<Config>,
    city: Option<String>,
    api_key: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    let prepared = config.and_then(|config| {
        let city = city.unwrap_or_else(|| config.city_or_default().to_owned());
        let provider = provider_from_config_with(ProviderId::OpenWeather, &config, api_key, env)?;
        Ok((WeatherApp::new(provider), city))
    });

    let line = match prepared {
        Ok((app, city)) => report(&app, &city),
        Err(err) => error_line(&err),
    };

    writeln!(out, "{line}").context("Failed to write to stdout")?;
    Ok(())
}

pub(crate) fn report(app: &WeatherApp, city: &str) -> String {
    match app.reading(city) {
        Ok(reading) => reading.to_string(),
        Err(err) => error_line(&err),
    }
}

fn error_line(err: &anyhow::Error) -> String {
    tracing::debug!(error = ?err, "temperature lookup failed");
    format!("Error: {err:#}")
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let id = ProviderId::OpenWeather;

    let prompt = if config.is_provider_configured(id) {
        format!("{id} API key (leave empty to keep the current one):")
    } else {
        format!("{id} API key:")
    };

    let api_key = Password::new(&prompt)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    let city = Text::new("Default city:")
        .with_default(config.city_or_default())
        .prompt()
        .context("Failed to read default city")?;

    let api_key = api_key.trim();
    if !api_key.is_empty() {
        config.upsert_provider_api_key(id, api_key.to_string());
    }
    config.set_default_city(Some(city.trim().to_string()));

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use weather_core::{TemperatureProvider, WeatherServiceError};

    #[derive(Debug)]
    struct FixedProvider;

    impl TemperatureProvider for FixedProvider {
        fn get_temperature(&self, city: &str) -> anyhow::Result<i64> {
            match city {
                "" => Err(WeatherServiceError::city_required().into()),
                "London" => Ok(19),
                "Offline" => Err(anyhow::anyhow!("connection refused")
                    .context("Failed to send request to OpenWeather (current weather)")),
                _ => Err(WeatherServiceError::retrieve_failed().into()),
            }
        }
    }

    fn app() -> WeatherApp {
        WeatherApp::new(Box::new(FixedProvider))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["weather"]).expect("parses");
        assert!(cli.command.is_none());
        assert!(cli.api_key.is_none());
    }

    #[test]
    fn show_accepts_city_and_global_key() {
        let cli = Cli::try_parse_from(["weather", "show", "Paris", "--api-key", "K"]).expect("parses");
        assert_eq!(cli.api_key.as_deref(), Some("K"));
        assert!(matches!(cli.command, Some(Command::Show { city: Some(ref c) }) if c == "Paris"));
    }

    #[test]
    fn prints_success_line() {
        assert_eq!(report(&app(), "London"), "Current temperature in London: 19°C");
    }

    #[test]
    fn prints_missing_city_error() {
        assert_eq!(report(&app(), ""), "Error: City is a required parameter.");
    }

    #[test]
    fn prints_retrieve_error() {
        assert_eq!(report(&app(), "Atlantis"), "Error: Failed to retrieve data.");
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn shown(config: anyhow::Result<Config>, city: Option<&str>, api_key: Option<&str>) -> String {
        let mut out = Vec::new();
        show_to(&mut out, config, city.map(str::to_owned), api_key, no_env)
            .expect("lookup failures must not surface as errors");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn missing_api_key_is_printed_not_returned() {
        let out = shown(Ok(Config::default()), None, None);
        assert!(out.starts_with("Error: No API key configured for provider 'openweather'."), "{out}");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn unreadable_config_is_printed_not_returned() {
        let config = Err(anyhow::anyhow!("expected `=`").context("Failed to parse config file: x.toml"));
        let out = shown(config, Some("London"), Some("K"));
        assert_eq!(out, "Error: Failed to parse config file: x.toml: expected `=`\n");
    }

    #[test]
    fn empty_city_with_key_is_printed_not_returned() {
        let out = shown(Ok(Config::default()), Some(""), Some("K"));
        assert_eq!(out, "Error: City is a required parameter.\n");
    }

    #[test]
    fn prints_uncategorized_errors_with_their_chain() {
        assert_eq!(
            report(&app(), "Offline"),
            "Error: Failed to send request to OpenWeather (current weather): connection refused"
        );
    }
}
