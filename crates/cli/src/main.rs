use std::io::Read;
use std::process::ExitCode;

use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use benevosons_core::search::{build_search_criteria, search_warnings, SearchFilters};
use benevosons_core::types::{Address, Role, StoredAddress};
use benevosons_core::validation::{
    validate_address, validate_mission_dates, validate_registration, RegistrationFields,
    ValidationResult,
};
use benevosons_geo::cities::cities_for_postal_code;
use benevosons_geo::{verify_address_exists, AddressVerification, GeoApi, GeoConfig};

const USAGE: &str = "usage: benevosons <command> [input.json]

commands:
  validate-registration   {\"role\": \"VOLUNTEER\", \"fields\": {...}}
  validate-address        {\"streetNumber\": ..., \"postalCode\": ...}
  validate-mission-dates  {\"startDate\": ..., \"endDate\": ..., \"allowPastDates\": false}
  build-search            {\"filters\": {...}, \"addressBook\": [...]}
  verify-address          {\"streetNumber\": ..., \"postalCode\": ...}
  cities                  {\"postalCode\": \"69002\"}

Input is read from the file, or stdin when omitted.";

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RegistrationRequest {
    role: Role,
    fields: RegistrationFields,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MissionDatesRequest {
    start_date: Option<String>,
    end_date: Option<String>,
    #[serde(default)]
    allow_past_dates: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest {
    filters: SearchFilters,
    #[serde(default)]
    address_book: Vec<StoredAddress>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CitiesRequest {
    postal_code: String,
}

/// JSON to print and whether it represents an accepted input.
struct Outcome {
    accepted: bool,
    body: serde_json::Value,
}

impl Outcome {
    fn from_validation(result: ValidationResult) -> Self {
        Self {
            accepted: result.is_valid(),
            body: json!({ "valid": result.is_valid(), "errors": result }),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "benevosons_cli=info,benevosons_geo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args).await {
        Ok(outcome) => {
            println!("{:#}", outcome.body);
            if outcome.accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Command failed");
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
    }
}

async fn run(args: &[String]) -> anyhow::Result<Outcome> {
    let Some(command) = args.first() else {
        bail!("missing command");
    };
    let input = read_input(args.get(1).map(String::as_str))?;

    tracing::info!(command = %command, "Running command");

    match command.as_str() {
        "validate-registration" => {
            let request: RegistrationRequest = parse(&input)?;
            Ok(Outcome::from_validation(validate_registration(
                &request.fields,
                request.role,
            )))
        }
        "validate-address" => {
            let address: Address = parse(&input)?;
            Ok(Outcome::from_validation(validate_address(&address)))
        }
        "validate-mission-dates" => {
            let request: MissionDatesRequest = parse(&input)?;
            Ok(Outcome::from_validation(validate_mission_dates(
                request.start_date.as_deref(),
                request.end_date.as_deref(),
                request.allow_past_dates,
            )))
        }
        "build-search" => {
            let request: SearchRequest = parse(&input)?;
            let warnings = search_warnings(&request.filters);
            Ok(match build_search_criteria(&request.filters, &request.address_book) {
                Ok(criteria) => Outcome {
                    accepted: true,
                    body: json!({ "criteria": criteria, "warnings": warnings }),
                },
                Err(errors) => Outcome::from_validation(errors),
            })
        }
        "verify-address" => {
            let address: Address = parse(&input)?;
            let config = GeoConfig::from_env()?;
            let api = GeoApi::new(&config)?;
            let verification = verify_address_exists(&api, &address, config.timeout).await;
            Ok(Outcome {
                accepted: verification == AddressVerification::Confirmed,
                body: json!({
                    "exists": verification.exists(),
                    "message": verification.message(),
                    "verification": verification,
                }),
            })
        }
        "cities" => {
            let request: CitiesRequest = parse(&input)?;
            let config = GeoConfig::from_env()?;
            let api = GeoApi::new(&config)?;
            let cities =
                cities_for_postal_code(&api, &request.postal_code, config.city_lookup_limit)
                    .await?;
            Ok(Outcome {
                accepted: !cities.is_empty(),
                body: json!({ "cities": cities }),
            })
        }
        other => bail!("unknown command '{other}'"),
    }
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn parse<T: DeserializeOwned>(input: &str) -> anyhow::Result<T> {
    serde_json::from_str(input).context("parsing input JSON")
}
