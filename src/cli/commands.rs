//! Command handlers for the `vcc` binary.

use std::io::{self, Write};

use clipboard_rs::{Clipboard as _, ClipboardContext};

use super::{Cli, Command};
use crate::certificate::{CertificateRenderer, TemplateImage};
use crate::client::VehicleClient;
use crate::config::Config;
use crate::errors::AppError;
use crate::form::{SubmitError, VehicleForm};
use crate::session::{SessionClient, SessionStore};
use crate::view::{self, ClipboardSink, ConfirmDelete, VehicleList};

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Interactive confirmation on stdin.
struct StdinConfirm;

impl ConfirmDelete for StdinConfirm {
    fn confirm(&self, label: &str) -> bool {
        print!("Are you sure you want to delete vehicle {}? [y/N] ", label);
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

/// Non-interactive confirmation for `--yes`.
struct AlwaysConfirm;

impl ConfirmDelete for AlwaysConfirm {
    fn confirm(&self, _label: &str) -> bool {
        true
    }
}

/// System clipboard behind the view seam.
struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), AppError> {
        let context = ClipboardContext::new()
            .map_err(|err| AppError::Storage(format!("Clipboard unavailable: {}", err)))?;
        context
            .set_text(text.to_string())
            .map_err(|err| AppError::Storage(format!("Clipboard write failed: {}", err)))
    }
}

/// Execute a parsed command.
pub async fn run(cli: Cli, config: Config) -> CliResult {
    let store = SessionStore::new(&config.state_dir);
    let sessions = SessionClient::new(config.base_url.as_str(), store);

    match cli.command {
        Command::Login { username, password } => {
            let session = sessions.login(&username, &password).await?;
            println!("Logged in as {}", session.user.username);
        }

        Command::Logout => {
            sessions.logout()?;
            println!("Logged out");
        }

        Command::Whoami => match sessions.current_user() {
            Some(user) => println!("{}", user.username),
            None => println!("Not logged in"),
        },

        Command::List => {
            let client = records_client(&config, &sessions);
            let mut list = VehicleList::new();
            list.refresh(&client).await?;
            print!("{}", list.table());
        }

        Command::Show { id } => {
            let client = records_client(&config, &sessions);
            let vehicle = client.get(id).await?;
            print!("{}", view::format_details(&vehicle));
        }

        Command::Create { set } => {
            require_session(&sessions)?;
            let client = records_client(&config, &sessions);
            let mut form = VehicleForm::new();
            apply_sets(&mut form, &set)?;
            submit(&mut form, &client).await?;
        }

        Command::Update { id, set } => {
            require_session(&sessions)?;
            let client = records_client(&config, &sessions);
            let vehicle = client.get(id).await?;
            let mut form = VehicleForm::edit(&vehicle);
            apply_sets(&mut form, &set)?;
            submit(&mut form, &client).await?;
        }

        Command::Delete { id, yes } => {
            require_session(&sessions)?;
            let client = records_client(&config, &sessions);
            let mut list = VehicleList::new();
            list.refresh(&client).await?;

            let dispatched = if yes {
                list.delete(&client, id, &AlwaysConfirm).await?
            } else {
                list.delete(&client, id, &StdinConfirm).await?
            };
            if dispatched {
                println!("Deleted vehicle {}", id);
            } else {
                println!("Delete cancelled");
            }
        }

        Command::Export { id, out } => {
            let client = records_client(&config, &sessions);
            let mut list = VehicleList::new();
            list.refresh(&client).await?;

            let mut renderer = CertificateRenderer::new(config.public_origin.as_str());
            if let Some(path) = &config.template_path {
                renderer = renderer.with_template(TemplateImage::open(path)?);
            }

            let dir = out.unwrap_or_else(|| config.export_dir.clone());
            let path = list.export_certificate(&renderer, id, &dir).await?;
            println!("Wrote {}", path.display());
        }

        Command::Link { id, copy } => {
            let url = view::public_vehicle_url(&config.public_origin, id);
            if copy {
                VehicleList::new().copy_public_link(&SystemClipboard, &config.public_origin, id)?;
                println!("Public URL copied to clipboard");
            }
            println!("{}", url);
        }

        Command::Public { id } => {
            // The public view is read without credentials by design.
            let client = VehicleClient::new(config.base_url.as_str(), None);
            let vehicle = view::fetch_public(&client, id).await?;
            println!("Vehicle Clearance Certificate");
            println!("Public view of vehicle record");
            print!("{}", view::format_details(&vehicle));
        }
    }

    Ok(())
}

fn records_client(config: &Config, sessions: &SessionClient) -> VehicleClient {
    VehicleClient::new(config.base_url.as_str(), sessions.token())
}

fn require_session(sessions: &SessionClient) -> Result<(), Box<dyn std::error::Error>> {
    if sessions.is_authenticated() {
        Ok(())
    } else {
        Err("Not logged in. Run `vcc login` first.".into())
    }
}

/// Apply repeated `name=value` arguments to a form.
fn apply_sets(form: &mut VehicleForm, sets: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for entry in sets {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=VALUE, got: {}", entry))?;
        form.set(name, value)?;
    }
    Ok(())
}

/// Submit a form, printing field-scoped errors on validation failure.
async fn submit(form: &mut VehicleForm, client: &VehicleClient) -> CliResult {
    match form.submit(client).await {
        Ok(vehicle) => {
            println!("Saved vehicle {} ({})", vehicle.id, vehicle.vcc_no);
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
            Err("Validation failed".into())
        }
        Err(err) => Err(err.into()),
    }
}
