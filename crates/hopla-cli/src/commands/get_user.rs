//! `hopla get-user`: read-only views of the user object.

use hopla_types::HabiticaUser;
use serde_json::{Map, Value};

use crate::cli::{GetUserCommand, InfoName};
use crate::client::HabiticaClient;
use crate::error::CliError;
use crate::output;

/// Fetch the user and print the requested view.
pub async fn run(client: &HabiticaClient, command: &GetUserCommand) -> Result<(), CliError> {
    let user = client.get_user().await?;
    output::print_json(&select(&user, command)?)
}

/// The part of `user` that `command` asks for.
fn select(user: &HabiticaUser, command: &GetUserCommand) -> Result<Value, CliError> {
    let value = match command {
        GetUserCommand::Inventory { group: None } => Value::Object(user.items().clone()),
        GetUserCommand::Inventory { group: Some(group) } => field(user.items(), group.api_key()),
        GetUserCommand::Stats { stat: None } => Value::Object(user.stats().clone()),
        GetUserCommand::Stats { stat: Some(stat) } => field(user.stats(), stat.api_key()),
        GetUserCommand::Auth { field: None } => Value::Object(user.auth().clone()),
        GetUserCommand::Auth { field: Some(f) } => user
            .filter_user(f.path())
            .remove(f.path())
            .unwrap_or(Value::Null),
        GetUserCommand::Info {
            name: Some(InfoName::Gems),
            ..
        } => {
            let gems = user.gems().ok_or_else(|| {
                CliError::Api("user has no readable balance to compute gems from".to_owned())
            })?;
            serde_json::to_value(gems)?
        }
        GetUserCommand::Info {
            filter: Some(filter),
            name: None,
        } => Value::Object(user.filter_user(filter)),
        GetUserCommand::Info {
            filter: None,
            name: None,
        } => user.as_value().clone(),
    };
    Ok(value)
}

fn field(section: &Map<String, Value>, key: &str) -> Value {
    section.get(key).cloned().unwrap_or(Value::Null)
}
