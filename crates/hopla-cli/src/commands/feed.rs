//! `hopla feed`: feed one pet.

use hopla_types::catalog;
use hopla_zoo::{Pet, ZooError};

use crate::cli::FeedArgs;
use crate::client::HabiticaClient;
use crate::error::CliError;
use crate::output;

/// Validate the pet and food names locally, then feed.
pub async fn run(client: &HabiticaClient, args: &FeedArgs) -> Result<(), CliError> {
    let pet = Pet::hatched(args.pet.as_str())?;
    if !catalog::is_feeding_food(&args.food) {
        return Err(ZooError::InvalidFood {
            name: args.food.clone(),
        }
        .into());
    }
    if !pet.is_feedable() {
        return Err(CliError::Validation(format!(
            "{} cannot be fed: {}",
            pet.name(),
            pet.feeding_status_explanation()
        )));
    }

    let data = client.feed(pet.name(), &args.food, args.amount).await?;
    output::print_json(&data)
}
