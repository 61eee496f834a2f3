//! `hopla hatch`: hatch one egg.

use hopla_hatchery::{Egg, HatchPotion};

use crate::cli::HatchArgs;
use crate::client::HabiticaClient;
use crate::error::CliError;
use crate::output;

/// Validate the egg and potion names locally, then hatch.
pub async fn run(client: &HabiticaClient, args: &HatchArgs) -> Result<(), CliError> {
    let egg = Egg::new(args.egg.as_str(), 1)?;
    let potion = HatchPotion::new(args.potion.as_str(), 1)?;
    if !egg.can_be_hatched_by(&potion) {
        return Err(CliError::Validation(format!(
            "{} eggs cannot be hatched with {} potions",
            args.egg, args.potion
        )));
    }

    let data = client.hatch(&args.egg, &args.potion).await?;
    output::print_json(&data)
}
