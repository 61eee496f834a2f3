//! `hopla hatch-all`: hatch every egg and potion pair that yields a new pet.

use hopla_hatchery::HatchPlanMaker;
use tracing::info;

use crate::client::HabiticaClient;
use crate::error::CliError;
use crate::output;

/// Build a hatch plan from the current user, show it, and execute it.
pub async fn run(client: &HabiticaClient, yes: bool) -> Result<(), CliError> {
    let user = client.get_user().await?;
    let plan = HatchPlanMaker::from_user(&user)?.make_plan()?;
    if plan.is_empty() {
        return output::explain(
            "Your eggs and hatching potions do not combine into any pet you are missing.",
        );
    }

    output::explain(plan.format_plan().trim_end())?;
    if !yes && !output::confirm("Hatch these pets?")? {
        return output::explain("Nothing was hatched.");
    }

    for item in &plan {
        let data = client.hatch(&item.egg_name, &item.potion_name).await?;
        info!(pet = %item.pet_name(), "Pet hatched");
        output::print_json(&data)?;
    }
    Ok(())
}
