//! `hopla feed-all`: plan and feed every pet the stockpile can turn into a mount.

use hopla_zoo::{FoodStockpileBuilder, ZooBuilder, ZooFeedingAlgorithm};
use tracing::info;

use crate::client::HabiticaClient;
use crate::error::CliError;
use crate::output;

/// Build a feed plan from the current user, show it, and execute it.
pub async fn run(client: &HabiticaClient, yes: bool) -> Result<(), CliError> {
    let user = client.get_user().await?;
    let zoo = ZooBuilder::new(&user).build()?;
    let stockpile = FoodStockpileBuilder::new().user(&user).build()?;

    let feedable = zoo.get_feedable_zoo();
    if feedable.is_empty() {
        return output::explain("You have no pets that can be fed into mounts.");
    }

    let outcome = ZooFeedingAlgorithm::new(&feedable, stockpile).make_plan()?;
    let plan = outcome.plan;
    if plan.is_empty() {
        return output::explain(
            "Not enough food to turn any of your pets into a mount. Collect more and try again.",
        );
    }

    output::explain(plan.format_plan().trim_end())?;
    if !yes && !output::confirm("Feed these pets?")? {
        return output::explain("Nothing was fed.");
    }

    for item in &plan {
        let data = client.feed(&item.pet_name, &item.food_name, item.times).await?;
        info!(pet = %item.pet_name, food = %item.food_name, times = item.times, "Pet fed");
        output::print_json(&data)?;
    }
    Ok(())
}
