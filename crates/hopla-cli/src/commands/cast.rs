//! `hopla cast`: cast a target-less class spell.

use hopla_types::Spell;
use tracing::debug;

use crate::client::HabiticaClient;
use crate::error::CliError;
use crate::output;

/// Check the user's mana, then cast.
pub async fn run(client: &HabiticaClient, spell_name: &str) -> Result<(), CliError> {
    let spell =
        Spell::from_name(spell_name).ok_or_else(|| CliError::UnknownSpell(spell_name.to_owned()))?;

    let user = client.get_user().await?;
    let available = user.mana().unwrap_or(0.0);
    let required = spell.mana_required();
    debug!(spell = spell.name(), required, available, "Checking mana");
    if available < f64::from(required) {
        return Err(CliError::InsufficientMana {
            spell: spell.name().to_owned(),
            required,
            available,
        });
    }

    let data = client.cast(spell.name()).await?;
    output::print_json(&data)
}
