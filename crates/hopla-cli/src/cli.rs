//! Command-line surface.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// hopla: a command line interface for Habitica.
#[derive(Parser, Debug)]
#[command(name = "hopla", version, about)]
pub struct Cli {
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store your Habitica credentials.
    Auth(AuthArgs),

    /// Show information about your user.
    #[command(subcommand)]
    GetUser(GetUserCommand),

    /// Feed a pet.
    Feed(FeedArgs),

    /// Feed all your pets, generation 1 first, then quest pets, then magic potion pets.
    ///
    /// Shows the plan and asks for confirmation before feeding anything.
    FeedAll(ConfirmArgs),

    /// Hatch an egg with a hatching potion.
    Hatch(HatchArgs),

    /// Hatch every egg and potion combination that yields a new pet.
    ///
    /// Shows the plan and asks for confirmation before hatching anything.
    HatchAll(ConfirmArgs),

    /// Cast a class spell that needs no target.
    Cast(CastArgs),
}

/// Arguments for `hopla auth`.
#[derive(Args, Debug)]
pub struct AuthArgs {
    /// Your user id (Settings > Site Data).
    #[arg(long)]
    pub user_id: String,

    /// Your API token (Settings > Site Data).
    #[arg(long)]
    pub api_token: String,

    /// Overwrite an existing auth file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `hopla feed`.
#[derive(Args, Debug)]
pub struct FeedArgs {
    /// The pet to feed, e.g. `Wolf-Base`.
    pub pet: String,

    /// The food to give, e.g. `Meat`.
    pub food: String,

    /// How many units of food to give.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub amount: u32,
}

/// Arguments for `hopla hatch`.
#[derive(Args, Debug)]
pub struct HatchArgs {
    /// The egg to hatch, e.g. `Wolf`.
    pub egg: String,

    /// The hatching potion to use, e.g. `Base`.
    pub potion: String,
}

/// Arguments for `hopla cast`.
#[derive(Args, Debug)]
pub struct CastArgs {
    /// The spell to cast, e.g. `earth` or `toolsOfTrade`.
    pub spell: String,
}

/// Arguments shared by commands that ask before acting.
#[derive(Args, Debug)]
pub struct ConfirmArgs {
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// get-user
// ---------------------------------------------------------------------------

/// `hopla get-user` subcommands.
#[derive(Subcommand, Debug)]
pub enum GetUserCommand {
    /// Show your inventory, or one item group of it.
    Inventory {
        /// The item group to show. Everything if omitted.
        group: Option<InventoryGroup>,
    },

    /// Show your stats, or one stat.
    Stats {
        /// The stat to show. Everything if omitted.
        stat: Option<StatName>,
    },

    /// Show your login details, or one of them.
    Auth {
        /// The field to show. Everything if omitted.
        field: Option<AuthField>,
    },

    /// Show your whole user, a filtered view, or a derived value.
    Info {
        /// Comma-separated dotted paths, e.g. `stats.hp,items.currentPet`.
        #[arg(short, long)]
        filter: Option<String>,

        /// A derived value to show instead.
        name: Option<InfoName>,
    },
}

/// Item groups under `items`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryGroup {
    /// `items.pets`.
    Pets,
    /// `items.mounts`.
    Mounts,
    /// `items.food`.
    Food,
    /// `items.gear`.
    #[value(alias = "equipment")]
    Gear,
    /// `items.quests`.
    #[value(alias = "scrolls")]
    Quests,
    /// `items.hatchingPotions`.
    #[value(name = "hatchingPotions", alias = "hatchingpotions", alias = "potions")]
    HatchingPotions,
    /// `items.eggs`.
    Eggs,
    /// `items.lastDrop`.
    #[value(name = "lastDrop", alias = "lastdrop")]
    LastDrop,
    /// `items.currentMount`.
    #[value(name = "currentMount", alias = "currentmount")]
    CurrentMount,
    /// `items.currentPet`.
    #[value(name = "currentPet", alias = "currentpet")]
    CurrentPet,
}

impl InventoryGroup {
    /// The key under `items`.
    pub const fn api_key(self) -> &'static str {
        match self {
            Self::Pets => "pets",
            Self::Mounts => "mounts",
            Self::Food => "food",
            Self::Gear => "gear",
            Self::Quests => "quests",
            Self::HatchingPotions => "hatchingPotions",
            Self::Eggs => "eggs",
            Self::LastDrop => "lastDrop",
            Self::CurrentMount => "currentMount",
            Self::CurrentPet => "currentPet",
        }
    }
}

/// Stats under `stats`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatName {
    /// Health.
    #[value(alias = "health")]
    Hp,
    /// Mana.
    #[value(alias = "mana")]
    Mp,
    /// Experience.
    #[value(alias = "xp", alias = "experience")]
    Exp,
    /// Gold.
    #[value(alias = "gold")]
    Gp,
    /// Level.
    #[value(alias = "level")]
    Lvl,
    /// Character class.
    Class,
}

impl StatName {
    /// The key under `stats`.
    pub const fn api_key(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Mp => "mp",
            Self::Exp => "exp",
            Self::Gp => "gp",
            Self::Lvl => "lvl",
            Self::Class => "class",
        }
    }
}

/// Login details.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    /// `auth.local.username`, used for mentions and invitations.
    #[value(alias = "login")]
    Username,
    /// `auth.local.email`.
    #[value(alias = "mail")]
    Email,
    /// `profile.name`, the name shown to others.
    #[value(name = "profilename", alias = "profile-name", alias = "name")]
    ProfileName,
}

impl AuthField {
    /// Dotted path of this field in the user object.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Username => "auth.local.username",
            Self::Email => "auth.local.email",
            Self::ProfileName => "profile.name",
        }
    }
}

/// Values derived from the user object.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoName {
    /// Gems, computed from `balance`.
    Gems,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Cli> {
        Cli::try_parse_from(args).ok()
    }

    #[test]
    fn definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn inventory_aliases() {
        let cli = parse(&["hopla", "get-user", "inventory", "potions"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Some(Command::GetUser(GetUserCommand::Inventory {
                group: Some(InventoryGroup::HatchingPotions)
            }))
        ));
    }

    #[test]
    fn stat_aliases() {
        let cases = [
            ("mana", StatName::Mp),
            ("gold", StatName::Gp),
            ("level", StatName::Lvl),
        ];
        for (alias, expected) in cases {
            let cli = parse(&["hopla", "get-user", "stats", alias]);
            let stat = match cli.map(|c| c.command) {
                Some(Command::GetUser(GetUserCommand::Stats { stat })) => stat,
                _ => None,
            };
            assert_eq!(stat, Some(expected), "{alias}");
        }
    }

    #[test]
    fn feed_amount_must_be_positive() {
        assert!(parse(&["hopla", "feed", "Wolf-Base", "Meat", "--amount", "0"]).is_none());
        let cli = parse(&["hopla", "feed", "Wolf-Base", "Meat"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Some(Command::Feed(FeedArgs { amount: 1, .. }))
        ));
    }

    #[test]
    fn verbose_is_global() {
        let cli = parse(&["hopla", "feed-all", "-v", "--yes"]);
        assert!(cli.is_some_and(|c| c.verbose));
    }
}
