use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Team role of a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tank,
    Damage,
    Support,
}

impl Role {
    /// All roles in display order
    pub const ALL: [Role; 3] = [Role::Tank, Role::Damage, Role::Support];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Damage => "Damage",
            Role::Support => "Support",
        }
    }

    /// Position of this role inside per-role arrays
    pub fn index(&self) -> usize {
        match self {
            Role::Tank => 0,
            Role::Damage => 1,
            Role::Support => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const HERO_ROLES: [(&str, Role); 41] = [
    ("Ana", Role::Support),
    ("Mercy", Role::Support),
    ("Moira", Role::Support),
    ("Genji", Role::Damage),
    ("Kiriko", Role::Support),
    ("Cassidy", Role::Damage),
    ("Soldier_76", Role::Damage),
    ("Hanzo", Role::Damage),
    ("Widowmaker", Role::Damage),
    ("Reinhardt", Role::Tank),
    ("DVa", Role::Tank),
    ("Lucio", Role::Support),
    ("Zenyatta", Role::Support),
    ("Tracer", Role::Damage),
    ("Ashe", Role::Damage),
    ("Junkrat", Role::Damage),
    ("Sombra", Role::Damage),
    ("Zarya", Role::Tank),
    ("Roadhog", Role::Tank),
    ("Baptiste", Role::Support),
    ("Reaper", Role::Damage),
    ("Doomfist", Role::Tank),
    ("Pharah", Role::Damage),
    ("Lifeweaver", Role::Support),
    ("Orisa", Role::Tank),
    ("Sigma", Role::Tank),
    ("Sojourn", Role::Damage),
    ("Brigitte", Role::Support),
    ("Mei", Role::Damage),
    ("Winston", Role::Tank),
    ("Illari", Role::Support),
    ("Bastion", Role::Damage),
    ("Junker_Queen", Role::Tank),
    ("Torbjorn", Role::Damage),
    ("Echo", Role::Damage),
    ("Symmetra", Role::Damage),
    ("Wrecking_Ball", Role::Tank),
    ("Ramattra", Role::Tank),
    ("Juno", Role::Support),
    ("Mauga", Role::Tank),
    ("Venture", Role::Damage),
];

/// Static hero → role lookup, shared read-only by the whole process.
#[derive(Debug)]
pub struct HeroRoleTable {
    roles: HashMap<&'static str, Role>,
}

impl HeroRoleTable {
    /// The built-in roster
    pub fn global() -> &'static HeroRoleTable {
        static TABLE: OnceLock<HeroRoleTable> = OnceLock::new();
        TABLE.get_or_init(|| HeroRoleTable {
            roles: HERO_ROLES.iter().copied().collect(),
        })
    }

    /// Role of a hero, `None` for identifiers outside the roster
    pub fn role_of(&self, hero: &str) -> Option<Role> {
        self.roles.get(hero).copied()
    }

    /// Heroes playing the given role, in roster order
    pub fn heroes(&self, role: Role) -> impl Iterator<Item = &'static str> {
        HERO_ROLES
            .iter()
            .filter(move |(_, r)| *r == role)
            .map(|(hero, _)| *hero)
    }
}

/// Number of heroes per role found in a rule set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCounts {
    pub tank: u32,
    pub damage: u32,
    pub support: u32,
}

impl RoleCounts {
    pub fn new(tank: u32, damage: u32, support: u32) -> Self {
        Self {
            tank,
            damage,
            support,
        }
    }

    /// Sum of all roles; always derived, never stored
    pub fn total(&self) -> u32 {
        self.tank + self.damage + self.support
    }

    /// Zero counts mean "no data", not a balanced team
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn get(&self, role: Role) -> u32 {
        match role {
            Role::Tank => self.tank,
            Role::Damage => self.damage,
            Role::Support => self.support,
        }
    }

    /// Count shown next to a role indicator.
    ///
    /// The tank count is doubled for display only; proportions always use the
    /// raw count.
    pub fn display_count(&self, role: Role) -> u32 {
        match role {
            Role::Tank => self.tank * 2,
            other => self.get(other),
        }
    }
}

/// Tally heroes per role, dropping identifiers the table does not know.
pub fn aggregate_roles<S: AsRef<str>>(heroes: &[S], table: &HeroRoleTable) -> RoleCounts {
    let mut counts = RoleCounts::default();
    for hero in heroes {
        match table.role_of(hero.as_ref()) {
            Some(Role::Tank) => counts.tank += 1,
            Some(Role::Damage) => counts.damage += 1,
            Some(Role::Support) => counts.support += 1,
            None => {}
        }
    }
    counts
}
