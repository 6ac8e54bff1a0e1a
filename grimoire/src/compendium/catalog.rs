//! Known lookup keys for each compendium category.
//!
//! The rules API accepts arbitrary slugs, but clients need something to put
//! in a picker. These lists cover the SRD equipment and a working set of
//! monsters and spells.

pub const MELEE_WEAPONS: &[&str] = &[
    "greatsword",
    "longsword",
    "shortsword",
    "scimitar",
    "rapier",
    "dagger",
    "sickle",
    "handaxe",
    "battleaxe",
    "greataxe",
    "light-hammer",
    "warhammer",
    "club",
    "greatclub",
    "flail",
    "glaive",
    "halberd",
    "spear",
    "lance",
    "pike",
    "war-pick",
    "trident",
    "javelin",
    "maul",
    "morningstar",
    "mace",
    "quarterstaff",
];

pub const RANGED_WEAPONS: &[&str] = &[
    "longbow",
    "shortbow",
    "crossbow-hand",
    "crossbow-light",
    "crossbow-heavy",
    "sling",
    "blowgun",
    "dart",
];

pub const MONSTERS: &[&str] = &[
    "assassin",
    "bandit",
    "bandit-captain",
    "black-bear",
    "boar",
    "bugbear",
    "centaur",
    "commoner",
    "cult-fanatic",
    "cultist",
    "dire-wolf",
    "dryad",
    "ghast",
    "ghost",
    "giant-rat",
    "gnoll",
    "goblin",
    "gorgon",
    "griffon",
    "guard",
    "hawk",
    "hobgoblin",
    "hydra",
    "knight",
    "kobold",
    "lich",
    "lion",
    "lizard",
    "lizardfolk",
    "mage",
    "medusa",
    "mimic",
    "minotaur",
    "noble",
    "ogre",
    "orc",
    "priest",
    "rat",
    "raven",
    "riding-horse",
    "roc",
];

pub const SPELLS: &[&str] = &[
    "acid-arrow",
    "bless",
    "burning-hands",
    "charm-person",
    "cure-wounds",
    "detect-magic",
    "dispel-magic",
    "fire-bolt",
    "fireball",
    "fly",
    "guiding-bolt",
    "haste",
    "healing-word",
    "hold-person",
    "invisibility",
    "lightning-bolt",
    "mage-armor",
    "mage-hand",
    "magic-missile",
    "misty-step",
    "prestidigitation",
    "sacred-flame",
    "shield",
    "sleep",
    "thunderwave",
];
