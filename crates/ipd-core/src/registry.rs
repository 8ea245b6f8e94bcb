//! Name-indexed table of strategies that hands out fresh instances

use std::sync::LazyLock;

use crate::copycat::Copycat;
use crate::error::{Error, Result};
use crate::strategy::{Player, Strategy};
use crate::two_face::TwoFace;

/// Zero-argument constructor for a registered strategy
pub type Constructor = fn() -> Player;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::standard);

/// A (name, prototype) association. The prototype only ever serves as a
/// template; it is never handed out or played.
#[derive(Debug)]
struct Entry {
    prototype: Player,
    build: Constructor,
}

/// Read-only table of known strategies, in registration order.
///
/// Hosts wanting extra or fewer strategies build their own with
/// [`Registry::new`] instead of mutating the global one.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Build a registry from constructors. Each is called once to produce
    /// the prototype whose name keys the entry.
    pub fn new(constructors: impl IntoIterator<Item = Constructor>) -> Result<Self> {
        let mut entries: Vec<Entry> = Vec::new();
        for build in constructors {
            let prototype = build();
            if entries.iter().any(|e| e.prototype.name() == prototype.name()) {
                return Err(Error::DuplicateStrategy(prototype.name().to_string()));
            }
            entries.push(Entry { prototype, build });
        }
        Ok(Self { entries })
    }

    /// The bundled set: TwoFace, then Copycat
    pub fn standard() -> Self {
        Self {
            entries: vec![
                Entry { prototype: two_face(), build: two_face },
                Entry { prototype: copycat(), build: copycat },
            ],
        }
    }

    /// Process-wide registry, built on first use
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Names of every registered strategy, in registration order
    pub fn all_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.prototype.name().to_string()).collect()
    }

    /// Registered prototypes with their names, for listings
    pub fn prototypes(&self) -> impl Iterator<Item = (&str, &Player)> {
        self.entries.iter().map(|e| (e.prototype.name(), &e.prototype))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fresh instance of the strategy called exactly `name`
    pub fn clone_by_name(&self, name: &str) -> Result<Player> {
        self.entries
            .iter()
            .find(|e| e.prototype.name() == name)
            .map(|e| (e.build)())
            .ok_or_else(|| Error::UnknownStrategy(name.to_string()))
    }

    /// Fresh instance of the same variant as `template`, in its initial
    /// state regardless of how far `template` has played
    pub fn clone_like(&self, template: &Player) -> Result<Player> {
        self.entries
            .iter()
            .find(|e| e.prototype.kind() == template.kind())
            .map(|e| (e.build)())
            .ok_or_else(|| Error::CannotDuplicate(template.name().to_string()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

fn two_face() -> Player {
    Player::TwoFace(TwoFace::new())
}

fn copycat() -> Player {
    Player::Copycat(Copycat::new())
}
