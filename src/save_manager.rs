use crate::catalog;
use crate::core::constants::{BASE_DAMAGE, SAVE_VERSION};
use crate::core::game_state::GameState;
use crate::core::progression;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Manages saving and loading game state as a versioned JSON document.
///
/// The whole aggregate serializes to one JSON object carrying an integer
/// `save_version`. Loads from an older version run a migration that swaps
/// catalog-derived substructures for current catalog defaults while keeping
/// every piece of player-owned progress.
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager instance.
    ///
    /// Sets up the save directory at the appropriate location for the
    /// platform using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "typestorm").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.json"),
        })
    }

    /// Creates a SaveManager writing to an explicit path (tests, tooling).
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    /// Saves the game state to disk as pretty-printed JSON.
    pub fn save(&self, state: &GameState) -> io::Result<()> {
        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.save_path, json)
    }

    /// Loads the game state from disk, migrating older save versions.
    ///
    /// Returns an error if the file doesn't exist or cannot be parsed.
    pub fn load(&self) -> io::Result<GameState> {
        let json = fs::read_to_string(&self.save_path)?;
        let mut state: GameState = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if state.save_version < SAVE_VERSION {
            migrate(&mut state);
        }
        Ok(state)
    }

    /// Checks if a save file exists.
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

/// Bring an older save up to the current version.
///
/// Catalog-derived lists (factories, upgrades, owned gun/shop-item ids) are
/// rebuilt from current catalog definitions, carrying per-id progress over;
/// numeric progress fields (level, experience, money, resource amounts,
/// permanent multipliers, wave) pass through untouched. Entries whose id no
/// longer exists in the catalog are dropped; `base_damage` is recomputed
/// from the surviving gun set so a removed gun cannot leave phantom damage.
fn migrate(state: &mut GameState) {
    let old_factories = std::mem::take(&mut state.factories);
    state.factories = catalog::default_factories();
    for factory in &mut state.factories {
        if let Some(old) = old_factories.iter().find(|f| f.id == factory.id) {
            factory.level = old.level;
            factory.unlocked = old.unlocked;
            factory.active = old.active;
        }
    }

    let old_upgrades = std::mem::take(&mut state.upgrades);
    state.upgrades = catalog::starting_upgrades();
    for upgrade in &mut state.upgrades {
        if let Some(old) = old_upgrades.iter().find(|u| u.id == upgrade.id) {
            upgrade.purchased = old.purchased;
        }
    }

    let guns = catalog::gun_catalog();
    state.purchased_guns.retain(|id| guns.iter().any(|g| &g.id == id));
    state.base_damage = BASE_DAMAGE
        + state
            .purchased_guns
            .iter()
            .filter_map(|id| guns.iter().find(|g| &g.id == id))
            .map(|g| g.damage)
            .sum::<f64>();

    let items = catalog::shop_items();
    state
        .purchased_shop_items
        .retain(|id| items.iter().any(|i| &i.id == id));

    progression::refresh_factory_unlocks(state);
    state.save_version = SAVE_VERSION;
}
