//! Achievement persistence (load/save to disk).

use super::types::Achievements;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the achievements save file path (~/.typestorm/achievements.json).
pub fn achievements_save_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".typestorm").join("achievements.json"))
}

/// Load achievements from disk, or return default if not found.
pub fn load_achievements() -> Achievements {
    let path = match achievements_save_path() {
        Ok(p) => p,
        Err(_) => return Achievements::default(),
    };

    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => Achievements::default(),
    }
}

/// Save achievements to disk.
pub fn save_achievements(achievements: &Achievements) -> io::Result<()> {
    let path = achievements_save_path()?;

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(achievements)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json)?;
    Ok(())
}
