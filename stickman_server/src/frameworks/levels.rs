// Loads the game file and its level files from disk.

use crate::domain::{Bounds, HeroSpawn, LevelLayout, PlayerSize, SlimeSpawn, UnknownSize};
use serde::Deserialize;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    UnknownSize { path: PathBuf, source: UnknownSize },
    NoLevels,
    NoLives,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            ConfigError::UnknownSize { path, source } => write!(f, "{}: {source}", path.display()),
            ConfigError::NoLevels => write!(f, "game file lists no levels"),
            ConfigError::NoLives => write!(f, "hero_lives must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::UnknownSize { source, .. } => Some(source),
            ConfigError::NoLevels | ConfigError::NoLives => None,
        }
    }
}

/// Everything the game needs to start.
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub hero_lives: u32,
    pub layouts: Vec<LevelLayout>,
}

#[derive(Debug, Deserialize)]
struct GameFile {
    hero_lives: u32,
    levels: Vec<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct LevelFile {
    width: f64,
    floor_height: f64,
    hero: HeroEntry,
    #[serde(default)]
    platforms: Vec<PlatformEntry>,
    #[serde(default)]
    slimes: Vec<SlimeEntry>,
    #[serde(default)]
    mushrooms: Vec<PointEntry>,
    flag: Option<PointEntry>,
}

#[derive(Debug, Deserialize)]
struct HeroEntry {
    x: f64,
    y: f64,
    #[serde(default = "default_size")]
    size: String,
}

fn default_size() -> String {
    PlayerSize::Normal.as_str().to_string()
}

#[derive(Debug, Deserialize)]
struct PlatformEntry {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
struct SlimeEntry {
    x: f64,
    y: f64,
    #[serde(default)]
    chases: bool,
}

#[derive(Debug, Deserialize)]
struct PointEntry {
    x: f64,
    y: f64,
}

/// Reads the game file at `path` and every level it lists.
///
/// Level paths are resolved relative to the game file's directory.
pub fn load_game(path: &Path) -> Result<GameSetup, ConfigError> {
    let game: GameFile = read_toml(path)?;
    if game.hero_lives == 0 {
        return Err(ConfigError::NoLives);
    }
    if game.levels.is_empty() {
        return Err(ConfigError::NoLevels);
    }

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let layouts = game
        .levels
        .iter()
        .map(|level| {
            let level_path = base.join(level);
            let file: LevelFile = read_toml(&level_path)?;
            to_layout(file).map_err(|source| ConfigError::UnknownSize {
                path: level_path,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        path = %path.display(),
        levels = layouts.len(),
        hero_lives = game.hero_lives,
        "game config loaded"
    );
    Ok(GameSetup {
        hero_lives: game.hero_lives,
        layouts,
    })
}

/// Parses a single level description. `origin` is only used in errors.
pub fn parse_level(text: &str, origin: &Path) -> Result<LevelLayout, ConfigError> {
    let file: LevelFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    to_layout(file).map_err(|source| ConfigError::UnknownSize {
        path: origin.to_path_buf(),
        source,
    })
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn to_layout(file: LevelFile) -> Result<LevelLayout, UnknownSize> {
    let size: PlayerSize = file.hero.size.parse()?;
    Ok(LevelLayout {
        width: file.width,
        floor_height: file.floor_height,
        hero: HeroSpawn {
            x: file.hero.x,
            y: file.hero.y,
            size,
        },
        platforms: file
            .platforms
            .into_iter()
            .map(|p| Bounds::new(p.x, p.y, p.width, p.height))
            .collect(),
        slimes: file
            .slimes
            .into_iter()
            .map(|s| SlimeSpawn {
                x: s.x,
                y: s.y,
                chases: s.chases,
            })
            .collect(),
        mushrooms: file.mushrooms.into_iter().map(|m| (m.x, m.y)).collect(),
        flag: file.flag.map(|f| (f.x, f.y)),
    })
}
