use std::{fs, path::Path};

use color_eyre::{
    eyre::{ensure, WrapErr},
    Result,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MatchSettings {
    pub height:    usize,
    pub width:     usize,
    pub obstacles: usize,
    pub spy_uses:  u32,
    pub max_turns: u64,
    pub matches:   u64,
    pub seed:      Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            height:    12,
            width:     24,
            obstacles: 40,
            spy_uses:  1,
            max_turns: 200,
            matches:   100,
            seed:      None,
        }
    }
}

impl MatchSettings {
    /// Reads settings from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file can't be read, isn't valid JSON, or describes an
    /// unplayable board.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        let settings: Self = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("parsing {}", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Fails when the board can't hold both pieces, a goal column and the
    /// requested obstacles.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.height >= 1, "board needs at least one row");
        ensure!(
            self.width >= 3,
            "board needs at least three columns, got {}",
            self.width
        );
        // both starting cells stay clear
        let free_cells = self
            .height
            .checked_mul(self.width)
            .and_then(|cells| cells.checked_sub(2));
        ensure!(
            free_cells.is_some_and(|free| self.obstacles <= free),
            "{} obstacles won't fit on a {}x{} board",
            self.obstacles,
            self.height,
            self.width
        );
        ensure!(self.max_turns > 0, "max_turns must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_playable() {
        assert!(MatchSettings::default().validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: MatchSettings =
            serde_json::from_str(r#"{ "width": 8, "seed": 7 }"#).unwrap();
        assert_eq!(settings.width, 8);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.height, MatchSettings::default().height);
    }

    #[test]
    fn narrow_boards_are_rejected() {
        let settings = MatchSettings {
            width: 2,
            ..MatchSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn overcrowded_boards_are_rejected() {
        let settings = MatchSettings {
            height: 2,
            width: 3,
            obstacles: 5,
            ..MatchSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn oversized_boards_are_rejected() {
        let settings: MatchSettings = serde_json::from_str(
            r#"{ "height": 18446744073709551615, "width": 3 }"#,
        )
        .unwrap();
        assert!(settings.validate().is_err());
    }

    fn scratch_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("spy-pursuit-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_settings_from_a_file() {
        let path = scratch_file("good.json", r#"{ "width": 9, "seed": 3 }"#);
        let settings = MatchSettings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.width, 9);
        assert_eq!(settings.seed, Some(3));
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let path = std::env::temp_dir().join("spy-pursuit-no-such-file.json");
        let err = MatchSettings::load(&path).unwrap_err();
        assert_eq!(err.to_string(), format!("reading {}", path.display()));
    }

    #[test]
    fn malformed_json_error_names_the_path() {
        let path = scratch_file("bad.json", "{ width: ");
        let err = MatchSettings::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert_eq!(err.to_string(), format!("parsing {}", path.display()));
    }

    #[test]
    fn loaded_settings_are_validated() {
        let path = scratch_file("narrow.json", r#"{ "width": 1 }"#);
        let result = MatchSettings::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
