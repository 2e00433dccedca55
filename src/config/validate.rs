// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskboardError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::TaskboardError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.board, raw.query))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_board_section(cfg)?;
    validate_query_section(cfg)?;
    Ok(())
}

fn validate_board_section(cfg: &RawConfigFile) -> Result<()> {
    if cfg.board.path.as_os_str().is_empty() {
        return Err(TaskboardError::ConfigError(
            "[board].path must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_query_section(cfg: &RawConfigFile) -> Result<()> {
    for (i, key) in cfg.query.sort.iter().enumerate() {
        if cfg.query.sort[..i].contains(key) {
            return Err(TaskboardError::ConfigError(format!(
                "[query].sort lists '{}' more than once",
                key
            )));
        }
    }
    Ok(())
}
