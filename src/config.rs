use std::path::PathBuf;

use clap::Parser;

use crate::core::LevelStore;

/// Terminal Sokoban: push every crate onto a target.
#[derive(Parser, Debug, Clone)]
#[command(name = "sokoban", version)]
pub struct Config {
    /// Level to start on.
    #[arg(
        long,
        value_name = "NUMBER",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub level: u32,
    /// JSON level catalog, e.g. {"1": {"width": 3, "cells": "@$."}}. Defaults to the built-in levels.
    #[arg(long, value_name = "PATH")]
    pub levels: Option<PathBuf>,
    /// Where log output goes while the terminal UI owns the screen. Filter with RUST_LOG.
    #[arg(long = "log-file", value_name = "PATH", default_value = "sokoban.log")]
    pub log_file: PathBuf,
    /// Play a move string in LURD notation, print the result and exit.
    #[arg(long, value_name = "LURD")]
    pub replay: Option<String>,
}

impl Config {
    pub fn load_store(&self) -> Result<LevelStore, Box<dyn std::error::Error>> {
        match &self.levels {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                Ok(LevelStore::from_json(&json)?)
            }
            None => Ok(LevelStore::builtin()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_to_first_builtin_level() {
        let config = Config::try_parse_from(["sokoban"]).unwrap();
        assert_eq!(config.level, 1);
        assert_eq!(config.log_file, PathBuf::from("sokoban.log"));
        assert!(config.replay.is_none());
        assert_eq!(config.load_store().unwrap(), LevelStore::builtin());
    }

    #[test]
    fn level_zero_is_rejected() {
        assert!(Config::try_parse_from(["sokoban", "--level", "0"]).is_err());
    }

    #[test]
    fn replay_and_level_are_read() {
        let config =
            Config::try_parse_from(["sokoban", "--level", "2", "--replay", "rrUl"]).unwrap();
        assert_eq!(config.level, 2);
        assert_eq!(config.replay.as_deref(), Some("rrUl"));
    }
}
