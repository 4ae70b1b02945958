use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;
use crate::core::grid::Grid;

/// Starting layout of one level: the grid flattened row by row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub width: usize,
    pub cells: String,
}

impl LevelDescriptor {
    pub fn new(width: usize, cells: impl Into<String>) -> Self {
        LevelDescriptor {
            width,
            cells: cells.into(),
        }
    }

    /// A fresh grid; the descriptor itself is never touched by play.
    pub fn to_grid(&self) -> Result<Grid, GameError> {
        Grid::parse(self.width, &self.cells)
    }
}

/// Immutable catalog of levels numbered 1..=n.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelStore {
    levels: BTreeMap<u32, LevelDescriptor>,
}

impl LevelStore {
    pub fn new(levels: BTreeMap<u32, LevelDescriptor>) -> Result<Self, GameError> {
        if levels.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        if !levels.keys().copied().eq(1..=levels.len() as u32) {
            return Err(GameError::NonContiguousLevels);
        }
        for descriptor in levels.values() {
            descriptor.to_grid()?;
        }
        Ok(LevelStore { levels })
    }

    /// Reads a catalog shaped like `{"1": {"width": 3, "cells": "@$."}}`.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let levels: BTreeMap<u32, LevelDescriptor> =
            serde_json::from_str(json).map_err(|e| GameError::InvalidCatalog(e.to_string()))?;
        LevelStore::new(levels)
    }

    pub fn builtin() -> Self {
        let levels = BUILTIN_LEVELS
            .iter()
            .enumerate()
            .map(|(i, &(width, cells))| (i as u32 + 1, LevelDescriptor::new(width, cells)))
            .collect();
        LevelStore { levels }
    }

    pub fn get(&self, level: u32) -> Result<&LevelDescriptor, GameError> {
        self.levels.get(&level).ok_or(GameError::NoSuchLevel(level))
    }

    pub fn has_next(&self, level: u32) -> bool {
        level.checked_add(1).is_some_and(|next| self.levels.contains_key(&next))
    }

    pub fn first_level(&self) -> u32 {
        self.levels.keys().next().copied().unwrap_or(1)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.levels.keys().copied()
    }
}

impl Default for LevelStore {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_LEVELS: [(usize, &str); 2] = [
    (
        19,
        concat!(
            "    #####          ",
            "    #   #          ",
            "    #$  #          ",
            "  ###  $##         ",
            "  #  $ $ #         ",
            "### # ## #   ######",
            "#   # ## #####  ..#",
            "# $  $          ..#",
            "##### ### #@##  ..#",
            "    #     #########",
            "    #######        ",
        ),
    ),
    (
        14,
        concat!(
            "############  ",
            "#..  #     ###",
            "#..  # $  $  #",
            "#..  #$####  #",
            "#..    @ ##  #",
            "#..  # #  $ ##",
            "###### ##$ $ #",
            "  # $  $ $ $ #",
            "  #    #     #",
            "  ############",
        ),
    ),
];
