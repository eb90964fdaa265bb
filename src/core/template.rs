//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use std::collections::HashMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::block::BlockText;

type VarLUT<'a> = HashMap<&'a str, &'a str>;

const VAR_DELIMITER: char = '%';

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("could not read template {0:?}: {1}")]
    Unreadable(PathBuf, std::io::Error),
}

/// The fixed set of markers a top-level template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Date,
    Ports,
    Components,
    Map,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [Self::Date, Self::Ports, Self::Components, Self::Map];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Ports => "ports",
            Self::Components => "components",
            Self::Map => "map",
        }
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", VAR_DELIMITER, self.key(), VAR_DELIMITER)
    }
}

/// The text swapped in for each `Placeholder`.
#[derive(Debug, PartialEq)]
pub struct Values {
    date: String,
    blocks: BlockText,
}

impl Values {
    pub fn new(date: String, blocks: BlockText) -> Self {
        Self {
            date: date,
            blocks: blocks,
        }
    }

    pub fn get(&self, p: &Placeholder) -> &str {
        match p {
            Placeholder::Date => &self.date,
            Placeholder::Ports => &self.blocks.ports,
            Placeholder::Components => &self.blocks.components,
            Placeholder::Map => &self.blocks.map,
        }
    }

    fn to_lut(&self) -> VarLUT {
        Placeholder::ALL
            .iter()
            .map(|p| (p.key(), self.get(p)))
            .collect()
    }
}

#[derive(Debug, PartialEq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// Reads the template stored at `path`.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self { text: text }),
            Err(e) => Err(TemplateError::Unreadable(path.to_path_buf(), e)),
        }
    }

    /// Replaces every placeholder in the template with its value.
    pub fn render(&self, values: &Values) -> String {
        substitute(&self.text, &values.to_lut())
    }
}

/// Performs variable replacement on the given `text`, looking up variables in
/// the `code` to swap with their values.
///
/// Unknown variables are left untouched and inserted values are never rescanned.
fn substitute(text: &str, code: &VarLUT) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(VAR_DELIMITER) {
        result.push_str(&rest[..start]);
        let after = &rest[start + VAR_DELIMITER.len_utf8()..];
        if let Some(key) = gather_variable(after) {
            if let Some(value) = code.get(key) {
                result.push_str(value);
                rest = &after[key.len() + VAR_DELIMITER.len_utf8()..];
                continue;
            }
        }
        result.push(VAR_DELIMITER);
        rest = after;
    }
    result.push_str(rest);
    result
}

/// Collects a variable name up to the closing delimiter.
///
/// Assumes the opening delimiter was already consumed. Returns `None` if the
/// name is empty, never closes, or holds characters outside `[A-Za-z0-9_]`.
fn gather_variable(text: &str) -> Option<&str> {
    let end = text.find(VAR_DELIMITER)?;
    let key = &text[..end];
    match key.is_empty() == false
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        true => Some(key),
        false => None,
    }
}
