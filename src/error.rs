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

use crate::util::environment::SIMTOP_CONFIG;
use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("manifest {0:?} does not exist{1}")]
    ManifestNotFound(PathBuf, Hint),
    #[error("failed to load configuration: {0}{1}")]
    ConfigNotLoaded(LastError, Hint),
    #[error("failed to load manifest: {0}")]
    ManifestNotLoaded(LastError),
    #[error("failed to generate top-level file: {0}")]
    GenerateFailed(LastError),
    #[error("'{0}' cannot be used with '{1}'")]
    ConflictingFlags(String, String),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    pub fn lowerize(s: String) -> String {
        // get the first word
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s.to_string()
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    ConfigEnv,
    ManifestPath,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::ConfigEnv => format!(
                "check the \"--config\" option or the {} environment variable",
                SIMTOP_CONFIG
            ),
            Self::ManifestPath => {
                String::from("the manifest lists each \"[[instance]]\" to wire into the top-level")
            }
        };
        write!(f, "\n\n{}: {}", "hint".green(), Error::lowerize(message))
    }
}
