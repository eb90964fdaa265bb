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

use crate::util::anyerror::AnyError;
use crate::util::filesystem;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use serde_derive::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_TEMPLATE: &str = "top_sim.templ";
pub const DEFAULT_OUTPUT: &str = "top_sim.vhdl";
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub trait FromFile: FromStr
where
    Self: Sized,
{
    fn from_file(path: &Path) -> Result<Self, Box<dyn Error>>;
}

/// A `strftime`-style pattern that is known to hold only valid specifiers.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat(String);

impl DateFormat {
    /// Renders `date` according to the pattern.
    pub fn render<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        date.format_with_items(StrftimeItems::new(&self.0))
            .to_string()
    }
}

impl FromStr for DateFormat {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match StrftimeItems::new(s).any(|i| matches!(i, Item::Error)) {
            true => Err(AnyError(format!("invalid date format {:?}", s))),
            false => Ok(Self(s.to_string())),
        }
    }
}

impl TryFrom<String> for DateFormat {
    type Error = AnyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<DateFormat> for String {
    fn from(value: DateFormat) -> Self {
        value.0
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(String::from(DEFAULT_DATE_FORMAT))
    }
}

/// Where the generator reads its template from and writes its result to.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    #[serde(rename = "date-format")]
    date_format: Option<DateFormat>,
    banner: Option<String>,
}

impl Settings {
    /// Creates settings with every field left to its default.
    pub fn new() -> Self {
        Self {
            template: None,
            output: None,
            date_format: None,
            banner: None,
        }
    }

    pub fn template(mut self, path: PathBuf) -> Self {
        self.template = Some(path);
        self
    }

    pub fn output(mut self, path: PathBuf) -> Self {
        self.output = Some(path);
        self
    }

    pub fn date_format(mut self, fmt: DateFormat) -> Self {
        self.date_format = Some(fmt);
        self
    }

    pub fn banner(mut self, text: &str) -> Self {
        self.banner = Some(text.to_string());
        self
    }

    pub fn get_template(&self) -> PathBuf {
        self.template
            .clone()
            .unwrap_or(PathBuf::from(DEFAULT_TEMPLATE))
    }

    pub fn get_output(&self) -> PathBuf {
        self.output.clone().unwrap_or(PathBuf::from(DEFAULT_OUTPUT))
    }

    pub fn get_date_format(&self) -> DateFormat {
        self.date_format.clone().unwrap_or_default()
    }

    /// Returns the line opening each generated block.
    pub fn get_banner(&self) -> String {
        match &self.banner {
            Some(b) => b.clone(),
            None => format!(
                "Autogenerated by {} {} --",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
        }
    }

    /// Merges any populated data from `rhs` into attributes that do not already
    /// have data defined in `self`.
    pub fn merge(&mut self, rhs: Option<Self>) -> () {
        if let Some(rhs) = rhs {
            if self.template.is_some() == false {
                self.template = rhs.template
            }
            if self.output.is_some() == false {
                self.output = rhs.output
            }
            if self.date_format.is_some() == false {
                self.date_format = rhs.date_format
            }
            if self.banner.is_some() == false {
                self.banner = rhs.banner
            }
        }
    }

    /// Anchors relative `template` and `output` paths to `root`.
    fn resolve_root_path(mut self, root: &Path) -> Self {
        self.template = self
            .template
            .map(|p| filesystem::resolve_rel_path(root, &p));
        self.output = self.output.map(|p| filesystem::resolve_rel_path(root, &p));
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Settings {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl FromFile for Settings {
    fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        // verify the path exists
        if path.is_file() == false {
            return Err(AnyError(format!(
                "failed to locate configuration file {:?}",
                path.display()
            )))?;
        }
        let contents = std::fs::read_to_string(&path)?;
        match Self::from_str(&contents) {
            Ok(r) => {
                let base = path.parent().unwrap_or(Path::new("."));
                Ok(r.resolve_root_path(base))
            }
            Err(e) => Err(AnyError(format!(
                "failed to parse {:?} file: {}",
                path.display(),
                e
            )))?,
        }
    }
}
