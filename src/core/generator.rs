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

//! Drives the entity adapter, block builder, and template renderer to write
//! the simulation top-level, skipping the work while the last result is
//! still valid.

use super::block::{BlockText, Blocks};
use super::config::Settings;
use super::entity::{EntityError, Instance};
use super::template::{Template, TemplateError, Values};
use chrono::{DateTime, Local, TimeZone};
use log::{debug, error, info};
use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Entity(#[from] EntityError),
    #[error("{0}")]
    Template(#[from] TemplateError),
    #[error("could not create top-level file {0:?}: {1}")]
    Unwritable(PathBuf, std::io::Error),
}

/// Whether the file on disk reflects the current circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cache {
    Stale,
    Fresh,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The previous result is still valid and nothing was done.
    Cached,
    Written(PathBuf),
}

/// Generates the top-level file that instantiates every entity of a circuit.
///
/// Calls must be serialized by the owner; the cache state is not shared.
#[derive(Debug)]
pub struct TopGenerator {
    settings: Settings,
    state: Cache,
}

impl TopGenerator {
    /// Creates a new generator. The first call to `generate` always does work.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: settings,
            state: Cache::Stale,
        }
    }

    pub fn get_state(&self) -> Cache {
        self.state
    }

    /// Marks the last generated file as outdated.
    pub fn invalidate(&mut self) -> () {
        self.state = Cache::Stale;
    }

    /// Writes the top-level file unless it is already up to date.
    ///
    /// Failures are logged and leave the generator stale so a later call retries.
    pub fn generate(&mut self, instances: &[Instance]) -> () {
        match self.try_generate(instances) {
            Ok(Outcome::Cached) => debug!("top-level file is up to date"),
            Ok(Outcome::Written(path)) => info!("wrote top-level file {:?}", path.display()),
            Err(e) => error!("{}", e),
        }
    }

    /// Same as `generate`, but hands the failure back to the caller.
    pub fn try_generate(&mut self, instances: &[Instance]) -> Result<Outcome, GenerateError> {
        if self.state == Cache::Fresh {
            return Ok(Outcome::Cached);
        }
        let text = self.render_at(instances, &Local::now())?;
        let dest = self.settings.get_output();
        if let Err(e) = persist(&dest, &text) {
            return Err(GenerateError::Unwritable(dest, e));
        }
        self.state = Cache::Fresh;
        Ok(Outcome::Written(dest))
    }

    /// Produces the complete top-level text stamped with `date` without writing it.
    pub fn render_at<Tz: TimeZone>(
        &self,
        instances: &[Instance],
        date: &DateTime<Tz>,
    ) -> Result<String, GenerateError>
    where
        Tz::Offset: Display,
    {
        let blocks = self.build_blocks(instances)?;
        let template = Template::load(&self.settings.get_template())?;
        let values = Values::new(self.settings.get_date_format().render(date), blocks);
        Ok(template.render(&values))
    }

    fn build_blocks(&self, instances: &[Instance]) -> Result<BlockText, EntityError> {
        let mut blocks = Blocks::new(&self.settings.get_banner());
        for inst in instances {
            let entity = inst.resolve()?;
            debug!(
                "adding entity {} with {} port(s)",
                entity.get_name(),
                entity.get_ports().len()
            );
            blocks.append(entity.get_name(), entity.get_ports());
        }
        Ok(blocks.finish())
    }
}

/// Writes `text` to a temporary file beside `dest` and renames it over `dest`.
///
/// An existing `dest` keeps its permissions; a new one gets the same
/// permissions a plain file creation would give it.
fn persist(dest: &Path, text: &str) -> std::io::Result<()> {
    let dir = match dest.parent() {
        Some(p) if p.as_os_str().is_empty() == false => p,
        _ => Path::new("."),
    };
    let mut temp = temp_builder().tempfile_in(dir)?;
    if let Ok(meta) = std::fs::metadata(dest) {
        temp.as_file().set_permissions(meta.permissions())?;
    }
    temp.write_all(text.as_bytes())?;
    temp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

/// Creates temporary files with mode 0666, leaving the umask to narrow it.
#[cfg(unix)]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}
