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

use std::path::PathBuf;

/// Names a configuration file to use when `--config` is not given.
pub const SIMTOP_CONFIG: &str = "SIMTOP_CONFIG";

/// Returns the configuration file pointed to by the environment, if set and non-empty.
pub fn config_from_env() -> Option<PathBuf> {
    match std::env::var(SIMTOP_CONFIG) {
        Ok(s) if s.trim().is_empty() == false => Some(PathBuf::from(s)),
        _ => None,
    }
}
