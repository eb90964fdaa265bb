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

use std::path::{Path, PathBuf};

/// Resolves a relative path into a full path if given relative to some `root` path.
///
/// Absolute paths are returned unchanged. This is used to anchor the paths
/// listed in a configuration file to the file's own directory.
pub fn resolve_rel_path(root: &Path, p: &Path) -> PathBuf {
    match p.is_relative() {
        true => root.join(p),
        false => p.to_path_buf(),
    }
}
