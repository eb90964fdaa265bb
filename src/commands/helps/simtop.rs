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

pub const HELP: &str = r#"Generate a simulation top-level that wires every entity instance.

Usage:
    simtop [options] <manifest>

Args:
    <manifest>              toml file listing the instances to wire

Options:
    --config <path>         settings file (default: $SIMTOP_CONFIG)
    --template <path>       template to fill in
    --output <path>         destination of the generated file
    --stdout                print the generated text instead of writing it
    --json                  print the resolved entities as json
    --color <when>          coloring: auto, always, never
    --help, -h              print help information

Use 'simtop --help' to read this information again.
"#;
