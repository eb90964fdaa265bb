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

//! Generates a single VHDL simulation top-level that declares, wires, and
//! instantiates every entity of a circuit, so one simulator run covers them all.

mod commands;
pub mod core;
mod error;
pub mod util;

pub use crate::commands::simtop::Simtop;
pub use crate::core::config::Settings;
pub use crate::core::entity::{EntityComponent, EntityDefinition, Instance, RawPort};
pub use crate::core::generator::{Cache, GenerateError, Outcome, TopGenerator};
pub use crate::core::port::{Direction, Port};
