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

//! Normalizes the two upstream shapes of a placed entity into one ordered
//! list of ports.

use super::port::{Direction, Port, PortError};
use serde_derive::Serialize;
use thiserror::Error;

/// Maps a usage component's numeric port type code to its direction.
///
/// The index order is fixed by previously generated files and must not change.
pub const PORT_TYPES: [Direction; 3] = [Direction::InOut, Direction::In, Direction::Out];

#[derive(Debug, Error, PartialEq)]
pub enum EntityError {
    #[error("entity {0:?} has port {1:?} with unknown type code {2} (expecting 0, 1, or 2)")]
    UnknownPortType(String, String, usize),
    #[error("entity {0:?}: {1}")]
    BadPort(String, PortError),
}

/// Common view over anything that can be wired into the simulation top-level.
pub trait SimEntity {
    /// The unique scope name used as a prefix and instance label.
    fn sim_name(&self) -> &str;

    /// The ports in their declared order.
    fn ports(&self) -> Result<Vec<Port>, EntityError>;
}

/// An entity whose ports were already parsed from its definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDefinition {
    sim_name: String,
    ports: Vec<Port>,
}

impl EntityDefinition {
    pub fn new(sim_name: &str, ports: Vec<Port>) -> Self {
        Self {
            sim_name: sim_name.to_string(),
            ports: ports,
        }
    }
}

impl SimEntity for EntityDefinition {
    fn sim_name(&self) -> &str {
        &self.sim_name
    }

    fn ports(&self) -> Result<Vec<Port>, EntityError> {
        Ok(self.ports.clone())
    }
}

/// A generic port entry as stored on a usage component's port-list attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPort {
    tooltip: String,
    type_code: usize,
    width: usize,
}

impl RawPort {
    pub fn new(tooltip: &str, type_code: usize, width: usize) -> Self {
        Self {
            tooltip: tooltip.to_string(),
            type_code: type_code,
            width: width,
        }
    }

    /// Translates the raw entry into a typed `Port` for the entity `owner`.
    fn to_port(&self, owner: &str) -> Result<Port, EntityError> {
        let direction = match PORT_TYPES.get(self.type_code) {
            Some(d) => *d,
            None => {
                return Err(EntityError::UnknownPortType(
                    owner.to_string(),
                    self.tooltip.clone(),
                    self.type_code,
                ))
            }
        };
        Port::new(&self.tooltip, direction, self.width)
            .map_err(|e| EntityError::BadPort(owner.to_string(), e))
    }
}

/// A placeholder component that only knows its ports through raw entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityComponent {
    sim_name: String,
    ports: Vec<RawPort>,
}

impl EntityComponent {
    pub fn new(sim_name: &str, ports: Vec<RawPort>) -> Self {
        Self {
            sim_name: sim_name.to_string(),
            ports: ports,
        }
    }
}

impl SimEntity for EntityComponent {
    fn sim_name(&self) -> &str {
        &self.sim_name
    }

    fn ports(&self) -> Result<Vec<Port>, EntityError> {
        self.ports
            .iter()
            .map(|p| p.to_port(&self.sim_name))
            .collect()
    }
}

/// One placed sub-circuit supplied by the circuit model.
#[derive(Debug, Clone, PartialEq)]
pub enum Instance {
    Definition(EntityDefinition),
    Component(EntityComponent),
}

impl Instance {
    fn as_sim_entity(&self) -> &dyn SimEntity {
        match self {
            Self::Definition(d) => d,
            Self::Component(c) => c,
        }
    }

    pub fn sim_name(&self) -> &str {
        self.as_sim_entity().sim_name()
    }

    /// Resolves the instance into its simulation name and ordered ports.
    pub fn resolve(&self) -> Result<ResolvedEntity, EntityError> {
        let entity = self.as_sim_entity();
        Ok(ResolvedEntity {
            name: entity.sim_name().to_string(),
            ports: entity.ports()?,
        })
    }
}

impl From<EntityDefinition> for Instance {
    fn from(value: EntityDefinition) -> Self {
        Self::Definition(value)
    }
}

impl From<EntityComponent> for Instance {
    fn from(value: EntityComponent) -> Self {
        Self::Component(value)
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ResolvedEntity {
    name: String,
    ports: Vec<Port>,
}

impl ResolvedEntity {
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_ports(&self) -> &Vec<Port> {
        &self.ports
    }
}
