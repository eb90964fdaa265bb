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

//! Reads the list of placed entities to wire into the top-level from a TOML
//! file.

use super::config::FromFile;
use super::entity::{EntityComponent, EntityDefinition, Instance, RawPort};
use super::port::{Direction, Port, PortError};
use crate::util::anyerror::AnyError;
use serde_derive::Deserialize;
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

fn default_width() -> usize {
    1
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityPortEntry {
    name: String,
    direction: Direction,
    #[serde(default = "default_width")]
    width: usize,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ComponentPortEntry {
    tooltip: String,
    #[serde(rename = "type")]
    type_code: usize,
    #[serde(default = "default_width")]
    width: usize,
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "kind")]
enum InstanceEntry {
    #[serde(rename = "entity")]
    Entity {
        name: String,
        #[serde(default)]
        port: Vec<EntityPortEntry>,
    },
    #[serde(rename = "component")]
    Component {
        name: String,
        #[serde(default)]
        port: Vec<ComponentPortEntry>,
    },
}

impl InstanceEntry {
    fn into_instance(self) -> Result<Instance, PortError> {
        Ok(match self {
            Self::Entity { name, port } => EntityDefinition::new(
                &name,
                port.into_iter()
                    .map(|p| Port::new(&p.name, p.direction, p.width))
                    .collect::<Result<Vec<Port>, PortError>>()?,
            )
            .into(),
            Self::Component { name, port } => EntityComponent::new(
                &name,
                port.into_iter()
                    .map(|p| RawPort::new(&p.tooltip, p.type_code, p.width))
                    .collect(),
            )
            .into(),
        })
    }
}

/// The ordered set of placed entities of a circuit.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    instance: Vec<InstanceEntry>,
}

impl Manifest {
    pub fn len(&self) -> usize {
        self.instance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instance.is_empty()
    }

    /// Converts the entries into instances, keeping the file's order.
    pub fn into_instances(self) -> Result<Vec<Instance>, PortError> {
        self.instance
            .into_iter()
            .map(|i| i.into_instance())
            .collect()
    }
}

impl FromStr for Manifest {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl FromFile for Manifest {
    fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                return Err(AnyError(format!(
                    "failed to read manifest {:?}: {}",
                    path.display(),
                    e
                )))?
            }
        };
        match Self::from_str(&contents) {
            Ok(r) => Ok(r),
            Err(e) => Err(AnyError(format!(
                "failed to parse {:?} file: {}",
                path.display(),
                e
            )))?,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::entity::SimEntity;

    const M_1: &str = r#"
[[instance]]
kind = "entity"
name = "A"
port = [
    { name = "x", direction = "in" },
    { name = "y", direction = "out", width = 8 },
]

[[instance]]
kind = "component"
name = "B"
port = [
    { tooltip = "z", type = 0 },
]
"#;

    #[test]
    fn parse_empty_manifest() {
        let m = Manifest::from_str("").unwrap();
        assert_eq!(m.is_empty(), true);
        assert_eq!(m.into_instances().unwrap(), Vec::new());
    }

    #[test]
    fn parse_basic_manifest() {
        let m = Manifest::from_str(M_1).unwrap();
        assert_eq!(m.len(), 2);
        let instances = m.into_instances().unwrap();
        assert_eq!(
            instances[0],
            Instance::Definition(EntityDefinition::new(
                "A",
                vec![
                    Port::new("x", Direction::In, 1).unwrap(),
                    Port::new("y", Direction::Out, 8).unwrap(),
                ]
            ))
        );
        match &instances[1] {
            Instance::Component(c) => {
                assert_eq!(c.sim_name(), "B");
                assert_eq!(
                    c.ports().unwrap(),
                    vec![Port::new("z", Direction::InOut, 1).unwrap()]
                );
            }
            _ => panic!("expected a component instance"),
        }
    }

    #[test]
    fn directions_ignore_case() {
        let m = Manifest::from_str(
            r#"
[[instance]]
kind = "entity"
name = "C"
port = [
    { name = "a", direction = "IN" },
    { name = "b", direction = "Out", width = 2 },
    { name = "c", direction = "inOut" },
]
"#,
        )
        .unwrap();
        assert_eq!(
            m.into_instances().unwrap(),
            vec![Instance::Definition(EntityDefinition::new(
                "C",
                vec![
                    Port::new("a", Direction::In, 1).unwrap(),
                    Port::new("b", Direction::Out, 2).unwrap(),
                    Port::new("c", Direction::InOut, 1).unwrap(),
                ]
            ))]
        );
    }

    #[test]
    fn reject_bad_entries() {
        // unknown kind
        assert_eq!(
            Manifest::from_str("[[instance]]\nkind = \"module\"\nname = \"a\"").is_err(),
            true
        );
        // unknown direction
        assert_eq!(
            Manifest::from_str(
                "[[instance]]\nkind = \"entity\"\nname = \"a\"\nport = [{ name = \"p\", direction = \"buffer\" }]"
            )
            .is_err(),
            true
        );
        // zero width surfaces when converting
        let m = Manifest::from_str(
            "[[instance]]\nkind = \"entity\"\nname = \"a\"\nport = [{ name = \"p\", direction = \"in\", width = 0 }]",
        )
        .unwrap();
        assert_eq!(
            m.into_instances(),
            Err(PortError::ZeroWidth(String::from("p")))
        );
    }
}
