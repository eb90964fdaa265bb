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

use serde_derive::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PortError {
    #[error("port {0:?} must have a width of at least 1")]
    ZeroWidth(String),
    #[error("unknown port direction {0:?} (expecting 'in', 'out', or 'inout')")]
    UnknownDirection(String),
}

/// The mode of a signal crossing an entity's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl Direction {
    /// Returns the VHDL mode keyword written into the generated interfaces.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inout",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

impl FromStr for Direction {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "inout" => Ok(Self::InOut),
            _ => Err(PortError::UnknownDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = PortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

/// A single named, directional, fixed-width signal on an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Port {
    name: String,
    direction: Direction,
    width: usize,
}

impl Port {
    /// Creates a new `Port`.
    ///
    /// Errors if `width` is zero.
    pub fn new(name: &str, direction: Direction, width: usize) -> Result<Self, PortError> {
        if width == 0 {
            return Err(PortError::ZeroWidth(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            direction: direction,
            width: width,
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Renders the port's datatype.
    ///
    /// A single bit is a scalar `std_logic`, anything wider is a descending
    /// `std_logic_vector`.
    pub fn vhdl_type(&self) -> String {
        match self.width {
            1 => String::from("std_logic"),
            n => format!("std_logic_vector({} downto 0)", n - 1),
        }
    }

    /// Renders `<mode> <datatype>` as it appears after the ':' delimiter.
    pub fn to_interface_string(&self) -> String {
        format!("{} {}", self.direction, self.vhdl_type())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scalar_and_vector_types() {
        let p = Port::new("x", Direction::In, 1).unwrap();
        assert_eq!(p.vhdl_type(), "std_logic");

        let p = Port::new("y", Direction::Out, 5).unwrap();
        assert_eq!(p.vhdl_type(), "std_logic_vector(4 downto 0)");

        let p = Port::new("z", Direction::InOut, 2).unwrap();
        assert_eq!(p.to_interface_string(), "inout std_logic_vector(1 downto 0)");
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            Port::new("bad", Direction::In, 0),
            Err(PortError::ZeroWidth(String::from("bad")))
        );
    }

    #[test]
    fn parse_direction() {
        assert_eq!(Direction::from_str("in"), Ok(Direction::In));
        assert_eq!(Direction::from_str("OUT"), Ok(Direction::Out));
        assert_eq!(Direction::from_str("InOut"), Ok(Direction::InOut));
        assert_eq!(Direction::from_str("buffer").is_err(), true);
    }
}
