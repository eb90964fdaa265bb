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

//! Accumulates the three text blocks spliced into the top-level template.

use super::port::Port;

const NEWLINE: &str = "\n";
const RULE: &str = "---------------------------";

/// A text buffer that places a separator before every item except the first.
#[derive(Debug, PartialEq, Default)]
struct Separated {
    text: String,
    emitted_any: bool,
}

impl Separated {
    /// Opens the buffer with the `banner` line, which may be empty.
    fn new(banner: &str) -> Self {
        let mut text = String::from(banner);
        text.push_str(NEWLINE);
        Self {
            text: text,
            emitted_any: false,
        }
    }

    /// Appends `item`, prefixed by `sep` and a newline if an item was already written
    /// since the last restart.
    fn push_item(&mut self, sep: &str, item: &str) -> () {
        if self.emitted_any == true {
            self.text.push_str(sep);
            self.text.push_str(NEWLINE);
        } else {
            self.emitted_any = true;
        }
        self.text.push_str(item);
    }

    fn push_line(&mut self, line: &str) -> () {
        self.text.push_str(line);
        self.text.push_str(NEWLINE);
    }

    /// Begins a fresh delimited list within the same buffer.
    fn restart(&mut self) -> () {
        self.emitted_any = false;
    }
}

/// The finished blocks, ready for template substitution.
#[derive(Debug, PartialEq)]
pub struct BlockText {
    pub ports: String,
    pub components: String,
    pub map: String,
}

/// Builds the top-level port list, component declarations, and port maps.
#[derive(Debug, PartialEq)]
pub struct Blocks {
    ports: Separated,
    components: Separated,
    map: Separated,
}

impl Blocks {
    /// Creates empty blocks, each opened by the `banner` line.
    pub fn new(banner: &str) -> Self {
        Self {
            ports: Separated::new(banner),
            components: Separated::new(banner),
            map: Separated::new(banner),
        }
    }

    /// Adds one entity's contribution to all three blocks.
    pub fn append(&mut self, sim_name: &str, ports: &[Port]) -> () {
        self.append_ports(sim_name, ports);
        self.append_component(sim_name, ports);
        self.append_map(sim_name, ports);
    }

    /// The top-level port list is one flat list across every entity.
    fn append_ports(&mut self, sim_name: &str, ports: &[Port]) -> () {
        for port in ports {
            self.ports.push_item(
                ";",
                &format!(
                    "      {}_{} : {}",
                    sim_name,
                    port.get_name(),
                    port.to_interface_string()
                ),
            );
        }
    }

    fn append_component(&mut self, sim_name: &str, ports: &[Port]) -> () {
        let block = &mut self.components;
        block.push_line(&format!("   component {}", sim_name));
        block.push_line("      port (");
        block.restart();
        for port in ports {
            block.push_item(
                ";",
                &format!("         {} : {}", port.get_name(), port.to_interface_string()),
            );
        }
        block.text.push_str(NEWLINE);
        block.push_line("      );");
        block.push_line("   end component ;");
        block.push_line("   ");
    }

    fn append_map(&mut self, sim_name: &str, ports: &[Port]) -> () {
        let block = &mut self.map;
        block.push_line(&format!("   {}_map : {} port map (", sim_name, sim_name));
        block.restart();
        for port in ports {
            block.push_item(
                ",",
                &format!("      {} => {}_{}", port.get_name(), sim_name, port.get_name()),
            );
        }
        block.text.push_str(NEWLINE);
        block.push_line("   );");
        block.push_line("   ");
    }

    /// Closes each block with its trailing rule line.
    pub fn finish(mut self) -> BlockText {
        self.ports.text.push_str(NEWLINE);
        self.ports.push_line(&format!("      {}", RULE));
        self.components.push_line(&format!("   {}", RULE));
        self.map.push_line(&format!("   {}", RULE));
        BlockText {
            ports: self.ports.text,
            components: self.components.text,
            map: self.map.text,
        }
    }
}
