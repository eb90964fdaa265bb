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

use crate::commands::helps::simtop;
use crate::core::config::{FromFile, Settings};
use crate::core::entity::ResolvedEntity;
use crate::core::generator::{Outcome, TopGenerator};
use crate::core::manifest::Manifest;
use crate::error::{Error, Hint, LastError};
use crate::util::anyerror::{AnyError, Fault};
use crate::util::environment;
use chrono::Local;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help};

#[derive(Debug, PartialEq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "auto" => Self::Auto,
            "always" => Self::Always,
            "never" => Self::Never,
            _ => return Err(AnyError(format!("unknown color mode '{}'", s))),
        })
    }
}

#[derive(Debug, PartialEq)]
pub struct Simtop {
    stdout: bool,
    json: bool,
    color: Option<ColorMode>,
    config: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    manifest: PathBuf,
}

impl Command for Simtop {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(simtop::HELP))?;
        Ok(Self {
            stdout: cli.check(Arg::flag("stdout"))?,
            json: cli.check(Arg::flag("json"))?,
            color: cli.get(Arg::option("color").value("when"))?,
            config: cli.get(Arg::option("config").value("path"))?,
            template: cli.get(Arg::option("template").value("path"))?,
            output: cli.get(Arg::option("output").value("path"))?,
            manifest: cli.require(Arg::positional("manifest"))?,
        })
    }

    fn execute(self) -> proc::Result {
        match self.color {
            Some(ColorMode::Always) => colored::control::set_override(true),
            Some(ColorMode::Never) => colored::control::set_override(false),
            _ => (),
        }
        if self.json == true && self.stdout == true {
            return Err(Error::ConflictingFlags(
                "--json".to_string(),
                "--stdout".to_string(),
            ))?;
        }
        let settings = self.load_settings()?;
        self.run(&self.manifest, settings)
    }
}

impl Simtop {
    /// Layers the command-line options over the settings file, if one is given.
    fn load_settings(&self) -> Result<Settings, Fault> {
        let mut settings = Settings::new();
        if let Some(t) = &self.template {
            settings = settings.template(t.clone());
        }
        if let Some(o) = &self.output {
            settings = settings.output(o.clone());
        }
        let file = match &self.config {
            Some(p) => Some(p.clone()),
            None => environment::config_from_env(),
        };
        if let Some(path) = file {
            match Settings::from_file(&path) {
                Ok(s) => settings.merge(Some(s)),
                Err(e) => {
                    return Err(Error::ConfigNotLoaded(
                        LastError(e.to_string()),
                        Hint::ConfigEnv,
                    ))?
                }
            }
        }
        Ok(settings)
    }

    fn run(&self, manifest: &PathBuf, settings: Settings) -> Result<(), Fault> {
        if manifest.is_file() == false {
            return Err(Error::ManifestNotFound(manifest.clone(), Hint::ManifestPath))?;
        }
        let instances = match Manifest::from_file(manifest) {
            Ok(m) => m.into_instances(),
            Err(e) => return Err(Error::ManifestNotLoaded(LastError(e.to_string())))?,
        };
        let instances = match instances {
            Ok(i) => i,
            Err(e) => return Err(Error::ManifestNotLoaded(LastError(e.to_string())))?,
        };

        if self.json == true {
            let entities = instances
                .iter()
                .map(|i| i.resolve())
                .collect::<Result<Vec<ResolvedEntity>, _>>()?;
            println!("{}", serde_json::to_string_pretty(&entities)?);
            return Ok(());
        }

        let mut top = TopGenerator::new(settings);
        if self.stdout == true {
            match top.render_at(&instances, &Local::now()) {
                Ok(text) => print!("{}", text),
                Err(e) => return Err(Error::GenerateFailed(LastError(e.to_string())))?,
            }
            return Ok(());
        }
        match top.try_generate(&instances) {
            Ok(Outcome::Written(path)) => {
                println!("info: wrote top-level file {:?}", path.display().to_string())
            }
            Ok(Outcome::Cached) => (),
            Err(e) => return Err(Error::GenerateFailed(LastError(e.to_string())))?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_color_mode() {
        assert_eq!(ColorMode::from_str("always"), Ok(ColorMode::Always));
        assert_eq!(ColorMode::from_str("never"), Ok(ColorMode::Never));
        assert_eq!(ColorMode::from_str("auto"), Ok(ColorMode::Auto));
        assert_eq!(ColorMode::from_str("sometimes").is_err(), true);
    }

    #[test]
    fn cli_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("simtop.toml");
        std::fs::write(&cfg, "template = \"a.templ\"\noutput = \"a.vhdl\"\n").unwrap();
        let cmd = Simtop {
            stdout: false,
            json: false,
            color: None,
            config: Some(cfg),
            template: None,
            output: Some(PathBuf::from("cli.vhdl")),
            manifest: PathBuf::from("circuit.toml"),
        };
        let settings = cmd.load_settings().unwrap();
        assert_eq!(settings.get_output(), PathBuf::from("cli.vhdl"));
        assert_eq!(settings.get_template(), dir.path().join("a.templ"));
    }

    #[test]
    fn missing_manifest_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("circuit.toml");
        let cmd = Simtop {
            stdout: false,
            json: false,
            color: None,
            config: None,
            template: None,
            output: Some(dir.path().join("top_sim.vhdl")),
            manifest: manifest.clone(),
        };
        let err = cmd.run(&cmd.manifest, Settings::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            Error::ManifestNotFound(manifest, Hint::ManifestPath).to_string()
        );
        assert_eq!(dir.path().join("top_sim.vhdl").exists(), false);
    }

    #[test]
    fn missing_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = Simtop {
            stdout: false,
            json: false,
            color: None,
            config: Some(dir.path().join("none.toml")),
            template: None,
            output: None,
            manifest: PathBuf::from("circuit.toml"),
        };
        assert_eq!(cmd.load_settings().is_err(), true);
    }
}
