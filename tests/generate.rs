use chrono::{TimeZone, Utc};
use simtop::core::config::FromFile;
use simtop::core::manifest::Manifest;
use simtop::{
    Cache, Direction, EntityComponent, EntityDefinition, Instance, Outcome, Port, RawPort,
    Settings, TopGenerator,
};
use std::path::{Path, PathBuf};

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn circuit() -> Vec<Instance> {
    vec![
        EntityDefinition::new(
            "A",
            vec![
                Port::new("x", Direction::In, 1).unwrap(),
                Port::new("y", Direction::Out, 8).unwrap(),
            ],
        )
        .into(),
        EntityComponent::new("B", vec![RawPort::new("z", 0, 1)]).into(),
    ]
}

fn settings(out: &Path) -> Settings {
    Settings::new()
        .template(root().join("templates/top_sim.templ"))
        .output(out.to_path_buf())
}

#[test]
fn two_entities_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("top_sim.vhdl");
    let top = TopGenerator::new(settings(&out));
    let date = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
    let text = top.render_at(&circuit(), &date).unwrap();

    // port list is one flat list across both entities
    let a_x = text.find("      A_x : in std_logic;\n").unwrap();
    let a_y = text
        .find("      A_y : out std_logic_vector(7 downto 0);\n")
        .unwrap();
    let b_z = text.find("      B_z : inout std_logic\n").unwrap();
    assert_eq!(a_x < a_y && a_y < b_z, true);

    // two independent component stanzas
    assert_eq!(text.matches("   end component ;").count(), 2);
    assert_eq!(
        text.contains(
            "   component B\n      port (\n         z : inout std_logic\n      );\n   end component ;\n"
        ),
        true
    );

    // two independent map stanzas
    assert_eq!(text.contains("   A_map : A port map (\n      x => A_x,\n      y => A_y\n   );\n"), true);
    assert_eq!(text.contains("   B_map : B port map (\n      z => B_z\n   );\n"), true);

    assert_eq!(text.contains("Generated on 17/05/2024 12:30:00"), true);
    assert_eq!(
        text.matches(&format!("Autogenerated by simtop {} --", env!("CARGO_PKG_VERSION")))
            .count(),
        3
    );
    for token in ["%date%", "%ports%", "%components%", "%map%"] {
        assert_eq!(text.contains(token), false);
    }
    // nothing was written by rendering alone
    assert_eq!(out.exists(), false);
}

#[test]
fn generate_writes_once_until_invalidated() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("top_sim.vhdl");
    let mut top = TopGenerator::new(settings(&out));

    assert_eq!(top.try_generate(&circuit()).unwrap(), Outcome::Written(out.clone()));
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written.contains("B_map : B port map ("), true);

    std::fs::remove_file(&out).unwrap();
    top.generate(&circuit());
    assert_eq!(out.exists(), false);

    top.invalidate();
    top.generate(&circuit());
    assert_eq!(out.exists(), true);
    assert_eq!(top.get_state(), Cache::Fresh);
}

#[test]
fn manifest_and_config_from_disk() {
    let manifest = Manifest::from_file(&root().join("tests/data/circuit.toml")).unwrap();
    let instances = manifest.into_instances().unwrap();
    assert_eq!(instances, circuit());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("top_sim.vhdl");
    let mut config = Settings::from_file(&root().join("tests/data/simtop.toml")).unwrap();
    config.merge(None);
    let mut cli = Settings::new().output(out.clone());
    cli.merge(Some(config));

    let mut top = TopGenerator::new(cli);
    top.generate(&instances);
    assert_eq!(top.get_state(), Cache::Fresh);
    assert_eq!(
        std::fs::read_to_string(&out)
            .unwrap()
            .contains("      A_y : out std_logic_vector(7 downto 0);"),
        true
    );
}
