use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn molsketch_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("molsketch").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    molsketch_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Annotation and key classification tools",
        ));
}

#[test]
fn keys_classifies_codes_and_names() {
    let temp = TempDir::new().unwrap();
    molsketch_cmd(&temp)
        .args(["keys", "37", "f5", "46"])
        .assert()
        .success()
        .stdout(predicate::str::contains("37\tLeft\tnavigation,arrow"))
        .stdout(predicate::str::contains("116\tF5\tfunction"))
        .stdout(predicate::str::contains("46\tDelete\t-"));
}

#[test]
fn keys_reports_unknown_names() {
    let temp = TempDir::new().unwrap();
    molsketch_cmd(&temp)
        .args(["keys", "Hyper"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key name 'Hyper'"));
}

#[test]
fn keys_uses_config_overrides() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("molsketch");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[[keys]]\ncode = 226\nname = \"IntlBackslash\"\ncategories = [\"letter\"]\n",
    )
    .unwrap();

    molsketch_cmd(&temp)
        .args(["keys", "226"])
        .assert()
        .success()
        .stdout(predicate::str::contains("226\tIntlBackslash\tletter"));
}

#[test]
fn render_writes_png() {
    let temp = TempDir::new().unwrap();
    let scene = temp.path().join("scene.toml");
    std::fs::write(
        &scene,
        r#"
[[annotation]]
type = "rectangle"
x = 10
y = 10
width = 50
height = 30
color = "blue"

[[annotation]]
type = "arrow"
tail = [70, 60]
head = [120, 90]
selected = true
"#,
    )
    .unwrap();
    let output = temp.path().join("out.png");

    molsketch_cmd(&temp)
        .arg("render")
        .arg("--scene")
        .arg(&scene)
        .arg("--output")
        .arg(&output)
        .args(["--width", "160", "--height", "120", "--background", "white"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn render_rejects_invalid_geometry() {
    let temp = TempDir::new().unwrap();
    let scene = temp.path().join("scene.toml");
    std::fs::write(
        &scene,
        "[[annotation]]\ntype = \"rectangle\"\nx = 0\ny = 0\nwidth = -5\nheight = 5\n",
    )
    .unwrap();

    molsketch_cmd(&temp)
        .arg("render")
        .arg("--scene")
        .arg(&scene)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scene contains invalid geometry"));
}
