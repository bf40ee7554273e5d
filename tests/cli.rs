use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

const RECT_SCRIPT: &str = r#"
[[events]]
type = "tool"
tool = "rectangle"

[[events]]
type = "press"
x = 10
y = 10

[[events]]
type = "drag"
x = 60
y = 40

[[events]]
type = "release"
x = 60
y = 40
"#;

#[test]
fn sketchpad_help_prints_usage() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vector drawing canvas"));
}

#[test]
fn no_flags_prints_usage() {
    sketchpad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("sketchpad --script <FILE>"));
}

#[test]
fn output_requires_script() {
    sketchpad_cmd()
        .args(["--output", "out.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn script_replay_writes_output_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("rect.toml");
    std::fs::write(&script, RECT_SCRIPT).unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[canvas]\nwidth = 120\nheight = 80\n").unwrap();
    let output = temp.path().join("result");

    sketchpad_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Canvas written to"));

    let png = temp.path().join("result.png");
    let mut file = std::fs::File::open(&png).unwrap();
    let surface = cairo::ImageSurface::create_from_png(&mut file).unwrap();
    assert_eq!((surface.width(), surface.height()), (120, 80));
}

#[test]
fn scripted_export_reports_outcome() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("exported.PNG");
    let script = temp.path().join("export.toml");
    std::fs::write(
        &script,
        format!(
            "{RECT_SCRIPT}\n[[events]]\ntype = \"export\"\n\n[answers]\nsave_paths = [{:?}]\n",
            target.display().to_string()
        ),
    )
    .unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image saved to"));

    assert!(target.exists());
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--script")
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn invalid_keybindings_config_fails() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("rect.toml");
    std::fs::write(&script, RECT_SCRIPT).unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "[keybindings]\nundo = [\"Super+Z\"]\n").unwrap();

    sketchpad_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid keybindings"));
}

#[test]
fn dump_config_schema_prints_json() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"keybindings\""));
}
