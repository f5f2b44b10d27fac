use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slide-composer"))
        .args(args)
        .env_remove("SLIDES_ACCENT_COLOR")
        .env_remove("SLIDES_BASE_DIR")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_classify_command_iframe() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let section_path = temp_dir.path().join("section.md");
    fs::write(
        &section_path,
        r#"<iframe src="https://x.test/a"></iframe>"#,
    )
    .expect("Failed to write section file");

    let output = run_command(&["classify", section_path.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Iframe"), "Unexpected output: {}", stdout);
    assert!(stdout.contains("https://x.test/a"), "Unexpected output: {}", stdout);
}

#[test]
fn test_classify_command_with_metadata() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let section_path = temp_dir.path().join("section.md");
    fs::write(&section_path, "Fine print").expect("Failed to write section file");

    let output = run_command(&[
        "classify",
        section_path.to_str().unwrap(),
        "--meta",
        "font=small",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("font_size: 16"), "Unexpected output: {}", stdout);
}

#[test]
fn test_classify_command_resolves_included_file_against_base_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("notes.md"), "Included notes").unwrap();
    let section_path = temp_dir.path().join("section.md");
    fs::write(&section_path, "./notes.md").unwrap();

    let output = run_command(&[
        "classify",
        section_path.to_str().unwrap(),
        "--base-dir",
        temp_dir.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Included notes"), "Unexpected output: {}", stdout);
}

#[test]
fn test_compose_command_tabs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut paths = Vec::new();
    for (name, body) in [("left.md", "Left pane"), ("a.md", "First tab"), ("b.md", "Second tab")] {
        let path = temp_dir.path().join(name);
        fs::write(&path, body).unwrap();
        paths.push(path);
    }

    let output = run_command(&[
        "compose",
        "--type",
        "tabs-on-right",
        "--title",
        "Tabs",
        "--section",
        paths[0].to_str().unwrap(),
        "--section",
        paths[1].to_str().unwrap(),
        "--section",
        paths[2].to_str().unwrap(),
        "--meta",
        "1:tab-label=Overview",
    ]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"Overview\""), "Unexpected output: {}", stdout);
    assert!(stdout.contains("\"Tab 2\""), "Unexpected output: {}", stdout);
}

#[test]
fn test_compose_command_rejects_three_sections() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("s.md");
    fs::write(&path, "Body").unwrap();
    let path = path.to_str().unwrap();

    let output = run_command(&[
        "compose", "--section", path, "--section", path, "--section", path,
    ]);
    assert!(!output.status.success(), "Command should fail: {:?}", output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("more than two sections"),
        "Unexpected stderr: {}",
        stderr
    );
}
