use std::path::Path;

use tempfile::TempDir;

fn javelin_bin_path() -> std::path::PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_javelin") {
        return std::path::PathBuf::from(path);
    }

    let this_test = std::env::current_exe().expect("current_exe");
    let deps_dir = this_test.parent().expect("deps dir");
    let debug_dir = deps_dir.parent().expect("debug dir");

    let direct = {
        #[cfg(windows)]
        {
            debug_dir.join("javelin.exe")
        }
        #[cfg(not(windows))]
        {
            debug_dir.join("javelin")
        }
    };
    if direct.exists() {
        return direct;
    }

    let mut candidates: Vec<_> = std::fs::read_dir(deps_dir)
        .expect("read deps dir")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            let Some(name) = p.file_name().and_then(|n| n.to_str()) else { return false };
            name.starts_with("javelin-") && !name.ends_with(".d") && p.is_file()
        })
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .next()
        .expect("unable to locate javelin binary in target/debug or target/debug/deps")
}

fn javelin(project: &Path, args: &[&str]) -> std::process::Output {
    std::process::Command::new(javelin_bin_path())
        .current_dir(project)
        .args(args)
        .output()
        .expect("run javelin")
}

#[test]
fn init_scaffolds_a_runnable_project_skeleton() {
    let project = TempDir::new().unwrap();

    let output = javelin(project.path(), &["init"]);
    assert!(
        output.status.success(),
        "init failed: status={} stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Initialized"), "missing summary line");

    assert!(project.path().join("javelin.toml").is_file());
    assert!(project.path().join("src/Main.java").is_file());
    assert!(project.path().join("resources").is_dir());
    assert!(project.path().join("lib").is_dir());
    assert!(project.path().join(".gitignore").is_file());
}

#[test]
fn init_refuses_to_reinitialize() {
    let project = TempDir::new().unwrap();
    assert!(javelin(project.path(), &["init"]).status.success());

    let output = javelin(project.path(), &["init"]);
    assert!(!output.status.success(), "second init must fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("already initialized"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn status_requires_an_initialized_project() {
    let project = TempDir::new().unwrap();

    let output = javelin(project.path(), &["status"]);
    assert!(!output.status.success(), "status must fail without a manifest");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("javelin init"), "unexpected stderr: {stderr}");
}

#[test]
fn status_lists_fresh_sources_as_new() {
    let project = TempDir::new().unwrap();
    assert!(javelin(project.path(), &["init"]).status.success());

    let output = javelin(project.path(), &["status"]);
    assert!(
        output.status.success(),
        "status failed: stderr={}",
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Main.java"), "missing Main.java: {stdout}");
    assert!(stdout.contains("1 changed"), "unexpected summary: {stdout}");
}

#[test]
fn status_json_is_machine_readable() {
    let project = TempDir::new().unwrap();
    assert!(javelin(project.path(), &["init"]).status.success());

    let output = javelin(project.path(), &["status", "--json"]);
    assert!(
        output.status.success(),
        "status --json failed: stderr={}",
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(payload["manifest"]["main_class"], serde_json::json!("Main"));
    assert_eq!(payload["manifest"]["dependencies"], serde_json::json!(0));
    assert_eq!(payload["summary"]["stale"], serde_json::json!(true));
    assert_eq!(payload["summary"]["never_built"], serde_json::json!(true));
    assert!(
        payload["new"]
            .as_array()
            .expect("new array")
            .iter()
            .any(|v| v == "Main.java"),
        "Main.java not reported as new: {stdout}"
    );
}

#[test]
fn status_reports_the_manifest_summary() {
    let project = TempDir::new().unwrap();
    assert!(javelin(project.path(), &["init"]).status.success());
    std::fs::write(
        project.path().join("javelin.toml"),
        concat!(
            "main_class = \"com.acme.App\"\n",
            "\n",
            "[dependencies.\"com.google.code.gson/gson\"]\n",
            "origin = \"maven\"\n",
            "version = \"2.10.1\"\n",
        ),
    )
    .unwrap();

    let output = javelin(project.path(), &["status"]);
    assert!(
        output.status.success(),
        "status failed: stderr={}",
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("main class com.acme.App"),
        "missing main class: {stdout}"
    );
    assert!(stdout.contains("1 dependencies"), "missing dependency count: {stdout}");

    let output = javelin(project.path(), &["status", "--json"]);
    assert!(output.status.success());
    let payload: serde_json::Value =
        serde_json::from_str(&String::from_utf8(output.stdout).unwrap()).expect("valid JSON");
    assert_eq!(payload["manifest"]["main_class"], serde_json::json!("com.acme.App"));
    assert_eq!(payload["manifest"]["dependencies"], serde_json::json!(1));
}

#[test]
fn install_rejects_a_malformed_target() {
    let project = TempDir::new().unwrap();
    assert!(javelin(project.path(), &["init"]).status.success());

    // No slash, so this parses as neither a purl nor a GitHub reference.
    // Parsing fails before any network request.
    let output = javelin(project.path(), &["install", "not-a-dependency"]);
    assert!(!output.status.success(), "install must reject the target");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid GitHub reference"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn install_with_nothing_listed_is_a_no_op() {
    let project = TempDir::new().unwrap();
    assert!(javelin(project.path(), &["init"]).status.success());

    let output = javelin(project.path(), &["install"]);
    assert!(
        output.status.success(),
        "restore failed: stderr={}",
        String::from_utf8_lossy(&output.stderr),
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("No dependencies"),
        "unexpected stdout: {stdout}"
    );
}
