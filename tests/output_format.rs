// tests/output_format.rs

mod common;

use assert_cmd::prelude::*;
use common::{collect_cmd, create_file, label};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_content_is_copied_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let content = "línea uno\r\n\tlínea dos\n\n";
    create_file(temp.path(), ".env.local", content)?;
    let output_path = temp.path().join("out.txt");

    collect_cmd()
        .arg(".env.local")
        .arg("--root")
        .arg(temp.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output_path)?,
        format!(
            "--- INICIO DEL ARCHIVO: .env.local ---\n{}\n--- FIN DEL ARCHIVO: .env.local ---\n\n",
            content
        )
    );
    temp.close()?;
    Ok(())
}

#[test]
fn test_directory_labels_are_relative_to_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "src/components/Button.vue", "<template/>")?;
    create_file(temp.path(), "src/App.vue", "<App/>")?;
    create_file(temp.path(), "src/main.js", "main")?;
    let output_path = temp.path().join("out.txt");

    collect_cmd()
        .arg("src/")
        .arg("--root")
        .arg(temp.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let output = fs::read_to_string(&output_path)?;
    let starts: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("--- INICIO DEL ARCHIVO:"))
        .collect();
    assert_eq!(
        starts,
        vec![
            format!("--- INICIO DEL ARCHIVO: {} ---", label("src/App.vue")),
            format!(
                "--- INICIO DEL ARCHIVO: {} ---",
                label("src/components/Button.vue")
            ),
            format!("--- INICIO DEL ARCHIVO: {} ---", label("src/main.js")),
        ]
    );
    assert!(!output.contains("INICIO DEL ARCHIVO: components"));
    temp.close()?;
    Ok(())
}

#[test]
fn test_repeated_runs_are_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "package.json", "{}")?;
    create_file(temp.path(), "src/b.js", "b")?;
    create_file(temp.path(), "src/a.js", "a")?;
    create_file(temp.path(), "src/nested/c.js", "c")?;
    // The output lives inside the walked directory.
    let output_path = temp.path().join("src").join("codigo_proyecto.txt");

    let run = || {
        collect_cmd()
            .args(["package.json", "src/", "missing.txt"])
            .arg("--root")
            .arg(temp.path())
            .arg("-o")
            .arg(&output_path)
            .assert()
            .success();
        fs::read(&output_path)
    };

    let first = run()?;
    let second = run()?;
    assert_eq!(first, second);
    assert!(!String::from_utf8(first)?.contains("codigo_proyecto.txt"));
    temp.close()?;
    Ok(())
}

#[test]
fn test_existing_output_is_overwritten() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.txt", "fresh")?;
    let output_path = temp.path().join("out.txt");
    fs::write(&output_path, "stale content that must disappear")?;

    collect_cmd()
        .arg("a.txt")
        .arg("--root")
        .arg(temp.path())
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success();

    let output = fs::read_to_string(&output_path)?;
    assert!(!output.contains("stale"));
    assert!(output.contains("fresh"));
    temp.close()?;
    Ok(())
}
