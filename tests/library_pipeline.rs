mod common;

use common::{write_pinned, PINNED_PREFIX};
use rename2date::config::TargetSpecBuilder;
use rename2date::errors::{ConfigError, Error};
use rename2date::output::{LogLineReporter, NoOpReporter};
use rename2date::{execute, preview};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_execute_basic_success() -> anyhow::Result<()> {
    // 1. Setup
    let temp_dir = tempdir()?;
    write_pinned(&temp_dir.path().join("photo.jpg"), "jpeg")?;
    write_pinned(&temp_dir.path().join("notes.txt"), "text")?;

    let spec = TargetSpecBuilder::new()
        .directory(temp_dir.path().to_str().unwrap())
        .build()?;

    // 2. Execute
    let mut reporter = LogLineReporter::new(Vec::new());
    let summary = execute(&spec, &mut reporter)?;

    // 3. Assert
    assert_eq!(summary.renamed_count, 1);
    assert_eq!(summary.skipped_count, 0);
    assert_eq!(summary.error_count, 0);

    let log = String::from_utf8(reporter.into_inner())?;
    assert_eq!(
        log,
        format!("RENAMED: photo.jpg -> {}_photo.jpg\n", PINNED_PREFIX)
    );
    assert!(temp_dir.path().join("notes.txt").exists());

    Ok(())
}

#[test]
fn test_preview_matches_execute() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    write_pinned(&temp_dir.path().join("a.jpg"), "a")?;
    write_pinned(&temp_dir.path().join("b.jpg"), "b")?;

    let spec = TargetSpecBuilder::new()
        .directory(temp_dir.path().to_str().unwrap())
        .build()?;

    let entries = preview(&spec)?;
    let mut names: Vec<_> = entries.iter().map(|e| e.resolved_name.clone()).collect();
    names.sort();

    execute(&spec, &mut NoOpReporter)?;

    let mut on_disk: Vec<_> = fs::read_dir(temp_dir.path())?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    on_disk.sort();

    assert_eq!(names, on_disk);
    Ok(())
}

#[test]
fn test_collision_gets_counter_suffix() -> anyhow::Result<()> {
    let temp_dir = tempdir()?;
    write_pinned(&temp_dir.path().join("photo.jpg"), "new")?;
    fs::write(
        temp_dir.path().join(format!("{}_photo.jpg", PINNED_PREFIX)),
        "existing",
    )?;

    let spec = TargetSpecBuilder::new()
        .directory(temp_dir.path().to_str().unwrap())
        .extension("png")
        .build()?;
    // Nothing matches .png, so nothing is touched.
    assert_eq!(execute(&spec, &mut NoOpReporter)?.total(), 0);

    let spec = TargetSpecBuilder::new()
        .directory(temp_dir.path().to_str().unwrap())
        .build()?;
    let entries = preview(&spec)?;
    let photo = entries
        .iter()
        .find(|e| e.original_name == "photo.jpg")
        .expect("photo.jpg should be previewed");
    assert_eq!(photo.resolved_name, format!("{}_photo-1.jpg", PINNED_PREFIX));
    assert!(photo.collision);

    Ok(())
}

#[test]
fn test_builder_rejects_bad_settings() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path().to_str().unwrap();

    let err = TargetSpecBuilder::new().build().unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::MissingDirectory)));

    let err = TargetSpecBuilder::new()
        .directory(dir)
        .extension("   ")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::EmptyExtension)));

    let err = TargetSpecBuilder::new()
        .directory(dir)
        .pattern("%Y-%Q")
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidPattern { .. })
    ));
}
