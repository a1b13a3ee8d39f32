//! End-to-end tests for the header splitter.
//!
//! Runs the generator over two trimmed-down SDK headers (`1.0.0` and
//! `1.0.1`) and checks the generated interface headers on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use openvr_header_splitter::{generate_interfaces, GeneratorConfig, SplitterError};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_expected(name: &str) -> String {
    let path = fixture_dir("expected").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Run the generator over the SDK fixtures into a fresh output directory.
fn run_fixtures(temp_dir: &TempDir) -> PathBuf {
    let out = temp_dir.path().join("interfaces");
    let config = GeneratorConfig::default()
        .with_input_dir(fixture_dir("sdk"))
        .with_output_dir(&out)
        .with_versions(["1.0.0", "1.0.1"]);
    generate_interfaces(&config).expect("generation should succeed");
    out
}

/// Run the generator over headers written into a temp input directory.
fn run_headers(temp_dir: &TempDir, headers: &[(&str, &str)]) -> PathBuf {
    let input = temp_dir.path().join("sdk");
    fs::create_dir_all(&input).unwrap();
    for (version, text) in headers {
        fs::write(input.join(format!("openvr-{version}.h")), text).unwrap();
    }

    let out = temp_dir.path().join("interfaces");
    let config = GeneratorConfig::default()
        .with_input_dir(&input)
        .with_output_dir(&out)
        .with_versions(headers.iter().map(|(version, _)| *version));
    generate_interfaces(&config).expect("generation should succeed");
    out
}

/// Read every file in a directory into a name -> content map.
fn read_outputs(dir: &Path) -> BTreeMap<String, String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let name = entry.file_name().to_string_lossy().into_owned();
            (name, fs::read_to_string(entry.path()).unwrap())
        })
        .collect()
}

#[test]
fn test_generated_file_names() {
    let temp_dir = tempdir().unwrap();
    let out = run_fixtures(&temp_dir);

    let names: Vec<String> = read_outputs(&out).into_keys().collect();
    assert_eq!(
        names,
        vec![
            "IVRChaperone_003.h",
            "IVRSystem_017.h",
            "IVRSystem_019.h",
            "openvr.h",
            "vrcompat.h",
            "vrtypes.h",
        ]
    );
}

#[test]
fn test_expected_contents() {
    let temp_dir = tempdir().unwrap();
    let out = run_fixtures(&temp_dir);

    for name in ["IVRChaperone_003.h", "openvr.h"] {
        let actual = fs::read_to_string(out.join(name)).unwrap();
        assert_eq!(actual, load_expected(name), "mismatch in {name}");
    }
}

#[test]
fn test_idempotent() {
    let temp_dir = tempdir().unwrap();
    let out = run_fixtures(&temp_dir);
    let first = read_outputs(&out);

    run_fixtures(&temp_dir);
    let second = read_outputs(&out);

    assert_eq!(first, second);
}

#[test]
fn test_no_guard_lines() {
    let temp_dir = tempdir().unwrap();
    let out = run_fixtures(&temp_dir);

    for (name, content) in read_outputs(&out) {
        for line in content.lines() {
            assert!(
                !line.contains("_OPENVR_API") && !line.contains("_INCLUDE_"),
                "guard line left in {name}: {line}"
            );
        }
    }
}

#[test]
fn test_plain_namespace() {
    let temp_dir = tempdir().unwrap();
    let out = run_fixtures(&temp_dir);
    let content = fs::read_to_string(out.join("vrtypes.h")).unwrap();

    assert_eq!(content.lines().filter(|l| *l == "namespace vr").count(), 1);
    assert!(!content.contains("namespace vrtypes"));
    assert!(!content.contains("Close custom namespace"));
    assert!(content.contains("struct HmdVector3_t"), "1.0.1 body expected");
}

#[test]
fn test_versioned_namespace() {
    let temp_dir = tempdir().unwrap();
    let out = run_fixtures(&temp_dir);
    let content = fs::read_to_string(out.join("IVRSystem_019.h")).unwrap();

    assert!(content.contains("namespace vr\n{\nnamespace IVRSystem_019\n{\n"));
    assert!(content.ends_with("} // Close custom namespace\n"));
    assert!(!content.contains("vr::"));
    assert!(content.contains("virtual HmdMatrix34_t GetEyeToHeadTransform( EVREye eEye ) = 0;"));
}

#[test]
fn test_older_versioned_interface_kept() {
    let temp_dir = tempdir().unwrap();
    let out = run_fixtures(&temp_dir);
    let content = fs::read_to_string(out.join("IVRSystem_017.h")).unwrap();

    assert!(content.contains("namespace IVRSystem_017"));
    assert!(!content.contains("GetTrackerPosition"));
}

#[test]
fn test_import_order() {
    let temp_dir = tempdir().unwrap();
    let out = run_headers(
        &temp_dir,
        &[("1.0.0", "// A.h\nint a;\n// B.h\nint b;\n// C.h\nint c;\n")],
    );

    assert_eq!(
        fs::read_to_string(out.join("C.h")).unwrap(),
        "#pragma once\n#include \"A.h\"\n#include \"B.h\"\n// C.h\nint c;\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("A.h")).unwrap(),
        "#pragma once\n// A.h\nint a;\n"
    );
}

#[test]
fn test_version_precedence() {
    let temp_dir = tempdir().unwrap();
    let out = run_headers(
        &temp_dir,
        &[
            ("1.0.0", "// Foo.h\nint old_body;\n"),
            ("1.0.1", "// Foo.h\nint new_body;\n"),
        ],
    );

    let content = fs::read_to_string(out.join("Foo.h")).unwrap();
    assert!(content.contains("new_body"));
    assert!(!content.contains("old_body"));
    assert!(!content.contains("#include \"Foo.h\""));
}

#[test]
fn test_versioned_override() {
    let temp_dir = tempdir().unwrap();
    let out = run_headers(
        &temp_dir,
        &[(
            "1.0.0",
            "// IVRFoo.h\nnamespace vr\n{\nstatic const char * const IVRFoo_Version = \"IVRFoo_002\";\n}\n",
        )],
    );

    assert!(out.join("IVRFoo_002.h").exists());
    assert!(!out.join("IVRFoo.h").exists());
}

#[test]
fn test_clean_slate() {
    let temp_dir = tempdir().unwrap();
    let out = temp_dir.path().join("interfaces");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("Stale.h"), "#pragma once\n").unwrap();

    run_fixtures(&temp_dir);

    assert!(!out.join("Stale.h").exists());
    assert!(out.join("vrtypes.h").exists());
}

#[test]
fn test_missing_version_aborts_run() {
    let temp_dir = tempdir().unwrap();
    let out = temp_dir.path().join("interfaces");
    let config = GeneratorConfig::default()
        .with_input_dir(fixture_dir("sdk"))
        .with_output_dir(&out)
        .with_versions(["1.0.0", "9.9.9"]);

    let err = generate_interfaces(&config).unwrap_err();

    assert!(matches!(err, SplitterError::InputRead { .. }));
    assert!(err.to_string().contains("openvr-9.9.9.h"));
    // Headers from versions before the failure stay on disk
    assert!(out.join("IVRSystem_017.h").exists());
}
