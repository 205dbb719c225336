/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_arg(name: &str) -> String {
    fixture(name).to_string_lossy().into_owned()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("gradle-depdiff").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("gradle-depdiff")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Unknown option
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("gradle-depdiff")
            .args(["compare", "--invalid-option"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("gradle-depdiff").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("gradle-depdiff")
            .args([
                "compare",
                &fixture_arg("old_report.json"),
                &fixture_arg("new_report.json"),
                "-f",
                "yaml",
            ])
            .assert()
            .code(2);
    }

    /// Exit code 3: Report file does not exist
    #[test]
    fn test_exit_code_missing_report() {
        cargo_bin_cmd!("gradle-depdiff")
            .args([
                "compare",
                "/nonexistent/old.json",
                &fixture_arg("new_report.json"),
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read report"));
    }

    /// Exit code 3: Configuration absent from the dump
    #[test]
    fn test_exit_code_missing_configuration() {
        cargo_bin_cmd!("gradle-depdiff")
            .args([
                "tree",
                "-i",
                &fixture_arg("dependencies.txt"),
                "--configuration",
                "stagingCompileClasspath",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("stagingCompileClasspath"));
    }

    /// Exit code 2: Exclude pattern rejected before any report is read
    #[test]
    fn test_exit_code_invalid_exclude_pattern() {
        cargo_bin_cmd!("gradle-depdiff")
            .args([
                "compare",
                &fixture_arg("old_report.json"),
                &fixture_arg("new_report.json"),
                "-e",
                "**",
            ])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("only wildcards"));
    }
}

mod collect_tests {
    use super::*;

    #[test]
    fn test_collect_to_stdout() {
        let output = cargo_bin_cmd!("gradle-depdiff")
            .args([
                "--plain",
                "collect",
                "-i",
                &fixture_arg("dependencies.txt"),
                "--version-name",
                "1.1.0",
                "--commit",
                "9a8b7c6d",
            ])
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["v"], "stats/0.0.1");
        assert_eq!(report["Context"]["Tool"]["Name"], "gradle-depdiff");
        assert_eq!(report["Context"]["Git"]["Commit"], "9a8b7c6d");
        assert_eq!(report["Build"]["VersionName"], "1.1.0");
        assert_eq!(report["Build"]["BuildVariant"], "release");

        let compile = report["Build"]["Dependencies"]["Compile"].as_array().unwrap();
        assert_eq!(compile.len(), 8);
        assert_eq!(compile[0]["Group"], "androidx.annotation");
        assert_eq!(compile[7]["Name"], "kotlinx-coroutines-android");
        assert_eq!(compile[7]["Version"], "1.8.1");
    }

    #[test]
    fn test_collect_from_stdin() {
        let dump = fs::read_to_string(fixture("dependencies.txt")).unwrap();
        cargo_bin_cmd!("gradle-depdiff")
            .args(["--plain", "collect", "--variant", "debug"])
            .write_stdin(dump)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"BuildVariant\": \"debug\""))
            .stdout(predicate::str::contains("leakcanary").not());
    }

    #[test]
    fn test_collect_configuration_without_dependencies_warns() {
        cargo_bin_cmd!("gradle-depdiff")
            .args([
                "--plain",
                "collect",
                "-i",
                &fixture_arg("dependencies.txt"),
                "--configuration",
                "releaseRuntimeClasspath",
            ])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("has no dependencies"))
            .stdout(predicate::str::contains("\"Compile\": []"));
    }

    #[test]
    fn test_collect_to_file_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let report_path = dir.path().join("report.json");
        let report_arg = report_path.to_string_lossy().into_owned();
        let args = [
            "--plain",
            "collect",
            "-i",
            &fixture_arg("dependencies.txt"),
            "-o",
            &report_arg,
        ];

        cargo_bin_cmd!("gradle-depdiff")
            .args(args)
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Output written"));
        assert!(report_path.exists());

        cargo_bin_cmd!("gradle-depdiff")
            .args(args)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("already exists"));

        cargo_bin_cmd!("gradle-depdiff")
            .args(args)
            .arg("--overwrite")
            .assert()
            .code(0);
    }

    #[test]
    fn test_collect_malformed_dump_fails() {
        let dir = TempDir::new().unwrap();
        let dump = dir.path().join("broken.txt");
        fs::write(
            &dump,
            "releaseCompileClasspath\n+--- g:a:1\n|    |    +--- g:b:1\n",
        )
        .unwrap();

        cargo_bin_cmd!("gradle-depdiff")
            .args(["--plain", "collect", "-i", &dump.to_string_lossy()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("line 2"));
    }

    #[test]
    fn test_collected_reports_compare_cleanly() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        for (path, version) in [(&first, "1.0.0"), (&second, "1.0.1")] {
            cargo_bin_cmd!("gradle-depdiff")
                .args([
                    "--plain",
                    "collect",
                    "-i",
                    &fixture_arg("dependencies.txt"),
                    "--version-name",
                    version,
                    "-o",
                    &path.to_string_lossy(),
                ])
                .assert()
                .code(0);
        }

        cargo_bin_cmd!("gradle-depdiff")
            .args([
                "--plain",
                "compare",
                &first.to_string_lossy(),
                &second.to_string_lossy(),
                "--fail-on-changes",
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Comparing releases 1.0.0...1.0.1"))
            .stdout(predicate::str::contains("No dependency changes."));
    }
}

mod compare_tests {
    use super::*;

    fn compare_args() -> Vec<String> {
        vec![
            "--plain".to_string(),
            "compare".to_string(),
            fixture_arg("old_report.json"),
            fixture_arg("new_report.json"),
        ]
    }

    #[test]
    fn test_compare_text() {
        cargo_bin_cmd!("gradle-depdiff")
            .args(compare_args())
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Comparing releases 1.0.0...1.1.0"))
            .stdout(predicate::str::contains("Total dependencies: 5 -> 5"))
            .stdout(predicate::str::contains("  + io.coil-kt:coil:2.7.0"))
            .stdout(predicate::str::contains(
                "  - com.jakewharton.timber:timber:5.0.1",
            ))
            .stdout(predicate::str::contains(
                "  ~ androidx.core:core 1.12.0 -> 1.13.1",
            ))
            .stdout(predicate::str::contains("okhttp").not());
    }

    #[test]
    fn test_compare_fail_on_changes() {
        cargo_bin_cmd!("gradle-depdiff")
            .args(compare_args())
            .arg("--fail-on-changes")
            .assert()
            .code(1);
    }

    #[test]
    fn test_compare_same_report_has_no_changes() {
        cargo_bin_cmd!("gradle-depdiff")
            .args([
                "--plain",
                "compare",
                &fixture_arg("old_report.json"),
                &fixture_arg("old_report.json"),
                "--fail-on-changes",
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("No dependency changes."));
    }

    #[test]
    fn test_compare_json() {
        let output = cargo_bin_cmd!("gradle-depdiff")
            .args(compare_args())
            .args(["-f", "json"])
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["old"]["label"], "1.0.0");
        assert_eq!(value["new"]["label"], "1.1.0");
        assert_eq!(value["summary"]["added"], 1);
        assert_eq!(value["summary"]["removed"], 1);
        assert_eq!(value["summary"]["changed"], 2);
        assert_eq!(value["changed"][0]["previousVersion"], "1.12.0");
        assert_eq!(value["changed"][0]["newVersion"], "1.13.1");
    }

    #[test]
    fn test_compare_markdown() {
        cargo_bin_cmd!("gradle-depdiff")
            .args(compare_args())
            .args(["--format", "md"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains(
                "# Dependency changes: 1.0.0...1.1.0",
            ))
            .stdout(predicate::str::contains("## Added (1)"))
            .stdout(predicate::str::contains("## Removed (1)"))
            .stdout(predicate::str::contains("## Changed (2)"));
    }

    #[test]
    fn test_compare_exclude_patterns() {
        cargo_bin_cmd!("gradle-depdiff")
            .args(compare_args())
            .args(["-e", "androidx.*", "-e", "com.unused:*"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Total dependencies: 3 -> 3"))
            .stdout(predicate::str::contains("androidx.core").not())
            .stderr(predicate::str::contains("com.unused:*"));
    }

    #[test]
    fn test_compare_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("diff.md");

        cargo_bin_cmd!("gradle-depdiff")
            .args(compare_args())
            .args(["-f", "markdown", "-o", &output_path.to_string_lossy()])
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty());

        let written = fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("## Changed (2)"));
    }
}

mod tree_tests {
    use super::*;

    #[test]
    fn test_tree_text_reproduces_layout() {
        cargo_bin_cmd!("gradle-depdiff")
            .args(["--plain", "tree", "-i", &fixture_arg("dependencies.txt")])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("+--- project :core:model\n"))
            .stdout(predicate::str::contains(
                "|         \\--- org.jetbrains:annotations:13.0 -> 23.0.0\n",
            ))
            .stdout(predicate::str::contains(
                "\\--- org.jetbrains.kotlinx:kotlinx-coroutines-android:{strictly 1.7.3} -> 1.8.1 (c)\n",
            ));
    }

    #[test]
    fn test_tree_json() {
        let output = cargo_bin_cmd!("gradle-depdiff")
            .args([
                "--plain",
                "tree",
                "-i",
                &fixture_arg("dependencies.txt"),
                "-f",
                "json",
            ])
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["nodeCount"], 12);
        assert_eq!(value["depth"], 3);
        assert_eq!(value["dependencies"].as_array().unwrap().len(), 3);
        assert_eq!(value["summary"].as_array().unwrap().len(), 8);
    }
}
