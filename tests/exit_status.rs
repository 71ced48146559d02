//! End-to-end runs of the built binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn write_input(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, content).expect("error writing test input");
    path
}

fn check(path: &Path, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_minic-check"))
        .args(extra_args)
        .arg(path)
        .output()
        .expect("error running minic-check")
}

#[test]
fn accepted_program_exits_zero_and_stays_silent() {
    let path = write_input(
        "minic-check-accepted.mc",
        "int main ( ) {\n  int x = 1 ;\n}\n",
    );
    let output = check(&path, &[]);
    fs::remove_file(&path).ok();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn rejected_program_exits_one_and_reports_on_stderr() {
    let path = write_input(
        "minic-check-rejected.mc",
        "int main ( ) {\n  int x 1 ;\n}\n",
    );
    let output = check(&path, &[]);
    fs::remove_file(&path).ok();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error(syntax)"));
}

#[test]
fn scan_stage_dumps_tokens_to_stdout() {
    let path = write_input("minic-check-dump.mc", "int x = 1 ;\n");
    let output = check(&path, &["-t", "scan"]);
    fs::remove_file(&path).ok();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "1 int\n1 IDENTIFIER x\n1 =\n1 NUMBER 1\n1 ;\n"
    );
}
