use std::{fs, process::Command};

fn tally() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tally"))
}

#[test]
fn expression_argument_prints_value() {
    let output = tally().arg("77 * 12").output().expect("spawn tally");
    assert!(output.status.success(), "tally failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "924\n");
}

#[test]
fn leading_sign_is_read_as_expression() {
    let output = tally().arg("-5 / -4 % 3").output().expect("spawn tally");
    assert!(output.status.success(), "tally failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1.25\n");
}

#[test]
fn postfix_flag_prints_reverse_polish_order() {
    let output = tally().args(["--postfix", "(11+2)12"])
                        .output()
                        .expect("spawn tally --postfix");
    assert!(output.status.success(), "tally --postfix failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "11 2 + 12 *\n");
}

#[test]
fn failing_expression_exits_with_status_one() {
    let output = tally().arg("1 / 0").output().expect("spawn tally");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(String::from_utf8_lossy(&output.stderr),
               "Error at position 2: Division by zero.\n");
}

#[test]
fn file_mode_evaluates_each_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sums.calc");
    fs::write(&path, "1 + 1\n# comment\n\n  (2)3  \n-1 - 1\n").unwrap();

    let output = tally().arg("--file").arg(&path).output().expect("spawn tally --file");
    assert!(output.status.success(), "tally --file failed: {output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n6\n-2\n");
}

#[test]
fn file_mode_stops_at_first_failing_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.calc");
    fs::write(&path, "1+1\n# c\n\n2*\n3\n").unwrap();

    let output = tally().arg("--file").arg(&path).output().expect("spawn tally --file");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Line 4: Error at position 2:"), "unexpected stderr: {stderr}");
}

#[test]
fn missing_file_exits_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = tally().arg("--file")
                        .arg(dir.path().join("absent.calc"))
                        .output()
                        .expect("spawn tally --file");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Failed to read the input file"));
}
