use std::ffi::OsStr;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::process::{Command, Output, Stdio};

fn husk(input: &str) -> Output {
    husk_with(&[], &[], input)
}

fn husk_with_args(args: &[&str], input: &str) -> Output {
    husk_with(args, &[], input)
}

fn husk_with(args: &[&str], vars: &[(&str, &OsStr)], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_husk"))
        .args(args)
        .envs(vars.iter().copied())
        .env("PATH", "/bin:/usr/bin")
        .env_remove("HUSK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start husk");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write input");
    child.wait_with_output().expect("failed to wait for husk")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_chaining_and_short_circuit() {
    let output = husk("echo one ; echo two\nfalse && echo hi\ntrue || echo hi\nfalse || echo fallback\n");
    assert_eq!(stdout(&output), "one\ntwo\nfallback\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_unspaced_operators() {
    let output = husk("echo a;echo b&&echo c\n");
    assert_eq!(stdout(&output), "a\nb\nc\n");
}

#[test]
fn test_not_found_diagnostic_and_status() {
    let output = husk("nosuch_command_xyz\n");
    assert!(
        stderr(&output).ends_with(": 1: nosuch_command_xyz: not found\n"),
        "stderr was {:?}",
        stderr(&output)
    );
    assert_eq!(output.status.code(), Some(127));
}

#[test]
fn test_syntax_error_runs_nothing() {
    let output = husk("echo before ;; echo after\n");
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).ends_with(": 1: Syntax error: \";;\" unexpected\n"));
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_last_status_expansion() {
    let output = husk("sh -c 'exit 3'\necho $?\necho $UNDEFINED_VARIABLE_XYZ end\n");
    assert_eq!(stdout(&output), "3\nend\n");
}

#[test]
fn test_exit_illegal_number_continues() {
    let output = husk("exit abc\necho still here\nexit 0\necho never\n");
    assert_eq!(stdout(&output), "still here\n");
    assert!(stderr(&output).ends_with(": 1: exit: Illegal number: abc\n"));
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_exit_without_operand_keeps_status() {
    let output = husk("sh -c 'exit 6'\nexit\n");
    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_setenv_reaches_children() {
    let output = husk("setenv HUSK_TEST_VALUE hello\nprintenv HUSK_TEST_VALUE\nunsetenv HUSK_TEST_VALUE\nprintenv HUSK_TEST_VALUE\n");
    assert_eq!(stdout(&output), "hello\n");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_non_utf8_environment_reaches_children_unchanged() {
    let raw = OsStr::from_bytes(b"a\xffb");
    let output = husk_with(&[], &[("HUSK_RAW_BYTES", raw)], "printenv HUSK_RAW_BYTES\n");
    assert_eq!(output.stdout, b"a\xffb\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_single_ampersand_is_part_of_the_word() {
    let output = husk("echo a&b a|b\n");
    assert_eq!(stdout(&output), "a&b a|b\n");
}

#[test]
fn test_alias_expands_before_run() {
    let output = husk("alias greet='echo hello'\ngreet world\nalias greet\n");
    assert_eq!(stdout(&output), "hello world\ngreet='echo hello'\n");
}

#[test]
fn test_counter_counts_segments_and_empty_lines() {
    let output = husk("true ; true\n\nnosuch_command_xyz\n");
    assert!(stderr(&output).ends_with(": 4: nosuch_command_xyz: not found\n"));
}

#[test]
fn test_missing_script_file() {
    let output = husk_with_args(&["/nonexistent/script.husk"], "");
    assert!(stderr(&output).ends_with(": 0: Can't open /nonexistent/script.husk\n"));
    assert_eq!(output.status.code(), Some(127));
}

#[test]
fn test_script_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut script = tempfile::NamedTempFile::new()?;
    writeln!(script, "# comment line")?;
    writeln!(script, "echo from script # trailing comment")?;
    writeln!(script, "exit 4")?;
    let path = script.path().to_string_lossy().into_owned();

    let output = husk_with_args(&[&path], "echo from stdin\n");
    assert_eq!(stdout(&output), "from script\n");
    assert_eq!(output.status.code(), Some(4));
    Ok(())
}
