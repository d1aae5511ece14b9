use std::process::Command;

#[test]
fn runner_prints_report_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_interview"))
        .output()
        .expect("failed to run interview binary");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "PASSED: Test strcpy\nPASSED: Test ARRAY_SIZE\nPASSED: Test atoi\n"
    );
}
