use std::process::Command;

#[test]
fn two_components_defaults_finish_at_tick_15() {
    let output = Command::new(env!("CARGO_BIN_EXE_two_components"))
        .output()
        .expect("run two_components");
    assert!(
        output.status.success(),
        "two_components failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("done @ tick 15, state=Finished, handlers=30, delivered=6"),
        "unexpected summary line: {stdout}"
    );
}

#[test]
fn two_components_honors_clock_ticks_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_two_components"))
        .args(["--clock-ticks", "1"])
        .output()
        .expect("run two_components");
    assert!(
        output.status.success(),
        "two_components failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("done @ tick 5, state=Finished"),
        "unexpected summary line: {stdout}"
    );
}

#[test]
fn two_components_rejects_bad_clock_rate() {
    let output = Command::new(env!("CARGO_BIN_EXE_two_components"))
        .args(["--clock", "0Hz"])
        .output()
        .expect("run two_components");
    assert!(!output.status.success(), "expected non-zero exit");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("configuration error"),
        "stderr did not contain expected message: {stderr}"
    );
}
