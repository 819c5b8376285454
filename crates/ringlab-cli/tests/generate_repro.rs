use std::process::Command;

fn run_ok(cmd: &mut Command) -> std::process::Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

#[test]
fn seeded_generate_is_reproducible() {
    let run = || {
        run_ok(Command::new(env!("CARGO_BIN_EXE_ringlab-cli")).args([
            "generate", "--seed", "42", "--fmt", "json",
        ]))
    };

    let a = run();
    let b = run();
    assert_eq!(a.stdout, b.stdout);

    let text = String::from_utf8(a.stdout).unwrap();
    assert!(text.contains("\"result\""));
    assert!(text.contains("\"mu\""));
}

#[test]
fn quantize_prints_the_reading() {
    let out = run_ok(Command::new(env!("CARGO_BIN_EXE_ringlab-cli")).args([
        "quantize", "10.379", "--least-count", "0.005",
    ]));
    let text = String::from_utf8(out.stdout).unwrap();
    assert_eq!(text.trim(), "msr=10.35 vsr=6 total=10.38");
}

#[test]
fn zero_least_count_is_rejected() {
    let out = Command::new(env!("CARGO_BIN_EXE_ringlab-cli"))
        .args(["generate", "--least-count", "0"])
        .output()
        .expect("spawn command");

    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("least_count must be positive"), "stderr: {err}");
}
