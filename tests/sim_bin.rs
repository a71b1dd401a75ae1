use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("7")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 7);
    assert_eq!(v["won"], true);
    let levels = v["levels"].as_array().expect("levels array");
    assert_eq!(levels.len(), 4);
    for (i, level) in levels.iter().enumerate() {
        assert_eq!(level["level"], (i + 1) as u64);
    }
}

#[test]
fn sim_binary_requires_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
