use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn plot_creates_png() {
    let inputs_file = assert_fs::NamedTempFile::new("inputs.yaml").unwrap();
    inputs_file
        .write_str("annual_demand: 1000\norder_cost: 10\nunit_holding_cost: 2.5\nlead_time_days: 40\nforecast_horizon_days: 90\n")
        .unwrap();
    let output_file = assert_fs::NamedTempFile::new("inventory.png").unwrap();

    let input_arg = inputs_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("eoq");
    cmd.args(["plot", "-i", &input_arg, "-o", &output_arg]);
    cmd.env("RUST_LOG", "eoq=info");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Inventory chart written to"))
        .stderr(predicate::str::contains("wrote inventory chart"));

    let metadata = fs::metadata(output_arg).unwrap();
    assert!(metadata.len() > 0);
}
