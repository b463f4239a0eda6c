//! File round trip of a complete run: namelists and profile in, experiment
//! directory with tables and summary out.

use std::fs;
use std::path::Path;

use plume_rs::analysis::RunSummary;
use plume_rs::config::{NUMERICAL_FILE, PlumeConfig, RELEASE_FILE};
use plume_rs::io::{
    ExperimentDir, LOG_DIR, PARAMETER_FILE, STATE_FILE, SUMMARY_FILE, build_summary,
    collect_summaries, read_profile_file, write_output, write_summary,
};
use plume_rs::simulation::PlumeSimulation;
use plume_rs::solver::{PARAMETER_HEADER, STATE_HEADER};
use serde_json::{Value, json};

fn write_inputs(dir: &Path, ncyl: usize) {
    fs::write(
        dir.join(NUMERICAL_FILE),
        format!(
            "dt: 1.0\ntime_max: 0.2\nncyl: {ncyl}\nentrain_params:\n  a1: 0.057\n  a2: 0.554\n  a3: 5.0\n  total_entrain: 0\n"
        ),
    )
    .unwrap();
    fs::write(
        dir.join(RELEASE_FILE),
        "z0: -150.0\nw0: 0.5\nb0: 0.5\nc0: 1.0\nT0: 10.0\nS0: 35.0\nrho_oil_0: 843.0\nT_oil_0: 15.5\n",
    )
    .unwrap();

    let mut csv = String::from("depth,thetao,so,uo,vo\n");
    for level in 0..=20 {
        let z = -10.0 * level as f64;
        csv.push_str(&format!("{z},10.0,35.0,0.0,0.0\n"));
    }
    // below the sea floor
    csv.push_str("-210.0,nan,nan,nan,nan\n");
    fs::write(dir.join("oceanProfilesInput.csv"), csv).unwrap();
}

/// Run the whole pipeline once and return the experiment.
fn run_once(inputs: &Path, root: &Path) -> (ExperimentDir, PlumeConfig) {
    let config = PlumeConfig::load_dir(inputs).unwrap();
    let profile = read_profile_file(&inputs.join("oceanProfilesInput.csv")).unwrap();
    assert_eq!(profile.len(), 21);

    let sim = PlumeSimulation::new(config, &profile).unwrap();
    let output = sim.run().unwrap();

    let exp = ExperimentDir::create(root).unwrap();
    assert_eq!(exp.log_namelists(inputs).unwrap(), 2);
    write_output(&exp.path, &output).unwrap();

    let metrics = RunSummary::compute(sim.config(), &output);
    let summary =
        build_summary(&exp.run_id, "20240101T00:00:00Z", sim.config(), &metrics).unwrap();
    write_summary(&exp.path, &summary).unwrap();
    (exp, sim.config().clone())
}

#[test]
fn test_single_cylinder_products() {
    let inputs = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_inputs(inputs.path(), 1);

    let (exp, config) = run_once(inputs.path(), root.path());
    assert_eq!(exp.run_id, "000000");
    assert!(exp.path.join(LOG_DIR).join(NUMERICAL_FILE).is_file());

    let state = fs::read_to_string(exp.path.join(STATE_FILE)).unwrap();
    let mut lines = state.lines();
    assert_eq!(lines.next().unwrap(), STATE_HEADER.join("\t"));
    let first: Vec<f64> = lines
        .next()
        .unwrap()
        .split('\t')
        .map(|f| f.parse().unwrap())
        .collect();
    assert_eq!(first.len(), STATE_HEADER.len());
    assert_eq!(first[0], 0.0);
    assert_eq!(first[12], -150.0);
    // release row plus one row per step
    assert_eq!(state.lines().count(), 1 + 1 + config.tmax());

    let parameters = fs::read_to_string(exp.path.join(PARAMETER_FILE)).unwrap();
    assert_eq!(
        parameters.lines().next().unwrap(),
        PARAMETER_HEADER.join("\t")
    );
    assert_eq!(parameters.lines().count(), state.lines().count());

    let summary: Value =
        serde_json::from_str(&fs::read_to_string(exp.path.join(SUMMARY_FILE)).unwrap()).unwrap();
    assert_eq!(summary["runId"], json!("000000"));
    assert_eq!(summary["runDate"], json!("20240101T00:00:00Z"));
    assert_eq!(summary["numerical_ncyl"], json!(1));
    assert_eq!(summary["numerical_entrain_params_total_entrain"], json!(0));
    assert_eq!(summary["release_z0"], json!(-150.0));
    assert_eq!(summary["tmax"], json!(12));
    assert_eq!(summary["final_state"], json!("subsurface"));
}

#[test]
fn test_multi_cylinder_files_and_numbering() {
    let inputs = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_inputs(inputs.path(), 2);

    let (first, _) = run_once(inputs.path(), root.path());
    let (second, _) = run_once(inputs.path(), root.path());
    assert_eq!(second.run_id, "000001");

    for index in 0..2 {
        assert!(first.path.join(format!("plumeState_cyl{index:03}.csv")).is_file());
        assert!(first.path.join(format!("parameters_cyl{index:03}.csv")).is_file());
    }
    assert!(!first.path.join(STATE_FILE).exists());

    let all = collect_summaries(root.path()).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1]["runId"], json!("000001"));
    assert_eq!(all[0]["numerical_ncyl"], json!(2));
}
