use layouter_tools::commands::{execute_patch, validate_bench_args, BenchArgs, PatchArgs};
use std::fs;
use std::io::Write;

#[test]
fn test_validate_bench_args_valid() {
    let args = BenchArgs {
        runs: 3,
        ..Default::default()
    };

    assert!(validate_bench_args(&args).is_ok());
}

#[test]
fn test_validate_bench_args_runs_zero() {
    let args = BenchArgs {
        runs: 0,
        ..Default::default()
    };

    assert!(validate_bench_args(&args).is_err());
}

#[test]
fn test_bench_defaults_match_scripts() {
    let args = BenchArgs::default();

    assert_eq!(args.program, "node");
    assert_eq!(args.cold_script, "runtime_cold.js");
    assert_eq!(args.warm_script, "runtime_warm.js");
    assert_eq!(args.runs, 10);
}

#[test]
fn test_execute_patch_with_custom_rules() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("glue.js");
    let output = dir.path().join("module.js");
    let rules = dir.path().join("rules.toml");

    fs::write(&input, "if(ENVIRONMENT_IS_WEB){}").unwrap();
    let mut file = fs::File::create(&rules).unwrap();
    writeln!(
        file,
        "suffix = \"\\nexport default Module;\"\n\n[[replacements]]\npattern = \"ENVIRONMENT_IS_WEB\"\nreplacement = \"true\""
    )
    .unwrap();

    let outcome = execute_patch(PatchArgs {
        input,
        output: output.clone(),
        rules: Some(rules),
    })
    .unwrap();

    assert_eq!(outcome.counts, vec![1]);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "if(true){}\nexport default Module;"
    );
}

#[test]
fn test_execute_patch_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    let result = execute_patch(PatchArgs {
        input: dir.path().join("countCrossings.js"),
        output: dir.path().join("reorder.js"),
        rules: None,
    });

    assert!(result.is_err());
    assert!(!dir.path().join("reorder.js").exists());
}

#[cfg(unix)]
mod bench {
    use super::*;
    use layouter_tools::commands::run_bench;
    use layouter_tools::output::{read_report, write_report};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Writes fake cold/warm scripts; each cold run reports its own index
    fn write_scripts(dir: &std::path::Path) {
        fs::write(
            dir.join("cold.sh"),
            "echo x >> runs.txt\n\
             n=$(wc -l < runs.txt | tr -d ' ')\n\
             echo \"{\\\"sum\\\": 100, \\\"children\\\": {\\\"layout\\\": {\\\"sum\\\": $n, \\\"children\\\": {}}}}\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("warm.sh"),
            "echo '{\"children\": {\"layout\": {\"children\": {}, \"times\": [1, 1]}}}'\n",
        )
        .unwrap();
    }

    #[test]
    fn test_run_bench_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        write_scripts(dir.path());

        let args = BenchArgs {
            program: "sh".to_string(),
            cold_script: "cold.sh".to_string(),
            warm_script: "warm.sh".to_string(),
            runs: 3,
            working_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let report = run_bench(&args).unwrap();

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "cold": {"children": {"layout": {"children": {}, "times": [1, 2, 3]}}},
                "warm": {"children": {"layout": {"children": {}, "times": [1, 1]}}}
            })
        );

        let path = dir.path().join("out/report.json");
        write_report(&report, &path).unwrap();
        let loaded = read_report(&path).unwrap();
        assert_eq!(loaded.cold, report.cold);
    }

    #[test]
    fn test_run_bench_skip_warm() {
        let dir = tempfile::tempdir().unwrap();
        write_scripts(dir.path());

        let args = BenchArgs {
            program: "sh".to_string(),
            cold_script: "cold.sh".to_string(),
            runs: 1,
            working_dir: Some(dir.path().to_path_buf()),
            skip_warm: true,
            ..Default::default()
        };

        let report = run_bench(&args).unwrap();

        assert!(report.warm.is_null());
        assert_eq!(report.cold.children["layout"].times_f64(), vec![1.0]);
    }

    #[test]
    fn test_run_bench_missing_script_fails() {
        let dir = tempfile::tempdir().unwrap();

        let args = BenchArgs {
            program: "sh".to_string(),
            cold_script: "does-not-exist.sh".to_string(),
            runs: 2,
            working_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        assert!(run_bench(&args).is_err());
    }

    #[test]
    fn test_run_bench_shape_mismatch_skips_warm_run() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("cold.sh"),
            "echo x >> runs.txt\n\
             if [ \"$(wc -l < runs.txt | tr -d ' ')\" = 1 ]; then name=layout; else name=render; fi\n\
             echo \"{\\\"children\\\": {\\\"$name\\\": {\\\"sum\\\": 1, \\\"children\\\": {}}}}\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("warm.sh"),
            "touch warm_ran.txt\necho '{}'\n",
        )
        .unwrap();

        let args = BenchArgs {
            program: "sh".to_string(),
            cold_script: "cold.sh".to_string(),
            warm_script: "warm.sh".to_string(),
            runs: 2,
            working_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        assert!(run_bench(&args).is_err());
        assert!(!dir.path().join("warm_ran.txt").exists());
    }
}
