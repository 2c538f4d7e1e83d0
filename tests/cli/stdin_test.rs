//! End-to-end tests for the `kv2json` and `props2json` binaries
//!
//! These tests run the compiled binaries with piped standard streams:
//! - JSON document on stdout, nothing else
//! - Non-zero exit and empty stdout on malformed input
//! - Optional flags

#[cfg(test)]
mod stdin_conversion_tests {
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use std::io::Write;
    use std::process::{Command, Output, Stdio};

    const KV2JSON: &str = env!("CARGO_BIN_EXE_kv2json");
    const PROPS2JSON: &str = env!("CARGO_BIN_EXE_props2json");

    fn run_with_stdin(bin: &str, input: &[u8], args: &[&str]) -> Output {
        let mut child = Command::new(bin)
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to start process");

        // A process that exits on a usage error may close stdin first
        let _ = child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input);

        child.wait_with_output().expect("failed to wait for process")
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }

    #[test]
    fn test_kv2json_basic() {
        let output = run_with_stdin(KV2JSON, b"a,1\nb,2\n", &[]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output), r#"{"a": "1", "b": "2"}"#);
        assert!(stderr(&output).is_empty());
    }

    #[test]
    fn test_kv2json_duplicate_key() {
        let output = run_with_stdin(KV2JSON, b"a,1\na,2\n", &[]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), r#"{"a": "2"}"#);
    }

    #[test]
    fn test_props2json_examples() {
        let output = run_with_stdin(PROPS2JSON, b"temp,100,C,measured\ntemp,100,,\n", &[]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(
            stdout(&output),
            r#"[{"key": "temp", "value": "100", "unit": "C", "annotation": "measured"}, {"key": "temp", "value": "100"}]"#
        );
    }

    #[test]
    fn test_malformed_line_produces_no_output() {
        let output = run_with_stdin(PROPS2JSON, b"a,1,,\nb,2,,\nc,3\n", &[]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(
            stderr(&output).contains("malformed record at line 3: expected 4 fields, got 2"),
            "stderr: {}",
            stderr(&output)
        );
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let output = run_with_stdin(KV2JSON, &[b'a', b',', 0xff, b'\n'], &[]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(stderr(&output).contains("not valid UTF-8"));
    }

    #[test]
    fn test_empty_stdin() {
        let kv = run_with_stdin(KV2JSON, b"", &[]);
        assert_eq!(stdout(&kv), "{}");

        let props = run_with_stdin(PROPS2JSON, b"", &[]);
        assert_eq!(stdout(&props), "[]");
    }

    #[test]
    fn test_compact_format_flag() {
        let output = run_with_stdin(KV2JSON, b"a,1\nb,2\n", &["--format", "compact"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), r#"{"a":"1","b":"2"}"#);
    }

    #[test]
    fn test_reject_blank_lines_flag() {
        let output = run_with_stdin(KV2JSON, b"a,1\n\nb,2\n", &["--blank-lines", "reject"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(stderr(&output).contains("line 2"));
    }

    #[test]
    fn test_bad_flag_is_usage_error() {
        let output = run_with_stdin(KV2JSON, b"a,1\n", &["--format", "xml"]);
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_verbose_logs_to_stderr_only() {
        let output = run_with_stdin(PROPS2JSON, b"temp,100,,\n", &["--verbose"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), r#"[{"key": "temp", "value": "100"}]"#);
        assert!(stderr(&output).contains("conversion complete"));
    }

    #[test]
    fn test_stdin_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("props.txt");
        std::fs::write(&path, "rate,5,Hz,nominal\r\nmass,2,,\r\n").unwrap();

        let output = Command::new(PROPS2JSON)
            .stdin(Stdio::from(File::open(&path).unwrap()))
            .output()
            .unwrap();

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value[0]["unit"], "Hz");
        assert_eq!(value[1]["key"], "mass");
        assert!(value[1].get("unit").is_none());
    }
}
