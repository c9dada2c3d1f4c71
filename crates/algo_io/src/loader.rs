use crate::case::Case;
use crate::parser::parse_case_line;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Parses every case in `text`. Line numbers start at 1.
pub fn parse_cases(text: &str) -> Result<Vec<Case>> {
    let mut cases = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(case) =
            parse_case_line(line, line_no).with_context(|| format!("line {}", line_no))?
        {
            cases.push(case);
        }
    }
    Ok(cases)
}

/// Loads a case file.
///
/// Blank lines and `#` comments are skipped. Every parse or bind failure is
/// reported with the file path and line number.
///
/// # Arguments
///
/// * `path` - Path to the case file
///
/// # Returns
///
/// The cases in file order, or the first error encountered.
pub fn load_case_file<P: AsRef<Path>>(path: P) -> Result<Vec<Case>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut cases = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("{}:{}", path.display(), line_no))?;
        if let Some(case) = parse_case_line(&line, line_no)
            .with_context(|| format!("{}:{}", path.display(), line_no))?
        {
            cases.push(case);
        }
    }

    Ok(cases)
}

/// Writes `cases` to `path`, one per line, after an optional `#` header.
pub fn write_case_file<P: AsRef<Path>>(path: P, header: Option<&str>, cases: &[Case]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    if let Some(header) = header {
        for line in header.lines() {
            writeln!(out, "# {}", line)?;
        }
    }
    for case in cases {
        writeln!(out, "{}", case)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{Input, Value};

    const SAMPLE: &str = r#"
# worked examples
two-sum [2,7,11,15] 9 => [0,1]

shortest-palindrome "aacecaaa" => "aaacecaaa"
hash-divided-string "abcd" 2 => "bf"
"#;

    #[test]
    fn parses_sample_with_line_numbers() {
        let cases = parse_cases(SAMPLE).unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].line, 3);
        assert_eq!(cases[1].line, 5);
        assert_eq!(
            cases[2].input,
            Input::HashDividedString {
                s: "abcd".into(),
                k: 2
            }
        );
        assert_eq!(cases[2].expected, Some(Value::from("bf")));
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_cases("two-sum [1] 1\nbogus-problem 1\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
        assert!(format!("{:#}", err).contains("unknown problem"));
    }

    #[test]
    fn file_round_trip() {
        let cases = parse_cases(SAMPLE).unwrap();
        let path = std::env::temp_dir().join(format!("algo_io_cases_{}.txt", std::process::id()));

        write_case_file(&path, Some("generated"), &cases).unwrap();
        let loaded = load_case_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.len(), cases.len());
        for (a, b) in loaded.iter().zip(&cases) {
            assert_eq!(a.input, b.input);
            assert_eq!(a.expected, b.expected);
        }
        assert_eq!(loaded[0].line, 2);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_case_file("/definitely/not/here.cases").unwrap_err();
        assert!(err.to_string().starts_with("Failed to open"));
    }
}
