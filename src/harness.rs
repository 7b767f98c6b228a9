//! File-based suite plumbing around the generator and the oracle.
//!
//! A suite lives in two directories: inputs named `test_NNN.in` and oracle
//! answers named `NNN.ans`, where `NNN` is a zero-padded 3-digit sequence
//! number acting as the join key between the two (and, implicitly, the
//! solver's own output files). Generator and oracle only ever meet through
//! these files; test cases are fully independent of each other, so a
//! failure in one case is recorded and the remaining cases proceed
//! untouched.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use rand::Rng;

use crate::algorithms::{GraphAlgorithms, Verdict};
use crate::error::{HarnessError, Result};
use crate::generator::{generate, GeneratorParams};
use crate::io::{LoadFromFile, WriteToFile};
use crate::wgraph::WeightedGraph;

/// Input file name for a 1-based case number: `test_001.in`, `test_002.in`, ...
pub fn input_file_name(case: usize) -> String {
    format!("test_{case:03}.in")
}

/// Answer file name for a 1-based case number: `001.ans`, `002.ans`, ...
pub fn answer_file_name(case: usize) -> String {
    format!("{case:03}.ans")
}

/// The join key of a case file: `tests/test_001.in` and `answers/001.ans`
/// both map to `001`.
pub fn case_key(path: &Path) -> Option<&str> {
    let stem = path.file_stem()?.to_str()?;
    Some(stem.strip_prefix("test_").unwrap_or(stem))
}

/// Outcome of an oracle pass over a suite. Failed cases never abort the
/// pass and never produce an answer file.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub answered: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, HarnessError)>,
}

/// Generates `count` fresh test inputs into `dir`, numbered from 1.
/// Parameters are validated once before anything is written.
pub fn generate_suite<R: Rng>(
    dir: impl AsRef<Path>,
    count: usize,
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    params.validate()?;

    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut files = Vec::with_capacity(count);
    for case in 1..=count {
        let G = generate(params, rng)?;
        let path = dir.join(input_file_name(case));
        G.write_txt(&path)?;
        files.push(path);
    }

    Ok(files)
}

/// Runs the oracle over every `test_*.in` in `input_dir` and writes one
/// `NNN.ans` per decided case into `answer_dir`. A case that fails to
/// parse (or whose answer cannot be written) lands in
/// [SuiteReport::failures]; the other cases are unaffected.
pub fn answer_suite(
    input_dir: impl AsRef<Path>,
    answer_dir: impl AsRef<Path>,
) -> Result<SuiteReport> {
    let answer_dir = answer_dir.as_ref();
    fs::create_dir_all(answer_dir)?;

    let mut report = SuiteReport::default();
    for input in list_inputs(input_dir.as_ref())? {
        let Some(key) = case_key(&input) else { continue };
        let answer = answer_dir.join(format!("{key}.ans"));

        match answer_case(&input, &answer) {
            Ok(()) => report.answered.push(answer),
            Err(e) => report.failures.push((input, e)),
        }
    }

    Ok(report)
}

fn answer_case(input: &Path, answer: &Path) -> Result<()> {
    let G = WeightedGraph::from_file(input)?;
    G.decide_bipartite().write_txt(answer)
}

/// Compares a solver's answer directory against the oracle's, joined by
/// case key. Returns the keys that disagree; a missing or unreadable
/// solver answer counts as a disagreement, since a partial file must not
/// be taken for a verdict.
pub fn diff_answers(
    oracle_dir: impl AsRef<Path>,
    solver_dir: impl AsRef<Path>,
) -> Result<Vec<String>> {
    let solver_dir = solver_dir.as_ref();

    let mut mismatches = Vec::new();
    for expected_path in list_answers(oracle_dir.as_ref())? {
        let Some(key) = case_key(&expected_path) else { continue };
        let expected = Verdict::from_file(&expected_path)?;

        let actual_path = solver_dir.join(format!("{key}.ans"));
        match Verdict::from_file(&actual_path) {
            Ok(actual) if actual == expected => {}
            _ => mismatches.push(key.to_string()),
        }
    }

    Ok(mismatches)
}

fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    list_dir(dir, |name| name.starts_with("test_") && name.ends_with(".in"))
}

fn list_answers(dir: &Path) -> Result<Vec<PathBuf>> {
    list_dir(dir, |name| name.ends_with(".ans"))
}

fn list_dir(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    let mut res = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let keep_it = path
            .file_name()
            .and_then(OsStr::to_str)
            .map_or(false, &keep);
        if keep_it {
            res.push(path);
        }
    }

    Ok(res.into_iter().sorted().collect())
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Graph;

    use std::fs;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn file_naming() {
        assert_eq!(input_file_name(1), "test_001.in");
        assert_eq!(input_file_name(12), "test_012.in");
        assert_eq!(answer_file_name(123), "123.ans");

        assert_eq!(case_key(Path::new("tests/test_007.in")), Some("007"));
        assert_eq!(case_key(Path::new("answers/007.ans")), Some("007"));
    }

    #[test]
    fn generate_then_answer() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = dir.path().join("tests_in");
        let answers = dir.path().join("answers");

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let params = GeneratorParams::near_threshold(30, 300);
        let files = generate_suite(&inputs, 5, &params, &mut rng).unwrap();

        assert_eq!(files.len(), 5);
        assert!(inputs.join("test_001.in").exists());
        assert!(inputs.join("test_005.in").exists());

        let report = answer_suite(&inputs, &answers).unwrap();
        assert!(report.failures.is_empty());
        assert_eq!(report.answered.len(), 5);
        assert!(answers.join("001.ans").exists());
        assert!(answers.join("005.ans").exists());

        // Every answer is one of the two verdicts, and re-deciding the
        // input reproduces it.
        for case in 1..=5 {
            let input = inputs.join(input_file_name(case));
            let answer = answers.join(answer_file_name(case));

            let G = WeightedGraph::from_file(&input).unwrap();
            assert_eq!(G.num_edges(), params.num_edges);
            assert_eq!(Verdict::from_file(&answer).unwrap(), G.decide_bipartite());
        }
    }

    #[test]
    fn diffing_answers() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = dir.path().join("tests_in");
        let oracle = dir.path().join("answers");
        let solver = dir.path().join("solver");

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let params = GeneratorParams::near_threshold(20, 50);
        generate_suite(&inputs, 4, &params, &mut rng).unwrap();
        answer_suite(&inputs, &oracle).unwrap();

        // A solver that copies the oracle agrees everywhere
        fs::create_dir_all(&solver).unwrap();
        for case in 1..=4 {
            let name = answer_file_name(case);
            fs::copy(oracle.join(&name), solver.join(&name)).unwrap();
        }
        assert!(diff_answers(&oracle, &solver).unwrap().is_empty());

        // Flip one answer
        let flipped = match Verdict::from_file(oracle.join("003.ans")).unwrap() {
            Verdict::Bipartite => Verdict::NotBipartite,
            Verdict::NotBipartite => Verdict::Bipartite,
        };
        flipped.write_txt(solver.join("003.ans")).unwrap();
        assert_eq!(diff_answers(&oracle, &solver).unwrap(), vec!["003"]);

        // A missing answer is a mismatch, not a silent pass
        fs::remove_file(solver.join("002.ans")).unwrap();
        assert_eq!(diff_answers(&oracle, &solver).unwrap(), vec!["002", "003"]);
    }

    #[test]
    fn broken_cases_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = dir.path().join("tests_in");
        let answers = dir.path().join("answers");

        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let params = GeneratorParams::near_threshold(15, 10);
        generate_suite(&inputs, 3, &params, &mut rng).unwrap();

        // Corrupt the second case
        fs::write(inputs.join("test_002.in"), "1 -- 1 5\n").unwrap();

        let report = answer_suite(&inputs, &answers).unwrap();
        assert_eq!(report.answered.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].0.ends_with("test_002.in"));
        assert!(matches!(
            report.failures[0].1,
            HarnessError::InvalidGraph { .. }
        ));

        assert!(answers.join("001.ans").exists());
        assert!(!answers.join("002.ans").exists());
        assert!(answers.join("003.ans").exists());
    }

    #[test]
    fn suite_rejects_invalid_parameters_up_front() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = dir.path().join("tests_in");

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let params = GeneratorParams::new(3, 100, 10);
        assert!(matches!(
            generate_suite(&inputs, 2, &params, &mut rng),
            Err(HarnessError::InvalidParameters { .. })
        ));
        // Nothing was written
        assert!(!inputs.exists());
    }
}
