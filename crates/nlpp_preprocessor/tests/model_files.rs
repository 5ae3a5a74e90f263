use std::fs;

use nlpp_preprocessor::{preprocess, State};
use nlpp_utils::io::default_output_path;

#[test]
fn preprocessed_model_round_trips_through_files() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let input = dir.path().join("wolf-sheep.nlogo");
    fs::write(
        &input,
        ";; $@CONFIG\n;; $@GRASS TRUE\n;; $@END\nto go\n  ;; $@GRASS\n  ;ask patches [ grow-grass ]\n  ;; $@END\nend\n@#$#@#$#@\n;; $@GRASS\n",
    )
    .expect("should write model");

    let source = fs::read(&input).expect("should read model");
    let result = preprocess(&source).expect("should preprocess");

    let output = default_output_path(&input);
    fs::write(&output, &result.output).expect("should write output");

    let written = fs::read_to_string(dir.path().join("wolf-sheep.post.nlogo")).expect("should read");
    assert!(written.contains("\n  ask patches [ grow-grass ]\n"));
    assert!(written.ends_with("@#$#@#$#@\n;; $@GRASS\n"));
    assert!(result.warnings.is_empty());
}

#[test]
fn line_by_line_driving_matches_whole_input() {
    let source = ";; $@CONFIG\n;; $@A FALSE\n;; $@END\n;; $@A\nfd 1\n;; $@END\n";
    let whole = preprocess(source.as_bytes()).expect("should preprocess").output;

    let mut preprocessor = nlpp_preprocessor::Preprocessor::new();
    let mut streamed = Vec::new();
    for line in source.split_inclusive('\n') {
        streamed.extend_from_slice(
            &preprocessor
                .process_line(line.as_bytes())
                .expect("should accept line"),
        );
    }

    assert_eq!(streamed, whole);
    assert_eq!(preprocessor.state(), State::Normal);
}

#[test]
fn latin1_model_is_preserved_byte_for_byte() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let input = dir.path().join("legacy.nlogo");
    let model = b";; $@CONFIG\n;; $@PLOT FALSE\n;; $@END\n;; $@PLOT\nplot \xB5\n;; $@END\n@#$#@#$#@\nTEXTBOX caf\xE9\n";
    fs::write(&input, model).expect("should write model");

    let source = fs::read(&input).expect("should read model");
    let result = preprocess(&source).expect("should preprocess");

    assert_eq!(
        result.output,
        b";; $@CONFIG\n;; $@PLOT FALSE\n;; $@END\n;; $@PLOT\n; plot \xB5\n;; $@END\n@#$#@#$#@\nTEXTBOX caf\xE9\n"
    );
}
