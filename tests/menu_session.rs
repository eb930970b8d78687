use std::io::Cursor;

use ledger_calc::calculator::{FALLBACK_HIT, PercentDraw};
use ledger_calc::{ErrorPolicy, Evaluator, FileSink, Ledger, Session};

struct FixedDraw(u32);

impl PercentDraw for FixedDraw {
    fn draw_percent(&mut self) -> u32 {
        self.0
    }
}

fn run_session(
    script: &str,
    evaluator: &mut Evaluator<FixedDraw>,
    ledger: &mut Ledger,
) -> String {
    let mut output = Vec::new();
    Session::new(evaluator, ledger, "System: test.")
        .run(Cursor::new(script.to_string()), &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_calculations_are_recorded_and_mirrored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.txt");

    let mut evaluator = Evaluator::new(FixedDraw(0));
    let mut ledger = Ledger::new(FileSink::new(&path));

    let output = run_session(
        "1\n6\n3\n3\n1000\n1000\n4\n5\n0\n8\n0\n",
        &mut evaluator,
        &mut ledger,
    );

    assert!(output.contains("= 9\n"));
    assert!(output.contains("= 1,000,000\n"));
    assert!(output.contains("= 50,000,000\n"));
    assert!(output.contains("6|3|+|9.0\n"));

    assert_eq!(ledger.count(), 3);
    assert_eq!(
        ledger.history(),
        vec!["6|3|+|9.0", "1000|1000|*|1000000.0", "5|0|/|50000000.0"]
    );

    let file = std::fs::read_to_string(&path).unwrap();
    assert_eq!(file.lines().collect::<Vec<_>>(), ledger.history());
}

#[test]
fn test_unknown_option_uses_fallback() {
    let mut ledger = Ledger::in_memory();

    let mut miss = Evaluator::new(FixedDraw(3));
    run_session("9\n5\n2\n0\n", &mut miss, &mut ledger);
    assert_eq!(ledger.last(), "5|2||0.0");

    let mut hit = Evaluator::new(FixedDraw(FALLBACK_HIT));
    run_session("x\n5\n2\n0\n", &mut hit, &mut ledger);
    assert_eq!(ledger.last(), "5|2||7.0");
    assert_eq!(ledger.count(), 2);
}

#[test]
fn test_llm_option_prints_simulated_reply() {
    let mut evaluator = Evaluator::new(FixedDraw(0));
    let mut ledger = Ledger::in_memory();

    let output = run_session("7\nSay {x}\nhello\n0\n", &mut evaluator, &mut ledger);

    assert!(output.contains("LLM RESP: SIMULATED_LLM_RESPONSE\n"));
    assert_eq!(ledger.count(), 0);
}

#[test]
fn test_unwritable_history_does_not_break_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut evaluator = Evaluator::new(FixedDraw(0));
    let mut ledger = Ledger::new(FileSink::new(dir.path()));

    let output = run_session("3\n2\n4\n", &mut evaluator, &mut ledger);

    assert!(output.contains("= 8\n"));
    assert_eq!(ledger.history(), vec!["2|4|*|8.0"]);
}

#[test]
fn test_strict_policy_rejects_without_recording() {
    let mut evaluator = Evaluator::new(FixedDraw(FALLBACK_HIT)).with_policy(ErrorPolicy::Strict);
    let mut ledger = Ledger::in_memory();

    let output = run_session("4\n5\n0\n9\n5\n2\n2\n7\n3\n0\n", &mut evaluator, &mut ledger);

    assert!(output.contains("error: division by zero\n"));
    assert!(output.contains("error: unknown operator ''\n"));
    assert!(output.contains("= 4\n"));
    assert_eq!(ledger.history(), vec!["7|3|-|4.0"]);
}

#[test]
fn test_end_of_input_mid_prompt_exits_cleanly() {
    let mut evaluator = Evaluator::new(FixedDraw(0));
    let mut ledger = Ledger::in_memory();

    let output = run_session("1\n6\n", &mut evaluator, &mut ledger);

    assert_eq!(ledger.count(), 0);
    assert_eq!(output.matches("LEDGER CALC").count(), 1);
    assert!(output.ends_with("Value b: "));
}

#[test]
fn test_end_of_input_at_llm_prompt_exits_cleanly() {
    let mut evaluator = Evaluator::new(FixedDraw(0));
    let mut ledger = Ledger::in_memory();

    let output = run_session("7\nSay {x}\n", &mut evaluator, &mut ledger);

    assert_eq!(output.matches("Option: ").count(), 1);
    assert!(output.ends_with("User input: "));
    assert!(!output.contains("LLM RESP"));
}
