use akshara_shift_core::{EncodingTag, ProfileSet};
use tracing_test::traced_test;

use super::fakes::{FakeClipboard, FakeDesktop, FakeInput, instant_timings};
use crate::{
    conversion::{ConversionState, Orchestrator},
    domain::outcome::{ConversionError, ConversionOutcome, SimulatedKey, SkipReason},
};

fn orchestrator(desktop: &FakeDesktop) -> Orchestrator<FakeClipboard, FakeInput> {
    Orchestrator::new(
        desktop.clipboard_handle(),
        desktop.input_handle(),
        ProfileSet::builtin().unwrap(),
        instant_timings(),
    )
}

fn ml_codepoint(ch: char) -> &'static str {
    EncodingTag::Ml
        .tables()
        .codepoints
        .iter()
        .find(|(k, _)| *k == ch)
        .map(|(_, v)| *v)
        .unwrap()
}

fn ml_conjunct(key: &str) -> &'static str {
    EncodingTag::Ml
        .tables()
        .conjuncts
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap()
}

#[test]
fn converts_selection_and_restores_clipboard() {
    let desktop = FakeDesktop::new("before", "അമ്മ");
    let mut orch = orchestrator(&desktop);

    let expected = format!("{}{}", ml_codepoint('അ'), ml_conjunct("മ്മ"));

    assert!(orch.run_conversion(EncodingTag::Ml));
    assert_eq!(desktop.pasted(), vec![expected.clone()]);
    assert_eq!(desktop.selection(), expected);
    assert_eq!(desktop.clipboard(), "before");
    assert_eq!(orch.state(), ConversionState::Idle);
}

#[test]
fn applied_outcome_carries_captured_and_converted_text() {
    let desktop = FakeDesktop::new("before", "ക്ക");
    let mut orch = orchestrator(&desktop);

    let ConversionOutcome::Applied(r) = orch.run(EncodingTag::Fml) else {
        panic!("conversion was not applied");
    };
    assert_eq!(r.encoding, EncodingTag::Fml);
    assert_eq!(r.captured, "ക്ക");
    assert_eq!(r.converted, "kk");
}

#[test]
fn mixed_text_keeps_non_malayalam_parts() {
    let desktop = FakeDesktop::new("", "id: ക്ക, ok");
    let mut orch = orchestrator(&desktop);

    assert!(orch.run_conversion(EncodingTag::Ml));
    assert_eq!(desktop.selection(), "id: kk, ok");
}

#[test]
fn empty_selection_aborts_and_restores_clipboard() {
    let desktop = FakeDesktop::new("before", "");
    desktop.with(|s| s.copy_ignored = true);
    let mut orch = orchestrator(&desktop);

    let outcome = orch.run(EncodingTag::Ml);

    assert_eq!(
        outcome,
        ConversionOutcome::Failed(ConversionError::CaptureEmpty { attempts: 3 })
    );
    assert!(desktop.pasted().is_empty());
    assert_eq!(desktop.clipboard(), "before");
    assert_eq!(orch.state(), ConversionState::Idle);
}

#[test]
fn capture_polls_are_bounded_by_attempts() {
    let desktop = FakeDesktop::new("before", "അ");
    desktop.with(|s| s.copy_ignored = true);
    let mut orch = orchestrator(&desktop);

    assert!(!orch.run_conversion(EncodingTag::Ml));

    // One snapshot read plus one read per attempt.
    assert_eq!(desktop.with(|s| s.reads), 1 + 3);
}

#[test]
fn capture_succeeds_on_last_attempt() {
    let desktop = FakeDesktop::new("before", "ക്");
    desktop.with(|s| s.copy_delay_reads = 2);
    let mut orch = orchestrator(&desktop);

    assert!(orch.run_conversion(EncodingTag::Ml));
    assert_eq!(desktop.pasted(), vec!["k".to_string()]);
    assert_eq!(desktop.clipboard(), "before");
}

#[test]
fn capture_gives_up_one_read_too_late() {
    let desktop = FakeDesktop::new("before", "ക്");
    desktop.with(|s| s.copy_delay_reads = 3);
    let mut orch = orchestrator(&desktop);

    assert_eq!(
        orch.run(EncodingTag::Ml),
        ConversionOutcome::Failed(ConversionError::CaptureEmpty { attempts: 3 })
    );
    assert_eq!(desktop.clipboard(), "before");
}

#[test]
fn paste_failure_restores_clipboard() {
    let desktop = FakeDesktop::new("before", "അ");
    desktop.with(|s| s.fail_paste = true);
    let mut orch = orchestrator(&desktop);

    assert_eq!(
        orch.run(EncodingTag::Ml),
        ConversionOutcome::Failed(ConversionError::SimulationFailure(SimulatedKey::Paste))
    );
    assert_eq!(desktop.clipboard(), "before");
    assert_eq!(desktop.selection(), "അ");
}

#[test]
fn replace_write_failure_restores_clipboard() {
    let desktop = FakeDesktop::new("before", "അ");
    desktop.with(|s| s.set_text_failures = 1);
    let mut orch = orchestrator(&desktop);

    assert_eq!(
        orch.run(EncodingTag::Ml),
        ConversionOutcome::Failed(ConversionError::ClipboardUnavailable)
    );
    assert!(desktop.pasted().is_empty());
    assert_eq!(desktop.clipboard(), "before");
}

#[test]
fn copy_failure_is_reported() {
    let desktop = FakeDesktop::new("before", "അ");
    desktop.with(|s| s.fail_copy = true);
    let mut orch = orchestrator(&desktop);

    assert_eq!(
        orch.run(EncodingTag::Fml),
        ConversionOutcome::Failed(ConversionError::SimulationFailure(SimulatedKey::Copy))
    );
    assert_eq!(desktop.clipboard(), "before");
}

#[test]
fn panic_in_collaborator_becomes_fault_and_restores() {
    let desktop = FakeDesktop::new("before", "അ");
    desktop.with(|s| s.panic_on_paste = true);
    let mut orch = orchestrator(&desktop);

    assert_eq!(
        orch.run(EncodingTag::Ml),
        ConversionOutcome::Failed(ConversionError::Fault)
    );
    assert_eq!(desktop.clipboard(), "before");
    assert_eq!(orch.state(), ConversionState::Idle);
    assert!(!orch.busy_flag().is_busy());
}

#[test]
fn empty_original_clipboard_is_left_with_converted_text() {
    let desktop = FakeDesktop::new("", "ക്ക");
    let mut orch = orchestrator(&desktop);

    assert!(orch.run_conversion(EncodingTag::Ml));
    // Nothing to restore: the last write stays.
    assert_eq!(desktop.clipboard(), "kk");
}

#[test]
fn run_is_skipped_while_busy() {
    let desktop = FakeDesktop::new("before", "അ");
    let mut orch = orchestrator(&desktop);

    let busy = orch.busy_flag();
    let held = busy.try_acquire().unwrap();

    assert_eq!(
        orch.run(EncodingTag::Ml),
        ConversionOutcome::Skipped(SkipReason::Busy)
    );
    assert_eq!(desktop.with(|s| s.copies), 0);
    assert_eq!(desktop.with(|s| s.reads), 0);

    drop(held);
    assert!(orch.run_conversion(EncodingTag::Ml));
}

#[test]
fn busy_flag_is_released_after_each_run() {
    let desktop = FakeDesktop::new("before", "അ");
    let mut orch = orchestrator(&desktop);

    assert!(orch.run_conversion(EncodingTag::Ml));
    assert!(!orch.busy_flag().is_busy());

    desktop.with(|s| s.copy_ignored = true);
    assert!(!orch.run_conversion(EncodingTag::Ml));
    assert!(!orch.busy_flag().is_busy());
}

#[test]
fn repeated_conversions_are_deterministic() {
    let first = FakeDesktop::new("x", "സ്റ്റ് ന്ത");
    let second = FakeDesktop::new("y", "സ്റ്റ് ന്ത");

    assert!(orchestrator(&first).run_conversion(EncodingTag::Fml));
    assert!(orchestrator(&second).run_conversion(EncodingTag::Fml));
    assert_eq!(first.pasted(), second.pasted());
}

/// Target states of the `state transition` events in the captured log, in order.
fn transitions(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| l.contains("state transition"))
        .filter_map(|l| l.split_whitespace().find_map(|w| w.strip_prefix("to=")))
        .map(str::to_owned)
        .collect()
}

#[test]
#[traced_test]
fn successful_run_walks_states_in_order() {
    let desktop = FakeDesktop::new("before", "അ");
    let mut orch = orchestrator(&desktop);

    assert!(orch.run_conversion(EncodingTag::Ml));

    logs_assert(|lines: &[&str]| {
        let seen = transitions(lines);
        let expected = [
            "Snapshotting",
            "Capturing",
            "Converting",
            "Replacing",
            "Restoring",
            "Idle",
        ];
        if seen == expected {
            Ok(())
        } else {
            Err(format!("unexpected transitions: {seen:?}"))
        }
    });
}

#[test]
#[traced_test]
fn failed_capture_aborts_before_converting() {
    let desktop = FakeDesktop::new("before", "");
    desktop.with(|s| s.copy_ignored = true);
    let mut orch = orchestrator(&desktop);

    assert!(!orch.run_conversion(EncodingTag::Ml));

    logs_assert(|lines: &[&str]| {
        let seen = transitions(lines);
        let expected = ["Snapshotting", "Capturing", "Aborted", "Restoring", "Idle"];
        if seen == expected {
            Ok(())
        } else {
            Err(format!("unexpected transitions: {seen:?}"))
        }
    });
}

#[test]
#[traced_test]
fn failed_paste_aborts_after_replacing() {
    let desktop = FakeDesktop::new("before", "അ");
    desktop.with(|s| s.fail_paste = true);
    let mut orch = orchestrator(&desktop);

    assert!(!orch.run_conversion(EncodingTag::Ml));

    logs_assert(|lines: &[&str]| {
        let seen = transitions(lines);
        let expected = [
            "Snapshotting",
            "Capturing",
            "Converting",
            "Replacing",
            "Aborted",
            "Restoring",
            "Idle",
        ];
        if seen == expected {
            Ok(())
        } else {
            Err(format!("unexpected transitions: {seen:?}"))
        }
    });
}
