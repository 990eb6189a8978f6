use jsplay::editor::{Buffer, SourceEditor};
use jsplay::sandbox::{EMPTY_RUN_MESSAGE, EntryKind, Sandbox, execute_snippet, render::PLACEHOLDER};

#[test]
fn test_print_then_throw() {
    let result = execute_snippet("console.log('x'); throw new Error('boom')");
    assert_eq!(result.kinds(), vec![EntryKind::Print, EntryKind::Fault]);
    assert_eq!(result.texts(), vec!["x", "boom"]);
}

#[test]
fn test_empty_run() {
    let result = execute_snippet("let a = 1 + 2;");
    assert_eq!(result.len(), 1);
    assert_eq!(result.entries[0].kind, EntryKind::EmptyRun);
    assert_eq!(result.entries[0].text, EMPTY_RUN_MESSAGE);
}

#[test]
fn test_empty_source_is_empty_run() {
    let result = execute_snippet("");
    assert_eq!(result.kinds(), vec![EntryKind::EmptyRun]);
}

#[test]
fn test_entries_follow_call_order_not_kind() {
    let code = r#"
        console.warn('w1');
        console.log('p1');
        alert('a1');
        console.error('e1');
        console.log('p2');
    "#;
    let result = execute_snippet(code);
    assert_eq!(
        result.kinds(),
        vec![
            EntryKind::Warning,
            EntryKind::Print,
            EntryKind::DialogEcho,
            EntryKind::ErrorLog,
            EntryKind::Print,
        ]
    );
    let sequences: Vec<_> = result.iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_error_log_does_not_end_run() {
    let result = execute_snippet("console.error('careful'); console.log('still here');");
    assert_eq!(result.kinds(), vec![EntryKind::ErrorLog, EntryKind::Print]);
    assert!(!result.is_faulted());
}

#[test]
fn test_fault_is_terminal() {
    let code = r#"
        for (let i = 0; i < 3; i++) {
            console.log(i);
        }
        null.property;
        console.log('never');
    "#;
    let result = execute_snippet(code);
    assert_eq!(result.len(), 4);
    assert_eq!(result.texts()[..3], ["0", "1", "2"]);
    assert_eq!(result.entries[3].kind, EntryKind::Fault);
    assert!(!result.texts().contains(&"never"));
}

#[test]
fn test_syntax_error_is_single_fault() {
    let result = execute_snippet("console.log('unreachable'); this is not { valid javascript");
    assert_eq!(result.kinds(), vec![EntryKind::Fault]);
    assert!(!result.entries[0].text.is_empty());
}

#[test]
fn test_reference_error_message() {
    let result = execute_snippet("unknownVariable");
    assert_eq!(result.kinds(), vec![EntryKind::Fault]);
    assert!(
        result.entries[0].text.contains("unknownVariable"),
        "Unexpected message: {:?}",
        result.entries[0].text
    );
}

#[test]
fn test_fault_message_has_no_error_name() {
    let result = execute_snippet("throw new TypeError('wrong type')");
    assert_eq!(result.texts(), vec!["wrong type"]);
}

#[test]
fn test_caught_errors_are_ordinary_code() {
    let code = r#"
        try {
            throw new Error('handled');
        } catch (e) {
            console.log('caught:', e.message);
        }
    "#;
    let result = execute_snippet(code);
    assert_eq!(result.texts(), vec!["caught: handled"]);
    assert!(!result.is_faulted());
}

#[test]
fn test_deterministic_transcripts() {
    let code = "const xs = [3, 1, 2].sort(); console.log(xs); alert(xs.length);";
    let first = execute_snippet(code);
    let second = execute_snippet(code);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_global_console_is_intercepted() {
    let code = "globalThis.console.log('via global'); eval(\"console.warn('via eval')\");";
    let result = execute_snippet(code);
    assert_eq!(result.kinds(), vec![EntryKind::Print, EntryKind::Warning]);
    assert_eq!(result.texts(), vec!["via global", "via eval"]);
}

#[test]
fn test_no_state_between_runs() {
    let mut sandbox = Sandbox::new(Buffer::default());
    sandbox.execute("globalThis.counter = 41;");
    let result = sandbox.execute("console.log(typeof counter)");
    assert_eq!(result.texts(), vec!["undefined"]);
}

#[test]
fn test_previous_run_discarded() {
    let mut sandbox = Sandbox::new(Buffer::default());
    sandbox.execute("console.log('first'); console.log('run');");
    let result = sandbox.execute("console.log('second')");
    assert_eq!(result.texts(), vec!["second"]);
    assert_eq!(result.entries[0].sequence, 0);
}

#[test]
fn test_self_referential_value_renders_placeholder() {
    let code = r#"
        const node = { name: 'root' };
        node.parent = node;
        console.log('before', node);
        console.log('after');
    "#;
    let result = execute_snippet(code);
    assert!(!result.is_faulted());
    assert_eq!(result.texts(), vec![format!("before {}", PLACEHOLDER).as_str(), "after"]);
}

#[test]
fn test_objects_are_pretty_printed() {
    let result = execute_snippet("console.log('user', { name: 'Sarah', tags: [] })");
    assert_eq!(
        result.texts(),
        vec!["user {\n  \"name\": \"Sarah\",\n  \"tags\": []\n}"]
    );
}

#[test]
fn test_logged_error_object() {
    let result = execute_snippet("console.log(new RangeError('too far'))");
    assert_eq!(result.texts(), vec!["RangeError: too far"]);
}

#[test]
fn test_alert_echo() {
    let result = execute_snippet("alert('Hello from alert')");
    assert_eq!(result.kinds(), vec![EntryKind::DialogEcho]);
    assert_eq!(result.texts(), vec!["Hello from alert"]);
}

#[test]
fn test_console_log_without_arguments() {
    let result = execute_snippet("console.log()");
    assert_eq!(result.kinds(), vec![EntryKind::Print]);
    assert_eq!(result.texts(), vec![""]);
}

#[test]
fn test_promise_callbacks_are_recorded() {
    let code = "Promise.resolve(7).then(v => console.log('resolved', v)); console.log('sync');";
    let result = execute_snippet(code);
    assert_eq!(result.texts(), vec!["sync", "resolved 7"]);
}

#[test]
fn test_run_snapshots_editor_text() {
    let mut sandbox = Sandbox::new(Buffer::new("console.log('v1')"));
    let result = sandbox.run();
    sandbox.editor_mut().set_text("console.log('v2')");
    assert_eq!(result.texts(), vec!["v1"]);
    assert_eq!(sandbox.transcript().unwrap().texts(), vec!["v1"]);
}

#[test]
fn test_reset_then_execute_matches_fresh_sandbox() {
    let baseline = "console.log('Hello, JavaScript!');";

    let mut used = Sandbox::new(Buffer::new(baseline));
    used.editor_mut().set_text("throw new Error('edited')");
    used.run();
    used.reset(baseline);
    assert!(used.transcript().is_none());
    assert_eq!(used.editor().text(), baseline);
    let after_reset = used.execute(baseline);

    let fresh = Sandbox::new(Buffer::default()).execute(baseline);
    assert_eq!(after_reset, fresh);
}
