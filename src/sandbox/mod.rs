mod capabilities;
mod recorder;
pub mod render;
mod transcript;

use std::cell::RefCell;
use std::rc::Rc;

use boa_engine::{Context, JsError, JsNativeError, JsObject, JsResult, JsString, JsValue, js_string};

use crate::editor::{Buffer, SourceEditor};

pub use capabilities::{CapabilitySet, DIALOG_SLOT, PRINT_SLOT};
pub use recorder::Recorder;
pub use transcript::{EMPTY_RUN_MESSAGE, EntryKind, Transcript, TranscriptEntry};

/// Execute a JavaScript snippet in a fresh sandbox
///
/// The snippet is the body of a function receiving `console` and `alert`.
/// Faults never escape: they come back as the last transcript entry.
pub fn execute_snippet(code: &str) -> Transcript {
    Sandbox::new(Buffer::default()).execute(code)
}

#[derive(Debug, Clone)]
pub struct SandboxOptions {
    /// Indentation used when pretty-printing objects and arrays
    pub indent: u8,
}

impl Default for SandboxOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Lifecycle of a single run. `Completed` and `Faulted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Compiling,
    Invoking,
    Completed,
    Faulted,
}

/// Runs learner code against the intercepted capability set.
///
/// One run at a time; each run gets its own engine context so nothing leaks between runs.
pub struct Sandbox<E: SourceEditor = Buffer> {
    editor: E,
    recorder: Rc<RefCell<Recorder>>,
    options: SandboxOptions,
    state: RunState,
    last: Option<Transcript>,
}

impl<E: SourceEditor> Sandbox<E> {
    pub fn new(editor: E) -> Self {
        Self::with_options(editor, SandboxOptions::default())
    }

    pub fn with_options(editor: E, options: SandboxOptions) -> Self {
        Self {
            editor,
            recorder: Rc::new(RefCell::new(Recorder::new())),
            options,
            state: RunState::Idle,
            last: None,
        }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Transcript of the most recent run, cleared by [`Sandbox::reset`]
    pub fn transcript(&self) -> Option<&Transcript> {
        self.last.as_ref()
    }

    /// Snapshot the editor buffer and execute it
    pub fn run(&mut self) -> Transcript {
        let snapshot = self.editor.text();
        self.execute(&snapshot)
    }

    /// Compile `source` as a function body, invoke it with the shadowed capabilities,
    /// and return the finalized transcript. Blocks until the code returns or raises.
    pub fn execute(&mut self, source: &str) -> Transcript {
        self.recorder.borrow_mut().reset();
        self.transition(RunState::Idle);
        tracing::debug!(bytes = source.len(), "starting run");

        let mut context = Context::default();
        let transcript = match self.invoke(source, &mut context) {
            Ok(()) => {
                context.run_jobs();
                self.transition(RunState::Completed);
                self.recorder.borrow_mut().finalize()
            }
            Err(err) => {
                let message = fault_message(&err, &mut context);
                self.transition(RunState::Faulted);
                let mut recorder = self.recorder.borrow_mut();
                recorder.record_fault(message);
                recorder.finalize()
            }
        };
        drop(context);

        tracing::debug!(entries = transcript.len(), state = ?self.state, "run finished");
        self.last = Some(transcript.clone());
        transcript
    }

    /// Restore the editor to `baseline` and forget the previous run
    pub fn reset(&mut self, baseline: &str) {
        self.editor.set_text(baseline);
        self.recorder.borrow_mut().reset();
        self.last = None;
        self.transition(RunState::Idle);
    }

    fn invoke(&mut self, source: &str, context: &mut Context) -> JsResult<()> {
        let capabilities = CapabilitySet::bind(context, &self.recorder, self.options.indent);
        capabilities.install_globals(context)?;

        self.transition(RunState::Compiling);
        let callable = compile(source, context)?;

        self.transition(RunState::Invoking);
        callable.call(&JsValue::undefined(), &capabilities.arguments(), context)?;
        Ok(())
    }

    fn transition(&mut self, next: RunState) {
        tracing::trace!(from = ?self.state, to = ?next, "run state");
        self.state = next;
    }
}

/// Build a callable from source text with the engine's own `Function` constructor.
fn compile(source: &str, context: &mut Context) -> JsResult<JsObject> {
    let global = context.global_object();
    let function = global.get(js_string!("Function"), context)?;
    let Some(constructor) = function.as_constructor() else {
        return Err(JsNativeError::typ()
            .with_message("Function constructor is not available")
            .into());
    };
    let args = [
        JsValue::from(JsString::from(PRINT_SLOT)),
        JsValue::from(JsString::from(DIALOG_SLOT)),
        JsValue::from(JsString::from(source)),
    ];
    constructor.construct(&args, None, context)
}

/// Message text of a raised fault: the `message` of error objects, the string form of anything else.
fn fault_message(err: &JsError, context: &mut Context) -> String {
    if let Ok(native) = err.try_native(context) {
        return native.message().to_string();
    }
    let value = err.to_opaque(context);
    match value.to_string(context) {
        Ok(text) => text.to_std_string_escaped(),
        Err(_) => err.to_string(),
    }
}
