use std::cell::RefCell;
use std::rc::Rc;

use boa_engine::object::builtins::JsFunction;
use boa_engine::object::{FunctionObjectBuilder, ObjectInitializer};
use boa_engine::property::Attribute;
use boa_engine::{Context, JsObject, JsResult, JsValue, NativeFunction, js_string};

use super::recorder::Recorder;
use super::render;
use super::transcript::EntryKind;

/// Parameter name of the print namespace inside compiled code
pub const PRINT_SLOT: &str = "console";
/// Parameter name of the dialog function inside compiled code
pub const DIALOG_SLOT: &str = "alert";

/// Shadowed `console` namespace and `alert` function bound to one run's recorder.
pub struct CapabilitySet {
    console: JsObject,
    alert: JsFunction,
}

impl CapabilitySet {
    pub fn bind(context: &mut Context, recorder: &Rc<RefCell<Recorder>>, indent: u8) -> Self {
        let console = ObjectInitializer::new(context)
            .function(
                intercept(recorder, EntryKind::Print, indent),
                js_string!("log"),
                0,
            )
            .function(
                intercept(recorder, EntryKind::Warning, indent),
                js_string!("warn"),
                0,
            )
            .function(
                intercept(recorder, EntryKind::ErrorLog, indent),
                js_string!("error"),
                0,
            )
            .build();

        let alert = FunctionObjectBuilder::new(context.realm(), dialog(recorder, indent))
            .name(js_string!("alert"))
            .length(1)
            .constructor(false)
            .build();

        Self { console, alert }
    }

    /// Also expose the shadowed values as globals, so `globalThis.console` and
    /// `eval`'d code resolve to them instead of anything the host provides.
    pub fn install_globals(&self, context: &mut Context) -> JsResult<()> {
        context.register_global_property(
            js_string!("console"),
            self.console.clone(),
            Attribute::all(),
        )?;
        context.register_global_property(
            js_string!("alert"),
            self.alert.clone(),
            Attribute::all(),
        )?;
        Ok(())
    }

    /// Call arguments in slot order: print namespace first, dialog second.
    pub fn arguments(&self) -> [JsValue; 2] {
        [self.console.clone().into(), self.alert.clone().into()]
    }
}

fn intercept(recorder: &Rc<RefCell<Recorder>>, kind: EntryKind, indent: u8) -> NativeFunction {
    let recorder = Rc::clone(recorder);
    // SAFETY: the closure captures no garbage-collected values.
    unsafe {
        NativeFunction::from_closure(move |_this, args, ctx| {
            // Render before borrowing: toJSON and getters may log re-entrantly.
            let parts = render::render_all(args, indent, ctx);
            recorder.borrow_mut().record(kind, parts);
            Ok(JsValue::undefined())
        })
    }
}

fn dialog(recorder: &Rc<RefCell<Recorder>>, indent: u8) -> NativeFunction {
    let recorder = Rc::clone(recorder);
    // SAFETY: the closure captures no garbage-collected values.
    unsafe {
        NativeFunction::from_closure(move |_this, args, ctx| {
            let message = args.first().map(|arg| render::render(arg, indent, ctx));
            recorder.borrow_mut().record(EntryKind::DialogEcho, message);
            Ok(JsValue::undefined())
        })
    }
}
