//! Turns arguments passed to intercepted capabilities into transcript text.

use boa_engine::{Context, JsError, JsResult, JsValue, js_string};

/// Substituted for any argument whose rendering raised
pub const PLACEHOLDER: &str = "[unrenderable value]";

/// The closed set of argument shapes, each with its own rendering rule.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// Primitives and callables: natural string conversion
    Scalar(&'a JsValue),
    /// Plain objects and arrays: pretty-printed JSON
    Composite(&'a JsValue),
    /// Error objects: `Name: message`
    Fault(&'a JsValue),
}

impl<'a> Shape<'a> {
    pub fn classify(value: &'a JsValue, context: &mut Context) -> Self {
        let Some(object) = value.as_object() else {
            return Shape::Scalar(value);
        };
        if object.is_callable() {
            return Shape::Scalar(value);
        }
        match JsError::from_opaque(value.clone()).try_native(context) {
            Ok(_) => Shape::Fault(value),
            Err(_) => Shape::Composite(value),
        }
    }

    fn render(self, indent: u8, context: &mut Context) -> JsResult<String> {
        match self {
            Shape::Scalar(value) => render_scalar(value, context),
            Shape::Composite(value) => render_composite(value, indent, context),
            Shape::Fault(value) => render_scalar(value, context),
        }
    }
}

/// Render a single argument. Never fails: a broken render becomes [`PLACEHOLDER`].
pub fn render(value: &JsValue, indent: u8, context: &mut Context) -> String {
    Shape::classify(value, context)
        .render(indent, context)
        .unwrap_or_else(|err| {
            tracing::warn!("argument could not be rendered: {}", err);
            PLACEHOLDER.to_string()
        })
}

pub fn render_all(args: &[JsValue], indent: u8, context: &mut Context) -> Vec<String> {
    args.iter().map(|arg| render(arg, indent, context)).collect()
}

fn render_scalar(value: &JsValue, context: &mut Context) -> JsResult<String> {
    if value.is_symbol() {
        return Ok(value.display().to_string());
    }
    Ok(value.to_string(context)?.to_std_string_escaped())
}

fn render_composite(value: &JsValue, indent: u8, context: &mut Context) -> JsResult<String> {
    let global = context.global_object();
    let json = global.get(js_string!("JSON"), context)?;
    let stringify = match json.as_object() {
        Some(object) => object.get(js_string!("stringify"), context)?,
        None => JsValue::undefined(),
    };
    let Some(stringify) = stringify.as_callable() else {
        return render_scalar(value, context);
    };

    let args = [value.clone(), JsValue::null(), JsValue::from(i32::from(indent))];
    let out = stringify.call(&json, &args, context)?;
    if out.is_undefined() {
        return render_scalar(value, context);
    }
    render_scalar(&out, context)
}
