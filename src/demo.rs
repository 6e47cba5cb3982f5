use std::io::Write;

use tracing::info;

use crate::{error::Result, exports, value::Value};

/// How a step's call and result are rendered into an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `a <op> b = result`
    Infix(&'static str),
    /// `<label>(x, ..) = result`
    Call(&'static str),
    /// `Is n even? result`
    EvenQuestion,
}

/// One call of the demo together with its fixed arguments.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Name of the export to call.
    pub function: &'static str,
    /// Fixed arguments passed to it.
    pub args:     &'static [Value],
    /// How the line is rendered.
    pub template: Template,
}

impl Step {
    /// Renders the output line for this step given the call's result.
    ///
    /// A template whose shape does not fit the argument count falls back to
    /// call notation under the function's own name.
    ///
    /// # Example
    /// ```
    /// use mathbind::{demo::STEPS, value::Value};
    ///
    /// assert_eq!(STEPS[0].render(Value::Integer(8)), "5 + 3 = 8");
    /// ```
    #[must_use]
    pub fn render(&self, result: Value) -> String {
        match (self.template, self.args) {
            (Template::Infix(op), [a, b]) => format!("{a} {op} {b} = {result}"),
            (Template::EvenQuestion, [n]) => format!("Is {n} even? {result}"),
            (template, args) => {
                let label = match template {
                    Template::Call(label) => label,
                    Template::Infix(_) | Template::EvenQuestion => self.function,
                };
                format!("{label}({}) = {result}", join(args))
            },
        }
    }

    /// Calls the step's function and renders the line.
    ///
    /// ## Errors
    /// Propagates any failure to resolve or call the function.
    pub fn run(&self) -> Result<String> {
        let result = exports::call(self.function, self.args)?;
        Ok(self.render(result))
    }
}

fn join(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The demo, in order.
pub static STEPS: &[Step] = &[Step { function: "add",
                                     args:     &[Value::Integer(5), Value::Integer(3)],
                                     template: Template::Infix("+"), },
                              Step { function: "multiply",
                                     args:     &[Value::Real(4.5), Value::Real(2.0)],
                                     template: Template::Infix("*"), },
                              Step { function: "square_root",
                                     args:     &[Value::Real(16.0)],
                                     template: Template::Call("sqrt"), },
                              Step { function: "is_even",
                                     args:     &[Value::Integer(42)],
                                     template: Template::EvenQuestion, }];

/// Runs every step and returns the output lines.
///
/// The first failing step aborts the run.
///
/// ## Errors
/// Returns the error of the first step that fails.
///
/// ## Example
/// ```
/// let lines = mathbind::demo::lines().unwrap();
///
/// assert_eq!(lines,
///            ["5 + 3 = 8", "4.5 * 2.0 = 9.0", "sqrt(16.0) = 4.0", "Is 42 even? True"]);
/// ```
pub fn lines() -> Result<Vec<String>> {
    lines_for(STEPS)
}

/// Runs the given steps in order and returns their output lines.
///
/// ## Errors
/// Returns the error of the first step that fails.
pub fn lines_for(steps: &[Step]) -> Result<Vec<String>> {
    steps.iter().map(Step::run).collect()
}

/// Runs the demo and writes each line, newline terminated, to `out`.
///
/// ## Errors
/// Returns an error if a step fails or writing fails.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    run_steps(STEPS, out)
}

/// Runs `steps` and writes each line, newline terminated, to `out`.
///
/// Nothing is written unless every step succeeds.
///
/// ## Errors
/// Returns an error if a step fails or writing fails.
pub fn run_steps<W: Write>(steps: &[Step], out: &mut W) -> Result<()> {
    let lines = lines_for(steps)?;
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!(steps = lines.len(), "demo finished");
    Ok(())
}
