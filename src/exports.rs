use std::fmt;

use tracing::{debug, trace};

use crate::{error::CallError, math, util::num::i64_to_f64_checked, value::Value};

/// Result type for calls through the export table.
pub type CallResult<T> = Result<T, CallError>;

/// The C type of a parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CType {
    /// A signed integer, carried as `Value::Integer`.
    Int,
    /// A double precision float, carried as `Value::Real`.
    Double,
    /// A boolean, carried as `Value::Bool`.
    Bool,
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Double => "double",
            Self::Bool => "bool",
        })
    }
}

/// A single declared parameter of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    /// The parameter name, as written in the prototype.
    pub name: &'static str,
    /// The declared C type.
    pub ty:   CType,
}

/// Entry point of an export. Receives arguments whose count already matches
/// the declaration.
pub type EntryFn = fn(&Args<'_>) -> CallResult<Value>;

/// Describes one function made available by the `math` module.
#[derive(Debug, Clone, Copy)]
pub struct Export {
    /// The name callers resolve the export by.
    pub name:    &'static str,
    /// Declared parameters, in order.
    pub params:  &'static [Param],
    /// The declared return type.
    pub returns: CType,
    /// One-line docstring.
    pub doc:     &'static str,
    entry:       EntryFn,
}

/// Arguments of a single call, bound to the export being called.
///
/// Accessors coerce by position and report failures against the declared
/// parameter name.
pub struct Args<'a> {
    export: &'a Export,
    values: &'a [Value],
}

impl Args<'_> {
    /// Only an entry reading past its own declaration misses here, since
    /// `Export::invoke` has already checked the count.
    fn param(&self, index: usize) -> CallResult<(&'static str, Value)> {
        match (self.export.params.get(index), self.values.get(index)) {
            (Some(param), Some(value)) => Ok((param.name, *value)),
            _ => Err(self.export.arity_mismatch(self.values.len())),
        }
    }

    /// Reads the argument at `index` as an `int`.
    ///
    /// Reals are rejected rather than truncated.
    pub fn int(&self, index: usize) -> CallResult<i64> {
        let name = self.export.name;
        match self.param(index)? {
            (_, Value::Integer(n)) => Ok(n),
            (param, Value::Real(_)) => Err(CallError::ExpectedInteger { name, param }),
            (param, Value::Bool(_)) => Err(CallError::ExpectedNumber { name, param }),
        }
    }

    /// Reads the argument at `index` as a `double`, promoting integers that
    /// convert exactly.
    pub fn real(&self, index: usize) -> CallResult<f64> {
        let name = self.export.name;
        match self.param(index)? {
            (_, Value::Real(r)) => Ok(r),
            (param, Value::Integer(n)) => {
                trace!(function = name, param, value = n, "promoting integer argument");
                i64_to_f64_checked(n, CallError::LiteralTooLarge { name, param })
            },
            (param, Value::Bool(_)) => Err(CallError::ExpectedNumber { name, param }),
        }
    }
}

impl Export {
    /// Renders the C prototype of this export.
    ///
    /// # Example
    /// ```
    /// use mathbind::exports::lookup;
    ///
    /// let add = lookup("add").unwrap();
    /// assert_eq!(add.signature(), "int add(int a, int b)");
    /// ```
    #[must_use]
    pub fn signature(&self) -> String {
        let params = self.params
                         .iter()
                         .map(|p| format!("{} {}", p.ty, p.name))
                         .collect::<Vec<_>>()
                         .join(", ");

        format!("{} {}({params})", self.returns, self.name)
    }

    /// Invokes this export with the given arguments.
    ///
    /// ## Errors
    /// Returns `ArgumentCountMismatch` if the number of arguments differs from
    /// the declaration, a type error if an argument cannot be coerced to its
    /// parameter type, or whatever the underlying function reports.
    pub fn invoke(&self, values: &[Value]) -> CallResult<Value> {
        self.check_arity(values.len())?;

        (self.entry)(&Args { export: self, values })
    }

    /// Checks that `found` arguments match the declared parameter count.
    ///
    /// ## Example
    /// ```
    /// use mathbind::exports::lookup;
    ///
    /// let add = lookup("add").unwrap();
    /// assert!(add.check_arity(2).is_ok());
    /// assert!(add.check_arity(3).is_err());
    /// ```
    pub fn check_arity(&self, found: usize) -> CallResult<()> {
        if found == self.params.len() {
            Ok(())
        } else {
            Err(self.arity_mismatch(found))
        }
    }

    const fn arity_mismatch(&self, found: usize) -> CallError {
        CallError::ArgumentCountMismatch { name: self.name,
                                           expected: self.params.len(),
                                           found }
    }
}

fn add_entry(args: &Args<'_>) -> CallResult<Value> {
    Ok(math::add(args.int(0)?, args.int(1)?)?.into())
}

fn multiply_entry(args: &Args<'_>) -> CallResult<Value> {
    Ok(math::multiply(args.real(0)?, args.real(1)?).into())
}

fn square_root_entry(args: &Args<'_>) -> CallResult<Value> {
    Ok(math::square_root(args.real(0)?).into())
}

fn is_even_entry(args: &Args<'_>) -> CallResult<Value> {
    Ok(math::is_even(args.int(0)?).into())
}

/// Every function exported by the `math` module, in declaration order.
pub static EXPORTS: &[Export] =
    &[Export { name:    "add",
               params:  &[Param { name: "a",
                                  ty:   CType::Int, },
                          Param { name: "b",
                                  ty:   CType::Int, }],
               returns: CType::Int,
               doc:     "Adds two integers.",
               entry:   add_entry, },
      Export { name:    "multiply",
               params:  &[Param { name: "a",
                                  ty:   CType::Double, },
                          Param { name: "b",
                                  ty:   CType::Double, }],
               returns: CType::Double,
               doc:     "Multiplies two floating-point numbers.",
               entry:   multiply_entry, },
      Export { name:    "square_root",
               params:  &[Param { name: "x",
                                  ty:   CType::Double, }],
               returns: CType::Double,
               doc:     "Calculates the square root of a number.",
               entry:   square_root_entry, },
      Export { name:    "is_even",
               params:  &[Param { name: "n",
                                  ty:   CType::Int, }],
               returns: CType::Bool,
               doc:     "Checks if a number is even.",
               entry:   is_even_entry, }];

/// Resolves an export by name.
///
/// ## Errors
/// Returns `CallError::UnknownFunction` if no export has this name.
///
/// ## Example
/// ```
/// use mathbind::{error::CallError, exports::lookup};
///
/// assert_eq!(lookup("is_even").unwrap().doc, "Checks if a number is even.");
/// assert!(matches!(lookup("divide"), Err(CallError::UnknownFunction { .. })));
/// ```
pub fn lookup(name: &str) -> CallResult<&'static Export> {
    EXPORTS.iter()
           .find(|export| export.name == name)
           .ok_or_else(|| CallError::UnknownFunction { name: name.to_owned() })
}

/// Resolves `name` and calls it with `args`.
///
/// ## Errors
/// Fails if the name does not resolve or the call itself fails. See
/// [`Export::invoke`].
///
/// ## Example
/// ```
/// use mathbind::{exports::call, value::Value};
///
/// // Integers are promoted for `double` parameters.
/// let r = call("square_root", &[Value::Integer(16)]).unwrap();
/// assert_eq!(r, Value::Real(4.0));
/// ```
pub fn call(name: &str, args: &[Value]) -> CallResult<Value> {
    let export = lookup(name)?;
    debug!(function = export.name, args = args.len(), "calling export");

    let result = export.invoke(args)?;
    debug!(function = export.name, kind = result.kind(), %result, "export returned");

    Ok(result)
}
