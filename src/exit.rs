//! Scoped exit reporting
//!
//! [`ExitHook`] wraps a block of work so that exactly one of two hooks runs
//! when the block ends: `on_success` on normal completion, `on_failure` on
//! an error or panic. The machinery observes the outcome but never changes
//! it: an `Err` is returned untouched and a panic keeps unwinding after
//! the hook has run.
//!
//! Two usage forms are provided: [`ExitHook::scope`] for block-scoped use
//! (the guard fires on drop) and [`ExitHook::observe`] for wrapping a
//! fallible closure.

use std::any::Any;
use std::backtrace::Backtrace;
use std::fmt::{Debug, Display};
use std::ops::Deref;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

/// Captured details of an abnormal exit: what kind of failure, its message,
/// and a trace of where it happened.
#[derive(Debug, Clone)]
pub struct Failure {
    /// Error type name, or `panic`.
    pub kind: String,
    /// The failure's display text.
    pub message: String,
    /// Debug rendering of the error, or a captured backtrace for panics.
    pub trace: String,
}

impl Failure {
    /// Captures an error value.
    pub fn from_error<E: Display + Debug>(error: &E) -> Self {
        Failure {
            kind: std::any::type_name::<E>().to_string(),
            message: error.to_string(),
            trace: format!("{error:?}"),
        }
    }

    /// Captures a panic payload together with a backtrace taken at the
    /// catch site.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };
        Failure {
            kind: "panic".to_string(),
            message,
            trace: Backtrace::force_capture().to_string(),
        }
    }

    // Inside `Drop` the panic payload is out of reach; the backtrace is all
    // there is.
    fn from_unwind() -> Self {
        Failure {
            kind: "panic".to_string(),
            message: "thread panicked while an exit scope was active".to_string(),
            trace: Backtrace::force_capture().to_string(),
        }
    }

    /// Renders the failure as a single human-readable multi-line string.
    pub fn render(&self) -> String {
        format!("{}: {}\n{}", self.kind, self.message, self.trace)
    }
}

/// Exit reporting hooks
///
/// Implementors supply the two hooks; the provided methods run work under
/// the exactly-once contract. Hooks must not panic: a hook panicking while
/// the thread is already unwinding aborts the process.
pub trait ExitHook {
    /// Runs once when the wrapped work completes normally.
    fn on_success(&self);

    /// Runs once when the wrapped work fails, before the failure continues
    /// to propagate.
    fn on_failure(&self, failure: &Failure);

    /// Enters a reporting scope. The returned guard derefs to the hook and
    /// fires exactly one hook when dropped: `on_failure` if the thread is
    /// unwinding, `on_success` otherwise.
    fn scope(&self) -> ExitScope<'_, Self>
    where
        Self: Sized,
    {
        ExitScope { hook: self }
    }

    /// Runs a fallible closure and reports its outcome. The closure's
    /// result is handed back unchanged; a panic resumes unwinding after
    /// `on_failure` has run.
    fn observe<T, E, F>(&self, work: F) -> Result<T, E>
    where
        Self: Sized,
        F: FnOnce() -> Result<T, E>,
        E: Display + Debug,
    {
        match panic::catch_unwind(AssertUnwindSafe(work)) {
            Ok(Ok(value)) => {
                self.on_success();
                Ok(value)
            }
            Ok(Err(error)) => {
                self.on_failure(&Failure::from_error(&error));
                Err(error)
            }
            Err(payload) => {
                self.on_failure(&Failure::from_panic(&*payload));
                panic::resume_unwind(payload)
            }
        }
    }

    /// Wraps a callable: invoking the returned closure runs the original
    /// under [`observe`](Self::observe) semantics.
    fn wrap<'a, T, E, F>(&'a self, work: F) -> impl FnOnce() -> Result<T, E> + 'a
    where
        Self: Sized,
        F: FnOnce() -> Result<T, E> + 'a,
        E: Display + Debug,
    {
        move || self.observe(work)
    }
}

/// Guard returned by [`ExitHook::scope`]
///
/// Fires one hook when dropped, based on whether the thread is unwinding.
#[must_use = "the exit scope reports when dropped; bind it to a variable"]
pub struct ExitScope<'a, H: ExitHook> {
    hook: &'a H,
}

impl<H: ExitHook> Deref for ExitScope<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.hook
    }
}

impl<H: ExitHook> Drop for ExitScope<'_, H> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.hook.on_failure(&Failure::from_unwind());
        } else {
            self.hook.on_success();
        }
    }
}
