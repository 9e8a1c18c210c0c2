//! Lexical scope versus explicit global state.
//!
//! There is no ambient global here. The "global" lives in [`Globals`] and
//! the only way to change it is [`rebind_global`], which takes the state by
//! `&mut`. Reads go through [`Globals::x`].

/// Initial value of the global.
pub const GLOBAL_X: i64 = 99;
/// Value of the local that the nested closure captures.
pub const ENCLOSING_X: i64 = 88;

/// Program-wide state, passed explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Globals {
    x: i64,
}

impl Default for Globals {
    fn default() -> Self {
        Self { x: GLOBAL_X }
    }
}

impl Globals {
    pub fn x(&self) -> i64 {
        self.x
    }
}

/// Overwrite the global and return the new value.
pub fn rebind_global(globals: &mut Globals, value: i64) -> i64 {
    tracing::debug!(old = globals.x, new = value, "rebinding global x");
    globals.x = value;
    globals.x
}

/// A nested closure reads the enclosing function's local `x`, which
/// shadows the global one.
pub fn enclosing_read(_globals: &Globals) -> i64 {
    let x = ENCLOSING_X;
    let inner = || x;
    inner()
}

/// Values printed by the scope walkthrough, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeTrace {
    pub enclosing: i64,
    pub after_rebind: i64,
    pub global_afterwards: i64,
}

/// Run the walkthrough against `globals`, leaving it rebound to `new_value`.
pub fn scope_walkthrough(globals: &mut Globals, new_value: i64) -> ScopeTrace {
    let enclosing = enclosing_read(globals);
    let after_rebind = rebind_global(globals, new_value);
    ScopeTrace {
        enclosing,
        after_rebind,
        global_afterwards: globals.x(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_local_shadows_global() {
        let globals = Globals::default();
        assert_eq!(globals.x(), 99);
        assert_eq!(enclosing_read(&globals), 88);
        assert_eq!(globals.x(), 99);
    }

    #[test]
    fn rebind_is_visible_to_later_reads() {
        let mut globals = Globals::default();
        assert_eq!(rebind_global(&mut globals, 12), 12);
        assert_eq!(globals.x(), 12);
    }

    #[test]
    fn walkthrough_prints_88_12_12() {
        let mut globals = Globals::default();
        let trace = scope_walkthrough(&mut globals, 12);
        assert_eq!(
            trace,
            ScopeTrace {
                enclosing: 88,
                after_rebind: 12,
                global_afterwards: 12,
            }
        );
    }

    #[test]
    fn separate_states_do_not_interfere() {
        let mut a = Globals::default();
        let b = Globals::default();
        rebind_global(&mut a, 1);
        assert_eq!(b.x(), 99);
    }
}
