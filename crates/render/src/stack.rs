use glam::DMat4;

/// An explicit model-view matrix stack.
///
/// Replaces the process-wide stack-plus-current-matrix globals of immediate
/// mode renderers with a value callers pass around. Popping an empty stack
/// returns `None` instead of panicking; prefer [`MatrixStack::scoped`] so
/// push/pop pairs are balanced statically.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: DMat4,
    saved: Vec<DMat4>,
}

impl MatrixStack {
    /// A stack whose current matrix is the identity.
    pub fn new() -> Self {
        Self {
            current: DMat4::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// The current composed matrix.
    pub fn current(&self) -> DMat4 {
        self.current
    }

    /// Replace the current matrix.
    pub fn set(&mut self, m: DMat4) {
        self.current = m;
    }

    /// Right-multiply the current matrix by `m`.
    pub fn transform(&mut self, m: DMat4) {
        self.current *= m;
    }

    /// Save a copy of the current matrix.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the most recently pushed matrix, returning the restored value.
    /// Returns `None` (leaving the current matrix untouched) if the stack is
    /// empty.
    pub fn pop(&mut self) -> Option<DMat4> {
        let restored = self.saved.pop()?;
        self.current = restored;
        Some(restored)
    }

    /// Number of saved matrices.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Run `f` between a push/pop pair. The current matrix is restored when
    /// `f` returns, so nesting cannot unbalance the stack.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
