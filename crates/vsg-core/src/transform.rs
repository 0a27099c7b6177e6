//! Nested affine transform scopes.
//!
//! The stack always holds at least one frame; a fresh stack holds two
//! identity sentinels so a top-level `reset` (pop, then duplicate) lands on
//! identity. The effective transform of a drawing call is the product of all
//! frames, outermost first.

use kurbo::{Affine, Vec2};
use std::cell::Cell;

/// Depth of a fresh stack. `pop` never goes below it.
pub const SENTINEL_DEPTH: usize = 2;

/// Where an incremental transform operation is applied relative to the
/// current top frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixOrder {
    /// `top' = top × op`: the operation acts on local coordinates first.
    #[default]
    Prepend,
    /// `top' = op × top`: the operation acts after the existing top.
    Append,
}

#[derive(Debug, Clone)]
pub struct TransformStack {
    frames: Vec<Affine>,
    composed: Cell<Option<Affine>>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            frames: vec![Affine::IDENTITY; SENTINEL_DEPTH],
            composed: Cell::new(Some(Affine::IDENTITY)),
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Open a new scope with an identity frame.
    pub fn push(&mut self) {
        self.frames.push(Affine::IDENTITY);
    }

    /// Close the innermost scope. Silently ignored at sentinel depth.
    pub fn pop(&mut self) {
        if self.frames.len() <= SENTINEL_DEPTH {
            log::debug!("transform pop ignored at sentinel depth");
            return;
        }
        self.frames.pop();
        self.invalidate();
    }

    /// Push a copy of the top frame.
    pub fn duplicate_top(&mut self) {
        let top = self.peek();
        self.frames.push(top);
        self.invalidate();
    }

    /// Discard the top frame and replace it with a copy of the one below.
    ///
    /// At top level this restores identity. Inside a container the enclosing
    /// frame ends up applied twice until the container closes.
    pub fn reset(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        self.duplicate_top();
        self.invalidate();
    }

    pub fn peek(&self) -> Affine {
        self.frames.last().copied().unwrap_or(Affine::IDENTITY)
    }

    pub fn replace_top(&mut self, m: Affine) {
        if let Some(top) = self.frames.last_mut() {
            *top = m;
        }
        self.invalidate();
    }

    /// Combine `op` into the top frame on the side given by `order`.
    pub fn apply(&mut self, op: Affine, order: MatrixOrder) {
        let top = self.peek();
        self.replace_top(match order {
            MatrixOrder::Prepend => top * op,
            MatrixOrder::Append => op * top,
        });
    }

    pub fn translate(&mut self, dx: f64, dy: f64, order: MatrixOrder) {
        self.apply(Affine::translate(Vec2::new(dx, dy)), order);
    }

    pub fn scale(&mut self, sx: f64, sy: f64, order: MatrixOrder) {
        self.apply(Affine::scale_non_uniform(sx, sy), order);
    }

    /// Rotate by `degrees`, clockwise on a y-down canvas.
    pub fn rotate(&mut self, degrees: f64, order: MatrixOrder) {
        self.apply(Affine::rotate(degrees.to_radians()), order);
    }

    /// Product of every frame, outermost first. Cached until the next change.
    pub fn composed(&self) -> Affine {
        if let Some(m) = self.composed.get() {
            return m;
        }
        let m = self
            .frames
            .iter()
            .filter(|f| **f != Affine::IDENTITY)
            .fold(Affine::IDENTITY, |acc, f| acc * *f);
        self.composed.set(Some(m));
        m
    }

    fn invalidate(&self) {
        self.composed.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn approx(a: Affine, b: Affine) -> bool {
        a.as_coeffs()
            .iter()
            .zip(b.as_coeffs().iter())
            .all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn fresh_stack_is_identity() {
        let stack = TransformStack::new();
        assert_eq!(stack.depth(), SENTINEL_DEPTH);
        assert_eq!(stack.composed(), Affine::IDENTITY);
    }

    #[test]
    fn prepended_ops_compose_in_call_order() {
        let mut stack = TransformStack::new();
        stack.translate(10.0, 20.0, MatrixOrder::Prepend);
        stack.scale(2.0, 3.0, MatrixOrder::Prepend);
        stack.rotate(30.0, MatrixOrder::Prepend);

        let expected = Affine::IDENTITY
            * Affine::translate((10.0, 20.0))
            * Affine::scale_non_uniform(2.0, 3.0)
            * Affine::rotate(30f64.to_radians());
        assert!(approx(stack.composed(), expected));
    }

    #[test]
    fn appended_op_acts_last() {
        let mut stack = TransformStack::new();
        stack.scale(2.0, 2.0, MatrixOrder::Prepend);
        stack.translate(5.0, 0.0, MatrixOrder::Append);
        // scale first, then translate in device space
        let p = stack.composed() * Point::new(1.0, 1.0);
        assert_eq!(p, Point::new(7.0, 2.0));
    }

    #[test]
    fn pop_at_sentinel_depth_is_noop() {
        let mut stack = TransformStack::new();
        stack.translate(1.0, 1.0, MatrixOrder::Prepend);
        stack.pop();
        stack.pop();
        assert_eq!(stack.depth(), SENTINEL_DEPTH);
        assert_eq!(stack.composed(), Affine::translate((1.0, 1.0)));
    }

    #[test]
    fn top_level_reset_restores_identity() {
        let mut stack = TransformStack::new();
        stack.translate(4.0, 4.0, MatrixOrder::Prepend);
        stack.reset();
        assert_eq!(stack.depth(), SENTINEL_DEPTH);
        assert_eq!(stack.composed(), Affine::IDENTITY);
    }

    #[test]
    fn nested_scopes_restore_outer_transform() {
        let mut stack = TransformStack::new();
        stack.translate(3.0, 4.0, MatrixOrder::Prepend);
        let outer = stack.composed();

        stack.push();
        stack.translate(10.0, 0.0, MatrixOrder::Prepend);
        stack.push();
        stack.translate(5.0, 0.0, MatrixOrder::Prepend);
        stack.reset();
        stack.pop();
        stack.pop();

        assert_eq!(stack.composed(), outer);
    }

    #[test]
    fn replace_top_invalidates_cache() {
        let mut stack = TransformStack::new();
        assert_eq!(stack.composed(), Affine::IDENTITY);
        stack.replace_top(Affine::scale(2.0));
        assert_eq!(stack.composed(), Affine::scale(2.0));
        stack.push();
        stack.replace_top(Affine::translate((1.0, 0.0)));
        assert_eq!(
            stack.composed(),
            Affine::scale(2.0) * Affine::translate((1.0, 0.0))
        );
    }
}
