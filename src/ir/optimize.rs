//! # IR Optimizer
//!
//! Optimization passes that transform IR programs to reduce redundancy.
//!
//! ## Optimization Passes
//!
//! 1. **Remove redundant state changes**: Don't emit SetBold(true) if
//!    already bold, or a fill color that is already current
//! 2. **Drop trailing state changes**: State set after the last drawing op
//!    affects nothing

use super::ops::{GraphicsState, Op, Program};

impl Program {
    /// Apply all optimization passes.
    pub fn optimize(self) -> Self {
        let ops = remove_redundant_state(self.ops);
        let ops = drop_trailing_state(ops);
        Program { ops }
    }
}

/// Remove state changes that don't change the current graphics state.
fn remove_redundant_state(ops: Vec<Op>) -> Vec<Op> {
    let mut result = Vec::with_capacity(ops.len());
    let mut state = GraphicsState::default();

    for op in ops {
        match &op {
            Op::SetFillColor(c) => {
                if *c != state.fill {
                    state.fill = *c;
                    result.push(op);
                }
            }
            Op::SetFontSize(s) => {
                if *s != state.font_size {
                    state.font_size = *s;
                    result.push(op);
                }
            }
            Op::SetBold(b) => {
                if *b != state.bold {
                    state.bold = *b;
                    result.push(op);
                }
            }

            // Drawing ops pass through unchanged
            _ => result.push(op),
        }
    }

    result
}

/// Drop state changes after the last drawing op.
fn drop_trailing_state(mut ops: Vec<Op>) -> Vec<Op> {
    while ops.last().is_some_and(Op::is_state_change) {
        ops.pop();
    }
    ops
}
