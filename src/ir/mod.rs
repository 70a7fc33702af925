//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for invoice rendering. The IR is a
//! sequence of page-space drawing ops that sits between declarative
//! components and the PDF bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │ Components  │ ──► │     IR      │ ──► │ Optimizer │ ──► │ Codegen  │
//! │(declarative)│     │  (Vec<Op>)  │     │           │     │  (PDF)   │
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: Debug and visualize what will be drawn
//! 2. **Optimizable**: Remove redundant graphics-state changes
//! 3. **Testable**: Assert on layout without parsing PDF output
//!
//! ## Example
//!
//! ```
//! use factura::ir::{Op, Program, Rgb};
//! use factura::page::PageConfig;
//!
//! let mut program = Program::new();
//! program.push(Op::SetFillColor(Rgb::new(0, 120, 255)));
//! program.push(Op::FillRect { x: 0.0, y: 0.0, width: 210.0, height: 30.0 });
//! program.push(Op::Text { content: "My Company".into(), x: 10.0, y: 20.0 });
//!
//! // Inspect the IR
//! println!("{:#?}", program);
//!
//! // Optimize and generate PDF bytes
//! let bytes = program.optimize().to_pdf_bytes(&PageConfig::A4).unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

mod codegen;
mod ops;
mod optimize;

// Re-export the ops types (codegen and optimize add methods to Program via impl)
pub use ops::*;
