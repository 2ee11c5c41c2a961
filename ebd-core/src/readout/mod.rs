//! Segment display readout

pub mod cells;

pub use cells::{layout, readout, render, Cell, Readout};
