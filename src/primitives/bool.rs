//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
///
/// The associated conditional `If` is what turns a classification answer
/// into a concrete strategy type during dispatch.
pub trait Bool: 'static {
    /// Runtime-readable value, for reflection and tests.
    const VALUE: bool;

    /// Type-level conditional: `If<Then, Else>`.
    type If<Then, Else>;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
}
