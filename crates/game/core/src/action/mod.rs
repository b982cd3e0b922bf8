//! Movement vocabulary shared by the rules and the decision engine.
//!
//! Every decision an agent makes is a [`Heading`]; `Stop` is always legal.
mod movement;

pub use movement::{Heading, LegalActions, MoveError};
