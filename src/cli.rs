//! Positional argument contract.
//!
//! ```text
//! (none)                       defaults
//! h J1 J2 R1 R2 ID             max_steps = 25
//! h J1 J2 R1 R2 maxSteps ID
//! ```

use std::str::FromStr;

use clap::error::ErrorKind;
use skin_core::automaton::SimParams;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("expected 0, 6 or 7 parameters, got {0}")]
    WrongCount(usize),
    #[error("invalid value '{value}' for {name}")]
    InvalidValue { name: &'static str, value: String },
}

impl ArgsError {
    /// Clap error kind used when reporting this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArgsError::WrongCount(_) => ErrorKind::WrongNumberOfValues,
            ArgsError::InvalidValue { .. } => ErrorKind::ValueValidation,
        }
    }
}

fn parse<T: FromStr>(name: &'static str, value: &str) -> Result<T, ArgsError> {
    value.parse().map_err(|_| ArgsError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

/// Turn the positional parameters into `SimParams`.
pub fn params_from_positionals(values: &[String]) -> Result<SimParams, ArgsError> {
    let defaults = SimParams::default();

    let (max_steps, output_id) = match values.len() {
        0 => return Ok(defaults),
        6 => (defaults.max_steps, values[5].clone()),
        7 => (parse("maxSteps", &values[5])?, values[6].clone()),
        n => return Err(ArgsError::WrongCount(n)),
    };

    Ok(SimParams {
        bias: parse("h", &values[0])?,
        activator_weight: parse("J1", &values[1])?,
        inhibitor_weight: parse("J2", &values[2])?,
        inner_radius: parse("R1", &values[3])?,
        outer_radius: parse("R2", &values[4])?,
        max_steps,
        output_id,
    })
}
