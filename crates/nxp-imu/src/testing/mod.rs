//! Testing infrastructure (mock register file).

pub(crate) mod mock;

pub(crate) use mock::{MockInterface, Transaction};
