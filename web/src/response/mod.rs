//! Response DTOs for endpoints whose payload is not a plain entity model.

pub(crate) mod analysis;
