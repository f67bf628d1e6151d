//! Interactive text driver for the cash register.
//!
//! The driver owns all IO: it reads operator input through [`input::Tokens`],
//! calls into a [`cashreg_register::Register`], and renders results with
//! [`table`]. The register itself never reads or prints.

pub mod args;
pub mod driver;
pub mod input;
pub mod table;

pub use args::{Args, OutputFormat};
pub use driver::{Driver, MenuCommand};
pub use input::{Input, Tokens};
