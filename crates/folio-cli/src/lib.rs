//! # folio-cli: Operator CLI for the Portfolio Services
//!
//! ## Subcommands
//!
//! - `folio contact`: send a message to a running folio-api through the
//!   contact form state machine.
//! - `folio projects`: browse the embedded site content.
//!
//! ```bash
//! folio contact --name Jo --email jo@example.com --message "Hello"
//! folio projects list --domain edtech
//! folio projects show translate-ease --case-study
//! ```

pub mod contact;
pub mod projects;
