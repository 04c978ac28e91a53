//! # folio-core: Foundational Types for the Portfolio Services
//!
//! Every other crate in the workspace depends on `folio-core`; it depends on
//! nothing internal.
//!
//! ## Modules
//!
//! - [`contact`]: the contact submission contract: required-field checks in
//!   fixed order, whitespace normalization, and the request wire shape.
//! - [`dispatch`]: dispatch-mode policy (`logged` vs `queued`) driven by an
//!   explicit [`DispatchConfig`], plus the [`Delivery`] extension point.
//! - [`form`]: the client-side contact form state machine with honeypot
//!   suppression and single-flight submission.
//! - [`outcome`]: the success body shared by the server and the client,
//!   and the safe error message.
//! - [`content`]: typed site content (profile, navigation, projects) and the
//!   slug/domain lookups over it.
//!
//! ## Crate Policy
//!
//! - No I/O. Parsing, validation and state transitions only.
//! - No `.unwrap()` outside tests.
//! - Public wire types derive `Serialize`/`Deserialize`.

pub mod contact;
pub mod content;
pub mod dispatch;
pub mod form;
pub mod outcome;

pub use contact::{ContactError, ContactField, ContactRequest, ContactSubmission};
pub use content::{ContentError, NavigationItem, Project, SiteContent};
pub use dispatch::{Delivery, DeliveryAck, DeliveryError, DispatchConfig, DispatchMode};
pub use form::{ContactForm, FormError, FormFields, FormState, SubmitAction};
pub use outcome::{SubmissionReceipt, SAFE_ERROR_MESSAGE};
