//! # carlot-wizards
//!
//! The marketplace's multi-step forms, built on [`carlot_forms`]:
//!
//! - [`TradeInForm`]: vehicle, condition and contact details for a trade-in
//! - [`QuotationForm`]: vehicle, driver and coverage for an insurance quote
//! - [`ConsignmentForm`]: vehicle with photos and seller details
//!
//! The [`drive`] module fills a wizard from JSON and walks it to submission,
//! which is what the `carlot` binary does.

pub mod consignment;
pub mod drive;
mod error;
pub mod quotation;
pub mod trade_in;

pub use consignment::{ConsignmentField, ConsignmentForm};
pub use error::{Result, WizardError};
pub use quotation::{QuotationField, QuotationForm};
pub use trade_in::{TradeInField, TradeInForm};

/// The forms the marketplace offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormKind {
    /// Trade-in request.
    TradeIn,
    /// Insurance quotation.
    Quotation,
    /// Consignment request.
    Consignment,
}
