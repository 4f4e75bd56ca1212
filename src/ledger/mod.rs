//! Ledger domain models and helpers.

pub mod category;
pub mod goal;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod transaction;

pub use category::Category;
pub use goal::Goal;
pub use ledger::Ledger;
pub use period::Period;
pub use transaction::{Transaction, TransactionKind};
