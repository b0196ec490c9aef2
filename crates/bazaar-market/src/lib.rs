//! # bazaar-market
//!
//! **Trade Plane**: listing book, fee/royalty split arithmetic, the trade
//! engine, and the append-only event log.
//!
//! ## Architecture
//!
//! Every external call enters the [`TradeEngine`], which consults the role
//! registry for authorization, reads and mutates the asset registry and
//! listing book under the ledger's invariants, and appends to the event log
//! on success.
//!
//! ## Operation Flow
//!
//! ```text
//! caller → TradeEngine.buy_token()
//!        → ListingBook.get() → FeeSplit → AssetRegistry.transfer()
//!        → FundsLedger.credit()×4 → ListingBook.reduce() → EventLog.append()
//! ```
//!
//! The ledger is a strictly sequential, single-writer state machine: each
//! operation is atomic with respect to every piece of state it touches.

pub mod engine;
pub mod event_log;
pub mod fee_split;
pub mod listing_book;

pub use engine::TradeEngine;
pub use event_log::{EventLog, LoggedEvent};
pub use fee_split::{Split, split};
pub use listing_book::ListingBook;
