mod auction;
mod bid;
mod countdown;
mod error;
mod event;
mod ledger;
mod listing;
mod registration;

pub use {
    auction::*,
    bid::*,
    countdown::*,
    error::*,
    event::*,
    ledger::*,
    listing::*,
    registration::*,
};
