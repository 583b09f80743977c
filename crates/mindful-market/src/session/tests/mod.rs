mod common;
mod ledger;
mod suggestions;
