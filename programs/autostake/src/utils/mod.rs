pub mod address;
pub mod fee;
pub mod ledger;
pub mod rewards;
