pub mod analysis;
pub mod investment;
pub mod ledger;
pub mod purchase;
pub mod settings;
