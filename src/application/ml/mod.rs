pub mod fund_model;
