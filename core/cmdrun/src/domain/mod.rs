//! cmdrun のドメイン型

pub mod command;
pub mod report;

pub use command::Command;
pub use report::RunReport;
