/// Report generation command.
pub mod report;
