pub mod add;
pub mod calculator;
pub mod clock;
pub mod del;
pub mod log;
pub mod publish;
pub mod report;
pub mod settings;
pub mod team;
