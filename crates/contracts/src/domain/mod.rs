pub mod a001_loan;
pub mod a002_notification;
pub mod a003_setting;
