//! Unit tests for SMS module

#[cfg(test)]
pub mod nalo_tests;
#[cfg(test)]
pub mod mnotify_tests;
#[cfg(test)]
pub mod mock_sms_tests;
#[cfg(test)]
pub mod create_transports_tests;
