//! Tests for the SMS dispatch services

#[cfg(test)]
mod templates_tests;
