//! Shipped flag rules


pub use needs_pcr_test::NeedsPcrTest;
