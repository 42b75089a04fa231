//! Integration test modules

mod booking_flow_tests;
