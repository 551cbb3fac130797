#![allow(dead_code)]

pub mod http_test_helper;
