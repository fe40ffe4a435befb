//! Session token issuance/verification, password hashing, and the
//! `token` cookie helpers.

pub mod cookie;
pub mod jwt;
pub mod password;
