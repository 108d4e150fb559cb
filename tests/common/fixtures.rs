//! Reusable data file content

#![allow(dead_code)]

/// Two valid records
pub const TWO_EMPLOYEES: &str = "Alice,1,Manager,1000,200\nBob,2,Developer,2000,0\n";

/// One malformed line followed by one valid record
pub const ONE_BAD_ONE_GOOD: &str = "Bob,5,Manager\nAlice,1,Developer,1000,200\n";

/// Menu choices that exit straight away
pub const EXIT: &str = "6\n";
