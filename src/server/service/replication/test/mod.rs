//! Tests of the replication engine against an in-memory Discord.


mod clone;
mod driver;
