//! Integration tests for the Redis service adapter

mod fixtures;
mod test_cli;
mod test_upgrade;
