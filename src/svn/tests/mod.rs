//! Test modules for working-copy metadata access

mod helpers;
