//! Edge case tests for numlex
