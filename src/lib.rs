//! Workspace-level integration tests live in `tests/`.
//! This package carries no code of its own.
