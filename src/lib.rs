//! Workspace-level integration tests for fibbench live in `tests/`.
