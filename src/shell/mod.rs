// Composition root for the items service.
//
// - Build the shared state (the in-memory item store).
// - Assemble the router with the CORS, trace and panic-recovery layers.
// - Bind the fixed address and serve.

pub mod config;
pub mod health;
pub mod http;
pub mod logging;
pub mod state;
