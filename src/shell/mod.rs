// Composition root for the Forseti admin client.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the concrete adapters (HTTP transport, token file, log notices).
// - Expose the controllers through a small command-line surface.

pub mod cli;
pub mod config;
pub mod state;
