// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory infrastructure and wire it into use case handlers.
// - Expose the HTTP router and GraphQL schema.
// - Spawn the outbox relay.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
