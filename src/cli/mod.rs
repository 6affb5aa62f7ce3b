//! # CLI Module
//!
//! Command-line entry point for the `petstore` binary.
//!
//! ## Commands
//!
//! ### `serve`
//!
//! Start the HTTP service:
//!
//! ```bash
//! petstore serve --addr 127.0.0.1:8080 --no-demo
//! petstore serve --config petstore.yaml
//! ```
//!
//! Options:
//! - `--addr <ADDR>` - Bind address (env `PETSTORE_ADDR`), overrides the config file
//! - `--config <FILE>` - YAML service configuration (env `PETSTORE_CONFIG`)
//! - `--no-demo` - Start with an empty store instead of the ten demo pets
//!
//! The server stops cleanly on SIGINT or SIGTERM.
//!
//! ### `routes`
//!
//! Print the route table in match order.
//!
//! ### `openapi`
//!
//! Print the OpenAPI 3.1 document:
//!
//! ```bash
//! petstore openapi --format yaml > openapi.yaml
//! ```

mod commands;


pub use commands::{print_openapi, print_routes, run, run_cli, Cli, Commands, DocFormat};
