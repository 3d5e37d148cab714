//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database access.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and reference checks before data access
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//!
//! # Infrastructure
//!
//! - **Auth** (`auth/`) - JWT verification against the identity provider's key set
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token verifier)
//! - **Startup** (`startup`) - Database connection, migrations and graceful serving
//! - **Router** (`router`) - Route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and runs the auth middleware for `/api/v1` routes
//! 2. **Controller** decodes input and converts DTOs to params
//! 3. **Service** validates params and checks referenced records exist
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and returns the response

pub mod auth;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
