//! Switchboard: an HTTP broker between embeddable chat widgets and hosted
//! conversational assistants.
//!
//! A widget asks for a new conversation under a named assistant profile. The
//! broker checks the profile's domain and authentication rules, opens a
//! thread on the hosted provider, and later relays each user message as a
//! run that is polled to completion under a deadline.
//!
//! # Architecture
//!
//! Switchboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the provider and for time
//! - **Adapters**: Concrete implementations of ports (`OpenAI`, in-memory)
//!
//! # Modules
//!
//! - [`assistant`]: Profile table and access decisions
//! - [`conversation`]: Threads, runs and the bounded-wait run protocol
//! - [`config`]: Layered configuration
//! - [`http`]: Public endpoints

pub mod assistant;
pub mod config;
pub mod conversation;
pub mod http;
