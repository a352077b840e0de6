#![deny(missing_docs)]

//! # Bridge Runtime
//!
//! Lets handlers registered against the original, inline-routing application
//! serve requests arriving through the generated file-based adapter units.
//!
//! A generated unit builds an [`InboundRequest`], hands it to
//! [`Bridge::dispatch`] together with the literal path the original
//! application registered, and gets back a [`BridgeResponse`] translated
//! from whatever the borrowed handler wrote into its synthetic
//! request/response pair.

mod app;
mod dispatch;
mod request;
mod response;
mod runtime;

pub use app::{App, Handler, HandlerError, Next, RouteEntry, Router};
pub use dispatch::BridgeResponse;
pub use request::{InboundRequest, SyntheticRequest};
pub use response::SyntheticResponse;
pub use runtime::{shared, Bridge, Registrar};
