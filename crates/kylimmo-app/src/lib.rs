// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod filter;
pub mod geo;
pub mod head;
pub mod ids;
pub mod model;
pub mod page;
pub mod panel;
pub mod route;
pub mod state;
pub mod view;

pub use filter::*;
pub use geo::*;
pub use head::*;
pub use ids::*;
pub use model::*;
pub use page::*;
pub use panel::*;
pub use route::*;
pub use state::*;
pub use view::*;
