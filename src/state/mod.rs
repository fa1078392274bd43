use crate::repositories::OrderRepository;
use actix_web::web::Data;
use std::sync::Arc;

/// Shared state of the mock order API.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new<R: OrderRepository + 'static>(store: R) -> Data<Self> {
        Data::new(Self::from_arc(Arc::new(store)))
    }

    pub fn from_arc(store: Arc<dyn OrderRepository>) -> Self {
        Self { store }
    }
}
