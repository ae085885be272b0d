use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    store::{SharedStore, TriviaStore},
    utils::random::{IndexPicker, ThreadRngPicker},
};

pub type SharedPicker = Arc<dyn IndexPicker>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub picker: SharedPicker,
}

impl AppState {
    /// State with the production randomness source.
    pub fn new(store: impl TriviaStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            picker: Arc::new(ThreadRngPicker),
        }
    }

    pub fn with_picker(mut self, picker: impl IndexPicker + 'static) -> Self {
        self.picker = Arc::new(picker);
        self
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for SharedPicker {
    fn from_ref(state: &AppState) -> Self {
        state.picker.clone()
    }
}
