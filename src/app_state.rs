use crate::{domain::SignupField, subscription_sync::SubscriptionSync};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub subscription_sync: SubscriptionSync,
    pub signup_field: Arc<SignupField>,
}
