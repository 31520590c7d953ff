pub mod app_state;
pub mod configuration;
pub mod domain;
pub mod mailchimp_client;
pub mod observer;
pub mod routes;
pub mod startup;
pub mod subscription_sync;
pub mod telemetry;
