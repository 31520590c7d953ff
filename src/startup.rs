use crate::{
    app_state::AppState,
    configuration::Settings,
    observer::TracingObserver,
    routes::{health_check, lists, submissions},
    subscription_sync::SubscriptionSync,
    telemetry::{request_span, RequestUuid},
};
use anyhow::Context;
use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub struct Application {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let client = config
            .mailchimp
            .client()
            .context("Failed to build the Mailchimp client")?;

        let app_state = AppState {
            subscription_sync: SubscriptionSync::new(client).with_observer(TracingObserver),
            signup_field: Arc::new(config.signup_field),
        };

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;
        let local_addr = listener
            .local_addr()
            .context("Failed to read the bound address")?;

        Ok(Self {
            listener,
            local_addr,
            router: router(app_state),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Listening on {}", self.local_addr);
        axum::serve(self.listener, self.router).await
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .merge(health_check::router())
        .merge(submissions::router())
        .merge(lists::router())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(RequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(app_state)
}
