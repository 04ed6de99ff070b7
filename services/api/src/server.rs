use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_onboarding_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use vendor_onboarding::config::AppConfig;
use vendor_onboarding::error::AppError;
use vendor_onboarding::telemetry;
use vendor_onboarding::workflows::onboarding::{
    CountryResolver, HttpSubmissionBackend, OnboardingService,
};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let backend = Arc::new(HttpSubmissionBackend::new(&config.onboarding.backend_url));
    let resolver = Arc::new(CountryResolver::new(&config.onboarding.country_api_url));
    let service = Arc::new(
        OnboardingService::new(backend, resolver)
            .with_business_specialist(config.onboarding.business_specialist.clone()),
    );

    let app = with_onboarding_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        backend = %config.onboarding.backend_url,
        prefill = config.onboarding.business_specialist.is_some(),
        "vendor onboarding service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
