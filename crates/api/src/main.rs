use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lingo_api::config::ServerConfig;
use lingo_api::notifications::NotificationDispatcher;
use lingo_api::router::build_app_router;
use lingo_api::state::AppState;
use lingo_events::{EmailConfig, EmailDelivery, EventBus, PushConfig, PushDelivery, ReminderScheduler};
use lingo_speech::{SpeechClient, SpeechConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lingo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = lingo_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    lingo_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    lingo_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());

    // --- Notification dispatcher ---
    let email = EmailConfig::from_env().map(EmailDelivery::new);
    let push = PushConfig::from_env().map(PushDelivery::new);
    if email.is_none() {
        tracing::info!("SMTP not configured, email notifications disabled");
    }
    if push.is_none() {
        tracing::info!("Push gateway not configured, push notifications disabled");
    }
    let dispatcher = NotificationDispatcher::new(pool.clone(), email, push);
    let dispatcher_handle = tokio::spawn(dispatcher.run(event_bus.subscribe()));

    // --- Reminder scheduler ---
    let scheduler_cancel = tokio_util::sync::CancellationToken::new();
    let scheduler = ReminderScheduler::new(pool.clone(), Arc::clone(&event_bus));
    let scheduler_cancel_clone = scheduler_cancel.clone();
    let scheduler_handle = tokio::spawn(async move {
        scheduler.run(scheduler_cancel_clone).await;
    });

    tracing::info!("Notification services started (dispatcher, reminder scheduler)");

    // --- Speech provider ---
    let speech = SpeechConfig::from_env().map(|cfg| Arc::new(SpeechClient::new(cfg)));
    if speech.is_none() {
        tracing::info!("Speech provider not configured, pronunciation feedback disabled");
    }

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
        speech,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Stop the reminder scheduler.
    scheduler_cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), scheduler_handle).await;
    tracing::info!("Reminder scheduler stopped");

    // Drop the event bus sender to close the broadcast channel.
    // This signals the dispatcher to shut down.
    drop(event_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), dispatcher_handle).await;
    tracing::info!("Notification dispatcher shut down");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
