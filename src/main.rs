use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use workshop_yard::config::EnvironmentConfig;
use workshop_yard::create_app;
use workshop_yard::database;
use workshop_yard::repositories::vehicle_repository::VehicleRepository;
use workshop_yard::services::auth_service::AuthService;
use workshop_yard::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🛠️ Workshop Yard - Gestión de Patio de Taller 🚗");
    info!("================================================");

    let config = EnvironmentConfig::default();
    if config.is_production() && config.jwt_secret.contains("dev-secret") {
        warn!("⚠️ JWT_SECRET de desarrollo en producción, configure uno real");
    }

    // Inicializar base de datos (archivo único, se crea si no existe)
    let pool = match database::create_pool(Some(&config.database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Schema idempotente en cada arranque
    let repository = VehicleRepository::new(pool.clone());
    if let Err(e) = repository.ensure_schema().await {
        error!("❌ Error creando el schema: {}", e);
        return Err(anyhow::anyhow!("Error de schema: {}", e));
    }
    info!("✅ Tabla vehicles lista en {}", config.database_url);

    // Credential store + JWT
    let auth = AuthService::new(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(pool, config, auth);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/login - Login de staff");
    info!("🚗 Endpoints - Vehicle:");
    info!("   POST   /api/vehicle - Registrar vehículo");
    info!("   GET    /api/vehicle - Listar (filtros: ?status= ?consultant= ?mechanic=)");
    info!("   PUT    /api/vehicle/:name - Reasignar consultor/mecánico/status");
    info!("   PUT    /api/vehicle/:name/status - Cambiar status");
    info!("   DELETE /api/vehicle/:name - Eliminar vehículo");
    info!("📋 Endpoints - Catálogos:");
    info!("   GET  /api/catalog/statuses - Pipeline de estados");
    info!("   GET  /api/catalog/consultants - Consultores");
    info!("   GET  /api/catalog/mechanics - Mecánicos");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
