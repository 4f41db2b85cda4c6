//! 사용자 서비스 메인 애플리케이션
//!
//! 설정을 검증하고, MongoDB에 연결한 뒤 HTTP 서버를 구동합니다.
//! SIGINT/SIGTERM을 받거나 처리되지 않은 패닉이 발생하면 새 연결을 받지 않고
//! 진행 중인 요청을 마무리한 다음 데이터베이스 연결을 닫고 종료합니다.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{web, HttpServer};
use chrono::Local;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use user_service_backend::config::{AppConfig, LogLevel};
use user_service_backend::create_app;
use user_service_backend::db::Database;
use user_service_backend::middlewares::build_rate_limiter;
use user_service_backend::repositories::users::{MongoUserRepository, UserRepository};
use user_service_backend::services::UserService;

/// 종료 신호 후 진행 중인 요청을 기다리는 최대 시간 (초)
const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let profile_message = load_env_file();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    init_logging(config.log_level);
    info!("{}", profile_message);
    info!(
        "🚀 사용자 서비스 시작중... (environment: {})",
        config.environment.as_str()
    );

    let (panic_tx, panic_rx) = mpsc::unbounded_channel();
    install_panic_hook(panic_tx);

    // 데이터 스토어 초기화
    info!("📡 데이터베이스 연결 중...");
    let database = match Database::connect(&config.mongodb_uri).await {
        Ok(database) => database,
        Err(e) => {
            error!("❌ 데이터베이스 연결 실패: {}", e);
            std::process::exit(1);
        }
    };

    let repository = Arc::new(MongoUserRepository::new(&database));
    if let Err(e) = repository.create_indexes().await {
        warn!("⚠️ 인덱스 생성 실패, 인덱스 없이 계속 진행합니다: {}", e);
    }
    let user_service = web::Data::new(UserService::new(repository));

    let rate_limiter = match build_rate_limiter(&config.rate_limit) {
        Ok(rate_limiter) => rate_limiter,
        Err(e) => {
            error!("❌ Rate Limiting 설정 실패: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "🛡️ Rate Limiting 활성화: {:?} 동안 {}요청",
        config.rate_limit.window, config.rate_limit.max_requests
    );

    let bind_address = config.bind_address();
    let app_config = config.clone();

    let server = HttpServer::new(move || {
        create_app(user_service.clone(), &app_config, &rate_limiter)
    })
    .disable_signals()
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind(&bind_address)?
    .run();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/users", bind_address);

    let crashed = Arc::new(AtomicBool::new(false));
    actix_web::rt::spawn(watch_for_shutdown(
        server.handle(),
        panic_rx,
        Arc::clone(&crashed),
    ));

    server.await?;

    database.shutdown().await;
    info!("👋 서버가 정상적으로 종료되었습니다");

    if crashed.load(Ordering::SeqCst) {
        std::process::exit(1);
    }
    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거가 아직 초기화되기 전이므로 결과 메시지를 반환하고, 호출자가 나중에 기록합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let loaded = match filename {
        ".env" => dotenv().map(|_| ()),
        name => dotenv::from_filename(name).map(|_| ()),
    };

    match loaded {
        Ok(()) => format!("Current profile: {} ({} 파일 로드 됨)", profile, filename),
        Err(e) => format!("Current profile: {} ({} 파일 없음: {})", profile, filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 있으면 그 값이, 없으면 `LOG_LEVEL`에서 온 레벨이 사용됩니다.
///
/// ```text
/// 2025-01-01 12:00:00 [INFO]: 🚀 사용자 서비스 시작중...
/// ```
fn init_logging(level: LogLevel) {
    let default_filter = level.to_filter().to_string().to_lowercase();

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}]: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// 처리되지 않은 패닉을 기록하고 종료 절차를 시작하도록 알립니다.
fn install_panic_hook(notify: UnboundedSender<String>) {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        error!("💥 UNCAUGHT PANIC! Shutting down... {}", panic_info);
        let _ = notify.send(panic_info.to_string());
        default_hook(panic_info);
    }));
}

/// 종료 신호나 패닉 알림을 기다린 뒤 서버를 정상 종료합니다.
async fn watch_for_shutdown(
    handle: ServerHandle,
    mut panics: UnboundedReceiver<String>,
    crashed: Arc<AtomicBool>,
) {
    tokio::select! {
        () = shutdown_signal() => {
            info!("🛑 종료 신호 수신, 진행 중인 요청을 마무리합니다");
        }
        Some(_) = panics.recv() => {
            crashed.store(true, Ordering::SeqCst);
            error!("🛑 패닉으로 인해 서버를 종료합니다");
        }
    }

    handle.stop(true).await;
}

/// SIGINT(Ctrl-C) 또는 SIGTERM을 기다립니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Ctrl-C 핸들러 설치 실패: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("SIGTERM 핸들러 설치 실패: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
}
