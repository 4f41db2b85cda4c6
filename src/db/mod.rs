//! Database Connection Management Module
//!
//! MongoDB 연결 생성과 종료를 담당합니다.
//! 데이터베이스 이름은 연결 URI의 경로(`mongodb://host:27017/<db>`)에서 가져오며,
//! 경로가 없으면 [`DEFAULT_DATABASE_NAME`]을 사용합니다.
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.mongodb_uri).await?;
//! let users = MongoUserRepository::new(&database);
//! // ...
//! database.shutdown().await;
//! ```

use log::info;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};

use crate::errors::{AppResult, ErrorContext};

pub const DEFAULT_DATABASE_NAME: &str = "user_service";
const APP_NAME: &str = "user_service_backend";

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 연결을 만들고 `ping`으로 도달 가능 여부를 확인합니다.
    pub async fn connect(uri: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri)
            .await
            .context("MongoDB URI 파싱 실패")?;
        client_options.app_name = Some(APP_NAME.to_string());

        let database_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 진행 중인 작업이 끝나기를 기다린 뒤 연결을 닫습니다.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
    }
}
