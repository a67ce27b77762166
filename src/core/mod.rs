//! # Core Module
//!
//! 애플리케이션 조립을 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceRegistry**: 인프라 구현체를 받아 서비스 그래프를 생성
//! - **app_data 등록**: `web::Data<T>` / `web::Data<dyn Trait>` 형태로 핸들러에 노출
//!
//! ## 초기화 순서
//!
//! ```text
//! 1. 설정 로드 (JwtSettings 검증 실패 시 종료)
//! 2. MongoDB / Redis 연결
//! 3. ServiceRegistry::new(...)
//! 4. HttpServer 시작
//! ```

pub mod registry;

pub use registry::ServiceRegistry;
