//! # Services Module
//!
//! 비즈니스 로직 계층입니다. 핸들러는 서비스만 호출하고,
//! 서비스는 리포지토리 trait을 통해서만 저장소에 접근합니다.
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Service` | `UserService` 구조체 |
//! | `@Autowired` | `web::Data<UserService>` 주입 |
//! | `@Transactional` | 단일 문서 원자 연산 (`find_one_and_update`) |

pub mod users;

pub use users::UserService;
