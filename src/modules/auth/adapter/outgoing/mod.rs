pub mod jwt;
pub mod otp_code_repository_memory;
pub mod otp_code_repository_redis;

pub use otp_code_repository_memory::InMemoryOtpCodeRepository;
pub use otp_code_repository_redis::RedisOtpCodeRepository;
