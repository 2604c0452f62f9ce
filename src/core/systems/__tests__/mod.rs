//! # 시스템 구성 테스트
//!
//! 워크벤치 설정 기본값, JSON 로딩, 검증 테스트
