// Runtime configuration.
//
// Purpose
// - Read the service settings from the environment once at startup.
//
// Boundaries
// - Lookups go through `ConfigEnv` so tests can supply a map instead of mutating the process env.
// - Missing values fall back to defaults; present but unparsable values are errors.

use crate::modules::students::core::registration::UnknownCoursePolicy;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const SESSION_TTL_HOURS_ENV: &str = "SESSION_TTL_HOURS";
pub const UNKNOWN_COURSE_POLICY_ENV: &str = "UNKNOWN_COURSE_POLICY";
pub const MAX_CONFLICT_RETRIES_ENV: &str = "REGISTRATION_MAX_CONFLICT_RETRIES";
pub const SEED_CATALOG_ENV: &str = "SEED_CATALOG";
pub const STUDENTS_TOPIC_ENV: &str = "STUDENTS_TOPIC";
pub const OUTBOX_RELAY_INTERVAL_MS_ENV: &str = "OUTBOX_RELAY_INTERVAL_MS";

pub trait ConfigEnv {
    fn string(&self, name: &str) -> Option<String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl ConfigEnv for ProcessEnv {
    fn string(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl ConfigEnv for HashMap<String, String> {
    fn string(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub session_ttl_hours: u32,
    pub unknown_course_policy: UnknownCoursePolicy,
    pub max_conflict_retries: u32,
    pub seed_catalog: bool,
    pub students_topic: String,
    pub outbox_relay_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            session_ttl_hours: 24,
            unknown_course_policy: UnknownCoursePolicy::Ignore,
            max_conflict_retries: 3,
            seed_catalog: true,
            students_topic: "students.v1".into(),
            outbox_relay_interval_ms: 1000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(&ProcessEnv)
    }

    pub fn from_env_with(env: &impl ConfigEnv) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let session_ttl_hours = parsed(env, SESSION_TTL_HOURS_ENV, defaults.session_ttl_hours)?;
        if session_ttl_hours == 0 {
            return Err(ConfigError::Invalid {
                name: SESSION_TTL_HOURS_ENV,
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(Self {
            host: env
                .string(HOST_ENV)
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parsed(env, PORT_ENV, defaults.port)?,
            session_ttl_hours,
            unknown_course_policy: parsed(
                env,
                UNKNOWN_COURSE_POLICY_ENV,
                defaults.unknown_course_policy,
            )?,
            max_conflict_retries: parsed(
                env,
                MAX_CONFLICT_RETRIES_ENV,
                defaults.max_conflict_retries,
            )?,
            seed_catalog: parsed(env, SEED_CATALOG_ENV, defaults.seed_catalog)?,
            students_topic: env
                .string(STUDENTS_TOPIC_ENV)
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(defaults.students_topic),
            outbox_relay_interval_ms: parsed(
                env,
                OUTBOX_RELAY_INTERVAL_MS_ENV,
                defaults.outbox_relay_interval_ms,
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_ttl_ms(&self) -> i64 {
        i64::from(self.session_ttl_hours) * 3_600_000
    }

    pub fn outbox_relay_interval(&self) -> Duration {
        Duration::from_millis(self.outbox_relay_interval_ms.max(1))
    }
}

fn parsed<T>(env: &impl ConfigEnv, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env.string(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
